// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::iter::FusedIterator;

use crate::error::SeqError;

/// The outcome of a single production step.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Step<T> {
    /// Publish this value as the next element.
    Yield(T),

    /// The source is exhausted, `compute_next` will not be called again.
    Done,
}

/// Supplies elements to a `LookaheadIter` one at a time.
///
/// Each call to `compute_next` must return exactly one `Step`.
/// Once `Step::Done` has been returned the producer is never called again.
pub trait Producer {
    type Item;

    fn compute_next(&mut self) -> Step<Self::Item>;

    /// Removes the element most recently returned by the iterator.
    /// Producers are read-only unless they override this.
    fn remove(&mut self) -> Result<(), SeqError> {
        Err(SeqError::UnsupportedOperation("remove".to_owned()))
    }

    /// Bounds on the number of elements not yet produced.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

enum State<T> {
    /// Nothing is cached, the next element has not been computed yet.
    NotReady,

    /// The next element is cached.
    Ready(T),

    /// The producer is exhausted.
    Done,

    /// A production step is running, or it panicked.
    Failed,
}

/// A pull iterator that computes the next element on demand and caches it,
/// so `has_next` can be asked any number of times without consuming anything.
///
/// The bookkeeping lives here, the actual production lives in a `Producer`.
pub struct LookaheadIter<P>
where
    P: Producer,
{
    producer: P,
    state: State<P::Item>,
}

impl<P> LookaheadIter<P>
where
    P: Producer,
{
    pub fn new(producer: P) -> Self {
        Self {
            producer,
            state: State::NotReady,
        }
    }

    /// Returns true if another element is available.
    ///
    /// Computes at most one element per call to `next_value`, repeated calls
    /// without consuming are idempotent.
    ///
    /// Panics if an earlier production step panicked.
    pub fn has_next(&mut self) -> bool {
        match self.state {
            State::Ready(_) => true,
            State::Done => false,
            State::Failed => panic!("lookahead iterator is broken by a failed production step"),
            State::NotReady => self.try_to_compute_next(),
        }
    }

    /// Returns the next element, or `SeqError::NoSuchElement`
    /// when the iterator is exhausted.
    pub fn next_value(&mut self) -> Result<P::Item, SeqError> {
        if !self.has_next() {
            return Err(SeqError::NoSuchElement);
        }

        match std::mem::replace(&mut self.state, State::NotReady) {
            State::Ready(value) => Ok(value),
            _ => Err(SeqError::NoSuchElement),
        }
    }

    /// Returns a reference to the next element without consuming it.
    pub fn peek(&mut self) -> Option<&P::Item> {
        if !self.has_next() {
            return None;
        }

        match &self.state {
            State::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn remove(&mut self) -> Result<(), SeqError> {
        self.producer.remove()
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    fn try_to_compute_next(&mut self) -> bool {
        // Stays `Failed` if the producer panics.
        self.state = State::Failed;

        match self.producer.compute_next() {
            Step::Yield(value) => {
                self.state = State::Ready(value);
                true
            }
            Step::Done => {
                self.state = State::Done;
                false
            }
        }
    }
}

impl<T, F> LookaheadIter<FromFn<F>>
where
    F: FnMut() -> Step<T>,
{
    /// Creates a lookahead iterator whose production step is a closure.
    pub fn from_fn(compute_next: F) -> Self {
        Self::new(FromFn(compute_next))
    }
}

impl<I> LookaheadIter<Upstream<I>>
where
    I: Iterator,
{
    /// Adds lookahead (`has_next`, `peek`) to an ordinary iterator.
    pub fn over(upstream: I) -> Self {
        Self::new(Upstream(upstream))
    }
}

impl<P> Iterator for LookaheadIter<P>
where
    P: Producer,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Done => (0, Some(0)),
            State::Ready(_) => {
                let (lower, upper) = self.producer.size_hint();
                (
                    lower.saturating_add(1),
                    upper.and_then(|upper| upper.checked_add(1)),
                )
            }
            _ => self.producer.size_hint(),
        }
    }
}

impl<P> FusedIterator for LookaheadIter<P> where P: Producer {}

/// A `Producer` backed by a closure, see `LookaheadIter::from_fn`.
pub struct FromFn<F>(F);

impl<T, F> Producer for FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    fn compute_next(&mut self) -> Step<T> {
        (self.0)()
    }
}

/// A `Producer` that pulls from an ordinary iterator, see `LookaheadIter::over`.
pub struct Upstream<I>(I);

impl<I> Producer for Upstream<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn compute_next(&mut self) -> Step<I::Item> {
        match self.0.next() {
            Some(value) => Step::Yield(value),
            None => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
