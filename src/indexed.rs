// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    lookahead_iter::{LookaheadIter, Producer, Step},
    maybe_iter::MaybeIter,
};

/// An element together with its zero-based position in the sequence.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IndexedValue<T> {
    pub index: usize,
    pub value: T,
}

impl<T> IndexedValue<T> {
    pub fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }

    pub fn into_pair(self) -> (usize, T) {
        (self.index, self.value)
    }
}

/// A re-iterable sequence of `IndexedValue`s.
///
/// Each call to `iter` asks the factory for a fresh upstream iterator,
/// so the sequence can be walked more than once even though every
/// upstream iterator is single-pass.
pub struct IndexedIterable<F> {
    factory: F,
}

pub type IndexingIter<I> = LookaheadIter<IndexingProducer<I>>;

impl<F, I> IndexedIterable<F>
where
    F: Fn() -> Option<I>,
    I: Iterator,
{
    /// `factory` may return `None`, which is iterated as an empty sequence.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn iter(&self) -> IndexingIter<I> {
        LookaheadIter::new(IndexingProducer {
            upstream: MaybeIter::new((self.factory)()),
            index: 0,
        })
    }
}

impl<'a, T> IndexedIterable<Box<dyn Fn() -> Option<std::slice::Iter<'a, T>> + 'a>> {
    pub fn from_slice(items: &'a [T]) -> Self {
        Self::new(Box::new(move || Some(items.iter())))
    }
}

impl<F, I> IntoIterator for &IndexedIterable<F>
where
    F: Fn() -> Option<I>,
    I: Iterator,
{
    type Item = IndexedValue<I::Item>;
    type IntoIter = IndexingIter<I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IndexingProducer<I> {
    upstream: MaybeIter<I>,
    index: usize,
}

impl<I> Producer for IndexingProducer<I>
where
    I: Iterator,
{
    type Item = IndexedValue<I::Item>;

    fn compute_next(&mut self) -> Step<Self::Item> {
        match self.upstream.next() {
            Some(value) => {
                let indexed_value = IndexedValue::new(self.index, value);
                self.index += 1;
                Step::Yield(indexed_value)
            }
            None => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}
