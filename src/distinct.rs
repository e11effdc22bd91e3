// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{collections::HashSet, hash::Hash};

use crate::{
    lookahead_iter::{LookaheadIter, Producer, Step},
    maybe_iter::MaybeIter,
};

/// An iterator that yields only the first element for each distinct key.
///
/// The input order is preserved. The set of seen keys belongs to the
/// iterator and only grows.
pub type DistinctBy<I, K, F> = LookaheadIter<DistinctProducer<I, K, F>>;

pub struct DistinctProducer<I, K, F> {
    upstream: MaybeIter<I>,
    key_selector: F,
    seen_keys: HashSet<K>,
}

impl<I, K, F> DistinctBy<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    pub fn distinct_by(upstream: I, key_selector: F) -> Self {
        Self::from_option(Some(upstream), key_selector)
    }

    /// An absent upstream yields nothing.
    pub fn from_option(upstream: Option<I>, key_selector: F) -> Self {
        LookaheadIter::new(DistinctProducer {
            upstream: MaybeIter::new(upstream),
            key_selector,
            seen_keys: HashSet::new(),
        })
    }
}

impl<I, K, F> DistinctProducer<I, K, F> {
    /// The number of distinct keys seen so far.
    pub fn seen_count(&self) -> usize {
        self.seen_keys.len()
    }
}

impl<I, K, F> Producer for DistinctProducer<I, K, F>
where
    I: Iterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn compute_next(&mut self) -> Step<I::Item> {
        for value in self.upstream.by_ref() {
            let key = (self.key_selector)(&value);
            if self.seen_keys.insert(key) {
                return Step::Yield(value);
            }
        }

        Step::Done
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every remaining element may be a duplicate.
        let (_, upper) = self.upstream.size_hint();
        (0, upper)
    }
}
