// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::hash::Hash;

use crate::{
    distinct::DistinctBy,
    error::SeqError,
    lookahead_iter::{LookaheadIter, Upstream},
    windowed::WindowedIter,
};

/// Method-call syntax for the adapters of this crate.
pub trait SeqIterExt: Iterator + Sized {
    /// See `WindowedIter::windowed`.
    fn windowed(
        self,
        size: usize,
        step: usize,
        partial_windows: bool,
    ) -> Result<WindowedIter<Self>, SeqError>
    where
        Self::Item: Clone,
    {
        WindowedIter::windowed(self, size, step, partial_windows)
    }

    fn chunked(self, size: usize) -> Result<WindowedIter<Self>, SeqError>
    where
        Self::Item: Clone,
    {
        WindowedIter::chunked(self, size)
    }

    /// Keeps the first element of every distinct key.
    fn distinct_by<K, F>(self, key_selector: F) -> DistinctBy<Self, K, F>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DistinctBy::distinct_by(self, key_selector)
    }

    #[allow(clippy::type_complexity)]
    fn distinct(self) -> DistinctBy<Self, Self::Item, fn(&Self::Item) -> Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        DistinctBy::distinct_by(
            self,
            <Self::Item as Clone>::clone as fn(&Self::Item) -> Self::Item,
        )
    }

    fn lookahead(self) -> LookaheadIter<Upstream<Self>> {
        LookaheadIter::over(self)
    }
}

impl<I: Iterator> SeqIterExt for I {}
