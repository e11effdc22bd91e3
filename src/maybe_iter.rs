// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::iter::FusedIterator;

/// An upstream iterator that may be absent.
///
/// An absent upstream behaves exactly like an empty iterator, so the
/// adapters in this crate accept `Option<I>` without treating `None`
/// as an error.
#[derive(Debug, Clone)]
pub struct MaybeIter<I> {
    inner: Option<I>,
}

impl<I> MaybeIter<I> {
    pub fn new(inner: Option<I>) -> Self {
        Self { inner }
    }

    pub fn present(inner: I) -> Self {
        Self { inner: Some(inner) }
    }

    pub fn absent() -> Self {
        Self { inner: None }
    }

    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I: Iterator> Iterator for MaybeIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |upstream| upstream.size_hint())
    }
}

impl<I: FusedIterator> FusedIterator for MaybeIter<I> {}
