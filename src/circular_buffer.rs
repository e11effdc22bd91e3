// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{fmt::Debug, ops::Index};

use crate::{
    error::SeqError,
    lookahead_iter::{LookaheadIter, Producer, Step},
};

/// A fixed-capacity circular queue.
///
/// The live elements occupy the physical slots
/// `(start_index + i) % capacity` for `i` in `0..count`,
/// so removing from the front never moves any data.
///
/// The capacity never changes, use `expanded` to obtain a larger copy.
#[derive(Clone)]
pub struct CircularBuffer<T> {
    capacity: usize,
    start_index: usize,
    count: usize,
    data: Vec<Option<T>>,
}

pub type Iter<'a, T> = LookaheadIter<Cursor<'a, T>>;

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer with the given capacity.
    ///
    /// A zero-capacity buffer is allowed, it is empty and full at the same time.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            start_index: 0,
            count: 0,
            data: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Appends a value after the last element.
    pub fn add(&mut self, value: T) -> Result<(), SeqError> {
        if self.is_full() {
            return Err(SeqError::IllegalState("buffer is full".to_owned()));
        }

        let position = self.physical_index(self.count);
        self.data[position] = Some(value);
        self.count += 1;

        Ok(())
    }

    /// Drops the first `n` elements.
    pub fn remove_first(&mut self, n: usize) -> Result<(), SeqError> {
        if n > self.count {
            return Err(SeqError::illegal_argument(format!(
                "n shouldn't be greater than the buffer size: n = {}, size = {}",
                n, self.count
            )));
        }

        if n > 0 {
            // Release the removed values instead of leaving them in the slots.
            for logical in 0..n {
                let position = self.physical_index(logical);
                self.data[position] = None;
            }

            self.start_index = self.physical_index(n);
            self.count -= n;
        }

        Ok(())
    }

    /// Returns the element at the given logical index.
    pub fn get(&self, index: usize) -> Result<&T, SeqError> {
        if index >= self.count {
            return Err(SeqError::index_out_of_bounds(index, self.count));
        }

        self.data[self.physical_index(index)]
            .as_ref()
            .ok_or(SeqError::index_out_of_bounds(index, self.count))
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&T> {
        self.count
            .checked_sub(1)
            .and_then(|index| self.get(index).ok())
    }

    /// Iterates the elements in FIFO order, regardless of the wraparound.
    pub fn iter(&self) -> Iter<'_, T> {
        LookaheadIter::new(Cursor {
            buffer: self,
            position: 0,
        })
    }

    /// Maps a logical index to a slot in `data`.
    /// Both operands are non-negative so `%` is a true modulo here.
    fn physical_index(&self, logical: usize) -> usize {
        (self.start_index + logical) % self.capacity
    }
}

impl<T> CircularBuffer<T>
where
    T: Clone,
{
    /// Returns a new buffer of `new_capacity` holding the same elements,
    /// laid out from slot 0.
    ///
    /// This buffer is left untouched and keeps its own capacity.
    pub fn expanded(&self, new_capacity: usize) -> Result<Self, SeqError> {
        if new_capacity < self.count {
            return Err(SeqError::illegal_argument(format!(
                "new capacity {} is less than the buffer size {}",
                new_capacity, self.count
            )));
        }

        let data = self
            .iter()
            .cloned()
            .map(Some)
            .chain(std::iter::repeat_with(|| None))
            .take(new_capacity)
            .collect();

        Ok(Self {
            capacity: new_capacity,
            start_index: 0,
            count: self.count,
            data,
        })
    }

    /// Returns an expanded copy whose capacity grows by half plus one,
    /// but no further than `max_capacity`.
    pub fn grown(&self, max_capacity: usize) -> Result<Self, SeqError> {
        let new_capacity = (self.capacity + (self.capacity >> 1) + 1)
            .min(max_capacity)
            .max(self.count);
        self.expanded(new_capacity)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies the elements into `dest` in logical order.
    ///
    /// `dest` is enlarged when it is shorter than the buffer. When it is longer,
    /// the slot right after the copied range is cleared and the rest is left as is.
    pub fn to_array(&self, mut dest: Vec<Option<T>>) -> Vec<Option<T>> {
        if dest.len() < self.count {
            dest.resize_with(self.count, || None);
        }

        for (slot, value) in dest.iter_mut().zip(self.iter()) {
            *slot = Some(value.clone());
        }

        if dest.len() > self.count {
            dest[self.count] = None;
        }

        dest
    }
}

impl<T> Index<usize> for CircularBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> Debug for CircularBuffer<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks the live elements of a `CircularBuffer`.
pub struct Cursor<'a, T> {
    buffer: &'a CircularBuffer<T>,
    position: usize,
}

impl<'a, T> Producer for Cursor<'a, T> {
    type Item = &'a T;

    fn compute_next(&mut self) -> Step<&'a T> {
        match self.buffer.get(self.position) {
            Ok(value) => {
                self.position += 1;
                Step::Yield(value)
            }
            Err(_) => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
