// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    circular_buffer::CircularBuffer,
    error::SeqError,
    lookahead_iter::{LookaheadIter, Producer, Step},
    maybe_iter::MaybeIter,
};

/// The window buffer starts with at most this many slots
/// and grows on demand up to the window size.
pub const INITIAL_BUFFER_CAPACITY: usize = 1024;

/// An iterator over fixed-size windows of an upstream iterator.
///
/// Consecutive windows start `step` elements apart. When `step` is greater
/// than `size` the elements in between are skipped and never appear in any window.
/// Each window is an independent `Vec`.
///
/// With partial windows enabled, the elements left after the last full window
/// form a single shorter window and the iteration ends there. The shrinking
/// tails are not repeated, so `1..=5` with size 3 and step 1 ends with
/// `[4, 5]` and never yields `[5]`.
pub type WindowedIter<I> = LookaheadIter<WindowProducer<I>>;

/// Produces the windows of a `WindowedIter`.
pub struct WindowProducer<I>
where
    I: Iterator,
{
    upstream: MaybeIter<I>,
    size: usize,
    step: usize,
    partial_windows: bool,

    /// The elements read from upstream that belong to the next window.
    buffer: CircularBuffer<I::Item>,

    /// The number of upstream elements to discard before filling the buffer,
    /// non-zero only when the step is greater than the buffer length.
    pending_skip: usize,
    upstream_exhausted: bool,
    finished: bool,
}

impl<I> WindowedIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Creates a windowed iterator.
    ///
    /// `partial_windows` decides whether the trailing elements that do not fill
    /// a whole window are emitted as one last, shorter window.
    ///
    /// Fails with `SeqError::IllegalArgument` if `size` or `step` is 0,
    /// nothing is read from `upstream` in that case.
    pub fn windowed(
        upstream: I,
        size: usize,
        step: usize,
        partial_windows: bool,
    ) -> Result<Self, SeqError> {
        Self::from_option(Some(upstream), size, step, partial_windows)
    }

    /// Same as `windowed`, an absent upstream produces no windows.
    pub fn from_option(
        upstream: Option<I>,
        size: usize,
        step: usize,
        partial_windows: bool,
    ) -> Result<Self, SeqError> {
        check_window_size_and_step(size, step)?;

        let producer = WindowProducer {
            upstream: MaybeIter::new(upstream),
            size,
            step,
            partial_windows,
            buffer: CircularBuffer::new(size.min(INITIAL_BUFFER_CAPACITY)),
            pending_skip: 0,
            upstream_exhausted: false,
            finished: false,
        };

        Ok(LookaheadIter::new(producer))
    }

    /// Splits the upstream into non-overlapping chunks of `size`,
    /// the last chunk may be shorter.
    pub fn chunked(upstream: I, size: usize) -> Result<Self, SeqError> {
        Self::windowed(upstream, size, size, true)
    }
}

fn check_window_size_and_step(size: usize, step: usize) -> Result<(), SeqError> {
    if size == 0 || step == 0 {
        return Err(SeqError::illegal_argument(format!(
            "size {} and step {} must both be greater than zero",
            size, step
        )));
    }

    Ok(())
}

impl<I> WindowProducer<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn partial_windows(&self) -> bool {
        self.partial_windows
    }

    /// Reads upstream until the buffer holds a whole window
    /// or the upstream is exhausted.
    fn fill_buffer(&mut self) -> Result<(), SeqError> {
        while !self.upstream_exhausted && self.buffer.len() < self.size {
            let Some(value) = self.upstream.next() else {
                self.upstream_exhausted = true;
                break;
            };

            if self.pending_skip > 0 {
                self.pending_skip -= 1;
                continue;
            }

            if self.buffer.is_full() {
                self.buffer = self.buffer.grown(self.size)?;
            }

            self.buffer.add(value)?;
        }

        Ok(())
    }

    /// Moves the start of the next window `step` elements forward.
    fn advance(&mut self) -> Result<(), SeqError> {
        let dropped = self.step.min(self.buffer.len());
        self.buffer.remove_first(dropped)?;
        self.pending_skip = self.step - dropped;
        Ok(())
    }

    fn next_window(&mut self) -> Result<Option<Vec<I::Item>>, SeqError> {
        if self.finished {
            return Ok(None);
        }

        self.fill_buffer()?;

        if self.buffer.len() == self.size {
            let window = self.buffer.to_vec();
            self.advance()?;
            return Ok(Some(window));
        }

        // Fewer than `size` elements remain and the upstream is exhausted.
        self.finished = true;

        if self.partial_windows && !self.buffer.is_empty() {
            let window = self.buffer.to_vec();
            self.buffer.remove_first(self.buffer.len())?;
            Ok(Some(window))
        } else {
            Ok(None)
        }
    }
}

impl<I> Producer for WindowProducer<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn compute_next(&mut self) -> Step<Vec<I::Item>> {
        // The buffer operations only fail on a broken internal invariant,
        // which ends the iteration.
        match self.next_window() {
            Ok(Some(window)) => Step::Yield(window),
            Ok(None) | Err(_) => {
                self.finished = true;
                Step::Done
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }

        let (_, upper) = self.upstream.size_hint();
        let upper = upper.and_then(|upstream_remaining| {
            let available = upstream_remaining
                .saturating_sub(self.pending_skip)
                .checked_add(self.buffer.len())?;

            let full_windows = if available < self.size {
                0
            } else {
                (available - self.size) / self.step + 1
            };

            let trailing = if self.partial_windows && available > 0 {
                1
            } else {
                0
            };

            full_windows.checked_add(trailing)
        });

        (0, upper)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{error::SeqError, windowed::WindowedIter};

    fn windows(input: &[i32], size: usize, step: usize, partial: bool) -> Vec<Vec<i32>> {
        WindowedIter::windowed(input.iter().copied(), size, step, partial)
            .unwrap()
            .collect()
    }

    #[test]
    fn test_sliding_windows() {
        let input = [1, 2, 3, 4, 5];

        assert_eq!(
            windows(&input, 2, 1, true),
            vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5], vec![5]]
        );

        assert_eq!(
            windows(&input, 2, 1, false),
            vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]
        );

        assert_eq!(
            windows(&input, 3, 2, true),
            vec![vec![1, 2, 3], vec![3, 4, 5], vec![5]]
        );

        assert_eq!(
            windows(&input, 3, 2, false),
            vec![vec![1, 2, 3], vec![3, 4, 5]]
        );

        // Only one trailing partial window.
        assert_eq!(
            windows(&input, 3, 1, true),
            vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5], vec![4, 5]]
        );
    }

    #[test]
    fn test_size_greater_than_input() {
        let input = [1, 2, 3, 4, 5];
        assert_eq!(windows(&input, 6, 1, true), vec![vec![1, 2, 3, 4, 5]]);
        assert_eq!(windows(&input, 6, 1, false), Vec::<Vec<i32>>::new());
        assert_eq!(windows(&input, 5, 1, false), vec![vec![1, 2, 3, 4, 5]]);
    }

    #[test]
    fn test_step_greater_than_size() {
        let input = [1, 2, 3, 4, 5, 6, 7];

        // 3 and 6 are skipped.
        assert_eq!(
            windows(&input, 2, 3, true),
            vec![vec![1, 2], vec![4, 5], vec![7]]
        );
        assert_eq!(windows(&input, 2, 3, false), vec![vec![1, 2], vec![4, 5]]);

        // The skipped elements run past the end.
        assert_eq!(windows(&input, 1, 10, true), vec![vec![1]]);
    }

    #[test]
    fn test_chunked() {
        let chunks: Vec<_> = WindowedIter::chunked("abcdefg".chars(), 3)
            .unwrap()
            .collect();
        assert_eq!(
            chunks,
            vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f'], vec!['g']]
        );
    }

    #[test]
    fn test_empty_and_absent_upstream() {
        assert_eq!(windows(&[], 2, 1, true), Vec::<Vec<i32>>::new());

        let mut absent =
            WindowedIter::from_option(None::<std::vec::IntoIter<i32>>, 2, 1, true).unwrap();
        assert!(!absent.has_next());
        assert_eq!(absent.next_value(), Err(SeqError::NoSuchElement));
    }

    #[test]
    fn test_invalid_size_or_step() {
        let mut pulled = 0;
        let upstream = std::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });

        assert!(matches!(
            WindowedIter::windowed(upstream, 0, 1, true),
            Err(SeqError::IllegalArgument(_))
        ));
        assert_eq!(pulled, 0);

        assert!(matches!(
            WindowedIter::windowed(vec![1].into_iter(), 2, 0, true),
            Err(SeqError::IllegalArgument(_))
        ));
        assert!(matches!(
            WindowedIter::chunked(vec![1].into_iter(), 0),
            Err(SeqError::IllegalArgument(_))
        ));
    }

    #[test]
    fn test_windows_are_independent() {
        let mut iter = WindowedIter::windowed(vec![1, 2, 3].into_iter(), 2, 1, false).unwrap();
        assert_eq!(
            (
                iter.producer().size(),
                iter.producer().step(),
                iter.producer().partial_windows()
            ),
            (2, 1, false)
        );

        let mut first = iter.next_value().unwrap();
        let second = iter.next_value().unwrap();
        first.push(100);

        assert_eq!(first, vec![1, 2, 100]);
        assert_eq!(second, vec![2, 3]);
        assert!(matches!(
            iter.remove(),
            Err(SeqError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_reads_upstream_lazily() {
        let mut pulled = 0;
        let upstream = std::iter::from_fn(|| {
            pulled += 1;
            Some(pulled)
        });

        let mut iter = WindowedIter::windowed(upstream, 3, 1, false).unwrap();
        assert_eq!(iter.next_value(), Ok(vec![1, 2, 3]));
        assert_eq!(iter.next_value(), Ok(vec![2, 3, 4]));
        assert_eq!(iter.next_value(), Ok(vec![3, 4, 5]));
        drop(iter);

        assert_eq!(pulled, 5);
    }

    #[test]
    fn test_large_window_grows_buffer() {
        let input: Vec<i32> = (0..3000).collect();
        let all = windows(&input, 2500, 400, false);

        assert_eq!(all.len(), 2);
        assert_eq!(all[0], (0..2500).collect::<Vec<_>>());
        assert_eq!(all[1], (400..2900).collect::<Vec<_>>());
    }

    #[test]
    fn test_size_hint() {
        let iter = WindowedIter::windowed(vec![1, 2, 3, 4, 5].into_iter(), 2, 1, true).unwrap();
        assert_eq!(iter.size_hint(), (0, Some(5)));
        assert_eq!(iter.count(), 5);
    }
}
