// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Index;

use crate::error::SeqError;

/// A movable view `[start, end)` over a borrowed list.
///
/// The view never copies or owns the list, it only keeps the reference
/// and the two bounds. It starts out empty at `[0, 0)`.
#[derive(Debug, Clone)]
pub struct SlidingSubList<'a, T> {
    source: &'a [T],
    start: usize,
    end: usize,
}

impl<'a, T> SlidingSubList<'a, T> {
    pub fn new(source: &'a [T]) -> Self {
        Self {
            source,
            start: 0,
            end: 0,
        }
    }

    /// Moves the view to `[new_start, new_end)`.
    ///
    /// Both bounds are validated before either is replaced, a failed move
    /// leaves the view unchanged.
    pub fn move_to(&mut self, new_start: usize, new_end: usize) -> Result<(), SeqError> {
        if new_end > self.source.len() {
            return Err(SeqError::index_out_of_bounds(new_end, self.source.len()));
        }

        if new_start > new_end {
            return Err(SeqError::illegal_argument(format!(
                "start {} is greater than end {}",
                new_start, new_end
            )));
        }

        self.start = new_start;
        self.end = new_end;
        Ok(())
    }

    /// Same as `move_to` but accepts signed bounds,
    /// a negative start is out of bounds.
    pub fn move_to_signed(&mut self, new_start: isize, new_end: isize) -> Result<(), SeqError> {
        let Ok(start) = usize::try_from(new_start) else {
            return Err(SeqError::IndexOutOfBounds {
                index: new_start,
                length: self.source.len(),
            });
        };

        match usize::try_from(new_end) {
            Ok(end) => self.move_to(start, end),
            Err(_) => Err(SeqError::illegal_argument(format!(
                "start {} is greater than end {}",
                new_start, new_end
            ))),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the element at `index` relative to the start of the view.
    pub fn get(&self, index: usize) -> Result<&'a T, SeqError> {
        if index >= self.len() {
            return Err(SeqError::index_out_of_bounds(index, self.len()));
        }

        Ok(&self.source[self.start + index])
    }

    pub fn first(&self) -> Option<&'a T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&'a T> {
        self.as_slice().last()
    }

    pub fn as_slice(&self) -> &'a [T] {
        &self.source[self.start..self.end]
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<T> Index<usize> for SlidingSubList<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, T> IntoIterator for &SlidingSubList<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use crate::{error::SeqError, sliding_sub_list::SlidingSubList};

    #[test]
    fn test_move_to() {
        let numbers = [1, 2, 3, 4, 5];
        let mut view = SlidingSubList::new(&numbers);
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
        assert_eq!(view.last(), None);

        view.move_to(0, 5).unwrap();
        assert_eq!(view.len(), 5);
        assert_eq!(view[0], 1);
        assert_eq!(view.last(), Some(&5));

        view.move_to(1, 3).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0], 2);
        assert_eq!(view.first(), Some(&2));
        assert_eq!(view.last(), Some(&3));
        assert_eq!(view.as_slice(), &[2, 3]);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 3]);

        view.move_to(5, 5).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_invalid_move_leaves_view_unchanged() {
        let numbers = [1, 2, 3, 4, 5];
        let mut view = SlidingSubList::new(&numbers);
        view.move_to(1, 3).unwrap();

        assert!(matches!(
            view.move_to_signed(-1, 2),
            Err(SeqError::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            view.move_to(0, 6),
            Err(SeqError::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            view.move_to(2, 0),
            Err(SeqError::IllegalArgument(_))
        ));

        assert_eq!((view.start(), view.end()), (1, 3));
    }

    #[test]
    fn test_get_out_of_range() {
        let numbers = [1, 2, 3, 4, 5];
        let mut view = SlidingSubList::new(&numbers);
        view.move_to(3, 5).unwrap();

        assert_eq!(view.get(1), Ok(&5));
        assert_eq!(
            view.get(2),
            Err(SeqError::IndexOutOfBounds {
                index: 2,
                length: 2
            })
        );
    }

    #[test]
    fn test_view_does_not_copy() {
        let words = vec!["a".to_owned(), "b".to_owned()];
        let mut view = SlidingSubList::new(&words);
        view.move_to(0, 2).unwrap();

        assert!(std::ptr::eq(view.get(1).unwrap(), &words[1]));
    }

    #[test]
    fn test_view_observes_source_changes() {
        let cells = [Cell::new(1), Cell::new(2), Cell::new(3)];
        let mut view = SlidingSubList::new(&cells);
        view.move_to(1, 3).unwrap();
        assert_eq!(view.get(0).unwrap().get(), 2);

        cells[1].set(20);
        cells[2].set(30);

        assert_eq!(view.get(0).unwrap().get(), 20);
        assert_eq!(
            view.iter().map(Cell::get).collect::<Vec<_>>(),
            vec![20, 30]
        );
    }
}
