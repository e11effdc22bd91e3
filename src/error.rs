// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use thiserror::Error;

/// Failures raised by the sequence primitives.
///
/// All of them are raised synchronously at the point of misuse and none of
/// them are retryable. An absent source is never reported here, it behaves
/// as an empty sequence instead.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SeqError {
    /// A construction parameter or argument is invalid,
    /// e.g. a zero window size or `start > end`.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: isize, length: usize },

    /// The operation is not valid for the current state,
    /// e.g. adding to a full buffer.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// Pulling an element from an exhausted iterator.
    #[error("no such element")]
    NoSuchElement,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl SeqError {
    pub(crate) fn illegal_argument(message: impl Into<String>) -> Self {
        SeqError::IllegalArgument(message.into())
    }

    pub(crate) fn index_out_of_bounds(index: usize, length: usize) -> Self {
        SeqError::IndexOutOfBounds {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            length,
        }
    }
}
