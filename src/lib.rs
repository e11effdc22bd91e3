// Copyright (c) 2026 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Lazy, single-pass sequence primitives: a lookahead iterator,
//! a circular buffer, windowing, deduplication, indexing and
//! a sliding view over a borrowed list.

pub mod circular_buffer;
pub mod distinct;
pub mod error;
pub mod indexed;
pub mod iter_ext;
pub mod lookahead_iter;
pub mod maybe_iter;
pub mod sliding_sub_list;
pub mod windowed;

pub use circular_buffer::CircularBuffer;
pub use distinct::DistinctBy;
pub use error::SeqError;
pub use indexed::{IndexedIterable, IndexedValue};
pub use iter_ext::SeqIterExt;
pub use lookahead_iter::{LookaheadIter, Producer, Step};
pub use maybe_iter::MaybeIter;
pub use sliding_sub_list::SlidingSubList;
pub use windowed::WindowedIter;
