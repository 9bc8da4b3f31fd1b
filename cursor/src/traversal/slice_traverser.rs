// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CursorError, CursorResult, DEBUG_CURSOR, Ix, Resettable, TryNext,
            TryNextIndexed, TryPrev, TryPrevIndexed};

/// Bidirectional, indexed, resettable cursor over a borrowed slice.
///
/// The cursor walks the range `lo..hi` of the slice, starting at position `p0`. The
/// position always sits *between* elements:
///
/// - forward traversal yields `data[position]`, then advances,
/// - reverse traversal steps back, then yields `data[position]`.
///
/// So a cursor that has been drained forward is ready to be drained in reverse, and the
/// coordinates handed to indexed operations are absolute positions in the slice (not
/// offsets from `lo`).
///
/// ```text
///   lo             position             hi
///   ↓                 ↓                 ↓
/// ┌───┬───┬───┬───┬───┬───┬───┬───┬───┐
/// │ 0 │ 1 │ 2 │ 3 │ 4 │ 5 │ 6 │ 7 │ 8 │
/// └───┴───┴───┴───┴───┴───┴───┴───┴───┘
///                   ╰── try_next yields 4
///               ╰────── try_prev yields 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceTraverser<'a, T> {
    data: &'a [T],
    lo: usize,
    hi: usize,
    p0: usize,
    px: usize,
}

impl<'a, T> SliceTraverser<'a, T> {
    /// Cursor over the whole slice, positioned at its start.
    #[must_use]
    pub fn new(data: &'a [T]) -> Self {
        let it = Self {
            data,
            lo: 0,
            hi: data.len(),
            p0: 0,
            px: 0,
        };
        it.log_built();
        it
    }

    /// Cursor over a single element.
    #[must_use]
    pub fn single(value: &'a T) -> Self { Self::new(std::slice::from_ref(value)) }

    /// Cursor over the whole slice, positioned at `position`. Use `data.len()` to get a
    /// cursor that is ready for reverse traversal.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidPosition`] if `position > data.len()`.
    pub fn with_position(data: &'a [T], position: usize) -> CursorResult<Self> {
        Self::with_range_and_position(data, 0, data.len(), position)
    }

    /// Cursor over `lo..hi`, positioned at `lo`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidRange`] if `lo > hi` or `hi > data.len()`.
    pub fn with_range(data: &'a [T], lo: usize, hi: usize) -> CursorResult<Self> {
        Self::with_range_and_position(data, lo, hi, lo)
    }

    /// Cursor over `lo..hi`, positioned at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidRange`] if `lo > hi` or `hi > data.len()`, and
    /// [`CursorError::InvalidPosition`] if `position` is outside `lo..=hi`.
    pub fn with_range_and_position(
        data: &'a [T],
        lo: usize,
        hi: usize,
        position: usize,
    ) -> CursorResult<Self> {
        CursorError::check_range(lo, hi, data.len())?;
        CursorError::check_position(position, lo, hi)?;

        let it = Self {
            data,
            lo,
            hi,
            p0: position,
            px: position,
        };
        it.log_built();
        Ok(it)
    }

    #[must_use]
    pub fn lo(&self) -> usize { self.lo }

    #[must_use]
    pub fn hi(&self) -> usize { self.hi }

    #[must_use]
    pub fn position(&self) -> usize { self.px }

    /// Number of elements a forward drain would visit.
    #[must_use]
    pub fn remaining_next(&self) -> usize { self.hi - self.px }

    /// Number of elements a reverse drain would visit.
    #[must_use]
    pub fn remaining_prev(&self) -> usize { self.px - self.lo }

    fn advance(&mut self) -> Option<(Ix, &'a T)> {
        if self.px >= self.hi {
            return None;
        }
        let ix = self.px;
        let it = self.data.get(ix)?;
        self.px += 1;
        Some((ix, it))
    }

    fn retreat(&mut self) -> Option<(Ix, &'a T)> {
        if self.px <= self.lo {
            return None;
        }
        let ix = self.px - 1;
        let it = self.data.get(ix)?;
        self.px = ix;
        Some((ix, it))
    }

    fn log_built(&self) {
        DEBUG_CURSOR.then(|| {
            tracing::trace!(
                message = "slice traverser built",
                lo = self.lo,
                hi = self.hi,
                position = self.px
            );
        });
    }
}

impl<'a, T> TryNext for SliceTraverser<'a, T> {
    type Item = &'a T;

    fn try_next<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        match self.advance() {
            None => Ok(false),
            Some((_, it)) => op(it).map(|()| true),
        }
    }
}

impl<T> TryPrev for SliceTraverser<'_, T> {
    fn try_prev<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        match self.retreat() {
            None => Ok(false),
            Some((_, it)) => op(it).map(|()| true),
        }
    }
}

impl<T> TryNextIndexed for SliceTraverser<'_, T> {
    fn try_next_indexed<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        match self.advance() {
            None => Ok(false),
            Some((ix, it)) => op(ix, it).map(|()| true),
        }
    }
}

impl<T> TryPrevIndexed for SliceTraverser<'_, T> {
    fn try_prev_indexed<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        match self.retreat() {
            None => Ok(false),
            Some((ix, it)) => op(ix, it).map(|()| true),
        }
    }
}

impl<T> Resettable for SliceTraverser<'_, T> {
    /// Moves the position back to where the cursor was built.
    fn reset(&mut self) -> bool {
        self.px = self.p0;
        DEBUG_CURSOR.then(|| {
            tracing::trace!(message = "slice traverser reset", position = self.px);
        });
        true
    }
}
