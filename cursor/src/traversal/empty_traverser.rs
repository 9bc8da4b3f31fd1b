// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Ix, Resettable, TryNext, TryNextIndexed, TryPrev, TryPrevIndexed};
use std::marker::PhantomData;

/// A cursor with no elements, in either direction. No operation is ever invoked, and the
/// cancellable forms report [`crate::CursorStatus::COMPLETED`].
#[derive(Debug)]
pub struct EmptyTraverser<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> EmptyTraverser<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for EmptyTraverser<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Clone for EmptyTraverser<T> {
    fn clone(&self) -> Self { Self::new() }
}

impl<T> TryNext for EmptyTraverser<T> {
    type Item = T;

    fn try_next<E, F>(&mut self, _op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        Ok(false)
    }
}

impl<T> TryPrev for EmptyTraverser<T> {
    fn try_prev<E, F>(&mut self, _op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        Ok(false)
    }
}

impl<T> TryNextIndexed for EmptyTraverser<T> {
    fn try_next_indexed<E, F>(&mut self, _op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        Ok(false)
    }
}

impl<T> TryPrevIndexed for EmptyTraverser<T> {
    fn try_prev_indexed<E, F>(&mut self, _op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        Ok(false)
    }
}

impl<T> Resettable for EmptyTraverser<T> {
    fn reset(&mut self) -> bool { true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CursorStatus, DuplexIndexed, ForPrevIndexed, TestError, WhileNext,
                WhilePrevIndexed};
    use pretty_assertions::assert_eq;

    fn assert_duplex_indexed<C: DuplexIndexed>(_: &C) {}

    #[test]
    fn test_never_invokes_and_completes() {
        let mut cursor = EmptyTraverser::<u8>::new();
        assert_duplex_indexed(&cursor);

        let fail = |_: u8| Err::<(), _>(TestError::new(0));
        assert_eq!(cursor.try_next(&mut { fail }), Ok(false));
        assert_eq!(
            cursor.for_prev_indexed(|_, _: u8| Err::<(), _>(TestError::new(1))),
            Ok(())
        );

        let status = cursor.while_next(|_control| fail).unwrap();
        assert_eq!(status, CursorStatus::COMPLETED);

        let status = cursor
            .while_prev_indexed(|_control| |_: Ix, _: u8| Err::<(), _>(TestError::new(2)))
            .unwrap();
        assert_eq!(status, CursorStatus::COMPLETED);
        assert!(cursor.reset());
    }
}
