// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TryNext;
use std::convert::Infallible;

/// Lazy, single pass [`Iterator`] view of a forward cursor. Each call to
/// [`Iterator::next`] is one [`TryNext::try_next`] step, with an operation that can't
/// fail. Build one with [`CursorIterExt::iter_cursor`].
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    #[must_use]
    pub fn into_inner(self) -> C { self.cursor }
}

impl<C: TryNext> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut slot = None;
        let result = self.cursor.try_next(&mut |it: C::Item| {
            slot = Some(it);
            Ok::<_, Infallible>(())
        });
        match result {
            Ok(_) => slot,
            Err(never) => match never {},
        }
    }
}

/// Adds [`Self::iter_cursor`] to every cursor. Pass `&mut cursor` to keep using the cursor
/// once the iterator is dropped.
pub trait CursorIterExt: TryNext + Sized {
    fn iter_cursor(self) -> CursorIter<Self> { CursorIter { cursor: self } }
}

impl<C: TryNext> CursorIterExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ForPrev, SliceTraverser, adapt};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect() {
        let data = [1, 2, 3];
        let collected: Vec<_> = SliceTraverser::new(&data).iter_cursor().collect();
        assert_eq!(collected, vec![&1, &2, &3]);
    }

    #[test]
    fn test_lazy_and_borrowing() {
        let data = ['a', 'b', 'c', 'd'];
        let mut cursor = SliceTraverser::new(&data);

        let first_two: Vec<_> = (&mut cursor).iter_cursor().take(2).collect();
        assert_eq!(first_two, vec![&'a', &'b']);
        assert_eq!(cursor.position(), 2);

        let mut reversed = vec![];
        cursor
            .for_prev(|it| {
                reversed.push(*it);
                Ok::<_, Infallible>(())
            })
            .unwrap();
        assert_eq!(reversed, vec!['b', 'a']);
    }

    #[test]
    fn test_infinite_source() {
        let evens: Vec<u32> = adapt((0..).step_by(2)).iter_cursor().take(3).collect();
        assert_eq!(evens, vec![0, 2, 4]);
    }
}
