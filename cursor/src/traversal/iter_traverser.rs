// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_CURSOR, Ix, Resettable, TryNext, TryNextIndexed};

/// Forward, indexed cursor over any [`Iterator`]. Build one with [`adapt`].
///
/// Coordinates count the elements pulled from the iterator, starting at `0` when the
/// cursor is built. The cursor can't be reset, since the iterator can't be rewound.
#[derive(Debug, Clone)]
pub struct IterTraverser<I> {
    iter: I,
    next_ix: Ix,
}

/// Turns anything that can be iterated into a forward cursor.
///
/// ```
/// use r3bl_cursor::{ForNext, adapt};
///
/// let mut total = 0;
/// adapt(1..=4)
///     .for_next(|it| {
///         total += it;
///         Ok::<_, std::convert::Infallible>(())
///     })
///     .unwrap();
/// assert_eq!(total, 10);
/// ```
pub fn adapt<I: IntoIterator>(iterable: I) -> IterTraverser<I::IntoIter> {
    DEBUG_CURSOR.then(|| {
        tracing::trace!(
            message = "iterator traverser built",
            source = std::any::type_name::<I>()
        );
    });
    IterTraverser {
        iter: iterable.into_iter(),
        next_ix: 0,
    }
}

impl<I> IterTraverser<I> {
    /// Number of elements visited so far.
    #[must_use]
    pub fn visited(&self) -> usize { self.next_ix }

    #[must_use]
    pub fn into_inner(self) -> I { self.iter }
}

impl<I: Iterator> TryNext for IterTraverser<I> {
    type Item = I::Item;

    fn try_next<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        self.try_next_indexed(&mut |_: Ix, it: I::Item| op(it))
    }
}

impl<I: Iterator> TryNextIndexed for IterTraverser<I> {
    fn try_next_indexed<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        let Some(it) = self.iter.next() else {
            return Ok(false);
        };
        let ix = self.next_ix;
        self.next_ix += 1;
        op(ix, it).map(|()| true)
    }
}

impl<I> Resettable for IterTraverser<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CursorStatus, ForNextIndexed, Recorder, WhileNext};
    use pretty_assertions::assert_eq;
    use std::convert::Infallible;

    #[test]
    fn test_coordinates_count_from_zero() {
        let mut cursor = adapt(vec!['x', 'y', 'z']);
        let mut recorder = Recorder::new();
        cursor
            .for_next_indexed(recorder.indexed_op::<Infallible>())
            .unwrap();
        assert_eq!(recorder.pairs(), vec![(0, 'x'), (1, 'y'), (2, 'z')]);
        assert_eq!(cursor.visited(), 3);
    }

    #[test]
    fn test_reset_is_refused() {
        let mut cursor = adapt(0..5);
        cursor.try_next(&mut |_| Ok::<_, Infallible>(())).unwrap();

        assert!(!cursor.reset());
        assert_eq!(cursor.visited(), 1);
        assert_eq!(cursor.into_inner().next(), Some(1));
    }

    #[test]
    fn test_while_next_on_infinite_source() {
        let mut cursor = adapt(0_u64..);
        let mut seen = vec![];

        let sink = &mut seen;
        let status = cursor
            .while_next(|control| {
                move |it: u64| {
                    sink.push(it);
                    if it == 3 {
                        control.exit();
                    }
                    Ok::<_, Infallible>(())
                }
            })
            .unwrap();

        assert_eq!(status, CursorStatus::EXITED);
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
