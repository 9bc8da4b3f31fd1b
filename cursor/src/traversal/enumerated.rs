// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Ix, Resettable, TryNext, TryNextIndexed};

/// Gives any forward cursor the indexed forward forms, by counting the elements it
/// visits. The first element visited through the wrapper gets coordinate `0`.
///
/// ```
/// use r3bl_cursor::{Enumerated, ForNextIndexed, Recorder, adapt};
///
/// let mut recorder = Recorder::new();
/// Enumerated::new(adapt("ab".chars()))
///     .for_next_indexed(recorder.indexed_op::<std::convert::Infallible>())
///     .unwrap();
/// assert_eq!(recorder.pairs(), vec![(0, 'a'), (1, 'b')]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerated<C> {
    inner: C,
    count: Ix,
}

impl<C> Enumerated<C> {
    #[must_use]
    pub fn new(inner: C) -> Self { Self { inner, count: 0 } }

    #[must_use]
    pub fn into_inner(self) -> C { self.inner }
}

impl<C: TryNext> TryNext for Enumerated<C> {
    type Item = C::Item;

    fn try_next<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        let count = &mut self.count;
        self.inner.try_next(&mut |it: C::Item| {
            *count += 1;
            op(it)
        })
    }
}

impl<C: TryNext> TryNextIndexed for Enumerated<C> {
    fn try_next_indexed<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        let count = &mut self.count;
        self.inner.try_next(&mut |it: C::Item| {
            let ix = *count;
            *count += 1;
            op(ix, it)
        })
    }
}

impl<C: Resettable> Resettable for Enumerated<C> {
    /// Restarts the count only if the wrapped cursor could be restarted.
    fn reset(&mut self) -> bool {
        let it = self.inner.reset();
        if it {
            self.count = 0;
        }
        it
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ForNext, ForNextIndexed, Recorder, SliceTraverser, adapt};
    use pretty_assertions::assert_eq;
    use std::convert::Infallible;

    #[test]
    fn test_plain_and_indexed_share_the_count() {
        let data = [5, 6, 7, 8];
        let mut cursor = Enumerated::new(SliceTraverser::with_range(&data, 1, 4).unwrap());
        let mut recorder = Recorder::new();

        cursor.try_next(&mut |_| Ok::<_, Infallible>(())).unwrap();
        cursor
            .for_next_indexed(recorder.indexed_op::<Infallible>())
            .unwrap();

        assert_eq!(recorder.pairs(), vec![(1, &7), (2, &8)]);
    }

    #[test]
    fn test_reset_follows_the_wrapped_cursor() {
        let data = ['a', 'b'];
        let mut resettable = Enumerated::new(SliceTraverser::new(&data));
        resettable.for_next(|_| Ok::<_, Infallible>(())).unwrap();
        assert!(resettable.reset());

        let mut recorder = Recorder::new();
        resettable
            .for_next_indexed(recorder.indexed_op::<Infallible>())
            .unwrap();
        assert_eq!(recorder.coordinates(), &[0, 1]);

        let mut one_shot = Enumerated::new(adapt(['a', 'b']));
        one_shot.for_next(|_| Ok::<_, Infallible>(())).unwrap();
        assert!(!one_shot.reset());
    }
}
