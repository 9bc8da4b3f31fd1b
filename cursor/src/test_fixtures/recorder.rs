// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Ix;

/// Collects every element (and coordinate, for indexed operations) handed to the
/// operations it builds, in invocation order.
///
/// ```
/// use r3bl_cursor::{ForNextIndexed, Recorder, SliceTraverser};
///
/// let data = ['a', 'b'];
/// let mut recorder = Recorder::default();
/// SliceTraverser::new(&data)
///     .for_next_indexed(recorder.indexed_op::<std::convert::Infallible>())
///     .unwrap();
///
/// assert_eq!(recorder.pairs(), vec![(0, &'a'), (1, &'b')]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorder<T> {
    values: Vec<T>,
    coordinates: Vec<Ix>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            values: vec![],
            coordinates: vec![],
        }
    }
}

impl<T> Recorder<T> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Plain operation that records its element and never fails.
    pub fn op<E>(&mut self) -> impl FnMut(T) -> Result<(), E> + '_ {
        move |it| {
            self.values.push(it);
            Ok(())
        }
    }

    /// Indexed operation that records its coordinate and element and never fails.
    pub fn indexed_op<E>(&mut self) -> impl FnMut(Ix, T) -> Result<(), E> + '_ {
        move |ix, it| {
            self.coordinates.push(ix);
            self.values.push(it);
            Ok(())
        }
    }

    #[must_use]
    pub fn values(&self) -> &[T] { &self.values }

    #[must_use]
    pub fn coordinates(&self) -> &[Ix] { &self.coordinates }

    #[must_use]
    pub fn invocations(&self) -> usize { self.values.len() }

    /// Zips the recorded coordinates with the recorded values. Only meaningful when every
    /// invocation came through [`Self::indexed_op`].
    #[must_use]
    pub fn pairs(&self) -> Vec<(Ix, T)>
    where
        T: Clone,
    {
        self.coordinates
            .iter()
            .copied()
            .zip(self.values.iter().cloned())
            .collect()
    }
}
