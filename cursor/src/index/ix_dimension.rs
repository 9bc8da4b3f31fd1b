// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Indexed values: things that produce an `A` given 1, 2, or 3 coordinates.
//!
//! Any closure of the right arity is an indexed value, thanks to the blanket impls in this
//! file. Fixing the leading coordinates of a higher dimensional value yields a lower
//! dimensional one:
//!
//! ```
//! use r3bl_cursor::{Ix1D, Ix2D};
//!
//! let mut grid = |row: usize, col: usize| row * 10 + col;
//! assert_eq!(grid.index(2, 3), 23);
//!
//! let mut row_two = grid.fix(2);
//! assert_eq!(row_two.index(5), 25);
//! ```

/// A single coordinate. Indexed operations receive the position of the visited element
/// as an [`Ix`].
pub type Ix = usize;

/// One dimensional indexed value.
pub trait Ix1D<A> {
    fn index(&mut self, i1: Ix) -> A;
}

/// Two dimensional indexed value.
pub trait Ix2D<A> {
    fn index(&mut self, i1: Ix, i2: Ix) -> A;

    /// Partial application: fixes the first coordinate.
    fn fix(&mut self, i1: Ix) -> impl Ix1D<A> + '_ { move |i2| self.index(i1, i2) }
}

/// Three dimensional indexed value.
pub trait Ix3D<A> {
    fn index(&mut self, i1: Ix, i2: Ix, i3: Ix) -> A;

    /// Partial application: fixes the first coordinate.
    fn fix(&mut self, i1: Ix) -> impl Ix2D<A> + '_ {
        move |i2, i3| self.index(i1, i2, i3)
    }

    /// Partial application: fixes the first two coordinates.
    fn fix2(&mut self, i1: Ix, i2: Ix) -> impl Ix1D<A> + '_ {
        move |i3| self.index(i1, i2, i3)
    }
}

impl<A, F: FnMut(Ix) -> A> Ix1D<A> for F {
    fn index(&mut self, i1: Ix) -> A { self(i1) }
}

impl<A, F: FnMut(Ix, Ix) -> A> Ix2D<A> for F {
    fn index(&mut self, i1: Ix, i2: Ix) -> A { self(i1, i2) }
}

impl<A, F: FnMut(Ix, Ix, Ix) -> A> Ix3D<A> for F {
    fn index(&mut self, i1: Ix, i2: Ix, i3: Ix) -> A { self(i1, i2, i3) }
}

/// An indexed value that ignores its coordinates and always yields a clone of the same
/// value. It is an indexed value of every dimension. Build one with [`lift_1d`],
/// [`lift_2d`], [`lift_3d`], or [`lift_fn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lifted<A> {
    pub value: A,
}

impl<A: Clone> Ix1D<A> for Lifted<A> {
    fn index(&mut self, _i1: Ix) -> A { self.value.clone() }
}

impl<A: Clone> Ix2D<A> for Lifted<A> {
    fn index(&mut self, _i1: Ix, _i2: Ix) -> A { self.value.clone() }
}

impl<A: Clone> Ix3D<A> for Lifted<A> {
    fn index(&mut self, _i1: Ix, _i2: Ix, _i3: Ix) -> A { self.value.clone() }
}

/// Lifts `value` into a one dimensional indexed value that ignores the coordinate.
pub fn lift_1d<A: Clone>(value: A) -> impl Ix1D<A> + Clone { Lifted { value } }

/// Lifts `value` into a two dimensional indexed value that ignores the coordinates.
pub fn lift_2d<A: Clone>(value: A) -> impl Ix2D<A> + Clone { Lifted { value } }

/// Lifts `value` into a three dimensional indexed value that ignores the coordinates.
pub fn lift_3d<A: Clone>(value: A) -> impl Ix3D<A> + Clone { Lifted { value } }

/// Turns `f: A -> R` into a function from `A` to a [`Lifted`] value that yields `f(a)`
/// for every coordinate. [`Lifted`] is an indexed value of every dimension, so the
/// result can stand in for an [`Ix1D`], [`Ix2D`], or [`Ix3D`].
pub fn lift_fn<A, R: Clone>(mut f: impl FnMut(A) -> R) -> impl FnMut(A) -> Lifted<R> {
    move |it| Lifted { value: f(it) }
}
