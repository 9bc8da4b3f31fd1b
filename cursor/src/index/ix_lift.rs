// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Adapters between plain and indexed operations, so that an operation written for one
//! shape can drive a traversal of the other.

use super::{Ix, Ix1D};
use crate::Control;

/// Boxed indexed operation, returned by [`lift_driver`].
pub type BoxedIndexedOp<'a, T, E> = Box<dyn FnMut(Ix, T) -> Result<(), E> + 'a>;

/// Turns a plain operation into an indexed one that ignores the coordinate.
pub fn lift_op<T, E>(
    mut op: impl FnMut(T) -> Result<(), E>,
) -> impl FnMut(Ix, T) -> Result<(), E> {
    move |_: Ix, it: T| op(it)
}

/// Turns a plain driver into an indexed driver whose operation ignores the coordinate.
/// The driver is still called exactly once, with the same [`Control`].
///
/// ```
/// use r3bl_cursor::{SliceTraverser, WhileNextIndexed, completed, lift_driver};
///
/// let data = [1, 2, 3];
/// let mut sum = 0;
///
/// let acc = &mut sum;
/// let status = SliceTraverser::new(&data)
///     .while_next_indexed(lift_driver(|_control| {
///         move |it: &i32| {
///             *acc += *it;
///             Ok::<_, std::convert::Infallible>(())
///         }
///     }))
///     .unwrap();
///
/// assert!(completed(status));
/// assert_eq!(sum, 6);
/// ```
pub fn lift_driver<'a, T, E, D, F>(
    driver: D,
) -> impl FnOnce(Control) -> BoxedIndexedOp<'a, T, E>
where
    D: FnOnce(Control) -> F,
    F: FnMut(T) -> Result<(), E> + 'a,
{
    move |control| {
        let mut op = driver(control);
        Box::new(move |_: Ix, it: T| op(it))
    }
}

/// Turns a curried indexed operation (an [`Ix1D`] whose values are plain operations)
/// into an indexed operation: the element at coordinate `i` is handed to
/// `ix.index(i)`.
pub fn curry_op<T, E, F>(
    mut ix: impl Ix1D<F>,
) -> impl FnMut(Ix, T) -> Result<(), E>
where
    F: FnOnce(T) -> Result<(), E>,
{
    move |i: Ix, it: T| ix.index(i)(it)
}
