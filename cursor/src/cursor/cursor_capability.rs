// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The cursor capability matrix.
//!
//! Each trait in this module is one cell of the matrix
//! `{Try, For, While} x {Next, Prev} x {plain, indexed}`. A data source implements only
//! the single-step primitives:
//!
//! - [`TryNext`] (required to be a cursor at all),
//! - [`TryPrev`] (to be bidirectional),
//! - [`TryNextIndexed`] and [`TryPrevIndexed`] (to hand out positions),
//! - [`Resettable`] (to be restartable).
//!
//! The `For*` and `While*` traits are implemented for every such source by the blanket
//! impls in [`super::cursor_derive`]. A source cannot provide its own version of them.
//!
//! The umbrella traits [`Simplex`], [`SimplexIndexed`], [`Duplex`], and
//! [`DuplexIndexed`] name the common bundles so that generic code can ask for "a
//! forward cursor" or "a bidirectional indexed cursor" with a single bound.

use super::{Control, CursorStatus};
use crate::Ix;

// ╭──────────────────────────────────────────────────────────╮
// │ Try: single-step                                         │
// ╰──────────────────────────────────────────────────────────╯

/// Forward single-step primitive. This is the one thing a data source must supply.
pub trait TryNext {
    /// The element handed to the operation.
    type Item;

    /// If no element remains, returns `Ok(false)` without invoking `op`. Otherwise
    /// invokes `op` on exactly one element, advances, and returns `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Returns the error from `op` unchanged.
    fn try_next<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>;
}

/// Reverse single-step primitive. Same contract as [`TryNext::try_next`], walking
/// towards the start of the source.
pub trait TryPrev: TryNext {
    /// # Errors
    ///
    /// Returns the error from `op` unchanged.
    fn try_prev<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>;
}

/// Forward single-step primitive that also hands the element's position to the
/// operation.
pub trait TryNextIndexed: TryNext {
    /// # Errors
    ///
    /// Returns the error from `op` unchanged.
    fn try_next_indexed<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>;
}

/// Reverse single-step primitive that also hands the element's position to the
/// operation.
pub trait TryPrevIndexed: TryPrev {
    /// # Errors
    ///
    /// Returns the error from `op` unchanged.
    fn try_prev_indexed<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>;
}

// A mutable borrow of a cursor is a cursor, so a traversal can be handed `&mut cursor`
// and the caller keeps ownership (eg: to continue in the other direction afterwards).

impl<C: TryNext + ?Sized> TryNext for &mut C {
    type Item = C::Item;

    fn try_next<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        (**self).try_next(op)
    }
}

impl<C: TryPrev + ?Sized> TryPrev for &mut C {
    fn try_prev<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        (**self).try_prev(op)
    }
}

impl<C: TryNextIndexed + ?Sized> TryNextIndexed for &mut C {
    fn try_next_indexed<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        (**self).try_next_indexed(op)
    }
}

impl<C: TryPrevIndexed + ?Sized> TryPrevIndexed for &mut C {
    fn try_prev_indexed<E, F>(&mut self, op: &mut F) -> Result<bool, E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        (**self).try_prev_indexed(op)
    }
}

// ╭──────────────────────────────────────────────────────────╮
// │ For: unconditional bulk                                  │
// ╰──────────────────────────────────────────────────────────╯

/// Drains the rest of the source, front to back. There is no way to stop early, other
/// than returning an error from `op`.
pub trait ForNext: TryNext {
    /// Invokes `op` exactly once per remaining element, in traversal order.
    ///
    /// # Errors
    ///
    /// Returns the first error from `op` unchanged. No element after the failing one is
    /// visited.
    fn for_next<E, F>(&mut self, op: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>;
}

/// Drains the source towards its start. See [`ForNext`].
pub trait ForPrev: TryPrev {
    /// # Errors
    ///
    /// Returns the first error from `op` unchanged.
    fn for_prev<E, F>(&mut self, op: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>;
}

/// Indexed counterpart of [`ForNext`].
pub trait ForNextIndexed: TryNextIndexed {
    /// # Errors
    ///
    /// Returns the first error from `op` unchanged.
    fn for_next_indexed<E, F>(&mut self, op: F) -> Result<(), E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>;
}

/// Indexed counterpart of [`ForPrev`].
pub trait ForPrevIndexed: TryPrevIndexed {
    /// # Errors
    ///
    /// Returns the first error from `op` unchanged.
    fn for_prev_indexed<E, F>(&mut self, op: F) -> Result<(), E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>;
}

// ╭──────────────────────────────────────────────────────────╮
// │ While: cancellable bulk                                  │
// ╰──────────────────────────────────────────────────────────╯

/// Cancellable forward bulk traversal.
///
/// The `driver` is called exactly once with a fresh [`Control`], and returns the
/// operation to run. The operation stops the traversal by calling [`Control::exit`]. The
/// returned status has [`CursorStatus::EXITED`] set if it did, and
/// [`CursorStatus::COMPLETED`] set if the source ran out first. When both happen at the
/// same step (exit on the last element), exit wins.
pub trait WhileNext: TryNext {
    /// # Errors
    ///
    /// Returns the first error from the operation unchanged.
    fn while_next<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> F,
        F: FnMut(Self::Item) -> Result<(), E>;

    /// Same as [`Self::while_next`], for a driver that can itself fail while building the
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns the error from the driver or the first error from the operation
    /// unchanged. A failing driver means no element is visited.
    fn try_while_next<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> Result<F, E>,
        F: FnMut(Self::Item) -> Result<(), E>;
}

/// Cancellable reverse bulk traversal. See [`WhileNext`].
pub trait WhilePrev: TryPrev {
    /// # Errors
    ///
    /// Returns the first error from the operation unchanged.
    fn while_prev<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> F,
        F: FnMut(Self::Item) -> Result<(), E>;

    /// # Errors
    ///
    /// Returns the error from the driver or the first error from the operation
    /// unchanged.
    fn try_while_prev<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> Result<F, E>,
        F: FnMut(Self::Item) -> Result<(), E>;
}

/// Indexed counterpart of [`WhileNext`].
pub trait WhileNextIndexed: TryNextIndexed {
    /// # Errors
    ///
    /// Returns the first error from the operation unchanged.
    fn while_next_indexed<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> F,
        F: FnMut(Ix, Self::Item) -> Result<(), E>;

    /// # Errors
    ///
    /// Returns the error from the driver or the first error from the operation
    /// unchanged.
    fn try_while_next_indexed<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> Result<F, E>,
        F: FnMut(Ix, Self::Item) -> Result<(), E>;
}

/// Indexed counterpart of [`WhilePrev`].
pub trait WhilePrevIndexed: TryPrevIndexed {
    /// # Errors
    ///
    /// Returns the first error from the operation unchanged.
    fn while_prev_indexed<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> F,
        F: FnMut(Ix, Self::Item) -> Result<(), E>;

    /// # Errors
    ///
    /// Returns the error from the driver or the first error from the operation
    /// unchanged.
    fn try_while_prev_indexed<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> Result<F, E>,
        F: FnMut(Ix, Self::Item) -> Result<(), E>;
}

// ╭──────────────────────────────────────────────────────────╮
// │ Bundles                                                  │
// ╰──────────────────────────────────────────────────────────╯

/// Forward-only capability set: [`TryNext`] + [`ForNext`] + [`WhileNext`].
pub trait Simplex: TryNext + ForNext + WhileNext {}

/// [`Simplex`] plus the indexed forward forms.
pub trait SimplexIndexed:
    Simplex + TryNextIndexed + ForNextIndexed + WhileNextIndexed
{
}

/// Bidirectional capability set: [`Simplex`] + [`TryPrev`] + [`ForPrev`] +
/// [`WhilePrev`]. Each direction gets its own status and control per call.
pub trait Duplex: Simplex + TryPrev + ForPrev + WhilePrev {}

/// [`Duplex`] plus the indexed forms in both directions.
pub trait DuplexIndexed:
    Duplex + SimplexIndexed + TryPrevIndexed + ForPrevIndexed + WhilePrevIndexed
{
}

// ╭──────────────────────────────────────────────────────────╮
// │ Reset                                                    │
// ╰──────────────────────────────────────────────────────────╯

/// Optional capability to restart a traversal.
///
/// The default [`Self::reset`] does nothing and returns `false`. A source that overrides
/// it and returns `true` guarantees that the next [`TryNext::try_next`] behaves as if the
/// traversal had not started.
pub trait Resettable {
    fn reset(&mut self) -> bool { false }
}

impl<C: Resettable + ?Sized> Resettable for &mut C {
    fn reset(&mut self) -> bool { (**self).reset() }
}
