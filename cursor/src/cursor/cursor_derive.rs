// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The generic derivation of the bulk and cancellable bulk forms.
//!
//! There are exactly two algorithms, [`drain`] and [`drain_while`]. Both are
//! parameterized over a `step` closure, which is the single-step primitive of some
//! cursor (forward or reverse, plain or indexed). The blanket impls at the bottom of this
//! file wire every `For*` and `While*` trait to one of them. Nothing else in the crate
//! implements those traits.

use super::{Control, CursorStatus, DEBUG_CURSOR, Direction, ForNext, ForNextIndexed,
            ForPrev, ForPrevIndexed, TryNext, TryNextIndexed, TryPrev, TryPrevIndexed,
            WhileNext, WhileNextIndexed, WhilePrev, WhilePrevIndexed};
use crate::{Duplex, DuplexIndexed, Ix, Simplex, SimplexIndexed};

/// Repeats `step(&mut op)` until it returns `false`, and returns how many elements were
/// visited.
///
/// # Errors
///
/// Returns the first error from `step` unchanged.
pub fn drain<E, F>(
    direction: Direction,
    mut step: impl FnMut(&mut F) -> Result<bool, E>,
    mut op: F,
) -> Result<usize, E> {
    let mut visits = 0_usize;
    while step(&mut op)? {
        visits += 1;
    }

    DEBUG_CURSOR.then(|| {
        // % is Display, ? is Debug.
        tracing::trace!(
            message = "cursor drained",
            direction = %direction,
            visits = visits
        );
    });

    Ok(visits)
}

/// The cancellable bulk algorithm.
///
/// 1. Bind a fresh [`Control`] to a register holding [`CursorStatus::INIT`].
/// 2. Call `driver` once to get the operation.
/// 3. Step while the register is still `INIT` and `step` reports that an element was
///    visited. The guard is checked before every step, including the first one.
/// 4. If the loop ended because the source ran out, and nobody asked to exit, set
///    [`CursorStatus::COMPLETED`].
///
/// # Errors
///
/// Returns the error from `driver` or the first error from `step` unchanged.
pub fn drain_while<E, D, F>(
    direction: Direction,
    mut step: impl FnMut(&mut F) -> Result<bool, E>,
    driver: D,
) -> Result<CursorStatus, E>
where
    D: FnOnce(Control) -> Result<F, E>,
{
    let control = Control::new();
    let mut op = driver(control.clone())?;

    let mut visits = 0_usize;
    let mut can_step = true;
    while can_step && control.status().is_init() {
        can_step = step(&mut op)?;
        if can_step {
            visits += 1;
        }
    }

    if !can_step && control.status().is_init() {
        control.mark_completed();
    }

    let status = control.status();

    DEBUG_CURSOR.then(|| {
        // % is Display, ? is Debug.
        tracing::trace!(
            message = "cursor while loop ended",
            direction = %direction,
            visits = visits,
            status = ?status
        );
    });

    Ok(status)
}

// ╭──────────────────────────────────────────────────────────╮
// │ Blanket impls: For                                       │
// ╰──────────────────────────────────────────────────────────╯

impl<C: TryNext + ?Sized> ForNext for C {
    fn for_next<E, F>(&mut self, op: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        drain(Direction::Next, |it| self.try_next(it), op).map(|_| ())
    }
}

impl<C: TryPrev + ?Sized> ForPrev for C {
    fn for_prev<E, F>(&mut self, op: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        drain(Direction::Prev, |it| self.try_prev(it), op).map(|_| ())
    }
}

impl<C: TryNextIndexed + ?Sized> ForNextIndexed for C {
    fn for_next_indexed<E, F>(&mut self, op: F) -> Result<(), E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        drain(Direction::Next, |it| self.try_next_indexed(it), op).map(|_| ())
    }
}

impl<C: TryPrevIndexed + ?Sized> ForPrevIndexed for C {
    fn for_prev_indexed<E, F>(&mut self, op: F) -> Result<(), E>
    where
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        drain(Direction::Prev, |it| self.try_prev_indexed(it), op).map(|_| ())
    }
}

// ╭──────────────────────────────────────────────────────────╮
// │ Blanket impls: While                                     │
// ╰──────────────────────────────────────────────────────────╯

impl<C: TryNext + ?Sized> WhileNext for C {
    fn while_next<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> F,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        self.try_while_next(|control| Ok(driver(control)))
    }

    fn try_while_next<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> Result<F, E>,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        drain_while(Direction::Next, |it| self.try_next(it), driver)
    }
}

impl<C: TryPrev + ?Sized> WhilePrev for C {
    fn while_prev<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> F,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        self.try_while_prev(|control| Ok(driver(control)))
    }

    fn try_while_prev<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> Result<F, E>,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        drain_while(Direction::Prev, |it| self.try_prev(it), driver)
    }
}

impl<C: TryNextIndexed + ?Sized> WhileNextIndexed for C {
    fn while_next_indexed<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> F,
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        self.try_while_next_indexed(|control| Ok(driver(control)))
    }

    fn try_while_next_indexed<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> Result<F, E>,
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        drain_while(Direction::Next, |it| self.try_next_indexed(it), driver)
    }
}

impl<C: TryPrevIndexed + ?Sized> WhilePrevIndexed for C {
    fn while_prev_indexed<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> F,
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        self.try_while_prev_indexed(|control| Ok(driver(control)))
    }

    fn try_while_prev_indexed<E, D, F>(&mut self, driver: D) -> Result<CursorStatus, E>
    where
        D: FnOnce(Control) -> Result<F, E>,
        F: FnMut(Ix, Self::Item) -> Result<(), E>,
    {
        drain_while(Direction::Prev, |it| self.try_prev_indexed(it), driver)
    }
}

// ╭──────────────────────────────────────────────────────────╮
// │ Blanket impls: bundles                                   │
// ╰──────────────────────────────────────────────────────────╯

impl<C: TryNext + ?Sized> Simplex for C {}

impl<C: TryNextIndexed + ?Sized> SimplexIndexed for C {}

impl<C: TryPrev + ?Sized> Duplex for C {}

impl<C: TryNextIndexed + TryPrevIndexed + ?Sized> DuplexIndexed for C {}
