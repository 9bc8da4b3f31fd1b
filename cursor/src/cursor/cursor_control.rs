// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Control`] lets an in-flight operation request early termination of the
//! cancellable bulk traversal that is running it.

use super::CursorStatus;
use std::{cell::Cell, fmt::Debug, rc::Rc};

/// A one-shot capability bound to exactly one status register.
///
/// A fresh [`Control`] is created for every call to a cancellable bulk form (eg:
/// [`crate::WhileNext::while_next`]) and handed to the driver, which returns the
/// operation to run. The operation captures the control and calls [`Control::exit`] when
/// it wants the traversal to stop.
///
/// - Exit is non-preemptive: the invocation that calls [`Control::exit`] runs to the end,
///   and it is the last one. The loop observes the flag at its next guard check.
/// - The register is shared between the traversal loop and the control through an
///   [`Rc`] + [`Cell`], so the control is neither [`Send`] nor [`Sync`].
/// - Once the call that created it returns, the status has already been copied out.
///   Calling [`Control::exit`] on a retained clone changes nothing that anybody can
///   observe.
#[derive(Clone)]
pub struct Control {
    status: Rc<Cell<CursorStatus>>,
}

impl Control {
    /// Binds a new control to a new register holding [`CursorStatus::INIT`].
    pub(crate) fn new() -> Self {
        Self {
            status: Rc::new(Cell::new(CursorStatus::INIT)),
        }
    }

    /// Sets [`CursorStatus::EXITED`] on the bound register. Idempotent. Has no effect if
    /// the traversal has already [completed](CursorStatus::COMPLETED).
    pub fn exit(&self) {
        let current = self.status.get();
        if current.is_completed() {
            return;
        }
        self.status.set(current | CursorStatus::EXITED);
    }

    /// Returns `true` once [`Self::exit`] has been called.
    #[must_use]
    pub fn is_exit_requested(&self) -> bool { self.status.get().is_exited() }

    pub(crate) fn status(&self) -> CursorStatus { self.status.get() }

    pub(crate) fn mark_completed(&self) {
        self.status.set(self.status.get() | CursorStatus::COMPLETED);
    }
}

impl Debug for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Control")
            .field("status", &self.status.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_control_is_init() {
        let control = Control::new();
        assert_eq!(control.status(), CursorStatus::INIT);
        assert!(!control.is_exit_requested());
    }

    #[test]
    fn test_exit_is_idempotent() {
        let control = Control::new();
        control.exit();
        control.exit();
        assert_eq!(control.status(), CursorStatus::EXITED);
        assert!(control.is_exit_requested());
    }

    #[test]
    fn test_exit_shared_between_clones() {
        let control = Control::new();
        let captured = control.clone();
        captured.exit();
        assert_eq!(control.status(), CursorStatus::EXITED);
    }

    #[test]
    fn test_exit_after_completion_has_no_effect() {
        let control = Control::new();
        control.mark_completed();
        control.exit();
        assert_eq!(control.status(), CursorStatus::COMPLETED);
    }
}
