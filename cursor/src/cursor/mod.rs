// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The cursor capability matrix, and the status and control primitives that the
//! cancellable bulk traversal is built on.

/// Enable or disable trace logging for the bulk traversal forms and the reference
/// traversers. Events are only emitted at the end of a bulk call (never per element),
/// and never on the failure path.
pub const DEBUG_CURSOR: bool = true;

// Attach sources.
pub mod cursor_capability;
pub mod cursor_control;
pub mod cursor_derive;
pub mod cursor_error;
pub mod cursor_status;
pub mod direction;

// Re-export.
pub use cursor_capability::*;
pub use cursor_control::*;
pub use cursor_derive::*;
pub use cursor_error::*;
pub use cursor_status::*;
pub use direction::*;
