// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operations that record what they were handed, and an error type to fail them with.
//! Used by the unit tests in this crate and by the integration tests in `tests/`.

// Attach sources.
pub mod fail_at;
pub mod recorder;
pub mod test_error;

// Re-export.
pub use fail_at::*;
pub use recorder::*;
pub use test_error::*;
