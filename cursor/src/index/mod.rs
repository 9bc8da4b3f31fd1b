// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Coordinates handed to indexed operations, indexed values of dimension 1 to 3, and the
//! helpers that lift plain values and operations into their indexed counterparts.

// Attach sources.
pub mod ix_dimension;
pub mod ix_lift;

// Re-export.
pub use ix_dimension::*;
pub use ix_lift::*;
