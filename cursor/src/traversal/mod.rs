// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reference data sources. Each one supplies only the single-step primitives, and gets
//! every bulk and cancellable bulk form from the generic derivation.

// Attach sources.
pub mod cursor_iter;
pub mod empty_traverser;
pub mod enumerated;
pub mod iter_traverser;
pub mod slice_traverser;

// Re-export.
pub use cursor_iter::*;
pub use empty_traverser::*;
pub use enumerated::*;
pub use iter_traverser::*;
pub use slice_traverser::*;
