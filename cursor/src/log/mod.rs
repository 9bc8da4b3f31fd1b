// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in [`tracing`] setup for the trace events the traversals emit (see
//! [`crate::DEBUG_CURSOR`]). The library itself never installs a subscriber.

// Attach sources.
pub mod capture_buffer;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use capture_buffer::*;
pub use tracing_config::*;
pub use tracing_init::*;
