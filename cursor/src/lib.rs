// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Internal iteration with cursors
//!
//! Who controls the iteration, the iterator or the client that uses it? With an
//! "external" iterator ([`Iterator`]) the client advances the traversal and pulls each
//! value out. With an "internal" iterator, the client hands the traversal an operation
//! (a closure), and the traversal applies it to every value of the underlying data
//! source. This crate is an engine for the latter.
//!
//! A data source only has to supply one primitive: "advance by one element and invoke
//! the operation on it" ([`TryNext::try_next`], and optionally [`TryPrev::try_prev`] and
//! the indexed variants). Everything else is derived once, generically:
//!
//! | mode                     | forward                      | reverse                      |
//! | ------------------------ | ---------------------------- | ---------------------------- |
//! | single-step              | [`TryNext`]                  | [`TryPrev`]                  |
//! | unconditional bulk       | [`ForNext`]                  | [`ForPrev`]                  |
//! | cancellable bulk         | [`WhileNext`]                | [`WhilePrev`]                |
//! | single-step, indexed     | [`TryNextIndexed`]           | [`TryPrevIndexed`]           |
//! | unconditional, indexed   | [`ForNextIndexed`]           | [`ForPrevIndexed`]           |
//! | cancellable, indexed     | [`WhileNextIndexed`]         | [`WhilePrevIndexed`]         |
//!
//! [`Simplex`] bundles the forward contracts, [`Duplex`] adds the reverse ones.
//!
//! # Cancellation
//!
//! The cancellable bulk forms take a *driver*: a closure that receives a [`Control`] and
//! returns the operation to run. The operation calls [`Control::exit`] to stop the
//! traversal after the current element. The returned [`CursorStatus`] tells you whether
//! the traversal was [exited](CursorStatus::EXITED) or
//! [completed](CursorStatus::COMPLETED).
//!
//! ```
//! use r3bl_cursor::{SliceTraverser, WhileNext, exited};
//!
//! let data = ['a', 'b', 'c', 'd'];
//! let mut visited = vec![];
//! let mut cursor = SliceTraverser::new(&data);
//!
//! let sink = &mut visited;
//! let status = cursor
//!     .while_next(|control| {
//!         move |it: &char| {
//!             sink.push(*it);
//!             if *it == 'b' {
//!                 control.exit();
//!             }
//!             Ok::<_, std::convert::Infallible>(())
//!         }
//!     })
//!     .unwrap();
//!
//! assert!(exited(status));
//! assert_eq!(visited, vec!['a', 'b']);
//! ```
//!
//! # Errors
//!
//! Operations return `Result<(), E>` for any `E` you choose. The first `Err` stops the
//! traversal and is handed back to you as-is: the engine never wraps, logs, or swallows
//! it. The only errors the engine raises itself are argument validation failures when
//! building a traverser ([`CursorError`]).

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod cursor;
pub mod index;
pub mod log;
pub mod test_fixtures;
pub mod traversal;

// Re-export.
pub use cursor::*;
pub use index::*;
pub use log::*;
pub use test_fixtures::*;
pub use traversal::*;
