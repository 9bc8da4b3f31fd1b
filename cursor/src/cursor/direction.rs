// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The direction of a traversal. Used to label log events.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Forward traversal ([`crate::TryNext`] and friends).
    Next,
    /// Reverse traversal ([`crate::TryPrev`] and friends).
    Prev,
}
