// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The status register returned by the cancellable bulk traversal forms
//! ([`crate::WhileNext`], [`crate::WhilePrev`], and their indexed counterparts).

bitflags::bitflags! {
    /// Bit-field capturing how a cancellable bulk traversal ended.
    ///
    /// | value       | bits     | meaning                                          |
    /// | ----------- | -------- | ------------------------------------------------ |
    /// | `INIT`      | `0`      | fresh register, nothing happened yet             |
    /// | `ACTIVE`    | `1 << 0` | reserved, never set by any traversal             |
    /// | `EXITED`    | `1 << 1` | an operation called [`crate::Control::exit`]     |
    /// | `COMPLETED` | `1 << 2` | the source ran out of elements                   |
    ///
    /// At most one of `EXITED` and `COMPLETED` is set in a returned status. Use
    /// [`Self::bits`] to get the plain scalar, and [`exited`] / [`completed`] to test it.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct CursorStatus: u32 {
        const ACTIVE = 1 << 0;
        const EXITED = 1 << 1;
        const COMPLETED = 1 << 2;
    }
}

impl CursorStatus {
    /// The value of a freshly created register.
    pub const INIT: Self = Self::empty();

    #[must_use]
    pub fn is_init(self) -> bool { self == Self::INIT }

    #[must_use]
    pub fn is_exited(self) -> bool { self.contains(Self::EXITED) }

    #[must_use]
    pub fn is_completed(self) -> bool { self.contains(Self::COMPLETED) }
}

impl From<u32> for CursorStatus {
    /// Unknown bits are retained, so a round trip through the scalar is lossless.
    fn from(bits: u32) -> Self { Self::from_bits_retain(bits) }
}

impl From<CursorStatus> for u32 {
    fn from(status: CursorStatus) -> Self { status.bits() }
}

/// Returns `true` if the `EXITED` bit is set. Accepts a [`CursorStatus`] or the raw
/// `u32` scalar.
pub fn exited(status: impl Into<CursorStatus>) -> bool { status.into().is_exited() }

/// Returns `true` if the `COMPLETED` bit is set. Accepts a [`CursorStatus`] or the raw
/// `u32` scalar.
pub fn completed(status: impl Into<CursorStatus>) -> bool {
    status.into().is_completed()
}
