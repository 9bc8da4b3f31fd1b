// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised by the engine itself.
//!
//! Failures raised by your operations and drivers are never converted into
//! [`CursorError`]. They are returned to you unchanged, as the same `E` value.

use miette::Diagnostic;

/// Convenience type alias for results that can only fail with a [`CursorError`].
pub type CursorResult<T> = Result<T, CursorError>;

/// Argument validation failures. These are raised eagerly, when a traverser is built,
/// before any element is visited.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum CursorError {
    #[error("Invalid range {lo}..{hi} for a source of length {len}")]
    #[diagnostic(
        code(r3bl_cursor::invalid_range),
        help("The range must satisfy `lo <= hi <= len`")
    )]
    InvalidRange { lo: usize, hi: usize, len: usize },

    #[error("Invalid start position {position}, it must be within {lo}..={hi}")]
    #[diagnostic(
        code(r3bl_cursor::invalid_position),
        help("The start position must satisfy `lo <= position <= hi`")
    )]
    InvalidPosition { position: usize, lo: usize, hi: usize },
}

impl CursorError {
    /// Checks that `lo..hi` is a valid range into a source of length `len`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidRange`] if `lo > hi` or `hi > len`.
    pub fn check_range(lo: usize, hi: usize, len: usize) -> CursorResult<()> {
        if lo > hi || hi > len {
            return Err(CursorError::InvalidRange { lo, hi, len });
        }
        Ok(())
    }

    /// Checks that `position` lies within `lo..=hi`. A position equal to `hi` is valid:
    /// it is the "past the end" position from which only reverse traversal can proceed.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidPosition`] if `position` is outside `lo..=hi`.
    pub fn check_position(position: usize, lo: usize, hi: usize) -> CursorResult<()> {
        if position < lo || position > hi {
            return Err(CursorError::InvalidPosition { position, lo, hi });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, 0, 0 ; "empty range on empty source")]
    #[test_case(0, 4, 4 ; "whole source")]
    #[test_case(1, 3, 4 ; "inner range")]
    #[test_case(4, 4, 4 ; "empty range at the end")]
    fn test_check_range_ok(lo: usize, hi: usize, len: usize) {
        assert_eq!(CursorError::check_range(lo, hi, len), Ok(()));
    }

    #[test_case(3, 2, 4 ; "lo after hi")]
    #[test_case(0, 5, 4 ; "hi past len")]
    fn test_check_range_err(lo: usize, hi: usize, len: usize) {
        assert_eq!(
            CursorError::check_range(lo, hi, len),
            Err(CursorError::InvalidRange { lo, hi, len })
        );
    }

    #[test]
    fn test_check_position() {
        assert_eq!(CursorError::check_position(2, 2, 5), Ok(()));
        assert_eq!(CursorError::check_position(5, 2, 5), Ok(()));
        assert_eq!(
            CursorError::check_position(1, 2, 5),
            Err(CursorError::InvalidPosition {
                position: 1,
                lo: 2,
                hi: 5
            })
        );
        assert_eq!(
            CursorError::check_position(6, 2, 5),
            Err(CursorError::InvalidPosition {
                position: 6,
                lo: 2,
                hi: 5
            })
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let error = CursorError::InvalidRange {
            lo: 3,
            hi: 2,
            len: 4,
        };
        let code = error.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("r3bl_cursor::invalid_range"));
        assert_eq!(
            error.to_string(),
            "Invalid range 3..2 for a source of length 4"
        );
    }
}
