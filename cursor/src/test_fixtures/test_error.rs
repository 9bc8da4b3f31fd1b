// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Failure raised by test operations. The `id` makes it possible to check that the
/// exact value an operation returned is the one that comes back out of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Test failure #{id}")]
pub struct TestError {
    pub id: usize,
}

impl TestError {
    #[must_use]
    pub fn new(id: usize) -> Self { Self { id } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(TestError::new(3).to_string(), "Test failure #3");
    }
}
