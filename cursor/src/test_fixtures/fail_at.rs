// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Ix, TestError};

/// Operation state that fails on the `fail_at`-th invocation (1 based) with
/// [`TestError`] carrying `error_id`. Every invocation is recorded, including the failing
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailAt<T> {
    fail_at: usize,
    error_id: usize,
    visited: Vec<T>,
}

impl<T> FailAt<T> {
    #[must_use]
    pub fn new(fail_at: usize, error_id: usize) -> Self {
        Self {
            fail_at,
            error_id,
            visited: vec![],
        }
    }

    /// # Errors
    ///
    /// Returns [`TestError`] on the configured invocation.
    pub fn call(&mut self, it: T) -> Result<(), TestError> {
        self.visited.push(it);
        if self.visited.len() == self.fail_at {
            return Err(TestError::new(self.error_id));
        }
        Ok(())
    }

    /// Indexed form of [`Self::call`]. The coordinate is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TestError`] on the configured invocation.
    pub fn call_indexed(&mut self, _ix: Ix, it: T) -> Result<(), TestError> {
        self.call(it)
    }

    #[must_use]
    pub fn visited(&self) -> &[T] { &self.visited }

    #[must_use]
    pub fn invocations(&self) -> usize { self.visited.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fails_on_configured_invocation_only() {
        let mut fail_at = FailAt::new(2, 5);
        assert_eq!(fail_at.call('a'), Ok(()));
        assert_eq!(fail_at.call('b'), Err(TestError::new(5)));
        assert_eq!(fail_at.call('c'), Ok(()));
        assert_eq!(fail_at.invocations(), 3);
    }
}
