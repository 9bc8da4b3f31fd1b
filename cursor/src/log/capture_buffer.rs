// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Write,
          sync::{Arc, Mutex}};

/// In-memory sink for formatted log output. Clones share the same buffer, so one clone
/// can be handed to the subscriber and another kept to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Copy of everything written so far, lossily decoded as UTF-8. Returns an empty
    /// string if a writer panicked while holding the lock.
    #[must_use]
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .map(|it| String::from_utf8_lossy(&it).into_owned())
            .unwrap_or_default()
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut it = self
            .inner
            .lock()
            .map_err(|_| std::io::Error::other("capture buffer lock is poisoned"))?;
        it.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clones_share_the_buffer() {
        let buffer = CaptureBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"hello ").unwrap();
        writer.write_all(b"world").unwrap();
        assert_eq!(buffer.contents(), "hello world");
    }
}
