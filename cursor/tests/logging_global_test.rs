// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The global subscriber can only be installed once per process, so this lives in its
//! own test binary.

use r3bl_cursor::{CaptureBuffer, ForNext, SliceTraverser, TracingConfig,
                  try_initialize_logging_global};
use serial_test::serial;
use std::convert::Infallible;

#[test]
#[serial]
fn test_global_init_once_then_error() {
    let buffer = CaptureBuffer::new();
    try_initialize_logging_global(TracingConfig::new_capture(buffer.clone())).unwrap();

    let data = [1, 2, 3];
    SliceTraverser::new(&data)
        .for_next(|_| Ok::<_, Infallible>(()))
        .unwrap();
    let output = buffer.contents();
    assert!(output.contains("cursor drained"), "{output}");
    assert!(output.contains("visits=3"), "{output}");

    let second = try_initialize_logging_global(TracingConfig::new_test_writer());
    assert!(second.is_err());
}
