// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Build [`tracing_subscriber`] layers from a [`TracingConfig`], and install them either
//! as the global default subscriber (once per process, great for apps) or as the
//! default for the current thread only (great for tests).

use super::{TracingConfig, WriterConfig};
use miette::IntoDiagnostic;
use tracing::dispatcher::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs the global default subscriber. This can only happen once per process.
///
/// # Errors
///
/// Returns an error if a global default subscriber has already been installed (by this
/// function or anything else). Nothing is replaced in that case.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    let layers = try_create_layers(tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Installs a subscriber for the current thread only. It stays in place until the
/// returned guard is dropped, at which point the previous one is restored.
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<DefaultGuard> {
    let layers = try_create_layers(tracing_config)?;
    Ok(tracing_subscriber::registry().with(layers).set_default())
}

/// Returns the layers. This does not install anything.
///
/// # Errors
///
/// Returns an error if a layer can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter for layers that don't carry their own.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    return_it.push(try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )?);

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Reserved for writers that need setup which can fail. None of the current
/// [`WriterConfig`] variants do.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        WriterConfig::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
        WriterConfig::TestWriter => {
            Box::new(fmt_layer.with_test_writer().with_filter(level_filter))
        }
        WriterConfig::Capture(buffer) => {
            let tracing_writer =
                move || -> Box<dyn std::io::Write> { Box::new(buffer.clone()) };
            Box::new(
                fmt_layer
                    .with_writer(tracing_writer)
                    .with_ansi(false)
                    .with_filter(level_filter),
            )
        }
    })
}
