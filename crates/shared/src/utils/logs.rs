use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// request lines from the executor are debug-level and only go to the file
const FILE_FILTER: &str = "info,shared=debug,hyper=off,reqwest=off";

pub struct Logger;

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Result<Self> {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_appender = file_appender(Path::new(log_dir), component)?;
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new(FILE_FILTER));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;

        // the writer thread must outlive main
        std::mem::forget(guard);

        Ok(Self)
    }
}

fn file_appender(log_dir: &Path, component: &str) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(format!("roundup_{component}"))
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("Cannot write logs to {}", log_dir.display()))
}
