//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use common::LogFormat;

/// Where log lines end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Inside the Lambda runtime; the platform stamps each line itself
    Lambda,
    /// Local terminal
    Terminal,
}

/// Initialize tracing subscriber (verbose mode sets debug level)
pub fn init_tracing(format: LogFormat, target: LogTarget, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let in_lambda = target == LogTarget::Lambda;
    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .boxed(),
        LogFormat::Text if in_lambda => tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}
