//! Diagnostic tracing for the CLI.
//!
//! Goes to stderr so stdout carries only the transcript. `RUST_LOG` wins when
//! set; otherwise the default is `warn`, or `info` for goalcraft crates with
//! `--verbose`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "warn,goalcraft=info,goalcraft_agent=info,goalcraft_llm=info";

pub fn init(verbose: bool) {
    let default = if verbose { VERBOSE_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
