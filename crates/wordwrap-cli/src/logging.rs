#![forbid(unsafe_code)]

//! Diagnostic logging to standard error.
//!
//! Filter directives come from `WORDWRAP_LOG` (default `warn`), the output
//! format from `WORDWRAP_LOG_FORMAT`. Standard output carries only the
//! wrapped text.

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "WORDWRAP_LOG";
const LOG_FORMAT_ENV: &str = "WORDWRAP_LOG_FORMAT";
const DEFAULT_DIRECTIVES: &str = "warn";

/// How log events are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Install the global subscriber from the process environment.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    init_with(|key| env::var(key).ok());
}

fn init_with<F>(get_env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let filter = build_filter(get_env(LOG_ENV).as_deref());
    let format = get_env(LOG_FORMAT_ENV)
        .map(|value| LogFormat::from_env_value(&value))
        .unwrap_or_default();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}

/// Parse filter directives, falling back to the default on bad input.
fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
