#![forbid(unsafe_code)]

//! Command-line argument parsing for the `wordwrap-cli` binary.
//!
//! Parses args by hand and supports environment variable overrides via the
//! `WORDWRAP_*` prefix. Explicit flags win over the environment.

use std::env;
use std::process;

use wordwrap::WrapOptions;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width used when neither `--width` nor `WORDWRAP_WIDTH` is given.
pub const DEFAULT_WIDTH: usize = 80;

const HELP_TEXT: &str = "\
wordwrap - reflow plain text into fixed-width lines

USAGE:
    wordwrap-cli [OPTIONS] [FILE...]

Reads every FILE in order (or standard input when no FILE is given or FILE
is '-') and writes the wrapped text to standard output. Existing line breaks
are always kept.

OPTIONS:
    --width=N, -w N      Maximum line width in columns; 0 disables wrapping (default: 80)
    --no-wrap            Keep only the existing line breaks
    --break-words        Break words longer than the width
    --break-marker=S     Append S to lines broken mid-word (implies --break-words)
    --estimate           Print the estimated line count instead of the text
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    WORDWRAP_WIDTH         Override the default width
    WORDWRAP_NO_WRAP       Disable wrapping (1/true)
    WORDWRAP_BREAK_WORDS   Break long words (1/true)
    WORDWRAP_BREAK_MARKER  Marker for lines broken mid-word
    WORDWRAP_LOG           Log filter directives, e.g. 'debug' (default: warn)
    WORDWRAP_LOG_FORMAT    Log output format: 'text' or 'json' (default: text)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Maximum line width; 0 disables wrapping.
    pub width: usize,
    /// Wrapping behavior passed through to the library.
    pub wrap: WrapOptions,
    /// Print the line-count estimate instead of wrapping.
    pub estimate: bool,
    /// Input paths; empty means standard input.
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    MissingValue(&'static str),
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            wrap: WrapOptions::default(),
            estimate: false,
            files: Vec::new(),
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("wordwrap-cli {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(2);
            }
            Err(ParseError::MissingValue(flag)) => {
                eprintln!("Missing value for {flag}");
                process::exit(2);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(2);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = get_env("WORDWRAP_WIDTH")
            && let Ok(n) = val.trim().parse()
        {
            opts.width = n;
        }
        if let Some(val) = get_env("WORDWRAP_NO_WRAP") {
            opts.wrap.no_wrap = env_flag(&val);
        }
        if let Some(val) = get_env("WORDWRAP_BREAK_WORDS") {
            opts.wrap.break_words = env_flag(&val);
        }
        if let Some(val) = get_env("WORDWRAP_BREAK_MARKER")
            && !val.is_empty()
        {
            opts.wrap.break_marker = val;
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect();
        let mut only_files = false;
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            if only_files {
                opts.files.push(arg.clone());
                i += 1;
                continue;
            }
            match arg.as_str() {
                "--help" | "-h" => {
                    return Err(ParseError::Help);
                }
                "--version" | "-V" => {
                    return Err(ParseError::Version);
                }
                "--no-wrap" => {
                    opts.wrap.no_wrap = true;
                }
                "--break-words" => {
                    opts.wrap.break_words = true;
                }
                "--estimate" => {
                    opts.estimate = true;
                }
                "--" => {
                    only_files = true;
                }
                "-" => {
                    opts.files.push(arg.clone());
                }
                "-w" | "--width" => {
                    i += 1;
                    let Some(val) = args.get(i) else {
                        return Err(ParseError::MissingValue("--width"));
                    };
                    opts.width = parse_width(val)?;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = parse_width(val)?;
                    } else if let Some(val) = other.strip_prefix("--break-marker=") {
                        opts.wrap.break_marker = val.to_string();
                        opts.wrap.break_words = true;
                    } else if other.starts_with('-') {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    } else {
                        opts.files.push(other.to_string());
                    }
                }
            }
            i += 1;
        }

        Ok(opts)
    }
}

fn parse_width(val: &str) -> Result<usize, ParseError> {
    val.parse().map_err(|_| ParseError::InvalidValue {
        flag: "--width",
        value: val.to_string(),
    })
}

#[inline]
fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with_env<I, S>(
        args: I,
        env_pairs: &[(&'static str, &'static str)],
    ) -> Result<Opts, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = std::collections::HashMap::new();
        for (key, value) in env_pairs {
            map.insert(*key, *value);
        }
        Opts::parse_from_env_and_args(args, |key| map.get(key).map(|value| (*value).to_string()))
    }

    #[test]
    fn defaults_without_args() {
        let opts = parse_with_env(Vec::<String>::new(), &[]).expect("parse");
        assert_eq!(opts, Opts::default());
        assert_eq!(opts.width, DEFAULT_WIDTH);
        assert!(opts.files.is_empty());
    }

    #[test]
    fn help_text_lists_every_env_var() {
        for key in [
            "WORDWRAP_WIDTH",
            "WORDWRAP_NO_WRAP",
            "WORDWRAP_BREAK_WORDS",
            "WORDWRAP_BREAK_MARKER",
            "WORDWRAP_LOG",
            "WORDWRAP_LOG_FORMAT",
        ] {
            assert!(HELP_TEXT.contains(key), "HELP_TEXT missing {key}");
        }
    }

    #[test]
    fn env_overrides_apply() {
        let env = [
            ("WORDWRAP_WIDTH", "40"),
            ("WORDWRAP_NO_WRAP", "yes"),
            ("WORDWRAP_BREAK_WORDS", "1"),
            ("WORDWRAP_BREAK_MARKER", "~"),
        ];
        let opts = parse_with_env(Vec::<String>::new(), &env).expect("parse");
        assert_eq!(opts.width, 40, "env={env:?} expected width=40");
        assert!(opts.wrap.no_wrap, "env={env:?} expected no_wrap");
        assert!(opts.wrap.break_words, "env={env:?} expected break_words");
        assert_eq!(opts.wrap.break_marker, "~");
    }

    #[test]
    fn bad_env_width_is_ignored() {
        let opts = parse_with_env(Vec::<String>::new(), &[("WORDWRAP_WIDTH", "-5")])
            .expect("env values never fail parsing");
        assert_eq!(opts.width, DEFAULT_WIDTH);
    }

    #[test]
    fn falsy_env_flag_disables() {
        let opts = parse_with_env(Vec::<String>::new(), &[("WORDWRAP_BREAK_WORDS", "off")])
            .expect("parse");
        assert!(!opts.wrap.break_words);
    }

    #[test]
    fn args_override_env() {
        let args = ["--width=12"];
        let env = [("WORDWRAP_WIDTH", "40")];
        let opts = parse_with_env(args, &env).expect("parse args");
        assert_eq!(
            opts.width, 12,
            "args={args:?} env={env:?} expected width=12, got {}",
            opts.width
        );
    }

    #[test]
    fn short_width_takes_next_arg() {
        let opts = parse_with_env(["-w", "7", "notes.txt"], &[]).expect("parse args");
        assert_eq!(opts.width, 7);
        assert_eq!(opts.files, vec!["notes.txt"]);
    }

    #[test]
    fn width_flag_without_value() {
        let err = parse_with_env(["-w"], &[]);
        assert_eq!(err, Err(ParseError::MissingValue("--width")));
    }

    #[test]
    fn negative_width_is_rejected() {
        let err = parse_with_env(["--width=-3"], &[]);
        assert!(
            matches!(
                err,
                Err(ParseError::InvalidValue { flag: "--width", ref value }) if value == "-3"
            ),
            "expected InvalidValue for --width, got {err:?}"
        );
    }

    #[test]
    fn break_marker_implies_break_words() {
        let opts = parse_with_env(["--break-marker=-"], &[]).expect("parse args");
        assert!(opts.wrap.break_words);
        assert_eq!(opts.wrap.break_marker, "-");
    }

    #[test]
    fn switches_set_options() {
        let opts =
            parse_with_env(["--no-wrap", "--break-words", "--estimate"], &[]).expect("parse");
        assert!(opts.wrap.no_wrap);
        assert!(opts.wrap.break_words);
        assert!(opts.estimate);
    }

    #[test]
    fn files_keep_their_order() {
        let opts = parse_with_env(["a.txt", "-", "b.txt"], &[]).expect("parse");
        assert_eq!(opts.files, vec!["a.txt", "-", "b.txt"]);
    }

    #[test]
    fn double_dash_ends_flags() {
        let opts = parse_with_env(["--", "--width=3", "-h"], &[]).expect("parse");
        assert_eq!(opts.width, DEFAULT_WIDTH);
        assert_eq!(opts.files, vec!["--width=3", "-h"]);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse_with_env(["-h"], &[]), Err(ParseError::Help));
        assert_eq!(
            parse_with_env(["--width=5", "--version"], &[]),
            Err(ParseError::Version)
        );
    }

    #[test]
    fn unknown_arg_reports_error() {
        let err = parse_with_env(["--mystery-flag"], &[]);
        assert!(
            matches!(err, Err(ParseError::UnknownArg(ref arg)) if arg == "--mystery-flag"),
            "expected UnknownArg(--mystery-flag), got {err:?}"
        );
    }
}
