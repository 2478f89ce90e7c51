#![forbid(unsafe_code)]

//! Reading the inputs and streaming the wrapped result.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Read, Write};

use wordwrap::{WriteError, estimate_line_count, write_wrapped};

use crate::cli::Opts;

const STDIN_PATH: &str = "-";

/// Failure while running the binary.
#[derive(Debug)]
pub enum RunError {
    /// An input could not be read.
    Read { path: String, source: io::Error },
    /// Writing the wrapped text failed.
    Write(WriteError),
    /// Flushing or printing to the output failed.
    Output(io::Error),
}

impl RunError {
    /// The reader of our output went away; not worth reporting.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Read { .. } => false,
            Self::Write(err) => err.io_error().kind() == io::ErrorKind::BrokenPipe,
            Self::Output(err) => err.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "cannot read {path}: {source}"),
            Self::Write(err) => write!(f, "cannot write output: {err}"),
            Self::Output(err) => write!(f, "cannot write output: {err}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<WriteError> for RunError {
    fn from(err: WriteError) -> Self {
        Self::Write(err)
    }
}

/// Read every input named in `opts`, wrap the text and write it to `out`.
///
/// `stdin` is read at most once, the first time `-` (or no file at all) is
/// requested.
pub fn run<R, W>(opts: &Opts, stdin: R, out: W) -> Result<(), RunError>
where
    R: Read,
    W: Write,
{
    let text = read_inputs(&opts.files, stdin)?;
    tracing::debug!(
        inputs = opts.files.len().max(1),
        bytes = text.len(),
        width = opts.width,
        "wrapping input"
    );

    let mut out = BufWriter::new(out);
    if opts.estimate {
        writeln!(out, "{}", estimate_line_count(&text, opts.width)).map_err(RunError::Output)?;
    } else {
        let written = write_wrapped(&mut out, &text, opts.width, &opts.wrap)?;
        tracing::debug!(written, "wrapped output written");
    }
    out.flush().map_err(RunError::Output)
}

fn read_inputs<R: Read>(files: &[String], mut stdin: R) -> Result<String, RunError> {
    let mut text = String::new();
    let mut stdin_used = false;
    let stdin_only = [STDIN_PATH.to_string()];
    let paths = if files.is_empty() { &stdin_only[..] } else { files };

    for path in paths {
        if path == STDIN_PATH {
            if stdin_used {
                continue;
            }
            stdin_used = true;
            stdin
                .read_to_string(&mut text)
                .map_err(|source| RunError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
        } else {
            let contents = fs::read_to_string(path).map_err(|source| RunError::Read {
                path: path.clone(),
                source,
            })?;
            text.push_str(&contents);
        }
    }

    Ok(text)
}
