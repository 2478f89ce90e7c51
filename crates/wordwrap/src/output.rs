#![forbid(unsafe_code)]

//! Collecting wrapped lines into strings, vectors and byte sinks.

use std::fmt;
use std::io::{self, Write};

use crate::options::WrapOptions;
use crate::wrap::{estimate_line_count, wrapped_lines};

const EOL: &[u8] = b"\n";

/// Wrap `text` into a single string, every line terminated by `'\n'`.
///
/// Any pre-existing line breaks are preserved. With
/// [`WrapOptions::break_words`] set, every line fits into `width`. A width of
/// `0` or [`WrapOptions::no_wrap`] adds no new line breaks.
///
/// # Example
/// ```
/// use wordwrap::{WrapOptions, wrap_to_string};
///
/// let wrapped = wrap_to_string("abc def ghi", 4, &WrapOptions::default());
/// assert_eq!(wrapped, "abc\ndef\nghi\n");
/// ```
#[must_use]
pub fn wrap_to_string(text: &str, width: usize, options: &WrapOptions) -> String {
    let mut out = String::with_capacity(text.len() + estimate_line_count(text, width));
    for line in wrapped_lines(text, width, options) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Wrap `text` into a vector of lines without terminators.
///
/// # Example
/// ```
/// use wordwrap::{WrapOptions, wrap_to_lines};
///
/// let options = WrapOptions::new().break_words(true).break_marker("-");
/// assert_eq!(wrap_to_lines("abcdefg", 6, &options), vec!["abcde-", "fg"]);
/// ```
#[must_use]
pub fn wrap_to_lines(text: &str, width: usize, options: &WrapOptions) -> Vec<String> {
    let mut lines = Vec::with_capacity(estimate_line_count(text, width));
    lines.extend(wrapped_lines(text, width, options).map(|line| line.into_owned()));
    lines
}

/// Wrap `text` and write every line followed by `'\n'` into `sink`.
///
/// Returns the number of bytes written. The first failed write stops the
/// output; the error reports how many bytes went out before it. Bytes already
/// written are not rolled back.
pub fn write_wrapped<W>(
    sink: &mut W,
    text: &str,
    width: usize,
    options: &WrapOptions,
) -> Result<usize, WriteError>
where
    W: Write + ?Sized,
{
    let mut written = 0;
    for line in wrapped_lines(text, width, options) {
        for chunk in [line.as_bytes(), EOL] {
            if let Err(source) = write_counted(sink, chunk, &mut written) {
                tracing::debug!(written, error = %source, "wrapped output write failed");
                return Err(WriteError { written, source });
            }
        }
    }
    Ok(written)
}

/// `write_all` that keeps track of partial progress.
fn write_counted<W>(sink: &mut W, mut buf: &[u8], written: &mut usize) -> io::Result<()>
where
    W: Write + ?Sized,
{
    while !buf.is_empty() {
        match sink.write(buf) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "failed to write whole line",
                ));
            }
            Ok(n) => {
                *written += n;
                buf = &buf[n..];
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// A write failure from [`write_wrapped`].
#[derive(Debug)]
pub struct WriteError {
    written: usize,
    source: io::Error,
}

impl WriteError {
    /// Bytes successfully written before the failure.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// The underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }

    /// Consume the error, returning the underlying I/O error.
    #[must_use]
    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "write failed after {} bytes: {}",
            self.written, self.source
        )
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<WriteError> for io::Error {
    fn from(err: WriteError) -> Self {
        err.source
    }
}
