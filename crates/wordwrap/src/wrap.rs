#![forbid(unsafe_code)]

//! Greedy fixed-width line filling.
//!
//! Text is first split on every `'\n'` into segments. Each segment is then
//! filled independently: as many whole words as fit go onto a line, and the
//! line is broken at the last space that still fits. Every `char` counts as
//! one column and only the ASCII space is a break opportunity.
//!
//! Spaces around a break are never visible: trailing spaces before the break
//! are dropped from the emitted line and leading spaces after it are skipped.
//! Leading spaces at the very start of a segment are kept when they fit on
//! the first line.
//!
//! # Example
//! ```
//! use wordwrap::{WrapOptions, wrapped_lines};
//!
//! let options = WrapOptions::default();
//! let lines: Vec<_> = wrapped_lines("abc def\n\nghi", 4, &options).collect();
//! assert_eq!(lines, vec!["abc", "def", "", "ghi"]);
//! ```

use std::borrow::Cow;
use std::iter::FusedIterator;
use std::str::Split;

use crate::options::WrapOptions;

const HARD_BREAK: char = '\n';
const SPACE: char = ' ';

/// Inputs at least this many bytes long are reported at trace level.
const LARGE_INPUT_BYTES: usize = 64 * 1024;

/// Lazily wrap `text` to `width` columns.
///
/// A width of `0` disables wrapping, as does [`WrapOptions::no_wrap`]; in
/// both cases only the existing line breaks split the text. Lines that carry
/// no break marker are borrowed from `text`.
pub fn wrapped_lines<'a>(
    text: &'a str,
    width: usize,
    options: &'a WrapOptions,
) -> WrappedLines<'a> {
    if text.len() >= LARGE_INPUT_BYTES {
        tracing::trace!(len = text.len(), width, "wrapping large text");
    }
    WrappedLines {
        segments: text.split(HARD_BREAK),
        rest: None,
        emitted: false,
        width,
        options,
    }
}

/// Wrap `text` and call `line_fn` for every resulting line, in order.
///
/// Lines are passed without a trailing `'\n'`.
pub fn for_each_line<F>(text: &str, width: usize, options: &WrapOptions, mut line_fn: F)
where
    F: FnMut(&str),
{
    for line in wrapped_lines(text, width, options) {
        line_fn(&line);
    }
}

/// Predict the number of wrapped lines, for preallocation.
///
/// This is a sizing hint: it counts the hard breaks plus the number of
/// `width`-sized chunks in the whole text, and may be above or below the
/// real line count.
#[must_use]
pub fn estimate_line_count(text: &str, width: usize) -> usize {
    let explicit = text.matches(HARD_BREAK).count() + 1;
    if width == 0 {
        explicit
    } else {
        explicit + text.chars().count().div_ceil(width)
    }
}

/// Iterator over wrapped lines, created by [`wrapped_lines`].
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    segments: Split<'a, char>,
    /// Unconsumed part of the segment being filled.
    rest: Option<&'a str>,
    /// Whether the current segment has produced a line yet.
    emitted: bool,
    width: usize,
    options: &'a WrapOptions,
}

impl<'a> WrappedLines<'a> {
    fn passes_through(&self, segment: &str) -> bool {
        segment.is_empty() || self.width == 0 || self.options.no_wrap
    }

    fn finish_line(&self, line: &'a str, word_broken: bool) -> Cow<'a, str> {
        if word_broken && self.options.has_marker() {
            let mut owned = String::with_capacity(line.len() + self.options.break_marker.len());
            owned.push_str(line);
            owned.push_str(&self.options.break_marker);
            Cow::Owned(owned)
        } else {
            Cow::Borrowed(line)
        }
    }
}

impl<'a> Iterator for WrappedLines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(rest) = self.rest else {
                let segment = self.segments.next()?;
                if self.passes_through(segment) {
                    return Some(Cow::Borrowed(segment));
                }
                self.rest = Some(segment);
                self.emitted = false;
                continue;
            };

            if rest.is_empty() {
                self.rest = None;
                // A segment made only of spaces still owns its line.
                if !self.emitted {
                    return Some(Cow::Borrowed(""));
                }
                continue;
            }

            let brk = find_break(rest, self.width, self.options);
            let line = &rest[..brk.line_end];
            self.rest = Some(&rest[brk.resume..]);
            if line.is_empty() {
                continue;
            }
            self.emitted = true;
            return Some(self.finish_line(line, brk.word_broken));
        }
    }
}

impl FusedIterator for WrappedLines<'_> {}

/// One break decision, as byte offsets into the unconsumed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Break {
    /// End of the emitted line, trailing spaces excluded.
    line_end: usize,
    /// Start of the next line, leading spaces skipped.
    resume: usize,
    /// The break fell inside a word.
    word_broken: bool,
}

/// Decide where the next line of a non-empty `rest` ends.
///
/// `width` must be non-zero.
fn find_break(rest: &str, width: usize, options: &WrapOptions) -> Break {
    let mut word_broken = false;

    let point = match char_offset(rest, width) {
        // Everything left fits.
        None => rest.len(),
        Some(at_width) => {
            // A space sitting right after the last column is still usable.
            let window_end = char_offset(rest, width + 1).unwrap_or(rest.len());
            if let Some(space) = rest[..window_end].rfind(SPACE) {
                space
            } else if options.break_words {
                word_broken = true;
                if options.has_marker() && width > 1 {
                    char_offset(rest, width - 1).unwrap_or(at_width)
                } else {
                    at_width
                }
            } else {
                // Never drop an unbreakable word: let it overflow.
                rest[at_width..]
                    .find(SPACE)
                    .map_or(rest.len(), |offset| at_width + offset)
            }
        }
    };

    Break {
        line_end: trim_back(rest, point),
        resume: skip_forward(rest, point),
        word_broken,
    }
}

/// Byte offset of the `n`th char, or `None` when `text` has at most `n` chars.
#[inline]
fn char_offset(text: &str, n: usize) -> Option<usize> {
    text.char_indices().nth(n).map(|(idx, _)| idx)
}

/// Move `point` back over the spaces directly before it.
#[inline]
fn trim_back(text: &str, point: usize) -> usize {
    text[..point].trim_end_matches(SPACE).len()
}

/// Move `point` forward over the spaces directly after it.
#[inline]
fn skip_forward(text: &str, point: usize) -> usize {
    text.len() - text[point..].trim_start_matches(SPACE).len()
}

#[cfg(test)]
fn cols(line: &str) -> usize {
    line.chars().count()
}
