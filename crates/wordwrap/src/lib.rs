#![forbid(unsafe_code)]

//! Fixed-width word wrapping for terminal and fixed-font output.
//!
//! # Role
//! `wordwrap` reflows plain text into lines no wider than a given number of
//! columns. Existing line breaks are always kept; words are packed greedily
//! and broken at spaces. A word longer than the width either overflows its
//! line or, with [`WrapOptions::break_words`], is split mid-word with an
//! optional marker.
//!
//! # Primary entry points
//! - [`wrapped_lines`]: lazy iterator over the wrapped lines.
//! - [`for_each_line`]: push each line into a callback.
//! - [`wrap_to_string`] / [`wrap_to_lines`]: collect the lines.
//! - [`write_wrapped`]: stream the lines into an [`std::io::Write`] sink.
//! - [`estimate_line_count`]: capacity hint for the collectors.
//!
//! Every `char` is one column wide; only the ASCII space is a break
//! opportunity.
//!
//! # Example
//! ```
//! use wordwrap::{WrapOptions, wrap_to_lines};
//!
//! let lines = wrap_to_lines(" abc defg hij", 4, &WrapOptions::default());
//! assert_eq!(lines, vec![" abc", "defg", "hij"]);
//! ```

pub mod options;
pub mod output;
pub mod wrap;

pub use options::WrapOptions;
pub use output::{WriteError, wrap_to_lines, wrap_to_string, write_wrapped};
pub use wrap::{WrappedLines, estimate_line_count, for_each_line, wrapped_lines};
