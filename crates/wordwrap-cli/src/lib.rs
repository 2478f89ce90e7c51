#![forbid(unsafe_code)]

//! Command-line front end for [`wordwrap`].
//!
//! The binary reads text from files or standard input, wraps it with the
//! library's greedy algorithm and streams the result to standard output.

pub mod app;
pub mod cli;
pub mod logging;
