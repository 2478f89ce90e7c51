#![forbid(unsafe_code)]

//! `wordwrap-cli` binary entry point.

use std::io;
use std::process;

use wordwrap_cli::{app, cli, logging};

fn main() {
    let opts = cli::Opts::parse();
    logging::init();

    if let Err(e) = app::run(&opts, io::stdin().lock(), io::stdout().lock()) {
        if e.is_broken_pipe() {
            tracing::debug!("output closed early");
            return;
        }
        eprintln!("wordwrap-cli: {e}");
        process::exit(1);
    }
}
