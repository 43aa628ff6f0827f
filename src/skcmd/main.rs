//! # skcmd binary
//!
//! The binary only calls [`cli::run`] and turns an error into a message on
//! stderr plus exit code 1. Parsing, dispatch and rendering live in `cli/`;
//! the behaviour itself lives in the `skcmd` library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
