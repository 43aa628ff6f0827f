//! # CLI Behavior
//!
//! One client of the skcmd library. This is the only code that reads stdin,
//! writes to the terminal, or decides exit codes.
//!
//! ## Building the command
//!
//! Each of `render`, `copy` and `download` takes the same field flags. The
//! command is assembled in this order:
//!
//! 1. `--spec FILE` (or `--spec -` for stdin), a JSON `CommandSpec`
//! 2. the positional NAME and field flags, each overriding the file
//! 3. `--arg` values, which replace the file's arguments when present
//!
//! ## Output
//!
//! `render` prints the block through the preview template. Styling is
//! applied only when stdout supports colors and `--plain` is not set, so
//! piping `skcmd render` into a file yields the raw block.
//!
//! `copy` and `download` refuse to export a block without a command name:
//! they print a warning and exit non-zero.
//!
//! ## Module Structure
//!
//! - `commands`: context setup, dispatch and per-command handlers
//! - `render`: preview/config/type rendering and message printing
//! - `setup`: clap definitions
//! - `styles`: named terminal styles
//! - `templates`: minijinja templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
