//! # skcmd
//!
//! skcmd builds the header of a [Skript](https://github.com/SkriptLang/Skript)
//! command: everything above `trigger:`. It is a library first; the `skcmd`
//! binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Builds a CommandSpec from flags or a JSON file           │
//! │  - Renders previews, prints messages, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds config + clipboard, dispatches to commands         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - render, copy, download, demo, types, config              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Template Assembler (template.rs)                           │
//! │  - Pure CommandSpec -> lines                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward writes to stdout/stderr or exits the
//! process. The only side effects are the config file, the downloaded file
//! and the [`clipboard::Clipboard`] passed in by the caller.
//!
//! ## Example
//!
//! ```rust
//! use skcmd::model::{ArgType, ArgumentSpec, CommandSpec};
//! use skcmd::template::{assemble, TemplateOptions};
//!
//! let mut spec = CommandSpec::new("heal");
//! spec.aliases = "h, restore".into();
//! spec.arguments.push(ArgumentSpec::new("target", ArgType::Player).optional());
//!
//! let lines = assemble(&spec, &TemplateOptions::default());
//! assert_eq!(lines[0], "command /heal [<target>]:");
//! assert_eq!(lines[1], "    aliases: /h, /restore");
//! ```
//!
//! Front ends that edit a command interactively (a form, a TUI) work on the
//! argument list by position:
//!
//! ```rust
//! use skcmd::model::{ArgType, ArgumentPatch, CommandSpec};
//!
//! let mut spec = CommandSpec::new("heal");
//! let index = spec.add_argument();
//! spec.update_argument(index, ArgumentPatch {
//!     name: Some("amount".into()),
//!     arg_type: Some(ArgType::Number),
//!     ..ArgumentPatch::default()
//! })?;
//! assert_eq!(spec.arguments[0].name, "amount");
//!
//! spec.remove_argument(0)?;
//! assert!(spec.arguments.is_empty());
//! # Ok::<(), skcmd::error::SkcmdError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`template`]: The assembler and its helpers
//! - [`model`]: `CommandSpec`, `ArgumentSpec` and friends
//! - [`export`]: Export gate and file naming
//! - [`clipboard`]: System clipboard support
//! - [`config`]: Tool preferences
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod template;
