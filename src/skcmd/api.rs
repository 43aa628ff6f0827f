//! # API Facade
//!
//! [`SkcmdApi`] is the single entry point for every skcmd operation. It holds
//! the loaded [`SkcmdConfig`], the config location, and a [`Clipboard`]
//! implementation, and dispatches to `commands/*`.
//!
//! The facade does no formatting and no terminal I/O. It returns
//! [`CmdResult`] values that a UI (the bundled CLI, or anything else) turns
//! into output.
//!
//! Generic over `Clipboard`:
//! - Production: `SkcmdApi<SystemClipboard>`
//! - Testing: `SkcmdApi<MemoryClipboard>`

use crate::clipboard::Clipboard;
use crate::commands;
use crate::config::SkcmdConfig;
use crate::error::Result;
use crate::model::CommandSpec;
use std::path::Path;

pub struct SkcmdApi<C: Clipboard> {
    clipboard: C,
    paths: commands::SkcmdPaths,
    config: SkcmdConfig,
}

impl<C: Clipboard> SkcmdApi<C> {
    pub fn new(clipboard: C, paths: commands::SkcmdPaths, config: SkcmdConfig) -> Self {
        Self {
            clipboard,
            paths,
            config,
        }
    }

    /// Builds the API with the config stored under `paths`.
    pub fn load(clipboard: C, paths: commands::SkcmdPaths) -> Result<Self> {
        let config = SkcmdConfig::load(&paths.config_dir)?;
        Ok(Self::new(clipboard, paths, config))
    }

    pub fn render(&self, spec: &CommandSpec) -> commands::CmdResult {
        commands::render::run(spec, &self.config)
    }

    pub fn copy(&mut self, spec: &CommandSpec) -> Result<commands::CmdResult> {
        commands::copy::run(&mut self.clipboard, spec, &self.config)
    }

    pub fn download(
        &self,
        spec: &CommandSpec,
        dir: &Path,
        force: bool,
    ) -> Result<commands::CmdResult> {
        commands::download::run(spec, &self.config, dir, force)
    }

    pub fn demo(&self) -> commands::CmdResult {
        commands::demo::run(&self.config)
    }

    pub fn arg_types(&self) -> commands::CmdResult {
        commands::types::run()
    }

    /// Runs a config action. A successful `Set` also updates the config used
    /// by later calls on this instance.
    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn current_config(&self) -> &SkcmdConfig {
        &self.config
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SkcmdPaths};
