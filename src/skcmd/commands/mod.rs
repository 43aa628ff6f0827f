use crate::config::SkcmdConfig;
use crate::model::{ArgType, CommandSpec};
use std::path::PathBuf;

pub mod config;
pub mod copy;
pub mod demo;
pub mod download;
pub mod render;
pub mod types;

pub(crate) const EMPTY_NAME_WARNING: &str =
    "Command name is empty; copy and download are disabled.";

#[derive(Debug, Clone)]
pub struct SkcmdPaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Rendered command block, one entry per line
    pub lines: Vec<String>,
    pub spec: Option<CommandSpec>,
    /// False when the export gate refused a copy or download
    pub exported: bool,
    pub exported_path: Option<PathBuf>,
    pub config: Option<SkcmdConfig>,
    pub arg_types: Vec<ArgType>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_spec(mut self, spec: CommandSpec) -> Self {
        self.spec = Some(spec);
        self
    }

    pub fn with_exported_path(mut self, path: PathBuf) -> Self {
        self.exported = true;
        self.exported_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: SkcmdConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_arg_types(mut self, types: Vec<ArgType>) -> Self {
        self.arg_types = types;
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
