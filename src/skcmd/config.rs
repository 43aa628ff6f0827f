use crate::error::{Result, SkcmdError};
use crate::export::{normalize_ext, DEFAULT_FILE_EXT};
use crate::template::{OptionalBracket, TemplateOptions, DEFAULT_INDENT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const MAX_INDENT: usize = 16;

/// Keys accepted by `skcmd config`, in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "indent",
    "optional-usage",
    "trigger-marker",
    "file-ext",
    "clipboard-newline",
];

/// Tool preferences, stored as config.json in the skcmd config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkcmdConfig {
    /// Spaces before each field line
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Bracketing of optional arguments in the usage line
    #[serde(default)]
    pub optional_usage: OptionalBracket,

    /// Append a `trigger:` line after the argument hints
    #[serde(default)]
    pub trigger_marker: bool,

    /// Extension for downloaded files (e.g. ".sk")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// Add a trailing newline to copied text
    #[serde(default)]
    pub clipboard_newline: bool,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for SkcmdConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            optional_usage: OptionalBracket::default(),
            trigger_marker: false,
            file_ext: DEFAULT_FILE_EXT.to_string(),
            clipboard_newline: false,
        }
    }
}

impl SkcmdConfig {
    /// Load config from the given directory, or return defaults if not found.
    /// An out-of-range `indent` from a hand-edited file is clamped.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: SkcmdConfig = serde_json::from_str(&content)?;
        config.indent = config.indent.min(MAX_INDENT);
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn template_options(&self) -> TemplateOptions {
        TemplateOptions {
            indent: self.indent,
            optional_usage: self.optional_usage,
            trigger_marker: self.trigger_marker,
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "indent" => self.indent.to_string(),
            "optional-usage" => self.optional_usage.to_string(),
            "trigger-marker" => self.trigger_marker.to_string(),
            "file-ext" => self.file_ext.clone(),
            "clipboard-newline" => self.clipboard_newline.to_string(),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "indent" => {
                let indent: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid_value(key, value))?;
                if indent > MAX_INDENT {
                    return Err(SkcmdError::Config(format!(
                        "indent must be at most {}",
                        MAX_INDENT
                    )));
                }
                self.indent = indent;
            }
            "optional-usage" => {
                self.optional_usage = value.parse().map_err(SkcmdError::Config)?;
            }
            "trigger-marker" => self.trigger_marker = parse_bool(key, value)?,
            "file-ext" => self.file_ext = normalize_ext(value),
            "clipboard-newline" => self.clipboard_newline = parse_bool(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|k| self.get(k).ok().map(|v| (*k, v)))
            .collect()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid_value(key, value)),
    }
}

fn unknown_key(key: &str) -> SkcmdError {
    SkcmdError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn invalid_value(key: &str, value: &str) -> SkcmdError {
    SkcmdError::Config(format!("Invalid value for {}: {}", key, value))
}
