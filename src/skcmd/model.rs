//! # Command Model
//!
//! [`CommandSpec`] is the whole form: every field a user can fill in for one
//! generated command block. It is a plain value; the assembler in
//! [`crate::template`] only ever borrows it.
//!
//! Arguments are positional. An [`ArgumentSpec`] has no identity beyond its
//! index in [`CommandSpec::arguments`], which is why the edit helpers below
//! take 0-based indexes and the rendered hints fall back to `arg<N>`.

use crate::error::{Result, SkcmdError};
use serde::{Deserialize, Serialize};

const DEFAULT_COOLDOWN: &str = "10 seconds";

/// Skript argument types offered for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    #[default]
    String,
    Number,
    Integer,
    Player,
    ItemType,
    Location,
    Timespan,
    Boolean,
}

impl ArgType {
    /// Returns all types in display order
    pub fn all() -> &'static [ArgType] {
        &[
            ArgType::String,
            ArgType::Number,
            ArgType::Integer,
            ArgType::Player,
            ArgType::ItemType,
            ArgType::Location,
            ArgType::Timespan,
            ArgType::Boolean,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Number => "number",
            ArgType::Integer => "integer",
            ArgType::Player => "player",
            ArgType::ItemType => "itemtype",
            ArgType::Location => "location",
            ArgType::Timespan => "timespan",
            ArgType::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for ArgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for ArgType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ArgType::all()
            .iter()
            .find(|t| t.id() == wanted)
            .copied()
            .ok_or_else(|| format!("Unknown argument type: {}", s))
    }
}

/// Who may run the generated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutableBy {
    #[default]
    Both,
    Players,
    Console,
}

impl std::fmt::Display for ExecutableBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutableBy::Both => write!(f, "both"),
            ExecutableBy::Players => write!(f, "players"),
            ExecutableBy::Console => write!(f, "console"),
        }
    }
}

impl std::str::FromStr for ExecutableBy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" | "all" => Ok(ExecutableBy::Both),
            "players" | "player" => Ok(ExecutableBy::Players),
            "console" => Ok(ExecutableBy::Console),
            _ => Err(format!("Unknown executable-by value: {}", s)),
        }
    }
}

/// Cooldown settings. Values survive while `enabled` is false so that
/// turning the cooldown back on restores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cooldown {
    pub enabled: bool,
    pub value: String,
    pub message: String,
    pub bypass: String,
}

impl Default for Cooldown {
    fn default() -> Self {
        Self {
            enabled: false,
            value: DEFAULT_COOLDOWN.to_string(),
            message: String::new(),
            bypass: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub arg_type: ArgType,
    pub optional: bool,
    pub greedy: bool,
}

impl ArgumentSpec {
    pub fn new(name: impl Into<String>, arg_type: ArgType) -> Self {
        Self {
            name: name.into(),
            arg_type,
            optional: false,
            greedy: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn greedy(mut self) -> Self {
        self.greedy = true;
        self
    }
}

/// Parses `NAME[:TYPE[:FLAGS]]`, where FLAGS is a comma list of
/// `optional` (or `opt`) and `greedy`. NAME may be empty (`:player`).
impl std::str::FromStr for ArgumentSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().unwrap_or_default().trim();
        let arg_type = match parts.next().map(str::trim) {
            None | Some("") => ArgType::default(),
            Some(t) => t.parse()?,
        };

        let mut arg = ArgumentSpec::new(name, arg_type);
        if let Some(flags) = parts.next() {
            for flag in flags.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                match flag.to_ascii_lowercase().as_str() {
                    "optional" | "opt" => arg.optional = true,
                    "greedy" => arg.greedy = true,
                    other => return Err(format!("Unknown argument flag: {}", other)),
                }
            }
        }
        Ok(arg)
    }
}

/// Partial update for one argument; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ArgumentPatch {
    pub name: Option<String>,
    pub arg_type: Option<ArgType>,
    pub optional: Option<bool>,
    pub greedy: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSpec {
    pub name: String,
    /// Raw comma separated alias input, normalized at render time
    pub aliases: String,
    pub description: String,
    pub permission: String,
    pub permission_message: String,
    pub executable_by: ExecutableBy,
    pub cooldown: Cooldown,
    pub auto_usage: bool,
    pub manual_usage: String,
    pub arguments: Vec<ArgumentSpec>,
}

impl Default for CommandSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            aliases: String::new(),
            description: String::new(),
            permission: String::new(),
            permission_message: String::new(),
            executable_by: ExecutableBy::default(),
            cooldown: Cooldown::default(),
            auto_usage: true,
            manual_usage: String::new(),
            arguments: Vec::new(),
        }
    }
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A fully populated example used by `skcmd demo`.
    pub fn demo() -> Self {
        Self {
            name: "heal".to_string(),
            aliases: "h, restore".to_string(),
            description: "Heals a target player by a specified amount.".to_string(),
            permission: "myplugin.heal".to_string(),
            permission_message: "§cYou lack §emyplugin.heal§c.".to_string(),
            executable_by: ExecutableBy::Players,
            cooldown: Cooldown {
                enabled: true,
                value: "5 seconds".to_string(),
                message: "§7Cooldown: §e%cooldown% remaining.".to_string(),
                bypass: "myplugin.bypass.cooldown".to_string(),
            },
            auto_usage: true,
            manual_usage: String::new(),
            arguments: vec![
                ArgumentSpec::new("target", ArgType::Player).optional(),
                ArgumentSpec::new("amount", ArgType::Number).optional(),
            ],
        }
    }

    /// Appends a blank required `string` argument, returning its index.
    pub fn add_argument(&mut self) -> usize {
        self.arguments.push(ArgumentSpec::default());
        self.arguments.len() - 1
    }

    pub fn remove_argument(&mut self, index: usize) -> Result<ArgumentSpec> {
        if index >= self.arguments.len() {
            return Err(out_of_range(index, self.arguments.len()));
        }
        Ok(self.arguments.remove(index))
    }

    pub fn update_argument(&mut self, index: usize, patch: ArgumentPatch) -> Result<()> {
        let len = self.arguments.len();
        let arg = self
            .arguments
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;

        if let Some(name) = patch.name {
            arg.name = name;
        }
        if let Some(arg_type) = patch.arg_type {
            arg.arg_type = arg_type;
        }
        if let Some(optional) = patch.optional {
            arg.optional = optional;
        }
        if let Some(greedy) = patch.greedy {
            arg.greedy = greedy;
        }
        Ok(())
    }

    /// Switches to a hand-written usage line. Synthesis resumes with
    /// [`CommandSpec::use_auto_usage`]; the manual text is kept either way.
    pub fn set_manual_usage(&mut self, usage: impl Into<String>) {
        self.manual_usage = usage.into();
        self.auto_usage = false;
    }

    pub fn use_auto_usage(&mut self) {
        self.auto_usage = true;
    }

    pub fn set_cooldown_enabled(&mut self, enabled: bool) {
        self.cooldown.enabled = enabled;
    }
}

fn out_of_range(index: usize, len: usize) -> SkcmdError {
    SkcmdError::InvalidArgument(format!(
        "Argument index {} out of range ({} arguments)",
        index, len
    ))
}
