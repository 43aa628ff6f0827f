//! # Template Assembler
//!
//! Turns a [`CommandSpec`] into the lines of a Skript command header: the
//! `command /name <args>:` line, its indented fields, and one comment per
//! argument. Everything here is pure and total; any spec, including a blank
//! one, renders to at least the header line.
//!
//! Line order is fixed:
//!
//! ```text
//! command /heal [<target>] [<amount>]:
//!     aliases: /h, /restore
//!     description: Heals a target player by a specified amount.
//!     usage: /heal [target] [amount]
//!     permission: myplugin.heal
//!     permission message: §cYou lack §emyplugin.heal§c.
//!     executable by: players
//!     cooldown: 5 seconds
//!     cooldown message: §7Cooldown: §e%cooldown% remaining.
//!     cooldown bypass: myplugin.bypass.cooldown
//! # <target> -> player (optional)
//! # <amount> -> number (optional)
//! ```
//!
//! Optional arguments are always `[<token>]` in the header. In the usage line
//! they follow [`OptionalBracket`], which defaults to the bare `[token]` form.

use crate::model::{ArgumentSpec, CommandSpec, ExecutableBy};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INDENT: usize = 4;
pub const TRIGGER_MARKER: &str = "trigger:";

/// How optional arguments are bracketed in the synthesized usage line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionalBracket {
    /// `[token]`
    #[default]
    Bare,
    /// `[<token>]`
    Angled,
}

impl std::fmt::Display for OptionalBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionalBracket::Bare => write!(f, "bare"),
            OptionalBracket::Angled => write!(f, "angled"),
        }
    }
}

impl std::str::FromStr for OptionalBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bare" => Ok(OptionalBracket::Bare),
            "angled" => Ok(OptionalBracket::Angled),
            _ => Err(format!(
                "Unknown bracket style: {} (expected bare or angled)",
                s
            )),
        }
    }
}

/// Formatting knobs that are not part of the command itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    pub indent: usize,
    pub optional_usage: OptionalBracket,
    pub trigger_marker: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            optional_usage: OptionalBracket::default(),
            trigger_marker: false,
        }
    }
}

/// Trims the name and strips a single leading `/`.
pub fn sanitize_name(name: &str) -> &str {
    let trimmed = name.trim();
    trimmed.strip_prefix('/').unwrap_or(trimmed)
}

/// Splits comma separated aliases and renders them as `/a, /b`.
/// Returns an empty string when no alias survives trimming.
pub fn normalize_aliases(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(|a| {
            if a.starts_with('/') {
                a.to_string()
            } else {
                format!("/{}", a)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display token for the argument at 0-based `index`: trimmed name, else the
/// type identifier, else `arg<N>` with N 1-based.
pub fn argument_token(arg: &ArgumentSpec, index: usize) -> String {
    let name = arg.name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    let type_id = arg.arg_type.id();
    if !type_id.is_empty() {
        return type_id.to_string();
    }
    format!("arg{}", index + 1)
}

fn header_part(arg: &ArgumentSpec, index: usize) -> String {
    let token = argument_token(arg, index);
    if arg.optional {
        format!("[<{}>]", token)
    } else {
        format!("<{}>", token)
    }
}

fn usage_part(arg: &ArgumentSpec, index: usize, style: OptionalBracket) -> String {
    let token = argument_token(arg, index);
    match (arg.optional, style) {
        (false, _) => format!("<{}>", token),
        (true, OptionalBracket::Bare) => format!("[{}]", token),
        (true, OptionalBracket::Angled) => format!("[<{}>]", token),
    }
}

/// `command /<name> <args>:`, with no space before the colon when there are
/// no arguments.
pub fn build_header(spec: &CommandSpec) -> String {
    let head = format!("command /{}", sanitize_name(&spec.name));
    if spec.arguments.is_empty() {
        return format!("{}:", head);
    }
    let parts: Vec<String> = spec
        .arguments
        .iter()
        .enumerate()
        .map(|(i, a)| header_part(a, i))
        .collect();
    format!("{} {}:", head, parts.join(" "))
}

/// The synthesized usage when auto-usage is on, otherwise the manual text
/// verbatim. Callers trim before deciding whether to emit it.
pub fn build_usage(spec: &CommandSpec, style: OptionalBracket) -> String {
    if !spec.auto_usage {
        return spec.manual_usage.clone();
    }
    let mut parts = vec![format!("/{}", sanitize_name(&spec.name))];
    parts.extend(
        spec.arguments
            .iter()
            .enumerate()
            .map(|(i, a)| usage_part(a, i, style)),
    );
    parts.join(" ")
}

/// `# <token> -> type (optional, greedy)`
pub fn argument_hint(arg: &ArgumentSpec, index: usize) -> String {
    let token = argument_token(arg, index);
    let mut extras = Vec::new();
    if arg.optional {
        extras.push("optional");
    }
    if arg.greedy {
        extras.push("greedy");
    }
    if extras.is_empty() {
        format!("# <{}> -> {}", token, arg.arg_type)
    } else {
        format!("# <{}> -> {} ({})", token, arg.arg_type, extras.join(", "))
    }
}

struct Lines {
    indent: String,
    out: Vec<String>,
}

impl Lines {
    fn field(&mut self, label: &str, value: &str) {
        let value = value.trim();
        if !value.is_empty() {
            self.out.push(format!("{}{}: {}", self.indent, label, value));
        }
    }
}

/// Renders the full command block, one entry per line.
pub fn assemble(spec: &CommandSpec, options: &TemplateOptions) -> Vec<String> {
    let mut lines = Lines {
        indent: " ".repeat(options.indent),
        out: vec![build_header(spec)],
    };

    lines.field("aliases", &normalize_aliases(&spec.aliases));
    lines.field("description", &spec.description);
    lines.field("usage", &build_usage(spec, options.optional_usage));
    lines.field("permission", &spec.permission);
    lines.field("permission message", &spec.permission_message);

    if spec.executable_by != ExecutableBy::Both {
        lines.field("executable by", &spec.executable_by.to_string());
    }

    let cooldown = &spec.cooldown;
    if cooldown.enabled && !cooldown.value.trim().is_empty() {
        lines.field("cooldown", &cooldown.value);
        lines.field("cooldown message", &cooldown.message);
        lines.field("cooldown bypass", &cooldown.bypass);
    }

    let hints = spec
        .arguments
        .iter()
        .enumerate()
        .map(|(i, a)| argument_hint(a, i));
    lines.out.extend(hints);

    if options.trigger_marker {
        let marker = format!("{}{}", lines.indent, TRIGGER_MARKER);
        lines.out.push(marker);
    }

    lines.out
}
