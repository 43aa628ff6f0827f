//! Copy/download gating and file naming.
//!
//! Exporting a block without a command name is pointless, so both actions are
//! gated by [`can_export`]. The gate is a plain predicate; callers decide how
//! to report a refusal.

use crate::model::CommandSpec;
use crate::template::sanitize_name;

pub const DEFAULT_FILE_EXT: &str = ".sk";
pub const FALLBACK_FILE_STEM: &str = "command";

pub fn can_export(spec: &CommandSpec, lines: &[String]) -> bool {
    !spec.name.trim().is_empty() && !lines.join("\n").trim().is_empty()
}

/// Joins rendered lines, optionally with one trailing newline.
pub fn export_text(lines: &[String], trailing_newline: bool) -> String {
    let mut text = lines.join("\n");
    if trailing_newline {
        text.push('\n');
    }
    text
}

/// `<sanitized-name><ext>`, or `command<ext>` when the name is blank.
///
/// The result is always a single path component: separators become `_`, and
/// a stem made only of dots falls back to `command`.
pub fn export_filename(spec: &CommandSpec, ext: &str) -> String {
    let stem = flatten_separators(sanitize_name(&spec.name));
    let stem = if stem.chars().all(|c| c == '.') {
        FALLBACK_FILE_STEM.to_string()
    } else {
        stem
    };
    format!("{}{}", stem, flatten_separators(&normalize_ext(ext)))
}

fn flatten_separators(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

/// Ensures the extension starts with a dot; an empty one stays empty.
pub fn normalize_ext(ext: &str) -> String {
    let ext = ext.trim();
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
