//! Named styles for the skcmd CLI.
//!
//! Templates refer to styles by meaning (`header`, `label`, `hint`), never by
//! color. The palette below is the only place colors are chosen. An unknown
//! style name is prefixed with `(!?)` so typos in templates show up in
//! output instead of silently rendering plain.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub static SKCMD_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("header", Style::new().bold().cyan()),
        ("label", Style::new().blue()),
        ("value", Style::new()),
        ("hint", Style::new().dim().italic()),
        ("marker", Style::new().bold().magenta()),
    ])
});

/// Applies the named style, or returns the text as-is when color is off.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match SKCMD_STYLES.get(name) {
        Some(style) if use_color => style
            .clone()
            .force_styling(true)
            .apply_to(text)
            .to_string(),
        Some(_) => text.to_string(),
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
    }
}
