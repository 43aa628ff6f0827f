//! # Rendering Module
//!
//! Turns command results into terminal text. Line classification (which
//! part of a rendered line is the label, which the value) stays in Rust;
//! the templates only decide which style each part gets.

use super::styles;
use super::templates::{CONFIG_TEMPLATE, PREVIEW_TEMPLATE, TYPES_TEMPLATE};
use colored::Colorize;
use console::Term;
use minijinja::{Environment, Value};
use serde::Serialize;
use skcmd::api::{CmdMessage, MessageLevel};
use skcmd::config::SkcmdConfig;
use skcmd::model::ArgType;

#[derive(Serialize, Debug, PartialEq, Eq)]
struct PreviewLine {
    kind: &'static str,
    text: String,
    indent: String,
    label: String,
    value: String,
}

#[derive(Serialize)]
struct PreviewData {
    lines: Vec<PreviewLine>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct TypesData {
    types: Vec<String>,
}

/// Whether styled output should be produced for stdout.
pub fn use_color(plain: bool) -> bool {
    !plain && Term::stdout().features().colors_supported()
}

pub fn render_preview(lines: &[String], use_color: bool) -> String {
    let data = PreviewData {
        lines: lines.iter().map(String::as_str).map(classify).collect(),
    };
    render_template("preview", PREVIEW_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", lines.join("\n")))
}

pub fn render_config(config: &SkcmdConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: config
            .entries()
            .into_iter()
            .map(|(key, value)| ConfigEntry {
                key: key.to_string(),
                value,
            })
            .collect(),
    };
    render_template("config", CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_types(types: &[ArgType], use_color: bool) -> String {
    let data = TypesData {
        types: types.iter().map(|t| t.to_string()).collect(),
    };
    render_template("types", TYPES_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Prints messages with level colors. Info messages are shown only when
/// `show_info` is set.
pub fn print_messages(messages: &[CmdMessage], show_info: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info if show_info => println!("{}", message.content.dimmed()),
            MessageLevel::Info => {}
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn render_template<T: Serialize>(
    name: &str,
    source: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, style: String| -> String {
        styles::apply(&style, &value.to_string(), use_color)
    });
    env.add_template(name, source)?;
    env.get_template(name)?.render(data)
}

fn classify(line: &str) -> PreviewLine {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(indent_len);
    let mut out = PreviewLine {
        kind: "text",
        text: rest.to_string(),
        indent: indent.to_string(),
        label: String::new(),
        value: String::new(),
    };

    if rest.starts_with("command ") {
        out.kind = "header";
    } else if rest.starts_with('#') {
        out.kind = "hint";
    } else if rest == skcmd::template::TRIGGER_MARKER {
        out.kind = "marker";
    } else if let Some((label, value)) = rest.split_once(": ") {
        out.kind = "field";
        out.label = label.to_string();
        out.value = value.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skcmd::model::CommandSpec;
    use skcmd::template::{assemble, TemplateOptions};

    #[test]
    fn test_plain_preview_is_the_raw_block() {
        let lines = assemble(&CommandSpec::demo(), &TemplateOptions::default());
        let output = render_preview(&lines, false);
        assert_eq!(output, format!("{}\n", lines.join("\n")));
    }

    #[test]
    fn test_plain_preview_with_marker_and_no_indent() {
        let options = TemplateOptions {
            indent: 0,
            trigger_marker: true,
            ..TemplateOptions::default()
        };
        let lines = assemble(&CommandSpec::new("x"), &options);
        assert_eq!(render_preview(&lines, false), "command /x:\nusage: /x\ntrigger:\n");
    }

    #[test]
    fn test_colored_preview_keeps_content() {
        let lines = assemble(&CommandSpec::demo(), &TemplateOptions::default());
        let output = render_preview(&lines, true);
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("myplugin.heal"));
        assert!(output.contains("%cooldown%"));
    }

    #[test]
    fn test_classify_field() {
        let line = classify("    permission message: §cNo: really");
        assert_eq!(line.kind, "field");
        assert_eq!(line.indent, "    ");
        assert_eq!(line.label, "permission message");
        assert_eq!(line.value, "§cNo: really");
    }

    #[test]
    fn test_classify_header_and_hint() {
        assert_eq!(classify("command /heal <a>:").kind, "header");
        assert_eq!(classify("# <a> -> string").kind, "hint");
        assert_eq!(classify("    trigger:").kind, "marker");
    }

    #[test]
    fn test_render_config_lists_keys() {
        let output = render_config(&SkcmdConfig::default(), false);
        assert!(output.contains("indent = 4\n"));
        assert!(output.contains("file-ext = .sk\n"));
        assert!(output.contains("optional-usage = bare\n"));
    }

    #[test]
    fn test_render_types_one_per_line() {
        let output = render_types(ArgType::all(), false);
        assert_eq!(output.lines().count(), 8);
        assert!(output.starts_with("string\n"));
    }
}
