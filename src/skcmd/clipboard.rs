use crate::error::{Result, SkcmdError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard by piping it into the platform tool.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
            .map_err(|e| match e {
                SkcmdError::Clipboard(msg) => {
                    SkcmdError::Clipboard(format!("{}. Install xclip or xsel.", msg))
                }
                other => other,
            })
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(SkcmdError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| SkcmdError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| SkcmdError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| SkcmdError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SkcmdError::Clipboard(format!("{} exited with error", program)))
    }
}

/// Destination for copied text. [`SystemClipboard`] is used by the binary,
/// [`MemoryClipboard`] by tests.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard payload for a rendered block.
pub fn format_for_clipboard(lines: &[String], trailing_newline: bool) -> String {
    crate::export::export_text(lines, trailing_newline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_clipboard_plain() {
        let lines = vec!["command /x:".to_string(), "    usage: /x".to_string()];
        assert_eq!(format_for_clipboard(&lines, false), "command /x:\n    usage: /x");
    }

    #[test]
    fn test_format_for_clipboard_trailing_newline() {
        let lines = vec!["command /x:".to_string()];
        assert_eq!(format_for_clipboard(&lines, true), "command /x:\n");
    }

    #[test]
    fn test_memory_clipboard_keeps_last_copy() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.copy("first").unwrap();
        clipboard.copy("second").unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some("second"));
    }

    #[test]
    #[cfg(unix)]
    fn test_pipe_to_missing_program() {
        let err = pipe_to("skcmd-definitely-not-a-program", &[], "x").unwrap_err();
        assert!(err.to_string().contains("Failed to spawn"));
    }
}
