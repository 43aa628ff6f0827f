use crate::commands::{CmdMessage, CmdResult, EMPTY_NAME_WARNING};
use crate::config::SkcmdConfig;
use crate::error::{Result, SkcmdError};
use crate::export::{can_export, export_filename, export_text};
use crate::model::CommandSpec;
use crate::template::assemble;
use std::fs;
use std::path::Path;

/// Writes the block to `<dir>/<name><file-ext>`. An existing file is only
/// replaced when `force` is set.
pub fn run(
    spec: &CommandSpec,
    config: &SkcmdConfig,
    dir: &Path,
    force: bool,
) -> Result<CmdResult> {
    let lines = assemble(spec, &config.template_options());

    if !can_export(spec, &lines) {
        let mut res = CmdResult::default().with_lines(lines);
        res.add_message(CmdMessage::warning(EMPTY_NAME_WARNING));
        return Ok(res);
    }

    let path = dir.join(export_filename(spec, &config.file_ext));
    if path.exists() && !force {
        return Err(SkcmdError::Export(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, export_text(&lines, true))?;

    let mut result = CmdResult::default()
        .with_lines(lines)
        .with_exported_path(path.clone());
    result.add_message(CmdMessage::success(format!("Saved {}", path.display())));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArgType, ArgumentSpec};

    #[test]
    fn test_download_writes_sk_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut spec = CommandSpec::new("/heal");
        spec.arguments
            .push(ArgumentSpec::new("target", ArgType::Player));

        let res = run(&spec, &SkcmdConfig::default(), temp_dir.path(), false).unwrap();
        let path = temp_dir.path().join("heal.sk");
        assert_eq!(res.exported_path.as_deref(), Some(path.as_path()));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "command /heal <target>:\n    usage: /heal <target>\n# <target> -> player\n"
        );
    }

    #[test]
    fn test_download_creates_missing_dir_and_uses_ext() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("scripts").join("commands");
        let mut config = SkcmdConfig::default();
        config.set("file-ext", "txt").unwrap();

        run(&CommandSpec::new("heal"), &config, &dir, false).unwrap();
        assert!(dir.join("heal.txt").exists());
    }

    #[test]
    fn test_download_refuses_overwrite_without_force() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("heal.sk");
        fs::write(&path, "old").unwrap();

        let spec = CommandSpec::new("heal");
        let err = run(&spec, &SkcmdConfig::default(), temp_dir.path(), false).unwrap_err();
        assert!(matches!(err, SkcmdError::Export(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        run(&spec, &SkcmdConfig::default(), temp_dir.path(), true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with("command /heal:"));
    }

    #[test]
    fn test_download_stays_inside_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("out");
        let outside = temp_dir.path().join("abs");
        let config = SkcmdConfig::default();

        let res = run(&CommandSpec::new("/../escaped"), &config, &out, false).unwrap();
        assert_eq!(res.exported_path, Some(out.join(".._escaped.sk")));
        assert!(!temp_dir.path().join("escaped.sk").exists());

        let absolute = format!("/{}", outside.display());
        let res = run(&CommandSpec::new(absolute), &config, &out, false).unwrap();
        let path = res.exported_path.unwrap();
        assert_eq!(path.parent(), Some(out.as_path()));
        assert!(!temp_dir.path().join("abs.sk").exists());
    }

    #[test]
    fn test_download_gated_on_empty_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let res = run(
            &CommandSpec::default(),
            &SkcmdConfig::default(),
            temp_dir.path(),
            false,
        )
        .unwrap();

        assert!(!res.exported);
        assert!(res.exported_path.is_none());
        assert!(!temp_dir.path().join("command.sk").exists());
    }
}
