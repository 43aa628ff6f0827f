use assert_cmd::Command;
use predicates::prelude::*;

fn skcmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("skcmd").unwrap();
    cmd.env("SKCMD_HOME", home).arg("--plain");
    cmd
}

#[test]
fn test_render_heal_example() {
    let temp_dir = tempfile::tempdir().unwrap();

    skcmd(temp_dir.path())
        .args(["render", "heal", "--aliases", "h, restore"])
        .args(["--arg", "target:player:optional"])
        .assert()
        .success()
        .stdout(
            "command /heal [<target>]:\n    aliases: /h, /restore\n    usage: /heal [target]\n# <target> -> player (optional)\n",
        );
}

#[test]
fn test_render_blank_command_warns() {
    let temp_dir = tempfile::tempdir().unwrap();

    skcmd(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("command /:\n"))
        .stderr(predicate::str::contains("Command name is empty"));
}

#[test]
fn test_render_from_spec_file_with_override() {
    let temp_dir = tempfile::tempdir().unwrap();
    let spec_path = temp_dir.path().join("heal.json");

    let output = skcmd(temp_dir.path())
        .args(["demo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    std::fs::write(&spec_path, &output.stdout).unwrap();

    skcmd(temp_dir.path())
        .args(["render", "--spec", spec_path.to_str().unwrap(), "--no-cooldown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("command /heal [<target>] [<amount>]:"))
        .stdout(predicate::str::contains("executable by: players"))
        .stdout(predicate::str::contains("cooldown").not());
}

#[test]
fn test_render_spec_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();

    skcmd(temp_dir.path())
        .args(["render", "--spec", "-"])
        .write_stdin(r#"{"name": "/spawn", "auto_usage": false, "manual_usage": "/spawn [where]"}"#)
        .assert()
        .success()
        .stdout("command /spawn:\n    usage: /spawn [where]\n");
}

#[test]
fn test_download_writes_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_dir = temp_dir.path().join("scripts");

    skcmd(temp_dir.path())
        .args(["download", "/heal", "-p", "myplugin.heal", "-o"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("heal.sk"));

    let written = std::fs::read_to_string(out_dir.join("heal.sk")).unwrap();
    assert_eq!(
        written,
        "command /heal:\n    usage: /heal\n    permission: myplugin.heal\n"
    );

    // Second run needs --force
    skcmd(temp_dir.path())
        .args(["download", "heal", "-o"])
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    skcmd(temp_dir.path())
        .args(["download", "heal", "--force", "-o"])
        .arg(&out_dir)
        .assert()
        .success();
}

#[test]
fn test_export_gated_without_name() {
    let temp_dir = tempfile::tempdir().unwrap();

    skcmd(temp_dir.path())
        .args(["download", "-o"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command name is empty"));
    assert!(!temp_dir.path().join("command.sk").exists());

    skcmd(temp_dir.path())
        .args(["copy", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command name is empty"));
}

#[test]
fn test_config_changes_rendering() {
    let temp_dir = tempfile::tempdir().unwrap();

    skcmd(temp_dir.path())
        .args(["config", "optional-usage", "angled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("optional-usage set to angled"));

    skcmd(temp_dir.path())
        .args(["config", "trigger-marker", "true"])
        .assert()
        .success();

    skcmd(temp_dir.path())
        .args(["render", "heal", "--arg", "amount:number:opt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    usage: /heal [<amount>]\n"))
        .stdout(predicate::str::ends_with("    trigger:\n"));

    skcmd(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("trigger-marker = true"));
}

#[test]
fn test_config_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    skcmd(temp_dir.path())
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));

    skcmd(temp_dir.path())
        .args(["config", "indent", "four"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for indent"));
    assert!(!temp_dir.path().join("config.json").exists());
}

#[test]
fn test_download_name_cannot_leave_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out_dir = temp_dir.path().join("out");

    skcmd(temp_dir.path())
        .args(["download", "/../escaped", "-o"])
        .arg(&out_dir)
        .assert()
        .success();

    assert!(out_dir.join(".._escaped.sk").exists());
    assert!(!temp_dir.path().join("escaped.sk").exists());
}

#[test]
fn test_types_lists_everything() {
    let temp_dir = tempfile::tempdir().unwrap();

    skcmd(temp_dir.path())
        .arg("types")
        .assert()
        .success()
        .stdout("string\nnumber\ninteger\nplayer\nitemtype\nlocation\ntimespan\nboolean\n");
}

#[test]
fn test_invalid_argument_type() {
    let temp_dir = tempfile::tempdir().unwrap();

    skcmd(temp_dir.path())
        .args(["render", "x", "--arg", "where:vector"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown argument type"));
}
