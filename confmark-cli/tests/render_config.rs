use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn render_respects_code_language_class_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("notes.md");
    fs::write(&input_path, "```rust\nlet x = 1;\n```\n").unwrap();

    let config_path = dir.path().join("confmark.toml");
    fs::write(
        &config_path,
        r#"[render]
code_language_class = true
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("confmark");
    cmd.arg("render")
        .arg(input_path.as_os_str())
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("class=\"language-rust\""));
}

#[test]
fn render_defaults_to_plain_code_blocks() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("notes.md");
    fs::write(&input_path, "```rust\nlet x = 1;\n```\n").unwrap();

    let mut cmd = cargo_bin_cmd!("confmark");
    cmd.arg("render").arg(input_path.as_os_str());

    let output_pred = predicate::str::contains("<pre><code>")
        .and(predicate::str::contains("language-rust").not());

    cmd.assert().success().stdout(output_pred);
}
