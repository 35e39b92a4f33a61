//! End-to-end tests for the `filterlint` binary.
//!
//! Each test runs the real binary against files in a temp dir, with the
//! config path pinned inside that dir so the user's config never leaks in.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_filterlint");

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(BIN)
            .args(args)
            .current_dir(self.dir.path())
            .env("FILTERLINT_CONFIG", self.path("config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("FILTERLINT_CATALOG")
            .env_remove("FILTERLINT_LOG")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn check_clean_file_succeeds() {
    let ws = Workspace::new();
    let file = ws.write(
        "clean.filter",
        "# Currency\nShow\n  Class Currency\n  SetFontSize 40\n",
    );

    let output = ws.run(&["check", path_arg(&file)]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Checked 1 file: 0 errors, 0 warnings\n"
    );
}

#[test]
fn check_reports_errors_and_fails() {
    let ws = Workspace::new();
    let file = ws.write("bad.filter", "Show\n  Quality 50\n");

    let output = ws.run(&["check", path_arg(&file)]);
    assert_eq!(output.status.code(), Some(1));

    let text = stdout(&output);
    assert!(text.contains(":2:11: error: Invalid value for \"Quality\" rule. Expected 0-20."));
    assert!(text.ends_with("Checked 1 file: 1 error, 0 warnings\n"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn check_json_output() {
    let ws = Workspace::new();
    let file = ws.write("warn.filter", "Show extra\n");

    let output = ws.run(&["--json", "check", path_arg(&file)]);
    assert!(output.status.success());

    let value = json(&stdout(&output));
    let diagnostic = &value["files"][0]["diagnostics"][0];
    assert_eq!(diagnostic["severity"], "warning");
    assert_eq!(diagnostic["fix"]["title"], "Comment This Text");
    assert_eq!(value["summary"]["warnings"], 1);
}

#[test]
fn check_no_warnings_flag() {
    let ws = Workspace::new();
    let file = ws.write("warn.filter", "Show extra\n");

    let output = ws.run(&["check", "--no-warnings", path_arg(&file)]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Checked 1 file: 0 errors, 0 warnings\n"
    );
}

#[test]
fn check_fix_rewrites_file() {
    let ws = Workspace::new();
    let file = ws.write(
        "fix.filter",
        "Hide trailing\r\n  SetBorderColor #ff0000\r\n",
    );

    let output = ws.run(&["check", "--fix", path_arg(&file)]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("1 fix applied"));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Hide # trailing\r\n  SetBorderColor 255 0 0\r\n"
    );
}

#[test]
fn check_missing_file_json_error() {
    let ws = Workspace::new();
    let missing = ws.path("missing.filter");

    let output = ws.run(&["--json", "check", path_arg(&missing)]);
    assert_eq!(output.status.code(), Some(3));

    let value = json(&stderr(&output));
    assert_eq!(value["error"]["code"], "DOCUMENT_ERROR");
}

#[test]
fn check_uses_configured_whitelist() {
    let ws = Workspace::new();
    let file = ws.write("custom.filter", "Show\n  Class \"Incubator\"\n");

    let before = ws.run(&["check", path_arg(&file)]);
    assert_eq!(before.status.code(), Some(1));

    let set = ws.run(&["config", "set", "whitelist.classes", "Incubator"]);
    assert!(set.status.success(), "stderr: {}", stderr(&set));

    let after = ws.run(&["check", path_arg(&file)]);
    assert!(after.status.success(), "stdout: {}", stdout(&after));
}

#[test]
fn parse_prints_line_result() {
    let ws = Workspace::new();

    let output = ws.run(&["parse", "SetTextColor 255 0 0 # late game"]);
    assert!(output.status.success());

    let value = json(&stdout(&output));
    assert_eq!(value["kind"]["type"], "Rule");
    assert_eq!(value["kind"]["data"]["values"][0]["value"], 255);
    assert_eq!(value["kind"]["data"]["trailing_comment"]["text"], "late game");
    assert_eq!(value["invalid"], false);
}

#[test]
fn parse_condition_with_comment_is_invalid() {
    let ws = Workspace::new();

    let output = ws.run(&["parse", "ItemLevel >= 85 # late game"]);
    assert!(output.status.success());

    let value = json(&stdout(&output));
    assert_eq!(value["invalid"], true);
    assert_eq!(value["kind"]["type"], "Rule");
    assert_eq!(
        value["diagnostics"][0]["excerpt"],
        "A trailing comment for a \"ItemLevel\" rule will result in an error."
    );
}

#[test]
fn keywords_table_and_json() {
    let ws = Workspace::new();

    let table = ws.run(&["keywords"]);
    assert!(table.status.success());
    assert!(stdout(&table).starts_with("Keyword"));
    assert!(stdout(&table).contains("PlayAlertSound"));

    let output = ws.run(&["--json", "keywords"]);
    let value = json(&stdout(&output));
    assert_eq!(value.as_array().unwrap().len(), 20);
}

#[test]
fn config_init_path_and_show() {
    let ws = Workspace::new();

    let path = ws.run(&["config", "path"]);
    assert_eq!(stdout(&path).trim(), path_arg(&ws.path("config.toml")));

    let init = ws.run(&["config", "init"]);
    assert!(init.status.success());
    assert!(ws.path("config.toml").exists());

    let again = ws.run(&["config", "init"]);
    assert_eq!(again.status.code(), Some(5));

    let show = ws.run(&["--json", "config", "show"]);
    let value = json(&stdout(&show));
    assert_eq!(value["exists"], true);
}

#[test]
fn completions_for_bash() {
    let ws = Workspace::new();
    let output = ws.run(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("filterlint"));
}
