// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Total number of legs in the built-in matrix.
pub const BUILTIN_LEG_COUNT: usize = 26;

/// A runner command with English messages, no colours and no inherited
/// runtime variables that could leak into the child.
pub fn runner() -> Command {
    let mut cmd = runner_with_system_locale();
    cmd.arg("--lang").arg("en");
    cmd
}

/// Like [`runner`], but the language comes from the host locale.
pub fn runner_with_system_locale() -> Command {
    let mut cmd = Command::cargo_bin("jitstress-runner").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("DOTNET_TieredCompilation")
        .env_remove("DOTNET_JitStress")
        .env_remove("DOTNET_JitMinOpts")
        .env_remove("DOTNET_JitStressRegs");
    cmd
}

/// Runs the command and returns its stdout as text, whatever the exit status.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("matrix.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Writes `body` to a file; running `cat` on it replays it as a child's stdout.
pub fn write_output(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

/// A one-mode, one-leg matrix, so output-shape tests see a single report.
pub const SINGLE_LEG_MATRIX: &str = r#"
language = "en"

[[modes]]
name = "only"
legs = [ { JitStress = "1" } ]
"#;
