use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

/// Get a Command for hydroroute with logging and network env vars cleared
pub fn hydroroute() -> Command {
    let mut cmd = cargo_bin_cmd!("hydroroute");
    cmd.env_remove("RUST_LOG")
        .env_remove("HYDROROUTE_LOG")
        .env_remove("HYDROROUTE_NETWORK");
    cmd
}

/// Three centers where 2 can only be reached through a disabled pipe
#[allow(dead_code)]
pub const SPLIT_NETWORK: &str = r#"
version = 1
centers = 3

[[pipes]]
from = 0
to = 1
minutes = 4

[[pipes]]
from = 1
to = 2
minutes = 6
available = false
"#;

/// Write a network definition into `dir` and return its path
#[allow(dead_code)]
pub fn write_network(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("network.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Parse stderr as JSON
#[allow(dead_code)]
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).unwrap()
}
