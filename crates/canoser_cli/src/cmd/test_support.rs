use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use canoser_testkit::target_dir as workspace_target_dir;

static CANOSER_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn run_canoser(args: &[&str]) -> Output {
	Command::new(canoser_bin()).args(args).output().expect("canoser command executes")
}

pub(crate) fn run_canoser_json(args: &[&str]) -> serde_json::Value {
	let output = run_canoser(args);
	assert!(
		output.status.success(),
		"canoser command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn canoser_bin() -> &'static PathBuf {
	CANOSER_BIN.get_or_init(resolve_canoser_bin)
}

fn resolve_canoser_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_canoser") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "canoser.exe" } else { "canoser" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "canoser"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build canoser binary at {}", bin.display());

	bin
}
