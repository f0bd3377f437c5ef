mod common;

use lintdoc_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn check_fails_when_docs_are_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("Stale docs:"));

	Ok(())
}

#[test]
fn check_passes_after_update() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut update = common::lintdoc_cmd();
	let _ = update
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let mut check = common::lintdoc_cmd();
	let _ = check
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}

#[test]
fn check_shows_a_diff_when_requested() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("+").and(predicates::str::contains("no-foo")));

	Ok(())
}

#[test]
fn check_emits_json_when_requested() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut cmd = common::lintdoc_cmd();
	let output = cmd
		.arg("check")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.get_output()
		.stdout
		.clone();

	let parsed: serde_json::Value = serde_json::from_slice(&output)?;
	assert_eq!(parsed["ok"], serde_json::json!(false));
	assert!(!parsed["stale"].as_array().unwrap().is_empty());

	Ok(())
}

#[test]
fn check_fails_fatally_when_markers_are_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;
	std::fs::write(tmp.path().join("README.md"), "# Title\n\nNo markers here.\n")?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("markers"));

	Ok(())
}
