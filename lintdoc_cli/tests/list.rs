mod common;

use lintdoc_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn list_shows_rules_with_config_memberships() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("list")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(
			predicates::str::contains("test/no-foo [error in recommended]")
				.and(predicates::str::contains("✅ recommended"))
				.and(predicates::str::contains("1 rule(s), 1 config(s)")),
		);

	Ok(())
}

#[test]
fn list_emits_json_when_requested() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut cmd = common::lintdoc_cmd();
	let output = cmd
		.arg("list")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let parsed: serde_json::Value = serde_json::from_slice(&output)?;
	assert_eq!(parsed["plugin"], serde_json::json!("eslint-plugin-test"));
	assert_eq!(parsed["rules"][0]["name"], serde_json::json!("no-foo"));
	assert_eq!(
		parsed["rules"][0]["enabledIn"],
		serde_json::json!(["recommended"])
	);

	Ok(())
}
