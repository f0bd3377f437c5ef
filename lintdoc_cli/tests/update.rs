mod common;

use lintdoc_core::AnyEmptyResult;
use similar_asserts::assert_eq;

#[test]
fn update_regenerates_marked_regions_in_place() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated 2 file(s)."));

	let readme = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert!(readme.contains("| [no-foo](docs/rules/no-foo.md) | Disallow foo. | ✅"));
	assert!(readme.contains("✅ Set in the `recommended` configuration."));
	// Surrounding prose is untouched.
	assert!(readme.starts_with("# eslint-plugin-test\n\n## Rules\n\n"));
	assert!(readme.ends_with("Trailing prose.\n"));

	let rule_doc = std::fs::read_to_string(tmp.path().join("docs/rules/no-foo.md"))?;
	assert!(rule_doc.starts_with("# Disallow foo (`test/no-foo`)\n"));
	assert!(rule_doc.ends_with("Details about foo.\n"));

	Ok(())
}

#[test]
fn update_is_idempotent() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut first = common::lintdoc_cmd();
	let _ = first
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let readme_after_first = std::fs::read_to_string(tmp.path().join("README.md"))?;

	let mut second = common::lintdoc_cmd();
	let _ = second
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already up to date"));

	let readme_after_second = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert_eq!(readme_after_first, readme_after_second);

	Ok(())
}

#[test]
fn update_dry_run_writes_nothing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;
	let readme_before = std::fs::read_to_string(tmp.path().join("README.md"))?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("update")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Dry run:"));

	let readme_after = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert_eq!(readme_before, readme_after);

	Ok(())
}

#[test]
fn update_reports_missing_rule_docs_as_issues() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;
	std::fs::remove_file(tmp.path().join("docs/rules/no-foo.md"))?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(1)
		.stderr(predicates::str::contains("expected a rule doc"));

	Ok(())
}

#[test]
fn update_can_initialize_missing_rule_docs() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;
	std::fs::remove_file(tmp.path().join("docs/rules/no-foo.md"))?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("update")
		.arg("--init-rule-docs")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let rule_doc = std::fs::read_to_string(tmp.path().join("docs/rules/no-foo.md"))?;
	assert!(rule_doc.starts_with("# Disallow foo (`test/no-foo`)\n"));
	assert!(rule_doc.contains("<!-- end auto-generated rule header -->"));

	Ok(())
}

#[test]
fn update_honors_options_from_the_config_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;
	std::fs::write(
		tmp.path().join("lintdoc.toml"),
		"rule-doc-title-format = \"prefix-name\"\n",
	)?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let rule_doc = std::fs::read_to_string(tmp.path().join("docs/rules/no-foo.md"))?;
	assert!(rule_doc.starts_with("# test/no-foo\n"));

	// The CLI flag wins over the config file.
	let mut overridden = common::lintdoc_cmd();
	let _ = overridden
		.arg("update")
		.arg("--rule-doc-title-format")
		.arg("name")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let rule_doc = std::fs::read_to_string(tmp.path().join("docs/rules/no-foo.md"))?;
	assert!(rule_doc.starts_with("# no-foo\n"));

	Ok(())
}

#[test]
fn update_rejects_invalid_option_values() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sample_project(tmp.path())?;

	let mut cmd = common::lintdoc_cmd();
	let _ = cmd
		.arg("update")
		.arg("--rule-list-columns")
		.arg("name,bogus")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("bogus"));

	Ok(())
}
