use std::path::Path;

use assert_cmd::Command;
use lintdoc_core::AnyEmptyResult;

pub fn lintdoc_cmd() -> Command {
	let mut cmd = Command::cargo_bin("lintdoc").expect("the lintdoc binary builds");
	cmd.env("NO_COLOR", "1");
	cmd
}

/// A minimal plugin project: one rule enabled in a `recommended` config, a
/// README with rules-list markers, and one rule doc.
pub fn write_sample_project(root: &Path) -> AnyEmptyResult {
	std::fs::write(
		root.join("plugin.json"),
		r#"{
  "name": "eslint-plugin-test",
  "rules": {
    "no-foo": { "meta": { "docs": { "description": "Disallow foo." } } }
  },
  "configs": {
    "recommended": { "rules": { "test/no-foo": "error" } }
  }
}
"#,
	)?;
	std::fs::write(
		root.join("README.md"),
		"# eslint-plugin-test\n\n## Rules\n\n<!-- begin auto-generated rules list -->\n<!-- end \
		 auto-generated rules list -->\n\nTrailing prose.\n",
	)?;
	std::fs::create_dir_all(root.join("docs/rules"))?;
	std::fs::write(
		root.join("docs/rules/no-foo.md"),
		"# test/no-foo\n\nDetails about foo.\n",
	)?;
	Ok(())
}
