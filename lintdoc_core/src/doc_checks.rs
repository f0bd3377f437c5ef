//! Content checks over rule docs. Violations accumulate as issues and are
//! all reported at the end of a run; they never abort processing of the
//! remaining rule docs.

use std::path::Path;
use std::path::PathBuf;

use crate::Options;
use crate::RuleDetails;
use crate::rule_options::named_options;

/// A per-document content problem. Issues fail the run (non-zero exit)
/// without stopping it.
#[derive(Debug, Clone)]
pub struct ContentIssue {
	/// The document the issue was found in.
	pub file: PathBuf,
	/// The rule the document belongs to, when applicable.
	pub rule: Option<String>,
	pub kind: IssueKind,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum IssueKind {
	/// The rule has named options but the doc has no options section.
	MissingOptionsSection,
	/// The doc has an options section but the rule has no named options.
	UnexpectedOptionsSection,
	/// A named option is never mentioned in the doc body.
	OptionNotDocumented { option: String },
	/// A required section (from `rule-doc-section-include`) is absent.
	MissingRequiredSection { section: String },
	/// A forbidden section (from `rule-doc-section-exclude`) is present.
	ForbiddenSection { section: String },
	/// The rule has no doc file at the expected path.
	MissingDoc,
}

impl ContentIssue {
	/// One-line expected-vs-actual message.
	pub fn message(&self) -> String {
		match &self.kind {
			IssueKind::MissingOptionsSection => {
				"expected an `Options` or `Config` section, found none".to_string()
			}
			IssueKind::UnexpectedOptionsSection => {
				"expected no `Options`/`Config` section (the rule has no options), found one"
					.to_string()
			}
			IssueKind::OptionNotDocumented { option } => {
				format!("expected option `{option}` to be mentioned, found no mention")
			}
			IssueKind::MissingRequiredSection { section } => {
				format!("expected a `{section}` section, found none")
			}
			IssueKind::ForbiddenSection { section } => {
				format!("expected no `{section}` section, found one")
			}
			IssueKind::MissingDoc => {
				"expected a rule doc at this path, found none (use `--init-rule-docs` to create \
				 it)"
					.to_string()
			}
		}
	}
}

/// The text of every markdown heading line in the document.
fn heading_texts(contents: &str) -> Vec<&str> {
	contents
		.lines()
		.filter(|line| line.starts_with('#'))
		.map(|line| line.trim_start_matches('#').trim())
		.collect()
}

fn has_section(headings: &[&str], keyword: &str) -> bool {
	let keyword = keyword.to_lowercase();
	headings
		.iter()
		.any(|heading| heading.to_lowercase().contains(&keyword))
}

/// Run all content checks against one rule doc.
pub fn check_rule_doc(
	contents: &str,
	rule: &RuleDetails,
	options: &Options,
	file: &Path,
) -> Vec<ContentIssue> {
	let mut issues = Vec::new();
	let headings = heading_texts(contents);
	let rule_options = named_options(rule.schema.as_ref());

	if options.rule_doc_section_options {
		let has_options_section =
			has_section(&headings, "options") || has_section(&headings, "config");
		if !rule_options.is_empty() && !has_options_section {
			issues.push(ContentIssue {
				file: file.to_path_buf(),
				rule: Some(rule.name.clone()),
				kind: IssueKind::MissingOptionsSection,
			});
		}
		if rule_options.is_empty() && has_options_section {
			issues.push(ContentIssue {
				file: file.to_path_buf(),
				rule: Some(rule.name.clone()),
				kind: IssueKind::UnexpectedOptionsSection,
			});
		}
	}

	for option in &rule_options {
		if !contents.contains(&option.name) {
			issues.push(ContentIssue {
				file: file.to_path_buf(),
				rule: Some(rule.name.clone()),
				kind: IssueKind::OptionNotDocumented {
					option: option.name.clone(),
				},
			});
		}
	}

	for section in &options.rule_doc_section_include {
		if !has_section(&headings, section) {
			issues.push(ContentIssue {
				file: file.to_path_buf(),
				rule: Some(rule.name.clone()),
				kind: IssueKind::MissingRequiredSection {
					section: section.clone(),
				},
			});
		}
	}
	for section in &options.rule_doc_section_exclude {
		if has_section(&headings, section) {
			issues.push(ContentIssue {
				file: file.to_path_buf(),
				rule: Some(rule.name.clone()),
				kind: IssueKind::ForbiddenSection {
					section: section.clone(),
				},
			});
		}
	}

	issues
}
