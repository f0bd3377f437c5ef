//! Orchestration: load the plugin and derived state once, then compute
//! the updated content of every managed document. Documents are processed
//! one at a time; each document's final content depends only on the
//! plugin's metadata, its own prior content, and the resolved options —
//! never on processing order.

use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;

use crate::ConfigEmojis;
use crate::ConfigsToRules;
use crate::ContentIssue;
use crate::IssueKind;
use crate::LintdocError;
use crate::LintdocResult;
use crate::Options;
use crate::Plugin;
use crate::RuleDetails;
use crate::apply_line_ending;
use crate::check_rule_doc;
use crate::configs_list::generate_configs_list;
use crate::detect_line_ending;
use crate::generate_rule_header_lines;
use crate::generate_rules_list;
use crate::markers::BEGIN_CONFIG_LIST_MARKER;
use crate::markers::BEGIN_RULE_LIST_MARKER;
use crate::markers::BEGIN_RULE_OPTIONS_LIST_MARKER;
use crate::markers::END_CONFIG_LIST_MARKER;
use crate::markers::END_RULE_HEADER_MARKER;
use crate::markers::END_RULE_LIST_MARKER;
use crate::markers::END_RULE_OPTIONS_LIST_MARKER;
use crate::normalize_line_endings;
use crate::replace_marked_region;
use crate::replace_or_create_header;
use crate::resolve_config_emojis;
use crate::resolve_configs_to_rules;
use crate::rule_details;
use crate::rule_options::generate_rule_options_list_markdown;
use crate::rule_options::named_options;
use crate::rule_options::schema_has_options;

/// Everything one generation run needs, computed once and read-only
/// thereafter.
#[derive(Debug)]
pub struct DocContext {
	/// Project root all managed paths are relative to.
	pub root: PathBuf,
	pub plugin: Plugin,
	/// The plugin prefix derived from the package name.
	pub prefix: String,
	pub configs_to_rules: ConfigsToRules,
	pub config_emojis: ConfigEmojis,
	/// Projection of the plugin's structured rules, sorted by name.
	pub rules: Vec<RuleDetails>,
	pub options: Options,
	/// The line separator applied to all generated line joins.
	pub line_ending: String,
}

impl DocContext {
	/// Load the plugin manifest and resolve all derived state. The
	/// manifest is looked up at `plugin_path` when given, else at the
	/// project root.
	pub fn load(root: &Path, plugin_path: Option<&Path>, options: Options) -> LintdocResult<Self> {
		let plugin = match plugin_path {
			Some(path) => Plugin::load(&root.join(path))?,
			None => Plugin::load(root)?,
		};

		for config in &options.ignore_config {
			if !plugin.configs.contains_key(config) {
				return Err(LintdocError::UnknownConfig(config.clone()));
			}
		}

		let prefix = plugin.prefix();
		let configs_to_rules = resolve_configs_to_rules(&plugin)?;
		let config_emojis = resolve_config_emojis(&plugin, &options.config_emoji)?;
		let rules = rule_details(&plugin, options.ignore_deprecated_rules);
		let line_ending = detect_line_ending(root);
		info!(
			plugin = %plugin.name,
			rules = rules.len(),
			configs = plugin.configs.len(),
			"loaded plugin"
		);

		Ok(Self {
			root: root.to_path_buf(),
			plugin,
			prefix,
			configs_to_rules,
			config_emojis,
			rules,
			options,
			line_ending,
		})
	}
}

/// The planned content of one managed document.
#[derive(Debug)]
pub struct PlannedFile {
	pub path: PathBuf,
	/// The document's content on disk, `None` when it does not exist yet.
	pub current: Option<String>,
	/// The content after regeneration.
	pub updated: String,
	/// True when the document would be created from scratch.
	pub created: bool,
}

impl PlannedFile {
	pub fn is_stale(&self) -> bool {
		self.current.as_deref() != Some(self.updated.as_str())
	}
}

/// Result of computing updates for every managed document.
#[derive(Debug)]
pub struct UpdateResult {
	pub files: Vec<PlannedFile>,
	/// Content issues found along the way. Issues fail the run but never
	/// stop it.
	pub issues: Vec<ContentIssue>,
}

impl UpdateResult {
	pub fn stale_files(&self) -> Vec<&PlannedFile> {
		self.files.iter().filter(|file| file.is_stale()).collect()
	}

	pub fn is_clean(&self) -> bool {
		self.stale_files().is_empty() && self.issues.is_empty()
	}
}

/// A document whose on-disk content does not match what generation would
/// produce.
#[derive(Debug)]
pub struct StaleDoc {
	pub path: PathBuf,
	pub current: String,
	pub expected: String,
}

/// Result of checking a project's documentation for staleness.
#[derive(Debug)]
pub struct CheckResult {
	pub stale: Vec<StaleDoc>,
	pub issues: Vec<ContentIssue>,
}

impl CheckResult {
	/// Returns true when every document is up to date and issue-free.
	pub fn is_ok(&self) -> bool {
		self.stale.is_empty() && self.issues.is_empty()
	}
}

/// Check all managed documents without writing anything.
pub fn check_docs(ctx: &DocContext) -> LintdocResult<CheckResult> {
	let updates = compute_updates(ctx)?;
	let stale = updates
		.files
		.iter()
		.filter(|file| file.is_stale())
		.map(|file| StaleDoc {
			path: file.path.clone(),
			current: file.current.clone().unwrap_or_default(),
			expected: file.updated.clone(),
		})
		.collect();

	Ok(CheckResult {
		stale,
		issues: updates.issues,
	})
}

/// Compute the updated content of every rule doc and of the rules-list
/// file. Nothing is written.
pub fn compute_updates(ctx: &DocContext) -> LintdocResult<UpdateResult> {
	let mut files = Vec::new();
	let mut issues = Vec::new();

	for rule in &ctx.rules {
		let path = ctx.root.join(ctx.options.rule_doc_path(&rule.name));
		let current = std::fs::read_to_string(&path).ok();

		let base = match &current {
			Some(content) => normalize_line_endings(content),
			None if ctx.options.init_rule_docs => scaffold_rule_doc(rule, &ctx.options),
			None => {
				issues.push(ContentIssue {
					file: path,
					rule: Some(rule.name.clone()),
					kind: IssueKind::MissingDoc,
				});
				continue;
			}
		};

		let header = generate_rule_header_lines(rule, ctx);
		let mut updated = replace_or_create_header(&base, &header, END_RULE_HEADER_MARKER);

		if updated.contains(BEGIN_RULE_OPTIONS_LIST_MARKER)
			&& updated.contains(END_RULE_OPTIONS_LIST_MARKER)
		{
			let options_list =
				generate_rule_options_list_markdown(&named_options(rule.schema.as_ref()));
			updated = replace_marked_region(
				&updated,
				BEGIN_RULE_OPTIONS_LIST_MARKER,
				END_RULE_OPTIONS_LIST_MARKER,
				&options_list,
				None,
				&path,
			)?;
		}

		issues.extend(check_rule_doc(&updated, rule, &ctx.options, &path));
		debug!(rule = %rule.name, path = %path.display(), "computed rule doc");

		let created = current.is_none();
		files.push(PlannedFile {
			path,
			current,
			updated: apply_line_ending(&updated, &ctx.line_ending),
			created,
		});
	}

	files.push(compute_rule_list_update(ctx)?);

	Ok(UpdateResult { files, issues })
}

fn compute_rule_list_update(ctx: &DocContext) -> LintdocResult<PlannedFile> {
	let path = ctx.root.join(&ctx.options.path_rule_list);
	let current = std::fs::read_to_string(&path)
		.map_err(|_| LintdocError::MissingRuleList(path.display().to_string()))?;
	let base = normalize_line_endings(&current);

	let rules_list = generate_rules_list(ctx)?;
	let mut updated = replace_marked_region(
		&base,
		BEGIN_RULE_LIST_MARKER,
		END_RULE_LIST_MARKER,
		&rules_list,
		Some("rules"),
		&path,
	)?;

	// The configs list is optional: absent markers are a silent no-op, and
	// so is an empty config set with markers present.
	if updated.contains(BEGIN_CONFIG_LIST_MARKER) && updated.contains(END_CONFIG_LIST_MARKER) {
		let configs_list = generate_configs_list(ctx);
		if !configs_list.is_empty() {
			updated = replace_marked_region(
				&updated,
				BEGIN_CONFIG_LIST_MARKER,
				END_CONFIG_LIST_MARKER,
				&configs_list,
				None,
				&path,
			)?;
		}
	}

	Ok(PlannedFile {
		path,
		current: Some(current),
		updated: apply_line_ending(&updated, &ctx.line_ending),
		created: false,
	})
}

/// Write every stale document back to disk. Returns the number of files
/// written.
pub fn write_updates(result: &UpdateResult) -> LintdocResult<usize> {
	let mut written = 0;
	for file in &result.files {
		if !file.is_stale() {
			continue;
		}
		if let Some(parent) = file.path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&file.path, &file.updated)?;
		written += 1;
	}
	Ok(written)
}

/// The starting body of a freshly-initialized rule doc: just an options
/// section scaffold when the rule has named options, so the generated
/// header and options list land in a document that passes its own checks.
fn scaffold_rule_doc(rule: &RuleDetails, options: &Options) -> String {
	if options.rule_doc_section_options && schema_has_options(rule.schema.as_ref()) {
		format!(
			"## Options\n\n{BEGIN_RULE_OPTIONS_LIST_MARKER}\n\n{END_RULE_OPTIONS_LIST_MARKER}\n"
		)
	} else {
		String::new()
	}
}
