use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use lintdoc_core::OptionsConfig;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate and verify markdown docs for lint-rule plugins.",
	long_about = "lintdoc keeps a lint plugin's markdown documentation in sync with its declared \
	              rule and config metadata.\n\nIt regenerates the rules table in your README, a \
	              configs table, and the title/notices header of every rule doc — always between \
	              marker comments, never touching the surrounding prose.\n\nQuick start:\n  \
	              lintdoc update  Regenerate all managed doc regions\n  lintdoc check   Verify \
	              docs are up to date (for CI)\n  lintdoc list    Show rules and their config \
	              memberships"
)]
pub struct LintdocCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Path to the plugin manifest, relative to the project root. Defaults
	/// to discovering `plugin.json` at the root.
	#[arg(long, global = true)]
	pub plugin: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,

	/// Pair a config with an emoji for tables and notices
	/// (`config,emoji`), or name a config alone to remove its default.
	/// Repeatable.
	#[arg(long, global = true, value_name = "CONFIG,EMOJI")]
	pub config_emoji: Vec<String>,

	/// Config to exclude from all generated docs. Repeatable.
	#[arg(long, global = true, value_name = "CONFIG")]
	pub ignore_config: Vec<String>,

	/// Omit deprecated rules from all generated docs.
	#[arg(long, global = true)]
	pub ignore_deprecated_rules: bool,

	/// Template for rule doc paths; `{name}` is the rule name.
	#[arg(long, global = true, value_name = "TEMPLATE")]
	pub path_rule_doc: Option<String>,

	/// The file holding the rules list markers.
	#[arg(long, global = true, value_name = "PATH")]
	pub path_rule_list: Option<String>,

	/// Ordered, comma-separated notices for rule doc headers.
	#[arg(long, global = true, value_delimiter = ',', value_name = "NOTICES")]
	pub rule_doc_notices: Vec<String>,

	/// Section header that must not appear in any rule doc. Repeatable.
	#[arg(long, global = true, value_name = "SECTION")]
	pub rule_doc_section_exclude: Vec<String>,

	/// Section header that must appear in every rule doc. Repeatable.
	#[arg(long, global = true, value_name = "SECTION")]
	pub rule_doc_section_include: Vec<String>,

	/// Disable enforcement of an `Options` section in rule docs.
	#[arg(long, global = true)]
	pub no_rule_doc_section_options: bool,

	/// Title format for rule docs.
	#[arg(long, global = true, value_name = "FORMAT")]
	pub rule_doc_title_format: Option<String>,

	/// Ordered, comma-separated columns for the rules list.
	#[arg(long, global = true, value_delimiter = ',', value_name = "COLUMNS")]
	pub rule_list_columns: Vec<String>,

	/// Dotted rule property to split the rules list by (e.g. `meta.type`).
	#[arg(long, global = true, value_name = "PROPERTY")]
	pub split_by: Option<String>,

	/// Link target for the word "configs" in rule doc notices.
	#[arg(long, global = true, value_name = "URL")]
	pub url_configs: Option<String>,

	/// Link template for rule docs; `{name}` and `{path}` are substituted.
	#[arg(long, global = true, value_name = "TEMPLATE")]
	pub url_rule_doc: Option<String>,
}

impl LintdocCli {
	/// The CLI layer of raw option values, for merging over `lintdoc.toml`.
	pub fn options_config(&self, init_rule_docs: bool) -> OptionsConfig {
		OptionsConfig {
			config_emoji: non_empty(&self.config_emoji),
			ignore_config: non_empty(&self.ignore_config),
			ignore_deprecated_rules: self.ignore_deprecated_rules.then_some(true),
			init_rule_docs: init_rule_docs.then_some(true),
			path_rule_doc: self.path_rule_doc.clone(),
			path_rule_list: self.path_rule_list.clone(),
			rule_doc_notices: non_empty(&self.rule_doc_notices),
			rule_doc_section_exclude: non_empty(&self.rule_doc_section_exclude),
			rule_doc_section_include: non_empty(&self.rule_doc_section_include),
			rule_doc_section_options: self.no_rule_doc_section_options.then_some(false),
			rule_doc_title_format: self.rule_doc_title_format.clone(),
			rule_list_columns: non_empty(&self.rule_list_columns),
			split_by: self.split_by.clone(),
			url_configs: self.url_configs.clone(),
			url_rule_doc: self.url_rule_doc.clone(),
		}
	}
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
	if values.is_empty() {
		None
	} else {
		Some(values.to_vec())
	}
}

#[derive(Subcommand)]
pub enum Commands {
	/// Check that all managed doc regions are up to date.
	///
	/// Recomputes every rule doc header and the rules/configs tables and
	/// compares them against what is on disk, without writing anything.
	/// Exits with a non-zero status when any document is stale or any
	/// content issue is found.
	///
	/// Ideal for CI pipelines. Use `--diff` to see exactly what would
	/// change and `--format json` for programmatic consumption.
	Check {
		/// Show a unified diff for each stale document.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format for check results.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Regenerate all managed doc regions in place.
	///
	/// Rewrites the content between the rules-list, configs-list, and
	/// rule-options-list markers, and the header block of every rule doc.
	/// Everything outside the markers is preserved verbatim.
	Update {
		/// Preview changes without writing files.
		#[arg(long, default_value_t = false)]
		dry_run: bool,

		/// Create missing rule docs instead of reporting them.
		#[arg(long, default_value_t = false)]
		init_rule_docs: bool,
	},
	/// List the plugin's rules and configs with their relationships.
	///
	/// Shows every rule with the configs that enable, warn, or disable
	/// it, and every config with its emoji. Read-only.
	List {
		/// Output format for list results.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
