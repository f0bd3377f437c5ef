//! The resolved options structure and the `lintdoc.toml` loader. CLI
//! flags override file values; defaults fill whatever remains.

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::Column;
use crate::LintdocError;
use crate::LintdocResult;
use crate::Notice;
use crate::TitleFormat;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["lintdoc.toml", ".lintdoc.toml", ".config/lintdoc.toml"];

/// Default location template for per-rule docs.
pub const DEFAULT_PATH_RULE_DOC: &str = "docs/rules/{name}.md";

/// Default rules-list file.
pub const DEFAULT_PATH_RULE_LIST: &str = "README.md";

/// Raw option values as they appear in `lintdoc.toml` or on the command
/// line, before validation. Every field is optional so two layers can be
/// merged with the overriding layer winning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OptionsConfig {
	pub config_emoji: Option<Vec<String>>,
	pub ignore_config: Option<Vec<String>>,
	pub ignore_deprecated_rules: Option<bool>,
	pub init_rule_docs: Option<bool>,
	pub path_rule_doc: Option<String>,
	pub path_rule_list: Option<String>,
	pub rule_doc_notices: Option<Vec<String>>,
	pub rule_doc_section_exclude: Option<Vec<String>>,
	pub rule_doc_section_include: Option<Vec<String>>,
	pub rule_doc_section_options: Option<bool>,
	pub rule_doc_title_format: Option<String>,
	pub rule_list_columns: Option<Vec<String>>,
	pub split_by: Option<String>,
	pub url_configs: Option<String>,
	pub url_rule_doc: Option<String>,
}

impl OptionsConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no file exists.
	pub fn load(root: &Path) -> LintdocResult<Option<Self>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: Self =
			toml::from_str(&content).map_err(|e| LintdocError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Merge another layer on top of this one; `overriding` wins wherever
	/// it has a value.
	#[must_use]
	pub fn merged_with(self, overriding: Self) -> Self {
		Self {
			config_emoji: overriding.config_emoji.or(self.config_emoji),
			ignore_config: overriding.ignore_config.or(self.ignore_config),
			ignore_deprecated_rules: overriding
				.ignore_deprecated_rules
				.or(self.ignore_deprecated_rules),
			init_rule_docs: overriding.init_rule_docs.or(self.init_rule_docs),
			path_rule_doc: overriding.path_rule_doc.or(self.path_rule_doc),
			path_rule_list: overriding.path_rule_list.or(self.path_rule_list),
			rule_doc_notices: overriding.rule_doc_notices.or(self.rule_doc_notices),
			rule_doc_section_exclude: overriding
				.rule_doc_section_exclude
				.or(self.rule_doc_section_exclude),
			rule_doc_section_include: overriding
				.rule_doc_section_include
				.or(self.rule_doc_section_include),
			rule_doc_section_options: overriding
				.rule_doc_section_options
				.or(self.rule_doc_section_options),
			rule_doc_title_format: overriding
				.rule_doc_title_format
				.or(self.rule_doc_title_format),
			rule_list_columns: overriding.rule_list_columns.or(self.rule_list_columns),
			split_by: overriding.split_by.or(self.split_by),
			url_configs: overriding.url_configs.or(self.url_configs),
			url_rule_doc: overriding.url_rule_doc.or(self.url_rule_doc),
		}
	}
}

/// Validated, fully-defaulted options for one generation run.
#[derive(Debug, Clone)]
pub struct Options {
	pub config_emoji: Vec<String>,
	pub ignore_config: Vec<String>,
	pub ignore_deprecated_rules: bool,
	pub init_rule_docs: bool,
	pub path_rule_doc: String,
	pub path_rule_list: String,
	pub rule_doc_notices: Vec<Notice>,
	pub rule_doc_section_exclude: Vec<String>,
	pub rule_doc_section_include: Vec<String>,
	pub rule_doc_section_options: bool,
	pub rule_doc_title_format: TitleFormat,
	pub rule_list_columns: Vec<Column>,
	pub split_by: Option<String>,
	pub url_configs: Option<String>,
	pub url_rule_doc: Option<String>,
}

impl Default for Options {
	fn default() -> Self {
		Self {
			config_emoji: Vec::new(),
			ignore_config: Vec::new(),
			ignore_deprecated_rules: false,
			init_rule_docs: false,
			path_rule_doc: DEFAULT_PATH_RULE_DOC.to_string(),
			path_rule_list: DEFAULT_PATH_RULE_LIST.to_string(),
			rule_doc_notices: Notice::DEFAULT_ORDER.to_vec(),
			rule_doc_section_exclude: Vec::new(),
			rule_doc_section_include: Vec::new(),
			rule_doc_section_options: true,
			rule_doc_title_format: TitleFormat::default(),
			rule_list_columns: Column::DEFAULT_ORDER.to_vec(),
			split_by: None,
			url_configs: None,
			url_rule_doc: None,
		}
	}
}

impl Options {
	/// Validate a raw config layer into resolved options. Unknown enum
	/// choices and duplicate list entries are fatal.
	pub fn from_config(config: OptionsConfig) -> LintdocResult<Self> {
		let defaults = Self::default();

		let rule_doc_notices = match config.rule_doc_notices {
			Some(names) => {
				reject_duplicates("rule-doc-notices", &names)?;
				names
					.iter()
					.map(|name| Notice::parse(name))
					.collect::<LintdocResult<Vec<_>>>()?
			}
			None => defaults.rule_doc_notices,
		};

		let rule_list_columns = match config.rule_list_columns {
			Some(names) => {
				reject_duplicates("rule-list-columns", &names)?;
				names
					.iter()
					.map(|name| Column::parse(name))
					.collect::<LintdocResult<Vec<_>>>()?
			}
			None => defaults.rule_list_columns,
		};

		let rule_doc_title_format = match config.rule_doc_title_format {
			Some(name) => TitleFormat::parse(&name)?,
			None => defaults.rule_doc_title_format,
		};

		let ignore_config = config.ignore_config.unwrap_or_default();
		reject_duplicates("ignore-config", &ignore_config)?;

		let config_emoji = config.config_emoji.unwrap_or_default();

		let rule_doc_section_include = config.rule_doc_section_include.unwrap_or_default();
		reject_duplicates("rule-doc-section-include", &rule_doc_section_include)?;
		let rule_doc_section_exclude = config.rule_doc_section_exclude.unwrap_or_default();
		reject_duplicates("rule-doc-section-exclude", &rule_doc_section_exclude)?;

		Ok(Self {
			config_emoji,
			ignore_config,
			ignore_deprecated_rules: config
				.ignore_deprecated_rules
				.unwrap_or(defaults.ignore_deprecated_rules),
			init_rule_docs: config.init_rule_docs.unwrap_or(defaults.init_rule_docs),
			path_rule_doc: config.path_rule_doc.unwrap_or(defaults.path_rule_doc),
			path_rule_list: config.path_rule_list.unwrap_or(defaults.path_rule_list),
			rule_doc_notices,
			rule_doc_section_exclude,
			rule_doc_section_include,
			rule_doc_section_options: config
				.rule_doc_section_options
				.unwrap_or(defaults.rule_doc_section_options),
			rule_doc_title_format,
			rule_list_columns,
			split_by: config.split_by,
			url_configs: config.url_configs,
			url_rule_doc: config.url_rule_doc,
		})
	}

	/// The on-disk path of a rule's doc file, relative to the project root.
	pub fn rule_doc_path(&self, rule_name: &str) -> PathBuf {
		PathBuf::from(self.path_rule_doc.replace("{name}", rule_name))
	}

	/// The link target for a rule's doc: either the `url-rule-doc` template
	/// with `{name}`/`{path}` substituted, or a path relative to `from`.
	pub fn rule_doc_link(&self, rule_name: &str, from: &Path) -> String {
		let doc_path = self.rule_doc_path(rule_name);
		match &self.url_rule_doc {
			Some(template) => template
				.replace("{name}", rule_name)
				.replace("{path}", &doc_path.display().to_string().replace('\\', "/")),
			None => crate::relative_link(from, &doc_path),
		}
	}
}

fn reject_duplicates(option: &str, values: &[String]) -> LintdocResult<()> {
	for (index, value) in values.iter().enumerate() {
		if values[..index].contains(value) {
			return Err(LintdocError::DuplicateOptionValue {
				option: option.to_string(),
				value: value.clone(),
			});
		}
	}
	Ok(())
}
