use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum LintdocError {
	#[error(transparent)]
	#[diagnostic(code(lintdoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to load plugin manifest `{path}`: {reason}")]
	#[diagnostic(
		code(lintdoc::plugin_load),
		help("the manifest must be a JSON document with `name`, `rules`, and optional `configs`")
	)]
	PluginLoad { path: String, reason: String },

	#[error("no plugin manifest found at `{path}`")]
	#[diagnostic(
		code(lintdoc::manifest_missing),
		help("expected `plugin.json` or `lint-plugin.json`, or pass an explicit manifest path")
	)]
	ManifestMissing { path: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(lintdoc::config_parse),
		help("check that lintdoc.toml contains valid TOML with recognized option keys")
	)]
	ConfigParse(String),

	#[error("failed to load extended config `{path}`: {reason}")]
	#[diagnostic(
		code(lintdoc::extends_load),
		help("local `extends` entries must be readable JSON config fragments")
	)]
	ExtendsLoad { path: String, reason: String },

	#[error("config `{config}` exceeds the maximum extends depth")]
	#[diagnostic(
		code(lintdoc::extends_depth),
		help("check for circular `extends` references between local config files")
	)]
	ExtendsDepth { config: String },

	#[error("invalid value `{value}` for option `{option}`: {reason}")]
	#[diagnostic(code(lintdoc::invalid_option))]
	InvalidOptionValue {
		option: String,
		value: String,
		reason: String,
	},

	#[error("duplicate entry `{value}` in option `{option}`")]
	#[diagnostic(code(lintdoc::duplicate_option_value))]
	DuplicateOptionValue { option: String, value: String },

	#[error("config `{0}` does not exist in this plugin")]
	#[diagnostic(
		code(lintdoc::unknown_config),
		help("`--ignore-config` and `--config-emoji` must name configs declared by the plugin")
	)]
	UnknownConfig(String),

	#[error("emoji {emoji} for config `{config}` is reserved")]
	#[diagnostic(
		code(lintdoc::reserved_emoji),
		help("severity and rule-feature emojis cannot double as config emojis")
	)]
	EmojiReserved { config: String, emoji: String },

	#[error("`{path}` is missing the expected markers `{begin}` and `{end}`")]
	#[diagnostic(
		code(lintdoc::missing_markers),
		help("add the marker comment pair to the document, or a section header to splice into")
	)]
	MissingMarkers {
		path: String,
		begin: String,
		end: String,
	},

	#[error("missing rule list file `{0}`")]
	#[diagnostic(code(lintdoc::missing_rule_list))]
	MissingRuleList(String),

	#[error("property `{0}` yields nothing to split the rules list by")]
	#[diagnostic(
		code(lintdoc::split_by_empty),
		help("every rule has a disabled-equivalent value for this property")
	)]
	SplitByNoValues(String),
}

pub type LintdocResult<T> = Result<T, LintdocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
