//! The rule doc header renderer: a title in one of several formats plus an
//! ordered set of optional notice sentences, each gated by a predicate
//! over the rule's metadata and config memberships.

use crate::LintdocError;
use crate::LintdocResult;
use crate::RuleDetails;
use crate::SeverityClass;
use crate::configs_setting_rule;
use crate::emojis;
use crate::find_config_emoji;
use crate::generator::DocContext;
use crate::markers::END_RULE_HEADER_MARKER;
use crate::rule_options::schema_has_options;
use crate::sentence_case;
use crate::strip_trailing_period;

/// How a rule doc's title is composed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum TitleFormat {
	/// `# Description`
	Desc,
	/// `# Description (\`rule-name\`)`
	DescParensName,
	/// `# Description (\`prefix/rule-name\`)`
	#[default]
	DescParensPrefixName,
	/// `# rule-name`
	Name,
	/// `# prefix/rule-name`
	PrefixName,
}

impl TitleFormat {
	pub const ALL: [Self; 5] = [
		Self::Desc,
		Self::DescParensName,
		Self::DescParensPrefixName,
		Self::Name,
		Self::PrefixName,
	];

	pub fn id(self) -> &'static str {
		match self {
			Self::Desc => "desc",
			Self::DescParensName => "desc-parens-name",
			Self::DescParensPrefixName => "desc-parens-prefix-name",
			Self::Name => "name",
			Self::PrefixName => "prefix-name",
		}
	}

	pub fn parse(name: &str) -> LintdocResult<Self> {
		Self::ALL
			.into_iter()
			.find(|format| format.id() == name)
			.ok_or_else(|| LintdocError::InvalidOptionValue {
				option: "rule-doc-title-format".to_string(),
				value: name.to_string(),
				reason: format!(
					"expected one of: {}",
					Self::ALL
						.into_iter()
						.map(Self::id)
						.collect::<Vec<_>>()
						.join(", ")
				),
			})
	}

	/// The richest format still satisfiable when the rule has no
	/// description. Description-embedding formats never render a literal
	/// absence; they degrade to the nearest name-based variant.
	fn without_description(self) -> Self {
		match self {
			Self::Desc | Self::DescParensPrefixName => Self::PrefixName,
			Self::DescParensName => Self::Name,
			other => other,
		}
	}
}

/// One optional explanatory sentence in a rule doc's header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Notice {
	Configs,
	Deprecated,
	Fixable,
	FixableAndHasSuggestions,
	HasSuggestions,
	Options,
	RequiresTypeChecking,
	Type,
}

impl Notice {
	/// Default notice presence and ordering.
	pub const DEFAULT_ORDER: [Self; 4] = [
		Self::Deprecated,
		Self::Configs,
		Self::FixableAndHasSuggestions,
		Self::RequiresTypeChecking,
	];

	pub const ALL: [Self; 8] = [
		Self::Configs,
		Self::Deprecated,
		Self::Fixable,
		Self::FixableAndHasSuggestions,
		Self::HasSuggestions,
		Self::Options,
		Self::RequiresTypeChecking,
		Self::Type,
	];

	pub fn id(self) -> &'static str {
		match self {
			Self::Configs => "configs",
			Self::Deprecated => "deprecated",
			Self::Fixable => "fixable",
			Self::FixableAndHasSuggestions => "fixable-and-has-suggestions",
			Self::HasSuggestions => "has-suggestions",
			Self::Options => "options",
			Self::RequiresTypeChecking => "requires-type-checking",
			Self::Type => "type",
		}
	}

	pub fn parse(name: &str) -> LintdocResult<Self> {
		Self::ALL
			.into_iter()
			.find(|notice| notice.id() == name)
			.ok_or_else(|| LintdocError::InvalidOptionValue {
				option: "rule-doc-notices".to_string(),
				value: name.to_string(),
				reason: format!(
					"expected one of: {}",
					Self::ALL
						.into_iter()
						.map(Self::id)
						.collect::<Vec<_>>()
						.join(", ")
				),
			})
	}
}

/// Compose a rule doc's title. Formats embedding the description degrade
/// deterministically when none is available; the description itself is
/// sentence-cased with any trailing period stripped.
pub fn generate_rule_title(rule: &RuleDetails, ctx: &DocContext) -> String {
	let description = rule
		.description
		.as_deref()
		.map(|text| strip_trailing_period(&sentence_case(text)).to_string());

	let format = if description.is_some() {
		ctx.options.rule_doc_title_format
	} else {
		ctx.options.rule_doc_title_format.without_description()
	};

	let name = &rule.name;
	let prefix = &ctx.prefix;
	match (format, description) {
		(TitleFormat::Desc, Some(description)) => format!("# {description}"),
		(TitleFormat::DescParensName, Some(description)) => {
			format!("# {description} (`{name}`)")
		}
		(TitleFormat::DescParensPrefixName, Some(description)) => {
			format!("# {description} (`{prefix}/{name}`)")
		}
		(TitleFormat::Name, _) => format!("# {name}"),
		(_, _) => format!("# {prefix}/{name}"),
	}
}

/// Compose the full generated header block for a rule doc: title, the
/// configured notices in order (each preceded by a blank line; absent
/// facts are skipped silently), then the end-of-header marker.
pub fn generate_rule_header_lines(rule: &RuleDetails, ctx: &DocContext) -> Vec<String> {
	let mut lines = vec![generate_rule_title(rule, ctx)];

	for notice in &ctx.options.rule_doc_notices {
		if let Some(text) = notice_text(*notice, rule, ctx) {
			lines.push(String::new());
			lines.push(text);
		}
	}

	lines.push(String::new());
	lines.push(END_RULE_HEADER_MARKER.to_string());
	lines
}

fn notice_text(notice: Notice, rule: &RuleDetails, ctx: &DocContext) -> Option<String> {
	match notice {
		Notice::Configs => configs_notice(rule, ctx),
		Notice::Deprecated => deprecated_notice(rule, ctx),
		Notice::Fixable => rule.fixable.then(fixable_text),
		Notice::HasSuggestions => rule.has_suggestions.then(has_suggestions_text),
		Notice::FixableAndHasSuggestions => match (rule.fixable, rule.has_suggestions) {
			(true, true) => Some(format!(
				"{}{} This rule is automatically fixable by the `--fix` CLI option and manually \
				 fixable by editor suggestions.",
				emojis::EMOJI_FIXABLE,
				emojis::EMOJI_HAS_SUGGESTIONS
			)),
			(true, false) => Some(fixable_text()),
			(false, true) => Some(has_suggestions_text()),
			(false, false) => None,
		},
		Notice::Options => schema_has_options(rule.schema.as_ref()).then(|| {
			format!("{} This rule is configurable.", emojis::EMOJI_OPTIONS)
		}),
		Notice::RequiresTypeChecking => rule.requires_type_checking.then(|| {
			format!(
				"{} This rule requires type information.",
				emojis::EMOJI_REQUIRES_TYPE_CHECKING
			)
		}),
		Notice::Type => match rule.r#type.as_deref() {
			Some("problem") => Some(format!(
				"{} This rule identifies problems that could cause errors or unexpected \
				 behavior.",
				emojis::EMOJI_TYPE_PROBLEM
			)),
			Some("suggestion") => Some(format!(
				"{} This rule suggests an alternate way of doing something.",
				emojis::EMOJI_TYPE_SUGGESTION
			)),
			Some("layout") => Some(format!(
				"{} This rule is concerned with code style.",
				emojis::EMOJI_TYPE_LAYOUT
			)),
			_ => None,
		},
	}
}

fn fixable_text() -> String {
	format!(
		"{} This rule is automatically fixable by the `--fix` CLI option.",
		emojis::EMOJI_FIXABLE
	)
}

fn has_suggestions_text() -> String {
	format!(
		"{} This rule is manually fixable by editor suggestions.",
		emojis::EMOJI_HAS_SUGGESTIONS
	)
}

fn deprecated_notice(rule: &RuleDetails, ctx: &DocContext) -> Option<String> {
	if !rule.deprecated {
		return None;
	}

	let mut text = format!("{} This rule is deprecated.", emojis::EMOJI_DEPRECATED);
	if !rule.replaced_by.is_empty() {
		let links: Vec<String> = rule
			.replaced_by
			.iter()
			.map(|replacement| replacement_rule_link(replacement, &rule.name, ctx))
			.collect();
		text.push_str(&format!(" It was replaced by {}.", join_with_and(&links)));
	}

	Some(text)
}

/// A link to a replacement rule's doc. The plugin's own prefix is dropped
/// from the file name so prefixed and bare spellings resolve identically;
/// a replacement in a foreign namespace has no knowable doc location and
/// renders as plain inline code.
fn replacement_rule_link(replacement: &str, current_rule: &str, ctx: &DocContext) -> String {
	let bare = match replacement.split_once('/') {
		Some((namespace, bare)) if namespace == ctx.prefix => bare,
		Some(_) => return format!("`{replacement}`"),
		None => replacement,
	};

	let from = ctx.options.rule_doc_path(current_rule);
	let link = ctx.options.rule_doc_link(bare, &from);
	format!("[`{bare}`]({link})")
}

fn configs_with_severity<'a>(
	ctx: &'a DocContext,
	rule: &RuleDetails,
	severity: SeverityClass,
) -> Vec<&'a str> {
	configs_setting_rule(&ctx.configs_to_rules, &ctx.prefix, &rule.name, Some(severity))
		.into_iter()
		.filter(|config| {
			!ctx.options.ignore_config.iter().any(|ignored| ignored == config)
		})
		.collect()
}

fn configs_notice(rule: &RuleDetails, ctx: &DocContext) -> Option<String> {
	let error_configs = configs_with_severity(ctx, rule, SeverityClass::Error);
	let warn_configs = configs_with_severity(ctx, rule, SeverityClass::Warn);
	let off_configs = configs_with_severity(ctx, rule, SeverityClass::Off);

	if error_configs.is_empty() && warn_configs.is_empty() && off_configs.is_empty() {
		return None;
	}

	let mut lead = String::new();
	let mut phrases: Vec<String> = Vec::new();

	if !error_configs.is_empty() {
		lead.push_str(emojis::EMOJI_CONFIG_ERROR);
		phrases.push(severity_phrase("is enabled in", &error_configs, ctx));
	}
	if !warn_configs.is_empty() {
		lead.push_str(emojis::EMOJI_CONFIG_WARN);
		phrases.push(severity_phrase("warns in", &warn_configs, ctx));
	}
	if !off_configs.is_empty() {
		lead.push_str(emojis::EMOJI_CONFIG_OFF);
		phrases.push(severity_phrase("is disabled in", &off_configs, ctx));
	}

	Some(format!("{lead} This rule {}.", join_with_and(&phrases)))
}

fn severity_phrase(verb: &str, configs: &[&str], ctx: &DocContext) -> String {
	let decorated: Vec<String> = configs
		.iter()
		.map(|config| {
			match find_config_emoji(&ctx.config_emojis, config, false) {
				Some(emoji) => format!("{emoji} `{config}`"),
				None => format!("`{config}`"),
			}
		})
		.collect();

	let config_word = |word: &str| -> String {
		match &ctx.options.url_configs {
			Some(url) => format!("[{word}]({url})"),
			None => word.to_string(),
		}
	};

	if decorated.len() == 1 {
		format!("{verb} the {} {}", decorated[0], config_word("config"))
	} else {
		format!(
			"{verb} the following {}: {}",
			config_word("configs"),
			decorated.join(", ")
		)
	}
}

fn join_with_and(items: &[String]) -> String {
	match items.len() {
		0 => String::new(),
		1 => items[0].clone(),
		2 => format!("{} and {}", items[0], items[1]),
		_ => {
			let head = items[..items.len() - 1].join(", ");
			format!("{head}, and {}", items[items.len() - 1])
		}
	}
}
