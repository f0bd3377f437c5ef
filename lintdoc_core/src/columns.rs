//! The closed set of rules-list columns. Each column maps to a pure cell
//! function over a rule and the generation context; columns whose cells
//! are empty for every rule are suppressed.

use std::path::Path;

use crate::LintdocError;
use crate::LintdocResult;
use crate::RuleDetails;
use crate::SeverityClass;
use crate::configs_setting_rule;
use crate::emojis;
use crate::escape_table_cell;
use crate::find_config_emoji;
use crate::generator::DocContext;
use crate::rule_options::schema_has_options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Column {
	Name,
	Description,
	ConfigsError,
	ConfigsWarn,
	ConfigsOff,
	Fixable,
	FixableAndHasSuggestions,
	HasSuggestions,
	Options,
	RequiresTypeChecking,
	Type,
	Deprecated,
}

impl Column {
	/// Default column presence and ordering.
	pub const DEFAULT_ORDER: [Self; 9] = [
		Self::Name,
		Self::Description,
		Self::ConfigsError,
		Self::ConfigsWarn,
		Self::ConfigsOff,
		Self::Fixable,
		Self::HasSuggestions,
		Self::RequiresTypeChecking,
		Self::Deprecated,
	];

	pub const ALL: [Self; 12] = [
		Self::Name,
		Self::Description,
		Self::ConfigsError,
		Self::ConfigsWarn,
		Self::ConfigsOff,
		Self::Fixable,
		Self::FixableAndHasSuggestions,
		Self::HasSuggestions,
		Self::Options,
		Self::RequiresTypeChecking,
		Self::Type,
		Self::Deprecated,
	];

	pub fn id(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Description => "description",
			Self::ConfigsError => "configs-error",
			Self::ConfigsWarn => "configs-warn",
			Self::ConfigsOff => "configs-off",
			Self::Fixable => "fixable",
			Self::FixableAndHasSuggestions => "fixable-and-has-suggestions",
			Self::HasSuggestions => "has-suggestions",
			Self::Options => "options",
			Self::RequiresTypeChecking => "requires-type-checking",
			Self::Type => "type",
			Self::Deprecated => "deprecated",
		}
	}

	pub fn parse(name: &str) -> LintdocResult<Self> {
		Self::ALL
			.into_iter()
			.find(|column| column.id() == name)
			.ok_or_else(|| LintdocError::InvalidOptionValue {
				option: "rule-list-columns".to_string(),
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

	/// The table header cell for this column.
	pub fn header(self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Description => "Description",
			Self::ConfigsError => emojis::EMOJI_CONFIG_ERROR,
			Self::ConfigsWarn => emojis::EMOJI_CONFIG_WARN,
			Self::ConfigsOff => emojis::EMOJI_CONFIG_OFF,
			Self::Fixable => emojis::EMOJI_FIXABLE,
			Self::FixableAndHasSuggestions => "🔧💡",
			Self::HasSuggestions => emojis::EMOJI_HAS_SUGGESTIONS,
			Self::Options => emojis::EMOJI_OPTIONS,
			Self::RequiresTypeChecking => emojis::EMOJI_REQUIRES_TYPE_CHECKING,
			Self::Type => "Type",
			Self::Deprecated => emojis::EMOJI_DEPRECATED,
		}
	}
}

/// Render one table cell. Boolean and categorical facts use their fixed
/// emojis; absent facts render as the empty string.
pub fn render_cell(column: Column, rule: &RuleDetails, ctx: &DocContext) -> String {
	match column {
		Column::Name => format!(
			"[{}]({})",
			rule.name,
			ctx
				.options
				.rule_doc_link(&rule.name, Path::new(&ctx.options.path_rule_list))
		),
		Column::Description => escape_table_cell(rule.description.as_deref().unwrap_or_default()),
		Column::ConfigsError => config_emojis_cell(rule, ctx, SeverityClass::Error),
		Column::ConfigsWarn => config_emojis_cell(rule, ctx, SeverityClass::Warn),
		Column::ConfigsOff => config_emojis_cell(rule, ctx, SeverityClass::Off),
		Column::Fixable => flag_cell(rule.fixable, emojis::EMOJI_FIXABLE),
		Column::FixableAndHasSuggestions => {
			let mut cell = String::new();
			if rule.fixable {
				cell.push_str(emojis::EMOJI_FIXABLE);
			}
			if rule.has_suggestions {
				cell.push_str(emojis::EMOJI_HAS_SUGGESTIONS);
			}
			cell
		}
		Column::HasSuggestions => flag_cell(rule.has_suggestions, emojis::EMOJI_HAS_SUGGESTIONS),
		Column::Options => flag_cell(
			schema_has_options(rule.schema.as_ref()),
			emojis::EMOJI_OPTIONS,
		),
		Column::RequiresTypeChecking => {
			flag_cell(rule.requires_type_checking, emojis::EMOJI_REQUIRES_TYPE_CHECKING)
		}
		Column::Type => rule
			.r#type
			.as_deref()
			.and_then(type_emoji)
			.unwrap_or_default()
			.to_string(),
		Column::Deprecated => flag_cell(rule.deprecated, emojis::EMOJI_DEPRECATED),
	}
}

fn flag_cell(present: bool, emoji: &str) -> String {
	if present {
		emoji.to_string()
	} else {
		String::new()
	}
}

pub fn type_emoji(rule_type: &str) -> Option<&'static str> {
	match rule_type {
		"problem" => Some(emojis::EMOJI_TYPE_PROBLEM),
		"suggestion" => Some(emojis::EMOJI_TYPE_SUGGESTION),
		"layout" => Some(emojis::EMOJI_TYPE_LAYOUT),
		_ => None,
	}
}

fn config_emojis_cell(rule: &RuleDetails, ctx: &DocContext, severity: SeverityClass) -> String {
	let configs = configs_setting_rule(
		&ctx.configs_to_rules,
		&ctx.prefix,
		&rule.name,
		Some(severity),
	);
	configs
		.into_iter()
		.filter(|config| !ctx.options.ignore_config.iter().any(|ignored| ignored == config))
		.filter_map(|config| find_config_emoji(&ctx.config_emojis, config, true))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Filter the configured columns down to those with anything to show:
/// every column except name and description is suppressed when no rule
/// produces a non-empty cell for it.
pub fn active_columns(
	configured: &[Column],
	rules: &[RuleDetails],
	ctx: &DocContext,
) -> Vec<Column> {
	configured
		.iter()
		.copied()
		.filter(|column| match column {
			Column::Name | Column::Description => true,
			_ => rules.iter().any(|rule| !render_cell(*column, rule, ctx).is_empty()),
		})
		.collect()
}
