//! The rules-list renderer: one or more markdown tables (optionally
//! partitioned by a rule property) followed by a legend explaining every
//! active column.

use serde_json::Value;

use crate::Column;
use crate::LintdocError;
use crate::LintdocResult;
use crate::RuleDetails;
use crate::active_columns;
use crate::camel_to_title_case;
use crate::compare_case_insensitive;
use crate::configs_that_set_a_rule;
use crate::emojis;
use crate::find_config_emoji;
use crate::format_table;
use crate::generator::DocContext;
use crate::render_cell;
use crate::sentence_case;

/// Render the rules list: table(s) plus legend. Rules always render in
/// case-insensitive name order, independent of declaration order.
pub fn generate_rules_list(ctx: &DocContext) -> LintdocResult<String> {
	let mut rules: Vec<&RuleDetails> = ctx.rules.iter().collect();
	rules.sort_by(|a, b| compare_case_insensitive(&a.name, &b.name));

	let columns = active_columns(&ctx.options.rule_list_columns, &ctx.rules, ctx);

	let tables = match ctx.options.split_by.as_deref() {
		Some(property) => split_rules_list(&rules, &columns, property, ctx)?,
		None => render_table(&rules, &columns, ctx),
	};

	let legend = generate_legend(&columns, &ctx.rules, ctx);
	if legend.is_empty() {
		Ok(tables)
	} else {
		Ok(format!("{tables}\n\n{legend}"))
	}
}

fn render_table(rules: &[&RuleDetails], columns: &[Column], ctx: &DocContext) -> String {
	let mut rows = Vec::with_capacity(rules.len() + 1);
	rows.push(
		columns
			.iter()
			.map(|column| column.header().to_string())
			.collect::<Vec<_>>(),
	);
	for rule in rules {
		rows.push(
			columns
				.iter()
				.map(|column| render_cell(*column, rule, ctx))
				.collect(),
		);
	}
	format_table(&rows)
}

/// Values of the split property that mean "not partitioned": such rules
/// are listed first, under no sub-heading. An absent property counts too.
fn is_disabled_equivalent(value: &Value) -> bool {
	match value {
		Value::Null | Value::Bool(false) => true,
		Value::String(text) => matches!(text.as_str(), "" | "false" | "no" | "off"),
		_ => false,
	}
}

fn is_enabled_equivalent(value: &Value) -> bool {
	match value {
		Value::Bool(true) => true,
		Value::String(text) => matches!(text.as_str(), "true" | "on" | "yes"),
		_ => false,
	}
}

/// Read a (possibly nested) dotted property off a raw rule value.
fn lookup_property<'a>(value: &'a Value, dotted_path: &str) -> Option<&'a Value> {
	let mut current = value;
	for segment in dotted_path.split('.') {
		current = current.get(segment)?;
	}
	Some(current)
}

/// The sub-heading for one observed split value. Boolean-ish "enabled"
/// values take their title from the property name itself; anything else
/// uses the value.
fn split_heading(property: &str, value: &Value) -> String {
	if is_enabled_equivalent(value) {
		let last_segment = property.rsplit('.').next().unwrap_or(property);
		return camel_to_title_case(last_segment);
	}

	match value {
		Value::String(text) => sentence_case(text),
		other => sentence_case(&other.to_string()),
	}
}

fn split_rules_list(
	rules: &[&RuleDetails],
	columns: &[Column],
	property: &str,
	ctx: &DocContext,
) -> LintdocResult<String> {
	let mut unheaded: Vec<&RuleDetails> = Vec::new();
	let mut groups: Vec<(String, Vec<&RuleDetails>)> = Vec::new();

	for rule in rules.iter().copied() {
		let value = ctx
			.plugin
			.rules
			.get(&rule.name)
			.and_then(|module| module.raw())
			.and_then(|raw| lookup_property(raw, property));

		let Some(value) = value.filter(|value| !is_disabled_equivalent(value)) else {
			unheaded.push(rule);
			continue;
		};

		let heading = split_heading(property, value);
		match groups.iter_mut().find(|(existing, _)| *existing == heading) {
			Some((_, members)) => members.push(rule),
			None => groups.push((heading, vec![rule])),
		}
	}

	if groups.is_empty() {
		return Err(LintdocError::SplitByNoValues(property.to_string()));
	}

	groups.sort_by(|(a, _), (b, _)| compare_case_insensitive(a, b));

	let mut parts: Vec<String> = Vec::new();
	if !unheaded.is_empty() {
		parts.push(render_table(&unheaded, columns, ctx));
	}
	for (heading, members) in &groups {
		parts.push(format!(
			"### {heading}\n\n{}",
			render_table(members, columns, ctx)
		));
	}

	Ok(parts.join("\n\n"))
}

/// One explanatory legend line per active column (name and description
/// carry none), plus one line per config with an emoji, placed directly
/// after the first configs legend line. Lines are joined with a markdown
/// hard break so the legend renders as one block.
fn generate_legend(columns: &[Column], rules: &[RuleDetails], ctx: &DocContext) -> String {
	let mut lines: Vec<String> = Vec::new();
	let mut emitted_config_emojis = false;

	for column in columns {
		match column {
			Column::Name | Column::Description => {}
			Column::ConfigsError => {
				lines.push(format!(
					"{} Configurations enabled in.",
					emojis::EMOJI_CONFIG_ERROR
				));
				push_config_emoji_lines(&mut lines, &mut emitted_config_emojis, ctx);
			}
			Column::ConfigsWarn => {
				lines.push(format!(
					"{} Configurations set to warn in.",
					emojis::EMOJI_CONFIG_WARN
				));
				push_config_emoji_lines(&mut lines, &mut emitted_config_emojis, ctx);
			}
			Column::ConfigsOff => {
				lines.push(format!(
					"{} Configurations disabled in.",
					emojis::EMOJI_CONFIG_OFF
				));
				push_config_emoji_lines(&mut lines, &mut emitted_config_emojis, ctx);
			}
			Column::Fixable => {
				lines.push(format!(
					"{} Automatically fixable by the `--fix` CLI option.",
					emojis::EMOJI_FIXABLE
				));
			}
			Column::FixableAndHasSuggestions => {
				lines.push(format!(
					"{} Automatically fixable by the `--fix` CLI option.",
					emojis::EMOJI_FIXABLE
				));
				lines.push(format!(
					"{} Manually fixable by editor suggestions.",
					emojis::EMOJI_HAS_SUGGESTIONS
				));
			}
			Column::HasSuggestions => {
				lines.push(format!(
					"{} Manually fixable by editor suggestions.",
					emojis::EMOJI_HAS_SUGGESTIONS
				));
			}
			Column::Options => {
				lines.push(format!("{} Has configuration options.", emojis::EMOJI_OPTIONS));
			}
			Column::RequiresTypeChecking => {
				lines.push(format!(
					"{} Requires type information.",
					emojis::EMOJI_REQUIRES_TYPE_CHECKING
				));
			}
			Column::Type => {
				for (rule_type, emoji, text) in [
					(
						"problem",
						emojis::EMOJI_TYPE_PROBLEM,
						"Identifies problems that could cause errors or unexpected behavior.",
					),
					(
						"suggestion",
						emojis::EMOJI_TYPE_SUGGESTION,
						"Suggests an alternate way of doing something.",
					),
					("layout", emojis::EMOJI_TYPE_LAYOUT, "Concerned with code style."),
				] {
					if rules
						.iter()
						.any(|rule| rule.r#type.as_deref() == Some(rule_type))
					{
						lines.push(format!("{emoji} {text}"));
					}
				}
			}
			Column::Deprecated => {
				lines.push(format!("{} Deprecated.", emojis::EMOJI_DEPRECATED));
			}
		}
	}

	lines.join("\\\n")
}

fn push_config_emoji_lines(lines: &mut Vec<String>, emitted: &mut bool, ctx: &DocContext) {
	if *emitted {
		return;
	}
	*emitted = true;

	let configs = configs_that_set_a_rule(
		&ctx.configs_to_rules,
		&ctx.plugin,
		&ctx.prefix,
		&ctx.options.ignore_config,
		None,
	);
	for config in configs {
		if let Some(emoji) = find_config_emoji(&ctx.config_emojis, config, false) {
			lines.push(format!("{emoji} Set in the `{config}` configuration."));
		}
	}
}
