//! Queries over the flattened config map: which configs set a given rule,
//! at which severity, and which configs set any rule at all.

use std::cmp::Ordering;

use serde_json::Value;

use crate::ConfigsToRules;
use crate::Plugin;
use crate::Severity;

/// The three severity buckets a set rule can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityClass {
	Error,
	Warn,
	Off,
}

impl SeverityClass {
	/// Classify a severity value. Tuple severities unwrap to their first
	/// element. Unrecognized representations classify into no bucket.
	pub fn of(severity: &Severity) -> Option<Self> {
		match severity {
			Severity::Level(level) => Self::of_level(*level),
			Severity::Keyword(keyword) => Self::of_keyword(keyword),
			Severity::WithOptions(entries) => match entries.first() {
				Some(Value::Number(n)) => n.as_i64().and_then(Self::of_level),
				Some(Value::String(s)) => Self::of_keyword(s),
				_ => None,
			},
			Severity::Other(_) => None,
		}
	}

	fn of_level(level: i64) -> Option<Self> {
		match level {
			2 => Some(Self::Error),
			1 => Some(Self::Warn),
			0 => Some(Self::Off),
			_ => None,
		}
	}

	fn of_keyword(keyword: &str) -> Option<Self> {
		match keyword {
			"error" => Some(Self::Error),
			"warn" => Some(Self::Warn),
			"off" => Some(Self::Off),
			_ => None,
		}
	}
}

/// Case-insensitive lexicographic ordering, with the case-sensitive
/// comparison as a deterministic tiebreak.
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
	a.to_lowercase()
		.cmp(&b.to_lowercase())
		.then_with(|| a.cmp(b))
}

/// Whether the given config sets the rule, optionally at a specific
/// severity class.
fn config_sets_rule(
	rules: &crate::RuleSeverities,
	qualified_rule: &str,
	severity: Option<SeverityClass>,
) -> bool {
	let Some(value) = rules.get(qualified_rule) else {
		return false;
	};
	match severity {
		None => SeverityClass::of(value).is_some(),
		Some(class) => SeverityClass::of(value) == Some(class),
	}
}

/// All configs that set the given rule, sorted case-insensitively. When a
/// severity class is supplied, only configs setting the rule at exactly
/// that class are returned.
pub fn configs_setting_rule<'a>(
	configs_to_rules: &'a ConfigsToRules,
	plugin_prefix: &str,
	rule_name: &str,
	severity: Option<SeverityClass>,
) -> Vec<&'a str> {
	let qualified = format!("{plugin_prefix}/{rule_name}");
	let mut configs: Vec<&str> = configs_to_rules
		.iter()
		.filter(|(_, rules)| config_sets_rule(rules, &qualified, severity))
		.map(|(name, _)| name.as_str())
		.collect();
	configs.sort_by(|a, b| compare_case_insensitive(a, b));
	configs
}

/// All non-ignored configs that set *any* of the plugin's rules, sorted
/// case-insensitively. Used to decide whether config columns and legends
/// are needed at all.
pub fn configs_that_set_a_rule<'a>(
	configs_to_rules: &'a ConfigsToRules,
	plugin: &Plugin,
	plugin_prefix: &str,
	ignored_configs: &[String],
	severity: Option<SeverityClass>,
) -> Vec<&'a str> {
	let mut configs: Vec<&str> = configs_to_rules
		.iter()
		.filter(|(name, _)| !ignored_configs.iter().any(|ignored| ignored == *name))
		.filter(|(_, rules)| {
			plugin.rules.keys().any(|rule_name| {
				let qualified = format!("{plugin_prefix}/{rule_name}");
				config_sets_rule(rules, &qualified, severity)
			})
		})
		.map(|(name, _)| name.as_str())
		.collect();
	configs.sort_by(|a, b| compare_case_insensitive(a, b));
	configs
}
