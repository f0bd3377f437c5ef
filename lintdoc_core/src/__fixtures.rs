use std::path::PathBuf;

use serde_json::Value;
use serde_json::json;

use crate::DocContext;
use crate::Options;
use crate::Plugin;
use crate::resolve_config_emojis;
use crate::resolve_configs_to_rules;
use crate::rule_details;

/// A small but representative plugin manifest: a fixable rule with options,
/// a type-checked rule with suggestions, a deprecated rule with a
/// replacement, and a legacy function-style rule.
pub fn sample_manifest() -> Value {
	json!({
		"name": "eslint-plugin-test",
		"rules": {
			"no-foo": {
				"meta": {
					"docs": { "description": "disallow foo." },
					"type": "problem",
					"fixable": "code",
					"schema": [{
						"type": "object",
						"properties": {
							"allowBar": {
								"type": "boolean",
								"default": false,
								"description": "Whether bar is allowed."
							}
						},
						"additionalProperties": false
					}]
				}
			},
			"no-bar": {
				"meta": {
					"docs": {
						"description": "Disallow bar.",
						"requiresTypeChecking": true
					},
					"type": "suggestion",
					"hasSuggestions": true
				}
			},
			"no-baz": {
				"meta": {
					"deprecated": true,
					"replacedBy": ["no-foo"]
				}
			},
			"legacy-rule": "function () {}"
		},
		"configs": {
			"recommended": {
				"description": "Sensible defaults.",
				"rules": { "test/no-foo": "error", "test/no-bar": 1 }
			},
			"strict": {
				"rules": { "test/no-foo": ["error", { "allowBar": true }], "test/no-bar": 2 }
			}
		}
	})
}

pub fn plugin_from(manifest: &Value, root: PathBuf) -> Plugin {
	Plugin::from_value(manifest, root).expect("fixture manifest is valid")
}

pub fn sample_plugin() -> Plugin {
	plugin_from(&sample_manifest(), PathBuf::from("."))
}

/// Build a full generation context for an arbitrary manifest, without
/// touching the filesystem.
pub fn context_for(manifest: &Value, options: Options) -> DocContext {
	let plugin = plugin_from(manifest, PathBuf::from("."));
	let prefix = plugin.prefix();
	let configs_to_rules =
		resolve_configs_to_rules(&plugin).expect("fixture configs resolve cleanly");
	let config_emojis =
		resolve_config_emojis(&plugin, &options.config_emoji).expect("fixture emojis are valid");
	let rules = rule_details(&plugin, options.ignore_deprecated_rules);

	DocContext {
		root: PathBuf::from("."),
		plugin,
		prefix,
		configs_to_rules,
		config_emojis,
		rules,
		options,
		line_ending: "\n".to_string(),
	}
}

pub fn sample_context() -> DocContext {
	context_for(&sample_manifest(), Options::default())
}

/// The minimal round-trip manifest: one rule, enabled at error severity in
/// a single `recommended` config.
pub fn round_trip_manifest() -> Value {
	json!({
		"name": "eslint-plugin-test",
		"rules": {
			"no-foo": { "meta": { "docs": { "description": "Disallow foo." } } }
		},
		"configs": {
			"recommended": { "rules": { "test/no-foo": "error" } }
		}
	})
}
