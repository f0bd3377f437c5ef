//! Extraction of named options from a rule's JSON Schema, and the
//! auto-generated rule options list table.

use serde_json::Value;

use crate::escape_table_cell;
use crate::format_table;

/// One named option extracted from a rule's schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOption {
	pub name: String,
	pub r#type: Option<String>,
	pub description: Option<String>,
	pub required: bool,
	pub default: Option<Value>,
	pub enum_values: Vec<Value>,
	pub deprecated: bool,
}

/// Collect every named option from a rule's schema. The schema may be a
/// single schema object or an array of them (positional options);
/// composition keywords and array items are traversed, and option names
/// come from top-level `properties` keys. The first occurrence of a name
/// wins.
pub fn named_options(schema: Option<&Value>) -> Vec<RuleOption> {
	let mut options = Vec::new();
	if let Some(schema) = schema {
		collect_options(schema, &mut options);
	}
	options
}

/// Whether the rule's schema declares any named options.
pub fn schema_has_options(schema: Option<&Value>) -> bool {
	!named_options(schema).is_empty()
}

fn collect_options(schema: &Value, options: &mut Vec<RuleOption>) {
	match schema {
		Value::Array(schemas) => {
			for entry in schemas {
				collect_options(entry, options);
			}
		}
		Value::Object(object) => {
			if let Some(Value::Object(properties)) = object.get("properties") {
				let required_names: Vec<&str> = object
					.get("required")
					.and_then(Value::as_array)
					.map(|names| names.iter().filter_map(Value::as_str).collect())
					.unwrap_or_default();

				for (name, subschema) in properties {
					if options.iter().any(|option| option.name == *name) {
						continue;
					}
					options.push(RuleOption {
						name: name.clone(),
						r#type: schema_type(subschema),
						description: subschema
							.get("description")
							.and_then(Value::as_str)
							.map(str::to_string),
						required: required_names.contains(&name.as_str()),
						default: subschema.get("default").cloned(),
						enum_values: subschema
							.get("enum")
							.and_then(Value::as_array)
							.cloned()
							.unwrap_or_default(),
						deprecated: subschema
							.get("deprecated")
							.and_then(Value::as_bool)
							.unwrap_or(false),
					});
				}
			}

			for keyword in ["items", "anyOf", "oneOf", "allOf", "additionalItems"] {
				if let Some(nested) = object.get(keyword) {
					collect_options(nested, options);
				}
			}
		}
		_ => {}
	}
}

fn schema_type(schema: &Value) -> Option<String> {
	match schema.get("type") {
		Some(Value::String(name)) => Some(name.clone()),
		Some(Value::Array(names)) => Some(
			names
				.iter()
				.filter_map(Value::as_str)
				.collect::<Vec<_>>()
				.join(", "),
		),
		_ => None,
	}
}

/// Render the options list table for a rule doc. Only columns with any
/// content appear; rows are sorted by option name.
pub fn generate_rule_options_list_markdown(options: &[RuleOption]) -> String {
	if options.is_empty() {
		return String::new();
	}

	let mut sorted: Vec<&RuleOption> = options.iter().collect();
	sorted.sort_by(|a, b| crate::compare_case_insensitive(&a.name, &b.name));

	let has_description = sorted.iter().any(|option| option.description.is_some());
	let has_type = sorted.iter().any(|option| option.r#type.is_some());
	let has_enum = sorted.iter().any(|option| !option.enum_values.is_empty());
	let has_default = sorted.iter().any(|option| option.default.is_some());
	let has_required = sorted.iter().any(|option| option.required);
	let has_deprecated = sorted.iter().any(|option| option.deprecated);

	let mut header = vec!["Name".to_string()];
	if has_description {
		header.push("Description".to_string());
	}
	if has_type {
		header.push("Type".to_string());
	}
	if has_enum {
		header.push("Choices".to_string());
	}
	if has_default {
		header.push("Default".to_string());
	}
	if has_required {
		header.push("Required".to_string());
	}
	if has_deprecated {
		header.push("Deprecated".to_string());
	}

	let mut rows = vec![header];
	for option in sorted {
		let mut row = vec![format!("`{}`", option.name)];
		if has_description {
			row.push(escape_table_cell(
				option.description.as_deref().unwrap_or_default(),
			));
		}
		if has_type {
			row.push(
				option
					.r#type
					.as_deref()
					.map(crate::sentence_case)
					.unwrap_or_default(),
			);
		}
		if has_enum {
			row.push(if option.enum_values.is_empty() {
				String::new()
			} else {
				format!(
					"`{}`",
					option
						.enum_values
						.iter()
						.map(display_value)
						.collect::<Vec<_>>()
						.join("`, `")
				)
			});
		}
		if has_default {
			row.push(
				option
					.default
					.as_ref()
					.map(|value| format!("`{}`", display_value(value)))
					.unwrap_or_default(),
			);
		}
		if has_required {
			row.push(if option.required {
				"Yes".to_string()
			} else {
				String::new()
			});
		}
		if has_deprecated {
			row.push(if option.deprecated {
				"Yes".to_string()
			} else {
				String::new()
			});
		}
		rows.push(row);
	}

	format_table(&rows)
}

fn display_value(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
