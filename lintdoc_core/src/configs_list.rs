//! The configs-list table renderer.

use crate::compare_case_insensitive;
use crate::escape_table_cell;
use crate::find_config_emoji;
use crate::format_table;
use crate::generator::DocContext;

/// Render the configs list as a markdown table. Configs are sorted
/// case-insensitively; ignored configs are omitted entirely. A config
/// without a description renders as an empty cell, and the description
/// column disappears when no config has one. Returns an empty string when
/// there is nothing to list.
pub fn generate_configs_list(ctx: &DocContext) -> String {
	let mut configs: Vec<&str> = ctx
		.plugin
		.configs
		.keys()
		.map(String::as_str)
		.filter(|config| !ctx.options.ignore_config.iter().any(|ignored| ignored == config))
		.collect();
	configs.sort_by(|a, b| compare_case_insensitive(a, b));

	if configs.is_empty() {
		return String::new();
	}

	let has_emoji = configs
		.iter()
		.any(|config| find_config_emoji(&ctx.config_emojis, config, false).is_some());
	let has_description = configs.iter().any(|config| {
		ctx
			.plugin
			.configs
			.get(*config)
			.and_then(|spec| spec.description())
			.is_some()
	});

	let mut header = Vec::new();
	if has_emoji {
		header.push(String::new());
	}
	header.push("Name".to_string());
	if has_description {
		header.push("Description".to_string());
	}

	let mut rows = vec![header];
	for config in configs {
		let mut row = Vec::new();
		if has_emoji {
			row.push(
				find_config_emoji(&ctx.config_emojis, config, false)
					.map(|emoji| emoji.into_owned())
					.unwrap_or_default(),
			);
		}
		row.push(format!("`{config}`"));
		if has_description {
			row.push(
				ctx
					.plugin
					.configs
					.get(config)
					.and_then(|spec| spec.description())
					.map(escape_table_cell)
					.unwrap_or_default(),
			);
		}
		rows.push(row);
	}

	format_table(&rows)
}
