//! Line separator detection. Resolved once per invocation — from an
//! editor-config file, else a code formatter's config, else the platform
//! default — and threaded explicitly through every renderer so no output
//! depends on process-wide state.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

/// Detect the line separator for generated output at `root`.
pub fn detect_line_ending(root: &Path) -> String {
	if let Some(separator) = from_editorconfig(root) {
		debug!(source = ".editorconfig", "detected line ending");
		return separator;
	}
	if let Some(separator) = from_formatter_config(root) {
		debug!(source = "formatter config", "detected line ending");
		return separator;
	}

	platform_default().to_string()
}

fn separator_for(name: &str) -> Option<String> {
	match name {
		"lf" => Some("\n".to_string()),
		"crlf" => Some("\r\n".to_string()),
		"cr" => Some("\r".to_string()),
		_ => None,
	}
}

/// First `end_of_line` key in `.editorconfig`, regardless of section — the
/// generated files are all markdown, so a finer-grained match is not
/// worth a full editorconfig implementation here.
fn from_editorconfig(root: &Path) -> Option<String> {
	let content = std::fs::read_to_string(root.join(".editorconfig")).ok()?;

	content
		.lines()
		.map(str::trim)
		.filter(|line| !line.starts_with('#') && !line.starts_with(';'))
		.find_map(|line| {
			let (key, value) = line.split_once('=')?;
			if key.trim().eq_ignore_ascii_case("end_of_line") {
				separator_for(&value.trim().to_ascii_lowercase())
			} else {
				None
			}
		})
}

/// `endOfLine` from a prettier-style formatter config (JSON or YAML).
/// `auto` defers to the platform default.
fn from_formatter_config(root: &Path) -> Option<String> {
	for candidate in [".prettierrc", ".prettierrc.json"] {
		let Ok(content) = std::fs::read_to_string(root.join(candidate)) else {
			continue;
		};
		if let Ok(value) = serde_json::from_str::<Value>(&content) {
			if let Some(separator) = end_of_line_from(&value) {
				return Some(separator);
			}
		}
	}

	for candidate in [".prettierrc", ".prettierrc.yaml", ".prettierrc.yml"] {
		let Ok(content) = std::fs::read_to_string(root.join(candidate)) else {
			continue;
		};
		if let Ok(value) = serde_yaml_ng::from_str::<Value>(&content) {
			if let Some(separator) = end_of_line_from(&value) {
				return Some(separator);
			}
		}
	}

	None
}

fn end_of_line_from(config: &Value) -> Option<String> {
	let name = config.get("endOfLine")?.as_str()?;
	separator_for(name)
}

fn platform_default() -> &'static str {
	if cfg!(windows) { "\r\n" } else { "\n" }
}
