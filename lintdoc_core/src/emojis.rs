//! Emoji vocabulary: fixed emojis for severities and rule features, a
//! seeded default set for conventionally-named configs, and the resolved
//! per-config emoji registry.

use std::borrow::Cow;

use crate::LintdocError;
use crate::LintdocResult;
use crate::Plugin;

/// Generic "enabled in a config" emoji, also the error-severity column
/// header.
pub const EMOJI_CONFIG_ERROR: &str = "💼";
pub const EMOJI_CONFIG_WARN: &str = "⚠️";
pub const EMOJI_CONFIG_OFF: &str = "🚫";

pub const EMOJI_DEPRECATED: &str = "❌";
pub const EMOJI_FIXABLE: &str = "🔧";
pub const EMOJI_HAS_SUGGESTIONS: &str = "💡";
pub const EMOJI_OPTIONS: &str = "⚙️";
pub const EMOJI_REQUIRES_TYPE_CHECKING: &str = "💭";

pub const EMOJI_TYPE_PROBLEM: &str = "❗";
pub const EMOJI_TYPE_SUGGESTION: &str = "📖";
pub const EMOJI_TYPE_LAYOUT: &str = "📏";

/// Emojis with a fixed meaning in tables and legends. None of these may be
/// claimed as a config emoji.
pub const RESERVED_EMOJIS: [&str; 11] = [
	EMOJI_CONFIG_ERROR,
	EMOJI_CONFIG_WARN,
	EMOJI_CONFIG_OFF,
	EMOJI_DEPRECATED,
	EMOJI_FIXABLE,
	EMOJI_HAS_SUGGESTIONS,
	EMOJI_OPTIONS,
	EMOJI_REQUIRES_TYPE_CHECKING,
	EMOJI_TYPE_PROBLEM,
	EMOJI_TYPE_SUGGESTION,
	EMOJI_TYPE_LAYOUT,
];

/// Emojis seeded for conventionally-named configs, applied unless the
/// caller overrides or removes them.
pub const DEFAULT_CONFIG_EMOJIS: [(&str, &str); 6] = [
	("accessibility", "♿"),
	("all", "🌐"),
	("recommended", "✅"),
	("strict", "🔒"),
	("style", "🎨"),
	("typescript", "⌨️"),
];

/// One resolved config-emoji association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEmoji {
	pub config: String,
	pub emoji: String,
}

/// Resolved config emojis, unique per config name, in deterministic order.
pub type ConfigEmojis = Vec<ConfigEmoji>;

/// Build the config-emoji registry from the seeded defaults and the
/// caller-specified `config,emoji` pairs. A pair naming a config without
/// an emoji removes that config's default.
pub fn resolve_config_emojis(plugin: &Plugin, specified: &[String]) -> LintdocResult<ConfigEmojis> {
	let mut emojis = ConfigEmojis::new();

	for entry in specified {
		let mut parts = entry.splitn(2, ',');
		let config = parts.next().unwrap_or_default().trim();
		let emoji = parts.next().map(str::trim);

		if config.is_empty() {
			return Err(LintdocError::InvalidOptionValue {
				option: "config-emoji".to_string(),
				value: entry.clone(),
				reason: "expected `config,emoji` or `config`".to_string(),
			});
		}
		if !plugin.configs.contains_key(config) {
			return Err(LintdocError::UnknownConfig(config.to_string()));
		}
		if emojis.iter().any(|existing| existing.config == config) {
			return Err(LintdocError::DuplicateOptionValue {
				option: "config-emoji".to_string(),
				value: config.to_string(),
			});
		}

		let Some(emoji) = emoji.filter(|emoji| !emoji.is_empty()) else {
			// Removal entry: suppress the seeded default by registering an
			// empty association that blocks the default below.
			emojis.push(ConfigEmoji {
				config: config.to_string(),
				emoji: String::new(),
			});
			continue;
		};

		if RESERVED_EMOJIS.contains(&emoji) {
			return Err(LintdocError::EmojiReserved {
				config: config.to_string(),
				emoji: emoji.to_string(),
			});
		}

		emojis.push(ConfigEmoji {
			config: config.to_string(),
			emoji: emoji.to_string(),
		});
	}

	for (config, emoji) in DEFAULT_CONFIG_EMOJIS {
		if plugin.configs.contains_key(config)
			&& !emojis.iter().any(|existing| existing.config == config)
		{
			emojis.push(ConfigEmoji {
				config: config.to_string(),
				emoji: emoji.to_string(),
			});
		}
	}

	emojis.retain(|entry| !entry.emoji.is_empty());
	emojis.sort_by(|a, b| crate::compare_case_insensitive(&a.config, &b.config));
	Ok(emojis)
}

/// Look up the emoji for a config. With `fallback`, configs without a
/// registered emoji get a markdown reference-style badge placeholder so
/// they still render distinguishably in table cells.
pub fn find_config_emoji<'a>(
	config_emojis: &'a [ConfigEmoji],
	config: &str,
	fallback: bool,
) -> Option<Cow<'a, str>> {
	if let Some(entry) = config_emojis.iter().find(|entry| entry.config == config) {
		return Some(Cow::Borrowed(entry.emoji.as_str()));
	}

	fallback.then(|| Cow::Owned(format!("![badge-{config}][]")))
}
