use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::LintdocError;
use crate::LintdocResult;

/// Supported manifest file names when the plugin is given as a directory,
/// in discovery order (highest precedence first).
pub const MANIFEST_FILE_CANDIDATES: [&str; 2] = ["plugin.json", "lint-plugin.json"];

/// The enablement level of a rule within a config.
///
/// Severities appear in the wild as numbers (`0`/`1`/`2`), keywords
/// (`"off"`/`"warn"`/`"error"`), or a tuple whose first element is one of
/// those and whose remaining elements are rule options. Anything else is
/// preserved but classifies into no severity bucket.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Severity {
	Level(i64),
	Keyword(String),
	WithOptions(Vec<Value>),
	Other(Value),
}

/// A string-or-list field, as `extends` is written in both styles.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum StringOrList {
	One(String),
	Many(Vec<String>),
}

impl StringOrList {
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		match self {
			Self::One(value) => std::slice::from_ref(value).iter().map(String::as_str),
			Self::Many(values) => values.as_slice().iter().map(String::as_str),
		}
	}
}

/// One config fragment: a `rules` severity mapping plus optional `extends`
/// and `overrides`. A "flat" config is an array of these.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFragment {
	#[serde(default)]
	pub rules: BTreeMap<String, Severity>,
	#[serde(default)]
	pub extends: Option<StringOrList>,
	#[serde(default)]
	pub overrides: Vec<OverrideFragment>,
	/// Optional human-readable description, shown in the configs list table.
	#[serde(default)]
	pub description: Option<String>,
}

/// An `overrides` entry. Only the rule severities and nested `extends`
/// matter for documentation purposes; file matchers are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverrideFragment {
	#[serde(default)]
	pub rules: BTreeMap<String, Severity>,
	#[serde(default)]
	pub extends: Option<StringOrList>,
}

/// A declared config: a single fragment or a flat array of fragments.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum ConfigSpec {
	Flat(Vec<ConfigFragment>),
	Single(ConfigFragment),
}

impl ConfigSpec {
	pub fn fragments(&self) -> &[ConfigFragment] {
		match self {
			Self::Flat(fragments) => fragments.as_slice(),
			Self::Single(fragment) => std::slice::from_ref(fragment),
		}
	}

	/// The first declared description across the config's fragments.
	pub fn description(&self) -> Option<&str> {
		self
			.fragments()
			.iter()
			.find_map(|fragment| fragment.description.as_deref())
	}
}

/// The `docs` block of a rule's metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDocs {
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub requires_type_checking: Option<bool>,
}

/// A rule's declarative metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMeta {
	#[serde(default)]
	pub docs: Option<RuleDocs>,
	/// Truthy when the rule is auto-fixable (`"code"`, `"whitespace"`, or a
	/// plain boolean in looser plugins).
	#[serde(default)]
	pub fixable: Option<Value>,
	#[serde(default)]
	pub has_suggestions: Option<bool>,
	/// Truthy when deprecated (boolean, or an object/string in newer styles).
	#[serde(default)]
	pub deprecated: Option<Value>,
	#[serde(default)]
	pub replaced_by: Vec<String>,
	#[serde(default)]
	pub schema: Option<Value>,
	#[serde(default)]
	pub r#type: Option<String>,
}

impl RuleMeta {
	pub fn is_fixable(&self) -> bool {
		is_truthy(self.fixable.as_ref())
	}

	pub fn is_deprecated(&self) -> bool {
		is_truthy(self.deprecated.as_ref())
	}

	pub fn has_suggestions(&self) -> bool {
		self.has_suggestions.unwrap_or(false)
	}

	pub fn requires_type_checking(&self) -> bool {
		self
			.docs
			.as_ref()
			.and_then(|docs| docs.requires_type_checking)
			.unwrap_or(false)
	}

	pub fn description(&self) -> Option<&str> {
		self.docs.as_ref().and_then(|docs| docs.description.as_deref())
	}
}

fn is_truthy(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) | Some(Value::Bool(false)) => false,
		Some(Value::String(s)) => !s.is_empty(),
		Some(_) => true,
	}
}

/// A rule as declared in the manifest.
///
/// Most rules are objects carrying a `meta` block. A rule may instead be a
/// legacy function-style entry (any value without extractable metadata);
/// those expose only a name and are excluded from doc-header generation,
/// but still count as rules.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum RuleModule {
	Structured {
		meta: RuleMeta,
		/// The raw manifest value, kept so arbitrary (possibly nested)
		/// properties can be read for split-by partitioning.
		raw: Value,
	},
	Legacy,
}

impl RuleModule {
	pub fn from_value(value: &Value) -> Self {
		if let Some(meta_value) = value.get("meta") {
			if let Ok(meta) = serde_json::from_value::<RuleMeta>(meta_value.clone()) {
				return Self::Structured {
					meta,
					raw: value.clone(),
				};
			}
		}

		Self::Legacy
	}

	pub fn meta(&self) -> Option<&RuleMeta> {
		match self {
			Self::Structured { meta, .. } => Some(meta),
			Self::Legacy => None,
		}
	}

	pub fn raw(&self) -> Option<&Value> {
		match self {
			Self::Structured { raw, .. } => Some(raw),
			Self::Legacy => None,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
struct PluginManifest {
	name: String,
	#[serde(default)]
	rules: BTreeMap<String, Value>,
	#[serde(default)]
	configs: BTreeMap<String, ConfigSpec>,
}

/// A loaded plugin: the declarative rule/config metadata this tool documents.
/// Read-only after load.
#[derive(Debug, Clone)]
pub struct Plugin {
	/// The package name from the manifest.
	pub name: String,
	/// Rules keyed by bare rule name.
	pub rules: BTreeMap<String, RuleModule>,
	/// Declared configs keyed by config name.
	pub configs: BTreeMap<String, ConfigSpec>,
	/// Directory containing the manifest, used to resolve local `extends`.
	pub root: PathBuf,
}

impl Plugin {
	/// Load a plugin manifest from a file, or from a directory containing one
	/// of the [`MANIFEST_FILE_CANDIDATES`].
	pub fn load(path: &Path) -> LintdocResult<Self> {
		let manifest_path = if path.is_dir() {
			MANIFEST_FILE_CANDIDATES
				.iter()
				.map(|candidate| path.join(candidate))
				.find(|candidate| candidate.is_file())
				.ok_or_else(|| LintdocError::ManifestMissing {
					path: path.display().to_string(),
				})?
		} else if path.is_file() {
			path.to_path_buf()
		} else {
			return Err(LintdocError::ManifestMissing {
				path: path.display().to_string(),
			});
		};

		let content =
			std::fs::read_to_string(&manifest_path).map_err(|e| LintdocError::PluginLoad {
				path: manifest_path.display().to_string(),
				reason: e.to_string(),
			})?;
		let value: Value =
			serde_json::from_str(&content).map_err(|e| LintdocError::PluginLoad {
				path: manifest_path.display().to_string(),
				reason: e.to_string(),
			})?;
		let root = manifest_path
			.parent()
			.map_or_else(|| PathBuf::from("."), Path::to_path_buf);

		Self::from_value(&value, root).map_err(|reason| LintdocError::PluginLoad {
			path: manifest_path.display().to_string(),
			reason,
		})
	}

	/// Build a plugin from an already-parsed manifest value.
	pub fn from_value(value: &Value, root: PathBuf) -> Result<Self, String> {
		let manifest: PluginManifest =
			serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
		let rules = manifest
			.rules
			.iter()
			.map(|(name, rule)| (name.clone(), RuleModule::from_value(rule)))
			.collect();

		Ok(Self {
			name: manifest.name,
			rules,
			configs: manifest.configs,
			root,
		})
	}

	/// The namespace string prepended to rule names when referenced from a
	/// config. Derived from the package name: `eslint-plugin-foo` becomes
	/// `foo`, `@scope/eslint-plugin` becomes `@scope`, and
	/// `@scope/eslint-plugin-foo` becomes `@scope/foo`.
	pub fn prefix(&self) -> String {
		if let Some((scope, rest)) = self.name.split_once('/') {
			if rest == "eslint-plugin" {
				return scope.to_string();
			}
			if let Some(bare) = rest.strip_prefix("eslint-plugin-") {
				return format!("{scope}/{bare}");
			}
			return self.name.clone();
		}

		self
			.name
			.strip_prefix("eslint-plugin-")
			.map_or_else(|| self.name.clone(), str::to_string)
	}
}

/// The per-rule projection the renderers work from. Computed once per
/// generation from structured rules; legacy rules carry no metadata and are
/// filtered out.
#[derive(Debug, Clone)]
pub struct RuleDetails {
	pub name: String,
	pub description: Option<String>,
	pub fixable: bool,
	pub has_suggestions: bool,
	pub requires_type_checking: bool,
	pub deprecated: bool,
	pub replaced_by: Vec<String>,
	pub r#type: Option<String>,
	pub schema: Option<Value>,
}

/// Project every structured rule into [`RuleDetails`], sorted
/// case-insensitively by name. Deprecated rules are dropped when
/// `ignore_deprecated` is set.
pub fn rule_details(plugin: &Plugin, ignore_deprecated: bool) -> Vec<RuleDetails> {
	let mut details: Vec<RuleDetails> = plugin
		.rules
		.iter()
		.filter_map(|(name, rule)| {
			let meta = rule.meta()?;
			Some(RuleDetails {
				name: name.clone(),
				description: meta.description().map(str::to_string),
				fixable: meta.is_fixable(),
				has_suggestions: meta.has_suggestions(),
				requires_type_checking: meta.requires_type_checking(),
				deprecated: meta.is_deprecated(),
				replaced_by: meta.replaced_by.clone(),
				r#type: meta.r#type.clone(),
				schema: meta.schema.clone(),
			})
		})
		.filter(|details| !(ignore_deprecated && details.deprecated))
		.collect();

	details.sort_by(|a, b| crate::compare_case_insensitive(&a.name, &b.name));
	details
}
