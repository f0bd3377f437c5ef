//! Flattens a plugin's declared configs into an effective rule-severity
//! mapping per config, resolving flat-config arrays, local `extends`
//! files, and `overrides` with assignment semantics (later wins).

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::ConfigFragment;
use crate::ConfigSpec;
use crate::LintdocError;
use crate::LintdocResult;
use crate::Plugin;
use crate::Severity;
use crate::StringOrList;

/// Effective rule severities for one config, keyed by fully-qualified rule
/// name (`prefix/rule-name`).
pub type RuleSeverities = BTreeMap<String, Severity>;

/// Flattened mapping from config name to its effective rule severities.
pub type ConfigsToRules = BTreeMap<String, RuleSeverities>;

/// Recursion cap for local `extends` chains. The limit exists purely to
/// turn circular references into a reportable error.
const MAX_EXTENDS_DEPTH: usize = 32;

/// Resolve every declared config into its effective rule-severity mapping.
///
/// `extends` entries referencing other plugins or the core linter
/// (`plugin:…`, `eslint:…`) or that do not resolve to an existing local
/// file are ignored — their rules are external and unknowable. Local
/// extends files load recursively and merge in before the extending
/// config's own `rules` and `overrides`, so local rules take precedence.
pub fn resolve_configs_to_rules(plugin: &Plugin) -> LintdocResult<ConfigsToRules> {
	let mut configs_to_rules = ConfigsToRules::new();

	for (config_name, spec) in &plugin.configs {
		let mut rules = RuleSeverities::new();
		for fragment in spec.fragments() {
			resolve_fragment(fragment, &plugin.root, config_name, 0, &mut rules)?;
		}
		debug!(config = %config_name, rules = rules.len(), "resolved config");
		configs_to_rules.insert(config_name.clone(), rules);
	}

	Ok(configs_to_rules)
}

fn resolve_fragment(
	fragment: &ConfigFragment,
	base_dir: &Path,
	config_name: &str,
	depth: usize,
	into: &mut RuleSeverities,
) -> LintdocResult<()> {
	if depth > MAX_EXTENDS_DEPTH {
		return Err(LintdocError::ExtendsDepth {
			config: config_name.to_string(),
		});
	}

	resolve_extends(fragment.extends.as_ref(), base_dir, config_name, depth, into)?;

	for (rule, severity) in &fragment.rules {
		into.insert(rule.clone(), severity.clone());
	}

	for override_fragment in &fragment.overrides {
		resolve_extends(
			override_fragment.extends.as_ref(),
			base_dir,
			config_name,
			depth,
			into,
		)?;
		for (rule, severity) in &override_fragment.rules {
			into.insert(rule.clone(), severity.clone());
		}
	}

	Ok(())
}

fn resolve_extends(
	extends: Option<&StringOrList>,
	base_dir: &Path,
	config_name: &str,
	depth: usize,
	into: &mut RuleSeverities,
) -> LintdocResult<()> {
	let Some(extends) = extends else {
		return Ok(());
	};

	for reference in extends.iter() {
		if is_external_reference(reference) {
			continue;
		}

		let path = base_dir.join(reference);
		if !path.is_file() {
			// Not an existing local file: an external reference in disguise.
			continue;
		}

		let content = std::fs::read_to_string(&path).map_err(|e| LintdocError::ExtendsLoad {
			path: path.display().to_string(),
			reason: e.to_string(),
		})?;
		let spec: ConfigSpec =
			serde_json::from_str(&content).map_err(|e| LintdocError::ExtendsLoad {
				path: path.display().to_string(),
				reason: e.to_string(),
			})?;

		let extended_base = path.parent().unwrap_or(base_dir).to_path_buf();
		for fragment in spec.fragments() {
			resolve_fragment(fragment, &extended_base, config_name, depth + 1, into)?;
		}
	}

	Ok(())
}

/// References to the core linter or other plugins carry a conventional
/// prefix and are never loadable local files.
fn is_external_reference(reference: &str) -> bool {
	reference.starts_with("plugin:") || reference.starts_with("eslint:")
}
