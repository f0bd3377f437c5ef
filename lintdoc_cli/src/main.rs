use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use lintdoc_core::CheckResult;
use lintdoc_core::ContentIssue;
use lintdoc_core::DocContext;
use lintdoc_core::Options;
use lintdoc_core::OptionsConfig;
use lintdoc_core::SeverityClass;
use lintdoc_core::check_docs;
use lintdoc_core::compute_updates;
use lintdoc_core::configs_setting_rule;
use lintdoc_core::find_config_emoji;
use lintdoc_core::write_updates;
use lintdoc_cli::Commands;
use lintdoc_cli::LintdocCli;
use lintdoc_cli::OutputFormat;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = LintdocCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.init();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Check { diff, format }) => run_check(&args, *diff, *format),
		Some(Commands::Update {
			dry_run,
			init_rule_docs,
		}) => run_update(&args, *dry_run, *init_rule_docs),
		Some(Commands::List { format }) => run_list(&args, *format),
		None => {
			eprintln!("No subcommand specified. Run `lintdoc --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<lintdoc_core::LintdocError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &LintdocCli) -> PathBuf {
	args
		.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Resolve options from `lintdoc.toml` with CLI flags layered on top, and
/// load the full generation context.
fn load_context(
	args: &LintdocCli,
	init_rule_docs: bool,
) -> Result<DocContext, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let file_config = OptionsConfig::load(&root)?.unwrap_or_default();
	let merged = file_config.merged_with(args.options_config(init_rule_docs));
	let options = Options::from_config(merged)?;
	let ctx = DocContext::load(&root, args.plugin.as_deref(), options)?;

	if args.verbose {
		println!(
			"Loaded plugin `{}`: {} rule(s), {} config(s)",
			ctx.plugin.name,
			ctx.plugin.rules.len(),
			ctx.plugin.configs.len()
		);
	}

	Ok(ctx)
}

fn run_check(
	args: &LintdocCli,
	show_diff: bool,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load_context(args, false)?;
	let root = resolve_root(args);
	let result = check_docs(&ctx)?;

	if result.is_ok() {
		match format {
			OutputFormat::Json => println!("{{\"ok\":true,\"stale\":[],\"issues\":[]}}"),
			OutputFormat::Text => println!("Check passed: all docs are up to date."),
		}
		return Ok(());
	}

	match format {
		OutputFormat::Json => {
			let stale: Vec<serde_json::Value> = result
				.stale
				.iter()
				.map(|entry| serde_json::json!({ "file": make_relative(&entry.path, &root) }))
				.collect();
			let issues: Vec<serde_json::Value> = result
				.issues
				.iter()
				.map(|issue| {
					serde_json::json!({
						"file": make_relative(&issue.file, &root),
						"rule": issue.rule,
						"message": issue.message(),
					})
				})
				.collect();
			println!(
				"{}",
				serde_json::json!({ "ok": false, "stale": stale, "issues": issues })
			);
		}
		OutputFormat::Text => {
			eprintln!("Check failed.");
			eprintln!("  stale docs: {}", result.stale.len());
			eprintln!("  content issues: {}", result.issues.len());

			if !result.stale.is_empty() {
				eprintln!();
				eprintln!("Stale docs:");
				for entry in sorted_stale(&result, &root) {
					eprintln!("  {}", make_relative(&entry.path, &root));
					if show_diff {
						print_diff(&entry.current, &entry.expected);
					}
				}
			}

			print_issues(&result.issues, &root);

			eprintln!();
			eprintln!("Run `lintdoc update` to fix stale docs.");
		}
	}

	process::exit(1);
}

fn sorted_stale<'a>(result: &'a CheckResult, root: &Path) -> Vec<&'a lintdoc_core::StaleDoc> {
	let mut stale: Vec<_> = result.stale.iter().collect();
	stale.sort_by(|a, b| make_relative(&a.path, root).cmp(&make_relative(&b.path, root)));
	stale
}

fn print_issues(issues: &[ContentIssue], root: &Path) {
	if issues.is_empty() {
		return;
	}

	let mut sorted: Vec<_> = issues.iter().collect();
	sorted.sort_by(|a, b| {
		make_relative(&a.file, root)
			.cmp(&make_relative(&b.file, root))
			.then_with(|| a.message().cmp(&b.message()))
	});

	eprintln!();
	eprintln!("Content issues:");
	for issue in sorted {
		let rel = make_relative(&issue.file, root);
		match &issue.rule {
			Some(rule) => eprintln!(
				"  {} {rel} (rule `{rule}`): {}",
				colored!("warning:", yellow),
				issue.message()
			),
			None => eprintln!("  {} {rel}: {}", colored!("warning:", yellow), issue.message()),
		}
	}
}

fn run_update(
	args: &LintdocCli,
	dry_run: bool,
	init_rule_docs: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load_context(args, init_rule_docs)?;
	let root = resolve_root(args);
	let updates = compute_updates(&ctx)?;

	print_issues(&updates.issues, &root);

	let stale = updates.stale_files();
	if stale.is_empty() {
		println!("All docs are already up to date.");
	} else if dry_run {
		println!("Dry run: would update {} file(s):", stale.len());
		let mut paths: Vec<String> = stale
			.iter()
			.map(|file| make_relative(&file.path, &root))
			.collect();
		paths.sort();
		for path in paths {
			println!("  {path}");
		}
	} else {
		let created = stale.iter().filter(|file| file.created).count();
		let written = write_updates(&updates)?;
		if created > 0 {
			println!("Updated {written} file(s) ({created} created).");
		} else {
			println!("Updated {written} file(s).");
		}

		if args.verbose {
			let mut paths: Vec<String> = stale
				.iter()
				.map(|file| make_relative(&file.path, &root))
				.collect();
			paths.sort();
			for path in paths {
				println!("  {path}");
			}
		}
	}

	if !updates.issues.is_empty() {
		process::exit(1);
	}

	Ok(())
}

fn run_list(args: &LintdocCli, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let ctx = load_context(args, false)?;

	if let OutputFormat::Json = format {
		let rules: Vec<serde_json::Value> = ctx
			.rules
			.iter()
			.map(|rule| {
				serde_json::json!({
					"name": rule.name,
					"deprecated": rule.deprecated,
					"enabledIn": severity_configs(&ctx, &rule.name, SeverityClass::Error),
					"warnsIn": severity_configs(&ctx, &rule.name, SeverityClass::Warn),
					"disabledIn": severity_configs(&ctx, &rule.name, SeverityClass::Off),
				})
			})
			.collect();
		let configs: Vec<&String> = ctx.plugin.configs.keys().collect();
		println!(
			"{}",
			serde_json::json!({ "plugin": ctx.plugin.name, "rules": rules, "configs": configs })
		);
		return Ok(());
	}

	if ctx.rules.is_empty() && ctx.plugin.configs.is_empty() {
		println!("No rules or configs found.");
		return Ok(());
	}

	if !ctx.rules.is_empty() {
		println!("{}", colored!("Rules:", bold));
		for rule in &ctx.rules {
			let mut markers: Vec<String> = Vec::new();
			if rule.deprecated {
				markers.push("deprecated".to_string());
			}
			let enabled = severity_configs(&ctx, &rule.name, SeverityClass::Error);
			if !enabled.is_empty() {
				markers.push(format!("error in {}", enabled.join(", ")));
			}
			let warns = severity_configs(&ctx, &rule.name, SeverityClass::Warn);
			if !warns.is_empty() {
				markers.push(format!("warn in {}", warns.join(", ")));
			}
			let off = severity_configs(&ctx, &rule.name, SeverityClass::Off);
			if !off.is_empty() {
				markers.push(format!("off in {}", off.join(", ")));
			}

			if markers.is_empty() {
				println!("  {}/{}", ctx.prefix, rule.name);
			} else {
				println!("  {}/{} [{}]", ctx.prefix, rule.name, markers.join("; "));
			}
		}
	}

	if !ctx.plugin.configs.is_empty() {
		if !ctx.rules.is_empty() {
			println!();
		}
		println!("{}", colored!("Configs:", bold));
		for config in ctx.plugin.configs.keys() {
			match find_config_emoji(&ctx.config_emojis, config, false) {
				Some(emoji) => println!("  {emoji} {config}"),
				None => println!("  {config}"),
			}
		}
	}

	println!(
		"\n{} rule(s), {} config(s)",
		ctx.rules.len(),
		ctx.plugin.configs.len()
	);

	Ok(())
}

fn severity_configs(ctx: &DocContext, rule_name: &str, severity: SeverityClass) -> Vec<String> {
	configs_setting_rule(&ctx.configs_to_rules, &ctx.prefix, rule_name, Some(severity))
		.into_iter()
		.map(str::to_string)
		.collect()
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path
		.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
