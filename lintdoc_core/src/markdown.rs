//! The marker engine: locating begin/end marker comment pairs (or a
//! best-guess section header) in a document and regenerating the content
//! between them without disturbing the surrounding text, plus the
//! line-oriented table and text helpers the renderers share.
//!
//! All functions here operate on `\n`-normalized text; the configured line
//! separator is applied once when a document is written back.

use std::path::Path;

use crate::LintdocError;
use crate::LintdocResult;

/// Normalize CRLF/CR line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
	if content.contains('\r') {
		content.replace("\r\n", "\n").replace('\r', "\n")
	} else {
		content.to_string()
	}
}

/// Apply the configured line separator to `\n`-normalized content.
pub fn apply_line_ending(content: &str, line_ending: &str) -> String {
	if line_ending == "\n" {
		content.to_string()
	} else {
		content.replace('\n', line_ending)
	}
}

/// Find the best-guess section header for a keyword: scan all second-level
/// headers containing the keyword case-insensitively. A unique match wins;
/// among multiple matches the shortest header string is most likely the
/// canonical section.
pub fn find_section_header<'a>(markdown: &'a str, keyword: &str) -> Option<&'a str> {
	let keyword = keyword.to_lowercase();
	let matches: Vec<&str> = markdown
		.lines()
		.filter(|line| line.starts_with("## ") && line.to_lowercase().contains(&keyword))
		.collect();

	match matches.len() {
		0 => None,
		1 => Some(matches[0]),
		_ => matches.into_iter().min_by_key(|line| line.len()),
	}
}

/// Replace a rule doc's generated header block, preserving YAML front
/// matter and anything else ahead of the title.
///
/// The replaced region runs from just below the front matter (a `---`
/// fence pair opening on line 0) or the first `# ` title line, through the
/// end-marker line, the title line, or the closing fence, whichever is
/// lowest. With none of the three present the new header is prepended.
pub fn replace_or_create_header(
	contents: &str,
	new_header_lines: &[String],
	end_marker: &str,
) -> String {
	let lines: Vec<&str> = contents.split('\n').collect();

	let title_index = lines
		.iter()
		.position(|line| line.starts_with("# "))
		.map_or(-1, |index| index as isize);
	let marker_index = lines
		.iter()
		.position(|line| line.trim() == end_marker)
		.map_or(-1, |index| index as isize);
	let fence_close_index = if lines.first() == Some(&"---") {
		lines
			.iter()
			.skip(1)
			.position(|line| *line == "---")
			.map_or(-1, |index| index as isize + 1)
	} else {
		-1
	};

	let pre_end = title_index.max(fence_close_index + 1).max(0) as usize;
	let post_start = (marker_index + 1)
		.max(title_index + 1)
		.max(fence_close_index + 1)
		.max(0) as usize;

	let mut result: Vec<&str> = Vec::with_capacity(lines.len() + new_header_lines.len());
	result.extend(&lines[..pre_end.min(lines.len())]);
	result.extend(new_header_lines.iter().map(String::as_str));

	let post = &lines[post_start.min(lines.len())..];
	// Keep one blank line between the header block and the doc body.
	if post.first().is_some_and(|line| !line.trim().is_empty()) {
		result.push("");
	}
	result.extend(post);

	result.join("\n")
}

/// Replace the content strictly between a begin/end marker pair.
///
/// When the pair is absent, fall back to splicing a fresh marker pair
/// directly under the best-guess section header for `section_keyword`; the
/// old section body is preserved below the new end marker. When that also
/// fails the document cannot be updated and the error names both markers.
pub fn replace_marked_region(
	contents: &str,
	begin_marker: &str,
	end_marker: &str,
	new_content: &str,
	section_keyword: Option<&str>,
	path: &Path,
) -> LintdocResult<String> {
	let begin_index = contents.find(begin_marker);
	let end_index = contents.find(end_marker);

	if let (Some(begin), Some(end)) = (begin_index, end_index) {
		if begin <= end {
			let pre = &contents[..begin];
			let post = &contents[end..];
			return Ok(format!("{pre}{begin_marker}\n\n{new_content}\n\n{post}"));
		}
	}

	if let Some(keyword) = section_keyword {
		if let Some(header) = find_section_header(contents, keyword) {
			// `find_section_header` returns a full line, so the match is at
			// the line start.
			let header_start = contents
				.find(header)
				.unwrap_or_default();
			let header_end = header_start + header.len();
			let pre = &contents[..header_end];
			let post = &contents[header_end..];
			return Ok(format!(
				"{pre}\n\n{begin_marker}\n\n{new_content}\n\n{end_marker}{post}"
			));
		}
	}

	Err(LintdocError::MissingMarkers {
		path: path.display().to_string(),
		begin: begin_marker.to_string(),
		end: end_marker.to_string(),
	})
}

/// Escape text destined for a table cell. Markdown tables are
/// line-oriented, so embedded pipes and newlines must not survive.
pub fn escape_table_cell(text: &str) -> String {
	text.replace('|', "\\|").replace('\n', "<br/>")
}

/// Format rows (first row is the header) as a pipe table with per-column
/// width padding.
pub fn format_table(rows: &[Vec<String>]) -> String {
	let Some(header) = rows.first() else {
		return String::new();
	};

	let mut widths = vec![3usize; header.len()];
	for row in rows {
		for (index, cell) in row.iter().enumerate() {
			if index < widths.len() {
				widths[index] = widths[index].max(cell.chars().count());
			}
		}
	}

	let format_row = |row: &[String]| {
		let cells: Vec<String> = row
			.iter()
			.zip(&widths)
			.map(|(cell, width)| {
				let padding = width.saturating_sub(cell.chars().count());
				format!("{cell}{}", " ".repeat(padding))
			})
			.collect();
		format!("| {} |", cells.join(" | "))
	};

	let mut lines = Vec::with_capacity(rows.len() + 1);
	lines.push(format_row(header));
	lines.push(format!(
		"| {} |",
		widths
			.iter()
			.map(|width| "-".repeat(*width))
			.collect::<Vec<_>>()
			.join(" | ")
	));
	for row in &rows[1..] {
		lines.push(format_row(row));
	}

	lines.join("\n")
}

/// Capitalize only the first character.
pub fn sentence_case(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// Strip a single trailing period. Titles never end in one.
pub fn strip_trailing_period(text: &str) -> &str {
	text.strip_suffix('.').unwrap_or(text)
}

/// Convert a camelCase identifier to Title Case
/// (`requiresTypeChecking` becomes `Requires Type Checking`).
pub fn camel_to_title_case(identifier: &str) -> String {
	let mut words: Vec<String> = Vec::new();
	let mut current = String::new();

	for ch in identifier.chars() {
		if ch.is_uppercase() && !current.is_empty() {
			words.push(current);
			current = String::new();
		}
		current.push(ch);
	}
	if !current.is_empty() {
		words.push(current);
	}

	words
		.iter()
		.map(|word| sentence_case(word))
		.collect::<Vec<_>>()
		.join(" ")
}

/// A relative markdown link from one file to another, both given relative
/// to the same root.
pub fn relative_link(from_file: &Path, to_file: &Path) -> String {
	let from_components: Vec<&str> = from_file
		.parent()
		.map(|parent| {
			parent
				.components()
				.filter_map(|component| component.as_os_str().to_str())
				.collect()
		})
		.unwrap_or_default();
	let to_components: Vec<&str> = to_file
		.components()
		.filter_map(|component| component.as_os_str().to_str())
		.collect();

	let common = from_components
		.iter()
		.zip(&to_components)
		.take_while(|(a, b)| a == b)
		.count();

	let mut parts: Vec<&str> = Vec::new();
	for _ in common..from_components.len() {
		parts.push("..");
	}
	parts.extend(&to_components[common..]);
	parts.join("/")
}
