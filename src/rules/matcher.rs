use crate::error::{Result, ShadeError};
use crate::rules::name::{PATTERN_EXTRA, is_plausible_qualified_name};
use regex::Regex;

/// Capture group compiled from `**`: one or more of any character, lazily,
/// so it can span segment boundaries.
const DSTAR_GROUP: &str = "(.+?)";

/// Capture group compiled from a single `*`: one or more non-separator
/// characters, confined to a single segment.
const STAR_GROUP: &str = "([^/]+)";

/// A wildcard pattern compiled to an anchored capturing expression.
///
/// The expression only ever matches a candidate string in full; partial
/// matches are impossible. `group_count` is the number of capture groups the
/// wildcards introduced, which bounds the references a result template may
/// use.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
	/// The anchored matching expression.
	pub regex: Regex,

	/// Number of capture groups defined by the pattern's wildcards.
	pub group_count: usize,
}

/// Compile a dotted wildcard pattern (e.g. `com.example.**`) into an
/// anchored capturing expression.
///
/// `*` matches within a single segment, `**` may span segments, and a
/// trailing `**` may also match nothing at all, so `com.example.**` covers
/// `com/example` itself as well as everything beneath it.
///
/// # Errors
///
/// Returns `InvalidPattern` if the pattern is `**` alone, contains a raw
/// `/` (patterns are written with dots), contains characters that cannot
/// appear in a qualified name, or contains a run of three or more `*`.
pub fn compile_pattern(pattern: &str) -> Result<CompiledPattern> {
	if pattern == "**" {
		return Err(invalid(pattern, "`**` alone is not a valid pattern"));
	}
	if pattern.contains('/') {
		return Err(invalid(pattern, "patterns use dots, not slashes"));
	}

	// Authors write dotted names; matching happens on the separator form.
	let converted = pattern.replace('.', "/");

	if !is_plausible_qualified_name(&converted, PATTERN_EXTRA) {
		return Err(invalid(pattern, "not a valid package or class pattern"));
	}
	if converted.contains("***") {
		return Err(invalid(pattern, "the sequence `***` is invalid"));
	}

	let mut expr = String::with_capacity(converted.len() + 16);
	let mut literal = String::new();
	let mut group_count = 0;
	let mut ends_with_dstar = false;

	let mut chars = converted.chars().peekable();
	while let Some(c) = chars.next() {
		if c == '*' {
			expr.push_str(&regex::escape(&literal));
			literal.clear();
			group_count += 1;
			if chars.next_if_eq(&'*').is_some() {
				expr.push_str(DSTAR_GROUP);
				ends_with_dstar = true;
			} else {
				expr.push_str(STAR_GROUP);
				ends_with_dstar = false;
			}
		} else {
			literal.push(c);
			ends_with_dstar = false;
		}
	}
	expr.push_str(&regex::escape(&literal));

	if ends_with_dstar {
		// A trailing `**` must also match a name with no sub-path: relax the
		// final group to zero-or-more, and when the `**` follows a separator
		// make the separator optional with it, so `com.**` matches `com`.
		expr.truncate(expr.len() - DSTAR_GROUP.len());
		if expr.ends_with('/') {
			expr.pop();
			expr.push_str("(?:/(.*?))?");
		} else {
			expr.push_str("(.*?)");
		}
	}

	let anchored = format!("^{expr}$");
	let regex = Regex::new(&anchored).map_err(|source| ShadeError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})?;

	Ok(CompiledPattern { regex, group_count })
}

fn invalid(pattern: &str, reason: &str) -> ShadeError {
	ShadeError::InvalidPattern {
		pattern: pattern.to_string(),
		reason: reason.to_string(),
	}
}
