use crate::config::types::RenameRule;
use crate::error::Result;
use crate::rules::matcher::{CompiledPattern, compile_pattern};
use crate::rules::name::{NAME_EXTRA, is_plausible_qualified_name};
use crate::rules::rewriter::{TemplatePart, compile_template};

/// A compiled rename rule: one wildcard pattern paired with one result
/// template, validated together at construction.
///
/// Immutable after construction; matching and rewriting keep all scratch
/// state local to the call, so a matcher can be shared freely across
/// threads.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
	/// The compiled wildcard pattern.
	pattern: CompiledPattern,

	/// The compiled result template.
	parts: Vec<TemplatePart>,
}

impl WildcardMatcher {
	/// Compile a dotted wildcard pattern and a result template into a
	/// matcher. The template's group references are validated against the
	/// capture groups the pattern defines.
	///
	/// An empty template is valid and rewrites every match to the empty
	/// string; callers decide what that means.
	pub fn new(pattern: &str, result: &str) -> Result<Self> {
		let pattern = compile_pattern(pattern)?;
		let parts = compile_template(result, pattern.group_count)?;
		Ok(WildcardMatcher { pattern, parts })
	}

	/// Compile a matcher from a rename rule, using an empty template when
	/// the rule carries no result.
	pub fn from_rule(rule: &RenameRule) -> Result<Self> {
		Self::new(&rule.pattern, rule.result.as_deref().unwrap_or(""))
	}

	/// Check whether `value` matches this rule's pattern in full.
	///
	/// Values containing wildcard characters, dots, or anything else that
	/// cannot appear in a qualified name never match.
	pub fn matches(&self, value: &str) -> bool {
		is_plausible_qualified_name(value, NAME_EXTRA) && self.pattern.regex.is_match(value)
	}

	/// Rewrite `value` through this rule's template.
	///
	/// Returns `None` exactly when `matches` returns false. On a match the
	/// template parts are concatenated in order, substituting the captured
	/// text for each group reference.
	pub fn rewrite(&self, value: &str) -> Option<String> {
		if !is_plausible_qualified_name(value, NAME_EXTRA) {
			return None;
		}
		let caps = self.pattern.regex.captures(value)?;

		let mut out = String::new();
		for part in &self.parts {
			match part {
				TemplatePart::Literal(text) => out.push_str(text),
				TemplatePart::GroupRef(index) => {
					// A relaxed trailing group may not participate in the
					// match; it substitutes as empty text.
					out.push_str(caps.get(*index).map_or("", |m| m.as_str()));
				}
			}
		}
		Some(out)
	}
}

/// Compile all rules into matchers, preserving input order.
pub fn compile_matchers(rules: &[RenameRule]) -> Result<Vec<WildcardMatcher>> {
	rules.iter().map(WildcardMatcher::from_rule).collect()
}

/// Rewrite `value` through the first matching rule, if any.
pub fn rewrite_first(matchers: &[WildcardMatcher], value: &str) -> Option<String> {
	matchers.iter().find_map(|m| m.rewrite(value))
}
