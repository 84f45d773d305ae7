/// Extra characters permitted in pattern text: the internal separator plus
/// the wildcard character.
pub const PATTERN_EXTRA: &[char] = &['/', '*'];

/// Extra characters permitted in match targets: the internal separator only.
pub const NAME_EXTRA: &[char] = &['/'];

/// Reserved unit name that is legal in qualified names even though it is not
/// itself a valid identifier (the `-` would otherwise be rejected).
pub const PACKAGE_INFO: &str = "package-info";

/// Check whether `value` is plausibly a qualified identifier path.
///
/// Every character must be an identifier constituent or a member of
/// `extra_allowed`. A trailing `package-info` is stripped before the check.
pub fn is_plausible_qualified_name(value: &str, extra_allowed: &[char]) -> bool {
	let value = value.strip_suffix(PACKAGE_INFO).unwrap_or(value);
	value
		.chars()
		.all(|c| is_identifier_part(c) || extra_allowed.contains(&c))
}

/// Identifier constituent characters: letters, digits, underscore, and the
/// currency sign used by synthetic and inner-class names.
fn is_identifier_part(c: char) -> bool {
	c.is_alphanumeric() || c == '_' || c == '$'
}
