use serde::Deserialize;

/// Top-level rule set from a rules TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleSet {
	/// Rename rules in declaration order. First matching rule wins.
	#[serde(default)]
	pub rules: Vec<RenameRule>,
}

/// A single rename rule: a wildcard pattern plus an optional result template.
///
/// The pattern uses dotted form (`com.example.**`). The result, when
/// present, interleaves literal text with `@N` placeholders referencing the
/// pattern's capture groups. A rule without a result matches names without
/// renaming them to anything; what that means is up to the consumer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RenameRule {
	/// Wildcard pattern to match fully qualified names.
	pub pattern: String,

	/// Result template for rewriting matched names.
	pub result: Option<String>,
}

impl RenameRule {
	/// Validate rule-local constraints that don't require compilation.
	pub fn validate(&self) -> Result<(), crate::error::ShadeError> {
		if self.pattern.is_empty() {
			return Err(crate::error::ShadeError::InvalidPattern {
				pattern: String::new(),
				reason: "pattern must not be empty".to_string(),
			});
		}
		Ok(())
	}
}

impl RuleSet {
	/// Validate all rules in this rule set.
	pub fn validate(&self) -> Result<(), crate::error::ShadeError> {
		for rule in &self.rules {
			rule.validate()?;
		}
		Ok(())
	}
}
