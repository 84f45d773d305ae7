use crate::config::types::RuleSet;
use crate::error::{Result, ShadeError};
use std::path::Path;

/// Parse a rules file from the given path.
pub fn parse_rules_file(path: &Path) -> Result<RuleSet> {
	let content = std::fs::read_to_string(path).map_err(|source| ShadeError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_rules_str(&content, path)
}

/// Parse a rule set from a string (useful for testing).
pub fn parse_rules_str(content: &str, path: &Path) -> Result<RuleSet> {
	let rules: RuleSet = toml::from_str(content).map_err(|source| ShadeError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})?;

	// Validate the parsed rule set
	rules.validate()?;

	Ok(rules)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_rules_file() {
		let path = PathBuf::from("rules.toml");
		let rules = parse_rules_str("", &path).unwrap();
		assert!(rules.rules.is_empty());
	}

	#[test]
	fn test_parse_rules_array_of_tables() {
		let content = r#"
[[rules]]
pattern = "com.example.**"
result = "org.shaded.@1"

[[rules]]
pattern = "com.internal.*"
"#;
		let path = PathBuf::from("rules.toml");
		let rules = parse_rules_str(content, &path).unwrap();

		assert_eq!(rules.rules.len(), 2);

		let rule1 = &rules.rules[0];
		assert_eq!(rule1.pattern, "com.example.**");
		assert_eq!(rule1.result, Some("org.shaded.@1".to_string()));

		let rule2 = &rules.rules[1];
		assert_eq!(rule2.pattern, "com.internal.*");
		assert!(rule2.result.is_none());
	}

	#[test]
	fn test_parse_rules_inline_tables() {
		let content = r#"
rules = [
    { pattern = "com.example.**", result = "org.shaded.@1" },
    { pattern = "net.example.*" },
]
"#;
		let path = PathBuf::from("rules.toml");
		let rules = parse_rules_str(content, &path).unwrap();

		assert_eq!(rules.rules.len(), 2);
	}

	#[test]
	fn test_parse_invalid_toml() {
		let path = PathBuf::from("rules.toml");
		let result = parse_rules_str("rules = wat", &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			ShadeError::ConfigParseError { path, .. } => {
				assert_eq!(path, PathBuf::from("rules.toml"));
			}
			other => panic!("Expected ConfigParseError, got {other:?}"),
		}
	}

	#[test]
	fn test_empty_pattern_is_rejected() {
		let content = r#"
[[rules]]
pattern = ""
result = "org.@1"
"#;
		let path = PathBuf::from("rules.toml");
		let result = parse_rules_str(content, &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			ShadeError::InvalidPattern { reason, .. } => {
				assert!(reason.contains("empty"));
			}
			other => panic!("Expected InvalidPattern, got {other:?}"),
		}
	}
}
