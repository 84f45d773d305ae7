use std::path::PathBuf;

/// Library-level structured errors for shade.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
///
/// Every variant is a construction-time failure. Once a matcher compiles,
/// `matches`/`rewrite` report non-matches as `false`/`None`, never as errors.
#[derive(Debug, thiserror::Error)]
pub enum ShadeError {
	#[error("Failed to read rules file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rules file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid pattern `{pattern}`: {reason}")]
	InvalidPattern { pattern: String, reason: String },

	#[error("Invalid expression compiled from pattern `{pattern}`")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Malformed result template `{template}`: {reason}")]
	MalformedTemplate { template: String, reason: String },

	#[error(
		"Result template `{template}` references group @{index}, but the pattern defines only {available} capture group(s)"
	)]
	UnsatisfiableReference {
		template: String,
		index: usize,
		available: usize,
	},
}

/// Result type alias using ShadeError.
pub type Result<T> = std::result::Result<T, ShadeError>;
