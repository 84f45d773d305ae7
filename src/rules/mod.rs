//! Wildcard rename rules: pattern compilation, template compilation, and
//! the matcher/rewriter that pairs them.
//!
//! This module handles:
//! - Validating qualified names and pattern text
//! - Compiling dotted glob patterns into anchored capturing expressions
//! - Compiling result templates into literal/group-reference parts
//! - Matching and rewriting fully qualified names

pub mod matcher;
pub mod name;
pub mod rewriter;
pub mod wildcard;

pub use matcher::{CompiledPattern, compile_pattern};
pub use name::{NAME_EXTRA, PATTERN_EXTRA, is_plausible_qualified_name};
pub use rewriter::{TemplatePart, compile_template};
pub use wildcard::{WildcardMatcher, compile_matchers, rewrite_first};
