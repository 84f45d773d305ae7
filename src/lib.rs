//! Shade - wildcard-based package and class name rewriting.
//!
//! This library provides the pattern-matching core of a name-relocation
//! engine, including:
//! - Rules file parsing (`[[rules]]` tables with a pattern and an optional
//!   result template)
//! - Wildcard pattern compilation (`*` within a segment, `**` across
//!   segments) into anchored capturing expressions
//! - Result template compilation with `@N` capture-group placeholders
//! - Immutable matchers that test and rewrite fully qualified names
//!
//! # Example
//!
//! ```
//! use shade_cli::rules::WildcardMatcher;
//!
//! let matcher = WildcardMatcher::new("com.example.**", "org.shaded.@1").unwrap();
//! assert!(matcher.matches("com/example/Foo"));
//! assert_eq!(
//!     matcher.rewrite("com/example/Foo").as_deref(),
//!     Some("org/shaded/Foo"),
//! );
//! assert!(matcher.rewrite("net/other/Foo").is_none());
//! ```

pub mod config;
pub mod error;
pub mod rules;

pub use error::{Result, ShadeError};
