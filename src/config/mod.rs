//! Rules-file loading and parsing for shade.
//!
//! This module handles:
//! - TOML rules file parsing
//! - Rule-local validation before compilation

pub mod parser;
pub mod types;

pub use parser::{parse_rules_file, parse_rules_str};
pub use types::{RenameRule, RuleSet};
