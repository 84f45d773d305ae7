use crate::error::{Result, ShadeError};

/// One piece of a compiled result template.
///
/// Tagged so substitution needs no runtime type checks: a part is either
/// text emitted verbatim or a reference to a capture group of the paired
/// pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
	/// Literal text, already converted to the internal separator form.
	Literal(String),

	/// Capture group reference. Index 0 names the whole matched name.
	GroupRef(usize),
}

/// Scanner states for template parsing.
#[derive(Clone, Copy)]
enum State {
	Normal,
	Escape,
}

/// Compile a result template (e.g. `org.shaded.@1`) into an ordered part
/// sequence, validated against the paired pattern's capture-group count.
///
/// Literal runs have `.` converted to `/`. A placeholder is `@` followed by
/// one or more decimal digits; the first non-digit character ends the
/// placeholder and is re-examined as literal text.
///
/// # Errors
///
/// Returns `MalformedTemplate` if an `@` is not followed by a digit, and
/// `UnsatisfiableReference` if any placeholder names a group beyond
/// `group_count` (checked once after parsing, reporting the highest index).
pub fn compile_template(template: &str, group_count: usize) -> Result<Vec<TemplatePart>> {
	let bytes = template.as_bytes();
	let mut parts = Vec::new();
	let mut max_group = 0;
	let mut state = State::Normal;
	let mut mark = 0;
	let mut i = 0;

	// One position past the end acts as a sentinel `@`: it flushes a trailing
	// literal run and terminates a trailing placeholder.
	while i <= bytes.len() {
		let ch = if i == bytes.len() { b'@' } else { bytes[i] };
		match state {
			State::Normal => {
				if ch == b'@' {
					if i > mark {
						parts.push(TemplatePart::Literal(template[mark..i].replace('.', "/")));
					}
					mark = i + 1;
					state = State::Escape;
				}
			}
			State::Escape => {
				if !ch.is_ascii_digit() {
					if i == mark {
						return Err(malformed(template, "`@` not followed by a digit"));
					}
					let digits = &template[mark..i];
					let index: usize = digits.parse().map_err(|_| {
						malformed(template, &format!("group reference @{digits} is out of range"))
					})?;
					max_group = max_group.max(index);
					parts.push(TemplatePart::GroupRef(index));
					mark = i;
					state = State::Normal;
					// Re-examine this character as the start of a literal run
					continue;
				}
			}
		}
		i += 1;
	}

	if max_group > group_count {
		return Err(ShadeError::UnsatisfiableReference {
			template: template.to_string(),
			index: max_group,
			available: group_count,
		});
	}

	Ok(parts)
}

fn malformed(template: &str, reason: &str) -> ShadeError {
	ShadeError::MalformedTemplate {
		template: template.to_string(),
		reason: reason.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::TemplatePart::{GroupRef, Literal};

	fn literal(text: &str) -> TemplatePart {
		Literal(text.to_string())
	}

	#[test]
	fn test_empty_template_has_no_parts() {
		assert_eq!(compile_template("", 0).unwrap(), vec![]);
	}

	#[test]
	fn test_literal_template_converts_dots() {
		let parts = compile_template("org.example.Renamed", 0).unwrap();
		assert_eq!(parts, vec![literal("org/example/Renamed")]);
	}

	#[test]
	fn test_placeholder_after_literal() {
		let parts = compile_template("org.shaded.@1", 1).unwrap();
		assert_eq!(parts, vec![literal("org/shaded/"), GroupRef(1)]);
	}

	#[test]
	fn test_literal_resumes_after_placeholder() {
		let parts = compile_template("a@1b.c", 1).unwrap();
		assert_eq!(parts, vec![literal("a"), GroupRef(1), literal("b/c")]);
	}

	#[test]
	fn test_adjacent_placeholders() {
		let parts = compile_template("@1@2", 2).unwrap();
		assert_eq!(parts, vec![GroupRef(1), GroupRef(2)]);
	}

	#[test]
	fn test_multi_digit_placeholder() {
		let parts = compile_template("@12", 12).unwrap();
		assert_eq!(parts, vec![GroupRef(12)]);
	}

	#[test]
	fn test_group_zero_names_the_whole_match() {
		let parts = compile_template("prefix.@0", 0).unwrap();
		assert_eq!(parts, vec![literal("prefix/"), GroupRef(0)]);
	}

	#[test]
	fn test_trailing_escape_is_malformed() {
		match compile_template("org.example.@", 3).unwrap_err() {
			ShadeError::MalformedTemplate { reason, .. } => {
				assert!(reason.contains("digit"));
			}
			other => panic!("Expected MalformedTemplate, got {other:?}"),
		}
	}

	#[test]
	fn test_escape_before_non_digit_is_malformed() {
		assert!(compile_template("@x", 3).is_err());
		assert!(compile_template("org.@example", 3).is_err());
	}

	#[test]
	fn test_reference_beyond_group_count_is_unsatisfiable() {
		match compile_template("@2", 1).unwrap_err() {
			ShadeError::UnsatisfiableReference { index, available, .. } => {
				assert_eq!(index, 2);
				assert_eq!(available, 1);
			}
			other => panic!("Expected UnsatisfiableReference, got {other:?}"),
		}
	}

	#[test]
	fn test_unsatisfiable_reference_reports_highest_index() {
		match compile_template("@1.@7.@3", 2).unwrap_err() {
			ShadeError::UnsatisfiableReference { index, .. } => assert_eq!(index, 7),
			other => panic!("Expected UnsatisfiableReference, got {other:?}"),
		}
	}

	#[test]
	fn test_reference_at_group_count_is_satisfiable() {
		assert!(compile_template("@2", 2).is_ok());
	}
}
