//! Structured validation errors

use std::fmt;

/// A single violated constraint: the field path it was found at, and a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
	/// Path of the offending field. Empty for a bare scalar or a
	/// record-level violation.
	pub path: String,
	/// What went wrong.
	pub message: String,
}

impl Violation {
	/// Creates a violation with an empty path.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			path: String::new(),
			message: message.into(),
		}
	}

	/// Pins the violation to a field path.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_domain::Violation;
	///
	/// let violation = Violation::new("must not be blank").at("name");
	/// assert_eq!(violation.to_string(), "name: must not be blank");
	/// ```
	pub fn at(mut self, path: impl Into<String>) -> Self {
		self.path = path.into();
		self
	}
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.path.is_empty() {
			write!(f, "{}", self.message)
		} else {
			write!(f, "{}: {}", self.path, self.message)
		}
	}
}

/// An enumerable collection of [`Violation`]s.
///
/// Produced by schema and primitive validation; a failed parse reports every
/// violated constraint, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
	violations: Vec<Violation>,
}

impl ValidationError {
	/// Creates an empty error to accumulate violations into.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an error holding a single violation.
	pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			violations: vec![Violation::new(message).at(path)],
		}
	}

	/// Appends one violation.
	pub fn push(&mut self, violation: Violation) {
		self.violations.push(violation);
	}

	/// Absorbs all violations from `other`.
	pub fn merge(&mut self, other: ValidationError) {
		self.violations.extend(other.violations);
	}

	/// The violations, in the order they were recorded.
	pub fn violations(&self) -> &[Violation] {
		&self.violations
	}

	pub fn is_empty(&self) -> bool {
		self.violations.is_empty()
	}

	/// `Ok(())` if no violations were recorded, `Err(self)` otherwise.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_domain::{ValidationError, Violation};
	///
	/// let mut error = ValidationError::new();
	/// assert!(error.clone().into_result().is_ok());
	///
	/// error.push(Violation::new("too short").at("password"));
	/// assert!(error.into_result().is_err());
	/// ```
	pub fn into_result(self) -> ValidationResult<()> {
		if self.is_empty() { Ok(()) } else { Err(self) }
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "validation failed")?;
		for violation in &self.violations {
			write!(f, "\n  {violation}")?;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationError {}

impl From<Violation> for ValidationError {
	fn from(violation: Violation) -> Self {
		Self {
			violations: vec![violation],
		}
	}
}

pub type ValidationResult<T> = Result<T, ValidationError>;
