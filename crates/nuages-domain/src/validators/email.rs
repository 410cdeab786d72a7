//! Email validator

use crate::error::Violation;
use crate::validators::Validator;
use regex::Regex;

// One non-empty local part, one @, one dotted domain. Full RFC 5322 address
// grammar is out of scope.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Email address validator
pub struct EmailValidator {
	regex: Regex,
}

impl EmailValidator {
	/// Creates a new EmailValidator.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_domain::validators::{EmailValidator, Validator};
	///
	/// let validator = EmailValidator::new();
	/// assert!(validator.validate("user@example.com").is_ok());
	/// assert!(validator.validate("not-an-email").is_err());
	/// ```
	pub fn new() -> Self {
		Self {
			regex: Regex::new(EMAIL_PATTERN).expect("hardcoded email pattern is valid"),
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}

impl Validator<str> for EmailValidator {
	fn validate(&self, value: &str) -> Result<(), Violation> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			Err(Violation::new("enter a valid email address"))
		}
	}
}

impl Validator<String> for EmailValidator {
	fn validate(&self, value: &String) -> Result<(), Violation> {
		Validator::<str>::validate(self, value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("user@example.com", true)]
	#[case("first.last@sub.example.org", true)]
	#[case("missing-at.example.com", false)]
	#[case("two@@example.com", false)]
	#[case("no-domain@", false)]
	#[case("", false)]
	fn validates_addresses(#[case] input: &str, #[case] valid: bool) {
		assert_eq!(EmailValidator::new().validate(input).is_ok(), valid);
	}
}
