//! String validators

use crate::error::Violation;
use crate::validators::Validator;
use regex::Regex;

/// Minimum length validator
pub struct MinLengthValidator {
	min: usize,
}

impl MinLengthValidator {
	/// Creates a new MinLengthValidator with the specified minimum length.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_domain::validators::{MinLengthValidator, Validator};
	///
	/// let validator = MinLengthValidator::new(5);
	/// assert!(validator.validate("hello").is_ok());
	/// assert!(validator.validate("hi").is_err());
	/// ```
	pub fn new(min: usize) -> Self {
		Self { min }
	}
}

impl Validator<str> for MinLengthValidator {
	fn validate(&self, value: &str) -> Result<(), Violation> {
		if value.len() >= self.min {
			Ok(())
		} else {
			Err(Violation::new(format!(
				"ensure this value has at least {} characters (it has {})",
				self.min,
				value.len()
			)))
		}
	}
}

impl Validator<String> for MinLengthValidator {
	fn validate(&self, value: &String) -> Result<(), Violation> {
		Validator::<str>::validate(self, value)
	}
}

/// Maximum length validator
pub struct MaxLengthValidator {
	max: usize,
}

impl MaxLengthValidator {
	/// Creates a new MaxLengthValidator with the specified maximum length.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_domain::validators::{MaxLengthValidator, Validator};
	///
	/// let validator = MaxLengthValidator::new(10);
	/// assert!(validator.validate("hello").is_ok());
	/// assert!(validator.validate("hello world!").is_err());
	/// ```
	pub fn new(max: usize) -> Self {
		Self { max }
	}
}

impl Validator<str> for MaxLengthValidator {
	fn validate(&self, value: &str) -> Result<(), Violation> {
		if value.len() <= self.max {
			Ok(())
		} else {
			Err(Violation::new(format!(
				"ensure this value has at most {} characters (it has {})",
				self.max,
				value.len()
			)))
		}
	}
}

impl Validator<String> for MaxLengthValidator {
	fn validate(&self, value: &String) -> Result<(), Violation> {
		Validator::<str>::validate(self, value)
	}
}

/// Regex validator
pub struct RegexValidator {
	regex: Regex,
	message: String,
}

impl RegexValidator {
	/// Creates a new RegexValidator with the specified regex pattern.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_domain::validators::{RegexValidator, Validator};
	///
	/// let validator = RegexValidator::new(r"^\d{3}-\d{4}$").unwrap();
	/// assert!(validator.validate("123-4567").is_ok());
	/// assert!(validator.validate("invalid").is_err());
	/// ```
	pub fn new(pattern: &str) -> Result<Self, regex::Error> {
		Ok(Self {
			regex: Regex::new(pattern)?,
			message: "enter a valid value".to_string(),
		})
	}

	/// Replaces the default violation message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = message.into();
		self
	}
}

impl Validator<str> for RegexValidator {
	fn validate(&self, value: &str) -> Result<(), Violation> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			Err(Violation::new(self.message.clone()))
		}
	}
}

impl Validator<String> for RegexValidator {
	fn validate(&self, value: &String) -> Result<(), Violation> {
		Validator::<str>::validate(self, value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn min_length_reports_actual_length() {
		let violation = MinLengthValidator::new(8).validate("short").unwrap_err();
		assert_eq!(
			violation.message,
			"ensure this value has at least 8 characters (it has 5)"
		);
	}

	#[test]
	fn regex_message_is_customizable() {
		let validator = RegexValidator::new(r"^[a-z]+$")
			.unwrap()
			.with_message("lowercase letters only");
		let violation = validator.validate("Nope").unwrap_err();
		assert_eq!(violation.message, "lowercase letters only");
	}
}
