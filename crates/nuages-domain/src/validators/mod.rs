//! Django-style validators for field constraints
//!
//! Each validator checks one constraint and reports a [`Violation`] with an
//! empty path; the caller pins the path with [`Violation::at`] when the
//! value sits inside a record.

pub mod email;
pub mod numeric;
pub mod string;

pub use email::EmailValidator;
pub use numeric::{MaxValueValidator, MinValueValidator, RangeValidator};
pub use string::{MaxLengthValidator, MinLengthValidator, RegexValidator};

use crate::error::Violation;

/// Trait for validators
pub trait Validator<T: ?Sized> {
	fn validate(&self, value: &T) -> Result<(), Violation>;
}
