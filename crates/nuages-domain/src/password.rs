//! Password primitive
//!
//! A password is a string with a minimum length of 8 characters. Hashing
//! uses Argon2id.

use crate::error::{ValidationError, ValidationResult};
use crate::primitive::Primitive;
use crate::validators::{MinLengthValidator, Validator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum accepted password length.
const MIN_LENGTH: usize = 8;

/// A validated password.
///
/// # Examples
///
/// ```
/// use nuages_domain::{Password, Primitive};
///
/// assert!(Password::parse("1234567".to_string()).is_err());
/// let password = Password::parse("12345678".to_string()).unwrap();
///
/// let hashed = password.encrypt().unwrap();
/// assert!(password.compare(&hashed).unwrap());
/// assert!(!Password::verify("abcdefghi", &hashed).unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Password(String);

/// Errors from the hashing side of [`Password`].
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
	/// The plaintext failed the password constraints.
	#[error(transparent)]
	Invalid(#[from] ValidationError),
	/// Hashing or hash parsing failed.
	#[error("password hashing failed: {0}")]
	Hash(String),
}

impl Primitive for Password {
	type Inner = String;

	fn check(value: &String) -> ValidationResult<()> {
		MinLengthValidator::new(MIN_LENGTH)
			.validate(value)
			.map_err(|violation| violation.at("password").into())
	}

	fn from_validated(value: String) -> Self {
		Self(value)
	}
}

impl Password {
	/// The plaintext value.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Validates `plain` and hashes it with Argon2id.
	pub fn hash(plain: &str) -> Result<String, PasswordError> {
		Self::parse(plain.to_owned())?.encrypt()
	}

	/// Hashes this password with Argon2id.
	pub fn encrypt(&self) -> Result<String, PasswordError> {
		use argon2::{
			Argon2,
			password_hash::{PasswordHasher as _, SaltString},
		};
		use rand::RngCore;

		let mut salt_bytes = [0u8; 16];
		rand::thread_rng().fill_bytes(&mut salt_bytes);

		let salt =
			SaltString::encode_b64(&salt_bytes).map_err(|e| PasswordError::Hash(e.to_string()))?;

		Argon2::default()
			.hash_password(self.0.as_bytes(), &salt)
			.map(|hash| hash.to_string())
			.map_err(|e| PasswordError::Hash(e.to_string()))
	}

	/// Whether `plain` matches the Argon2 hash `hashed`.
	///
	/// `Ok(false)` means the password does not match; `Err` means `hashed`
	/// is not a parseable hash string.
	pub fn verify(plain: &str, hashed: &str) -> Result<bool, PasswordError> {
		use argon2::{
			Argon2,
			password_hash::{PasswordHash, PasswordVerifier},
		};

		let parsed_hash = PasswordHash::new(hashed).map_err(|e| PasswordError::Hash(e.to_string()))?;

		Ok(Argon2::default()
			.verify_password(plain.as_bytes(), &parsed_hash)
			.is_ok())
	}

	/// Whether this password matches `hashed`.
	pub fn compare(&self, hashed: &str) -> Result<bool, PasswordError> {
		Self::verify(&self.0, hashed)
	}
}

// The plaintext never appears in Debug output.
impl fmt::Debug for Password {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Password(\"********\")")
	}
}

impl Serialize for Password {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

/// Deserialization validates, so a `Password` field inside a composite
/// record is checked when the record is parsed.
impl<'de> Deserialize<'de> for Password {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = String::deserialize(deserializer)?;
		Password::parse(value).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_short_passwords_with_a_structured_violation() {
		let err = Password::parse("1234567".to_string()).unwrap_err();
		let violation = &err.violations()[0];
		assert_eq!(violation.path, "password");
		assert!(violation.message.contains("at least 8 characters"));
	}

	#[test]
	fn debug_redacts_the_plaintext() {
		let password = Password::parse("12345678".to_string()).unwrap();
		assert_eq!(format!("{password:?}"), "Password(\"********\")");
	}
}
