//! Password validation and Argon2 hashing

use nuages_domain::{Password, PasswordError, Primitive, Schema};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[test]
fn eight_characters_is_the_cutoff() {
	assert!(!Password::is_valid(&"1234567".to_string()));
	assert!(Password::is_valid(&"12345678".to_string()));
}

#[test]
fn hash_and_verify_round_trip() {
	let hashed = Password::hash("12345678").unwrap();
	assert!(Password::verify("12345678", &hashed).unwrap());
	assert!(!Password::verify("abcdefghi", &hashed).unwrap());
}

#[test]
fn compare_matches_own_hash() {
	let password = Password::parse("correct horse battery".to_string()).unwrap();
	let hashed = password.encrypt().unwrap();
	assert!(password.compare(&hashed).unwrap());
}

#[test]
fn hashing_an_invalid_password_fails_validation() {
	let err = Password::hash("1234567").unwrap_err();
	assert!(matches!(err, PasswordError::Invalid(_)));
}

#[test]
fn two_hashes_of_the_same_password_differ_by_salt() {
	let first = Password::hash("12345678").unwrap();
	let second = Password::hash("12345678").unwrap();
	assert_ne!(first, second);
	assert!(Password::verify("12345678", &first).unwrap());
	assert!(Password::verify("12345678", &second).unwrap());
}

#[test]
fn verifying_against_garbage_is_an_error_not_a_mismatch() {
	let err = Password::verify("12345678", "not-a-phc-string").unwrap_err();
	assert!(matches!(err, PasswordError::Hash(_)));
}

#[derive(Debug, Serialize, Deserialize)]
struct Credentials {
	username: String,
	password: Password,
}

impl Schema for Credentials {}

#[test]
fn password_fields_validate_when_the_record_is_parsed() {
	let ok = Credentials::parse(json!({ "username": "john", "password": "12345678" }));
	assert!(ok.is_ok());

	let err = Credentials::parse(json!({ "username": "john", "password": "1234567" })).unwrap_err();
	assert!(err.violations()[0].message.contains("at least 8 characters"));
}
