//! Schema parsing and attribute serialization

use nuages_domain::validators::{EmailValidator, MinLengthValidator, Validator};
use nuages_domain::{Schema, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize, Deserialize)]
struct Account {
	name: String,
	email: String,
}

impl Schema for Account {
	fn validate(&self) -> ValidationResult<()> {
		let mut error = ValidationError::new();
		if let Err(violation) = MinLengthValidator::new(1).validate(&self.name) {
			error.push(violation.at("name"));
		}
		if let Err(violation) = EmailValidator::new().validate(&self.email) {
			error.push(violation.at("email"));
		}
		error.into_result()
	}
}

#[test]
fn parse_accepts_a_valid_record() {
	let account = Account::parse(json!({ "name": "John", "email": "john@example.com" })).unwrap();
	assert_eq!(account.name, "John");
}

#[test]
fn parse_reports_every_violated_field() {
	let err = Account::parse(json!({ "name": "", "email": "nope" })).unwrap_err();
	let paths: Vec<_> = err.violations().iter().map(|v| v.path.as_str()).collect();
	assert_eq!(paths, vec!["name", "email"]);
}

#[test]
fn parse_rejects_a_missing_field() {
	let err = Account::parse(json!({ "name": "John" })).unwrap_err();
	assert!(err.violations()[0].message.contains("email"));
}

#[test]
fn attrs_round_trips_through_parse() {
	let account = Account::parse(json!({ "name": "John", "email": "john@example.com" })).unwrap();
	let attrs = account.attrs();
	assert_eq!(attrs["name"], json!("John"));
	assert_eq!(attrs["email"], json!("john@example.com"));

	let rebuilt = Account::parse(serde_json::to_value(&account).unwrap()).unwrap();
	assert_eq!(rebuilt.attrs(), attrs);
}
