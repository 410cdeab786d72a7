//! Value-object equality, hashing and cloning

use nuages_domain::{Schema, ValidationError, ValidationResult, ValueObject};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct Money {
	amount: i64,
	currency: String,
}

impl Money {
	fn new(amount: i64, currency: &str) -> ValidationResult<Self> {
		let money = Money {
			amount,
			currency: currency.to_string(),
		};
		money.validate()?;
		Ok(money)
	}
}

impl Schema for Money {
	fn validate(&self) -> ValidationResult<()> {
		if self.currency.len() == 3 {
			Ok(())
		} else {
			Err(ValidationError::single(
				"currency",
				"enter a 3-letter currency code",
			))
		}
	}
}

impl ValueObject for Money {}

fn hash_of<T: Hash>(value: &T) -> u64 {
	let mut hasher = DefaultHasher::new();
	value.hash(&mut hasher);
	hasher.finish()
}

#[test]
fn identical_field_values_compare_equal_across_construction_paths() {
	let constructed = Money::new(100, "EUR").unwrap();
	let parsed = Money::parse(json!({ "amount": 100, "currency": "EUR" })).unwrap();

	assert_eq!(constructed, parsed);
	assert_eq!(hash_of(&constructed), hash_of(&parsed));
}

#[test]
fn different_field_values_are_not_equal() {
	let eur = Money::new(100, "EUR").unwrap();
	let usd = Money::new(100, "USD").unwrap();
	assert_ne!(eur, usd);
}

#[test]
fn usable_as_a_set_member() {
	let mut seen = HashSet::new();
	seen.insert(Money::new(100, "EUR").unwrap());

	assert!(seen.contains(&Money::new(100, "EUR").unwrap()));
	assert!(!seen.contains(&Money::new(101, "EUR").unwrap()));
}

#[test]
fn clone_value_is_an_independent_equal_copy() {
	let original = Money::new(250, "GBP").unwrap();
	let copy = original.clone_value();
	assert_eq!(original, copy);
	assert_eq!(copy.attrs(), original.attrs());
}

#[test]
fn attrs_lists_fields_in_sorted_order() {
	let money = Money::new(42, "EUR").unwrap();
	let keys: Vec<_> = money.attrs().into_keys().collect();
	assert_eq!(keys, vec!["amount".to_string(), "currency".to_string()]);
}

#[test]
fn invalid_records_fail_construction_and_parse_alike() {
	assert!(Money::new(100, "EURO").is_err());

	let err = Money::parse(json!({ "amount": 100, "currency": "EURO" })).unwrap_err();
	assert_eq!(err.violations()[0].path, "currency");
}

#[test]
fn parse_rejects_malformed_records() {
	let err = Money::parse(json!({ "amount": "not-a-number", "currency": "EUR" })).unwrap_err();
	assert!(!err.violations().is_empty());
}
