//! Schema-backed records
//!
//! The schema layer is serde plus the validators in this crate: serde gives
//! composite-record parsing and serialization to an attribute mapping, the
//! validators give field constraints, and [`ValidationError`] carries the
//! structured result.

use crate::error::{ValidationError, ValidationResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// A record that can be parsed from and serialized to an attribute mapping,
/// with optional field constraints.
///
/// # Examples
///
/// ```
/// use nuages_domain::validators::{MinLengthValidator, Validator};
/// use nuages_domain::{Schema, ValidationError, ValidationResult};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Serialize, Deserialize)]
/// struct User {
///     name: String,
/// }
///
/// impl Schema for User {
///     fn validate(&self) -> ValidationResult<()> {
///         let mut error = ValidationError::new();
///         if let Err(violation) = MinLengthValidator::new(1).validate(&self.name) {
///             error.push(violation.at("name"));
///         }
///         error.into_result()
///     }
/// }
///
/// let user = User::parse(json!({ "name": "John" })).unwrap();
/// assert_eq!(user.attrs()["name"], json!("John"));
///
/// assert!(User::parse(json!({ "name": "" })).is_err());
/// ```
pub trait Schema: Serialize + DeserializeOwned {
	/// Checks this record's field constraints.
	///
	/// The default implementation accepts everything; override it to chain
	/// validators over the record's fields, accumulating every violation.
	fn validate(&self) -> ValidationResult<()> {
		Ok(())
	}

	/// Deserializes a composite record from `value`, then validates it.
	fn parse(value: Value) -> ValidationResult<Self> {
		let record: Self =
			serde_json::from_value(value).map_err(|e| ValidationError::single("", e.to_string()))?;
		record.validate()?;
		Ok(record)
	}

	/// Serializes this record to its sorted (field name, value) attribute
	/// mapping.
	///
	/// Types that do not serialize to a JSON object yield an empty map;
	/// schema types are expected to be records with named fields.
	fn attrs(&self) -> BTreeMap<String, Value> {
		match serde_json::to_value(self) {
			Ok(Value::Object(map)) => map.into_iter().collect(),
			_ => BTreeMap::new(),
		}
	}
}
