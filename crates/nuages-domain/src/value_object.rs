//! Value objects
//!
//! Value objects are immutable records compared by their attributes, not by
//! identity: two instances with the same field values are equal, hash
//! identically, and can stand in for each other as map keys or set members.

use crate::schema::Schema;
use std::hash::Hash;

/// Contract trait for immutable, structurally-compared records.
///
/// Equality and hashing are derived over the record's declared field set —
/// `#[derive(Clone, PartialEq, Eq, Hash)]` on the implementing type is the
/// mechanism, so the compiler keeps both in sync with the fields. The sorted
/// (field name, value) view of the same data is observable through
/// [`Schema::attrs`].
///
/// Immutability is structural: fields stay private and values are built
/// through validating constructors, so mutation attempts fail at compile
/// time rather than at runtime.
///
/// # Examples
///
/// ```
/// use nuages_domain::{Schema, ValidationError, ValidationResult, ValueObject};
/// use serde::{Deserialize, Serialize};
/// use std::collections::HashSet;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl Money {
///     fn new(amount: i64, currency: &str) -> ValidationResult<Self> {
///         let money = Money {
///             amount,
///             currency: currency.to_string(),
///         };
///         money.validate()?;
///         Ok(money)
///     }
/// }
///
/// impl Schema for Money {
///     fn validate(&self) -> ValidationResult<()> {
///         if self.currency.len() == 3 {
///             Ok(())
///         } else {
///             Err(ValidationError::single("currency", "enter a 3-letter currency code"))
///         }
///     }
/// }
///
/// impl ValueObject for Money {}
///
/// let a = Money::new(100, "EUR").unwrap();
/// let b = Money::new(100, "EUR").unwrap();
/// assert_eq!(a, b);
///
/// let mut seen = HashSet::new();
/// seen.insert(a.clone_value());
/// assert!(seen.contains(&b));
/// ```
pub trait ValueObject: Schema + Clone + PartialEq + Eq + Hash {
	/// An independent copy with identical field values.
	fn clone_value(&self) -> Self {
		self.clone()
	}
}
