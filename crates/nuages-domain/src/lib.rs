//! # Nuages Domain
//!
//! Domain-modeling base types: schema-backed records, immutable value
//! objects, constrained primitives, and the validators behind them.
//!
//! ## Example
//!
//! ```
//! use nuages_domain::{Schema, ValidationResult, ValueObject};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
//! struct DateRange {
//!     start: String,
//!     end: String,
//! }
//!
//! impl Schema for DateRange {}
//! impl ValueObject for DateRange {}
//!
//! let a = DateRange {
//!     start: "2024-01-01".to_string(),
//!     end: "2024-01-31".to_string(),
//! };
//! assert_eq!(a, a.clone_value());
//! ```

mod error;
mod password;
mod primitive;
mod schema;
mod value_object;
pub mod validators;

pub use error::{ValidationError, ValidationResult, Violation};
pub use password::{Password, PasswordError};
pub use primitive::Primitive;
pub use schema::Schema;
pub use value_object::ValueObject;
