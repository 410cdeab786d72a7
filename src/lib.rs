//! # Nuages
//!
//! Dependency injection and domain-modeling primitives for Rust.
//!
//! Nuages is two small libraries behind one facade:
//!
//! - [`di`] — a provider registry binding interface keys to factory
//!   functions, with memoized (singleton-per-key) resolution by default,
//!   explicit typed injection, and a declarative module system applied at
//!   startup.
//! - [`domain`] — schema-backed records, immutable value objects compared by
//!   their attributes, constrained scalar primitives, and Django-style
//!   validators.
//!
//! ## Example
//!
//! ```
//! use nuages::di::{DiResult, Injectable, ProviderRegistry};
//! use std::sync::Arc;
//!
//! trait Mailer: Send + Sync {
//!     fn send(&self, to: &str) -> bool;
//! }
//!
//! struct SmtpMailer;
//!
//! impl Mailer for SmtpMailer {
//!     fn send(&self, _to: &str) -> bool {
//!         true
//!     }
//! }
//!
//! struct SignupService {
//!     mailer: Arc<dyn Mailer>,
//! }
//!
//! impl Injectable for SignupService {
//!     fn inject(registry: &ProviderRegistry) -> DiResult<Self> {
//!         let mailer = registry.get::<Arc<dyn Mailer>>()?;
//!         Ok(SignupService {
//!             mailer: Arc::clone(&*mailer),
//!         })
//!     }
//! }
//!
//! let registry = ProviderRegistry::new();
//! registry.bind::<Arc<dyn Mailer>, _>(|_| Ok(Arc::new(SmtpMailer) as Arc<dyn Mailer>));
//! registry.add::<SignupService>();
//!
//! let signup = registry.get::<SignupService>().unwrap();
//! assert!(signup.mailer.send("john@example.com"));
//! ```

pub use nuages_di as di;
pub use nuages_domain as domain;

pub use nuages_di::{
	BindingInfo, DiError, DiResult, Injectable, Injected, Module, Provider, ProviderRegistry,
	ResolvePolicy,
};
pub use nuages_domain::{
	Password, Primitive, Schema, ValidationError, ValidationResult, ValueObject, Violation,
};
