//! Injected wrapper: the explicit injection token
//!
//! A parameter typed `Injected<T>` says "this value comes from the registry"
//! — injection is declared by the type itself, never inferred from a
//! coincidental match between an annotation and a binding key. Callers that
//! want to supply the value themselves build the wrapper with
//! [`Injected::from_value`]; explicit supply always wins because resolution
//! simply never runs.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::DiResult;
use crate::registry::ProviderRegistry;

/// Shared handle to a dependency resolved from a [`ProviderRegistry`] (or
/// supplied directly by the caller).
///
/// # Examples
///
/// ```
/// use nuages_di::{Injected, ProviderRegistry};
///
/// #[derive(Debug, PartialEq)]
/// struct ApiKey(String);
///
/// fn authorize(key: Injected<ApiKey>) -> bool {
///     !key.0.is_empty()
/// }
///
/// let registry = ProviderRegistry::new();
/// registry.bind::<ApiKey, _>(|_| Ok(ApiKey("some-random-apikey".to_string())));
///
/// // Resolved from the registry...
/// let key = Injected::<ApiKey>::resolve(&registry).unwrap();
/// assert!(authorize(key));
///
/// // ...or supplied explicitly, which bypasses the registry entirely.
/// assert!(!authorize(Injected::from_value(ApiKey(String::new()))));
/// ```
pub struct Injected<T> {
	inner: Arc<T>,
}

impl<T: Send + Sync + 'static> Injected<T> {
	/// Resolves `T` from the registry. Fails if `T` is unbound.
	pub fn resolve(registry: &ProviderRegistry) -> DiResult<Self> {
		registry.get::<T>().map(|inner| Self { inner })
	}
}

impl<T> Injected<T> {
	/// Wraps a caller-supplied value; no registry is consulted.
	pub fn from_value(value: T) -> Self {
		Self {
			inner: Arc::new(value),
		}
	}

	/// Wraps an already-shared value; no registry is consulted.
	pub fn from_arc(inner: Arc<T>) -> Self {
		Self { inner }
	}

	/// Unwraps into the shared handle.
	pub fn into_arc(self) -> Arc<T> {
		self.inner
	}
}

impl<T> Deref for Injected<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.inner
	}
}

impl<T> Clone for Injected<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Injected<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Injected").field(&self.inner).finish()
	}
}

impl<T> From<T> for Injected<T> {
	fn from(value: T) -> Self {
		Self::from_value(value)
	}
}

impl<T> From<Arc<T>> for Injected<T> {
	fn from(inner: Arc<T>) -> Self {
		Self::from_arc(inner)
	}
}
