//! Injectable trait for dependencies

use crate::error::DiResult;
use crate::registry::ProviderRegistry;

/// How a type constructs itself out of a registry.
///
/// `inject` is the constructor-injection seam: the implementation resolves
/// whatever the type depends on from the registry it is given. Registering
/// the type with [`ProviderRegistry::add`] makes `inject` its provider.
///
/// # Examples
///
/// ```
/// use nuages_di::{DiResult, Injectable, ProviderRegistry};
/// use std::sync::Arc;
///
/// struct Config {
///     greeting: &'static str,
/// }
///
/// struct Greeter {
///     config: Arc<Config>,
/// }
///
/// impl Injectable for Greeter {
///     fn inject(registry: &ProviderRegistry) -> DiResult<Self> {
///         Ok(Greeter {
///             config: registry.get::<Config>()?,
///         })
///     }
/// }
///
/// let registry = ProviderRegistry::new();
/// registry.bind_value(Config { greeting: "bonjour" });
/// registry.add::<Greeter>();
///
/// let greeter = registry.get::<Greeter>().unwrap();
/// assert_eq!(greeter.config.greeting, "bonjour");
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
	fn inject(registry: &ProviderRegistry) -> DiResult<Self>;
}

/// Blanket implementation for `Arc<T>`: injects `T`, then wraps it.
impl<T> Injectable for std::sync::Arc<T>
where
	T: Injectable,
{
	fn inject(registry: &ProviderRegistry) -> DiResult<Self> {
		T::inject(registry).map(std::sync::Arc::new)
	}
}
