//! Module declarations
//!
//! A module is a named group of providers, optionally built on top of other
//! modules. Declaring a module does nothing by itself; bindings are applied
//! when startup code calls [`ProviderRegistry::install`], so binding side
//! effects are visible and ordered.
//!
//! [`ProviderRegistry::install`]: crate::ProviderRegistry::install

use crate::registry::ProviderRegistry;

/// A named group of providers.
///
/// `imports` lists the submodules this module builds on. The list is
/// metadata: installing a module applies only its own `providers`, never the
/// imports'. A caller that needs an import's bindings installs it
/// explicitly — typically before the importing module, so later bindings
/// override earlier ones in a predictable order.
///
/// # Examples
///
/// ```
/// use nuages_di::{Module, ProviderRegistry};
///
/// struct Config {
///     name: &'static str,
/// }
///
/// struct AppModule;
///
/// impl Module for AppModule {
///     fn name(&self) -> &'static str {
///         "app"
///     }
///
///     fn providers(&self, registry: &ProviderRegistry) {
///         registry.bind::<Config, _>(|_| Ok(Config { name: "app" }));
///     }
/// }
///
/// let registry = ProviderRegistry::new();
/// registry.install(&AppModule);
/// assert_eq!(registry.get::<Config>().unwrap().name, "app");
/// ```
pub trait Module: Send + Sync {
	/// Name of this module, used in logs.
	fn name(&self) -> &'static str;

	/// Performs this module's bindings against the given registry.
	fn providers(&self, registry: &ProviderRegistry);

	/// Submodules this module builds on. Not installed automatically.
	fn imports(&self) -> Vec<Box<dyn Module>> {
		Vec::new()
	}
}
