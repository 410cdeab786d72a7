//! # Nuages Dependency Injection
//!
//! A provider registry for binding interfaces to implementations, with
//! explicit, typed injection.
//!
//! Interfaces are types — typically `Arc<dyn Trait>` for an abstraction, or
//! a concrete type bound to itself. Providers are functions that build an
//! instance, resolving their own dependencies from the registry they are
//! invoked on.
//!
//! ## Example
//!
//! ```
//! use nuages_di::{DiResult, Injectable, ProviderRegistry};
//! use std::sync::Arc;
//!
//! trait UserRepo: Send + Sync {
//!     fn find(&self, id: &str) -> Option<String>;
//! }
//!
//! struct SqlUserRepo;
//!
//! impl UserRepo for SqlUserRepo {
//!     fn find(&self, _id: &str) -> Option<String> {
//!         Some("John".to_string())
//!     }
//! }
//!
//! struct UserService {
//!     repo: Arc<dyn UserRepo>,
//! }
//!
//! impl Injectable for UserService {
//!     fn inject(registry: &ProviderRegistry) -> DiResult<Self> {
//!         let repo = registry.get::<Arc<dyn UserRepo>>()?;
//!         Ok(UserService {
//!             repo: Arc::clone(&*repo),
//!         })
//!     }
//! }
//!
//! let registry = ProviderRegistry::new();
//! registry.bind::<Arc<dyn UserRepo>, _>(|_| Ok(Arc::new(SqlUserRepo) as Arc<dyn UserRepo>));
//! registry.add::<UserService>();
//!
//! let service = registry.get::<UserService>().unwrap();
//! assert_eq!(service.repo.find("1"), Some("John".to_string()));
//! ```
//!
//! A process-wide default registry backs the free functions in this crate
//! for ergonomic top-level use; constructing and passing a
//! [`ProviderRegistry`] explicitly is the primary API.

mod error;
mod injectable;
mod injected;
mod module;
mod registry;
mod resolve_stack;

pub use error::{DiError, DiResult};
pub use injectable::Injectable;
pub use injected::Injected;
pub use module::Module;
pub use registry::{BindingInfo, Provider, ProviderRegistry, ResolvePolicy, provider};

use once_cell::sync::Lazy;
use std::sync::Arc;

static DEFAULT_REGISTRY: Lazy<ProviderRegistry> = Lazy::new(ProviderRegistry::new);

/// The process-wide default registry backing the free functions below.
///
/// Lives for the life of the process; there is no teardown path for bound
/// singletons.
pub fn default_registry() -> &'static ProviderRegistry {
	&DEFAULT_REGISTRY
}

/// Binds an interface to a provider on the default registry.
///
/// # Examples
///
/// ```
/// struct Config {
///     debug: bool,
/// }
///
/// nuages_di::bind::<Config, _>(|_| Ok(Config { debug: false }));
/// assert!(!nuages_di::get::<Config>().unwrap().debug);
/// ```
pub fn bind<T, F>(provider: F)
where
	T: Send + Sync + 'static,
	F: Fn(&ProviderRegistry) -> DiResult<T> + Send + Sync + 'static,
{
	DEFAULT_REGISTRY.bind::<T, _>(provider);
}

/// Binds an interface to an already-constructed instance on the default
/// registry.
pub fn bind_value<T: Send + Sync + 'static>(value: T) {
	DEFAULT_REGISTRY.bind_value(value);
}

/// Binds an injectable type to itself on the default registry.
pub fn add<T: Injectable>() {
	DEFAULT_REGISTRY.add::<T>();
}

/// Resolves the instance bound to `T` on the default registry.
pub fn get<T: Send + Sync + 'static>() -> DiResult<Arc<T>> {
	DEFAULT_REGISTRY.get::<T>()
}

/// Whether the default registry has a binding for `T`.
pub fn contains<T: 'static>() -> bool {
	DEFAULT_REGISTRY.contains::<T>()
}

/// Applies a module's providers to the default registry.
pub fn install(module: &dyn Module) {
	DEFAULT_REGISTRY.install(module);
}

/// Binds `Vec<T>` on the default registry to a provider aggregating `impls`.
pub fn provide_many<T: Send + Sync + 'static>(impls: Vec<Provider<T>>) {
	DEFAULT_REGISTRY.provide_many(impls);
}

/// Applies a mixed list of bindings to a registry, in order.
///
/// Entries are either a bare injectable type (bound to itself, like
/// [`ProviderRegistry::add`]) or an `(Interface, provider)` pair (like
/// [`ProviderRegistry::bind`]). Later entries for the same key override
/// earlier ones.
///
/// # Examples
///
/// ```
/// use nuages_di::{DiResult, Injectable, ProviderRegistry, bind_all};
///
/// struct ApiKey(&'static str);
///
/// struct Clock;
///
/// impl Injectable for Clock {
///     fn inject(_registry: &ProviderRegistry) -> DiResult<Self> {
///         Ok(Clock)
///     }
/// }
///
/// let registry = ProviderRegistry::new();
/// bind_all!(
///     registry,
///     Clock,
///     (ApiKey, |_| Ok(ApiKey("some-random-apikey"))),
/// );
///
/// assert!(registry.contains::<Clock>());
/// assert_eq!(registry.get::<ApiKey>().unwrap().0, "some-random-apikey");
/// ```
#[macro_export]
macro_rules! bind_all {
	($registry:expr $(,)?) => {};
	($registry:expr, ($interface:ty, $provider:expr) $(, $($rest:tt)*)?) => {{
		$registry.bind::<$interface, _>($provider);
		$crate::bind_all!($registry $(, $($rest)*)?);
	}};
	($registry:expr, $provider:ty $(, $($rest:tt)*)?) => {{
		$registry.add::<$provider>();
		$crate::bind_all!($registry $(, $($rest)*)?);
	}};
}
