//! Provider registry
//!
//! The registry maps interface keys (the [`TypeId`] of the bound type) to
//! provider functions, and optionally memoizes the instances those providers
//! produce. Trait-object interfaces are bound as `Arc<dyn Trait>`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace, warn};

use crate::error::{DiError, DiResult};
use crate::injectable::Injectable;
use crate::module::Module;
use crate::resolve_stack;

/// Instance produced by a provider, stored type-erased.
type AnyInstance = Arc<dyn Any + Send + Sync>;

/// Provider stored in the binding table, type-erased.
type AnyProvider = Arc<dyn Fn(&ProviderRegistry) -> DiResult<AnyInstance> + Send + Sync>;

/// Boxed provider for a concrete interface, as accepted by
/// [`ProviderRegistry::provide_many`].
pub type Provider<T> = Box<dyn Fn(&ProviderRegistry) -> DiResult<T> + Send + Sync>;

/// Box a closure into a [`Provider`].
///
/// # Examples
///
/// ```
/// use nuages_di::{provider, ProviderRegistry};
///
/// struct Greeter(&'static str);
///
/// let hello = provider(|_: &ProviderRegistry| Ok(Greeter("hello")));
/// ```
pub fn provider<T, F>(f: F) -> Provider<T>
where
	F: Fn(&ProviderRegistry) -> DiResult<T> + Send + Sync + 'static,
{
	Box::new(f)
}

/// How `get` treats previously resolved instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
	/// Singleton-per-key: the first resolution of a key is cached and every
	/// later `get` returns the same instance without re-invoking the provider.
	#[default]
	Memoize,
	/// Invoke the bound provider on every `get`; repeated resolution of the
	/// same key produces independent instances.
	Factory,
}

struct BindingEntry {
	type_name: &'static str,
	provider: AnyProvider,
}

/// Read-only snapshot of one binding, for introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingInfo {
	/// Name of the bound interface type.
	pub type_name: &'static str,
	/// Whether an instance has been memoized for this key.
	pub memoized: bool,
}

/// Mapping from interface keys to providers, with optional instance
/// memoization.
///
/// Intended usage is bind-at-startup, resolve-afterwards. The two internal
/// maps are guarded by [`RwLock`]s because a process-wide registry must be
/// `Sync`; the library itself is synchronous and makes no further
/// concurrency promises.
///
/// # Examples
///
/// ```
/// use nuages_di::ProviderRegistry;
///
/// struct Config {
///     debug: bool,
/// }
///
/// let registry = ProviderRegistry::new();
/// registry.bind::<Config, _>(|_| Ok(Config { debug: true }));
///
/// let config = registry.get::<Config>().unwrap();
/// assert!(config.debug);
/// ```
pub struct ProviderRegistry {
	policy: ResolvePolicy,
	bindings: RwLock<HashMap<TypeId, BindingEntry>>,
	instances: RwLock<HashMap<TypeId, AnyInstance>>,
}

impl ProviderRegistry {
	/// Creates an empty registry with the [`ResolvePolicy::Memoize`] policy.
	pub fn new() -> Self {
		Self::with_policy(ResolvePolicy::Memoize)
	}

	/// Creates an empty registry that re-invokes providers on every `get`.
	///
	/// This is the explicit opt-out of singleton-per-key semantics.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_di::ProviderRegistry;
	///
	/// struct Ticket(u64);
	///
	/// let registry = ProviderRegistry::factory();
	/// registry.bind::<Ticket, _>(|_| Ok(Ticket(7)));
	///
	/// let a = registry.get::<Ticket>().unwrap();
	/// let b = registry.get::<Ticket>().unwrap();
	/// assert!(!std::sync::Arc::ptr_eq(&a, &b));
	/// ```
	pub fn factory() -> Self {
		Self::with_policy(ResolvePolicy::Factory)
	}

	/// Creates an empty registry with the given resolve policy.
	pub fn with_policy(policy: ResolvePolicy) -> Self {
		Self {
			policy,
			bindings: RwLock::new(HashMap::new()),
			instances: RwLock::new(HashMap::new()),
		}
	}

	/// The policy this registry was constructed with.
	pub fn policy(&self) -> ResolvePolicy {
		self.policy
	}

	/// Binds the interface `T` to a provider, overwriting any previous
	/// binding for the same key. Returns `&Self` for chaining.
	///
	/// The provider receives the registry it is invoked on, so it can resolve
	/// its own dependencies. Rebinding a key discards any instance memoized
	/// for it; later `get`s observe only the latest provider.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_di::ProviderRegistry;
	/// use std::sync::Arc;
	///
	/// trait Repo: Send + Sync {
	///     fn all(&self) -> Vec<String>;
	/// }
	///
	/// struct SqlRepo;
	///
	/// impl Repo for SqlRepo {
	///     fn all(&self) -> Vec<String> {
	///         vec!["john".to_string()]
	///     }
	/// }
	///
	/// let registry = ProviderRegistry::new();
	/// registry.bind::<Arc<dyn Repo>, _>(|_| Ok(Arc::new(SqlRepo) as Arc<dyn Repo>));
	///
	/// let repo = registry.get::<Arc<dyn Repo>>().unwrap();
	/// assert_eq!(repo.all(), vec!["john".to_string()]);
	/// ```
	pub fn bind<T, F>(&self, provider: F) -> &Self
	where
		T: Send + Sync + 'static,
		F: Fn(&ProviderRegistry) -> DiResult<T> + Send + Sync + 'static,
	{
		let erased: AnyProvider = Arc::new(move |registry: &ProviderRegistry| {
			provider(registry).map(|value| Arc::new(value) as AnyInstance)
		});
		self.bind_erased(TypeId::of::<T>(), std::any::type_name::<T>(), erased)
	}

	/// Binds the interface `T` to an already-constructed instance.
	///
	/// The same instance is returned on every `get`, under either policy.
	pub fn bind_value<T>(&self, value: T) -> &Self
	where
		T: Send + Sync + 'static,
	{
		let shared = Arc::new(value);
		let erased: AnyProvider =
			Arc::new(move |_: &ProviderRegistry| Ok(Arc::clone(&shared) as AnyInstance));
		self.bind_erased(TypeId::of::<T>(), std::any::type_name::<T>(), erased)
	}

	/// Binds `T` to itself: [`Injectable::inject`] becomes the provider.
	///
	/// Used when the interface and the implementation are the same
	/// constructible type and no abstraction layer is needed.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_di::{DiResult, Injectable, ProviderRegistry};
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
	/// registry.add::<Clock>();
	/// assert!(registry.contains::<Clock>());
	/// ```
	pub fn add<T: Injectable>(&self) -> &Self {
		self.bind::<T, _>(T::inject)
	}

	fn bind_erased(&self, key: TypeId, type_name: &'static str, provider: AnyProvider) -> &Self {
		let replaced = {
			let mut bindings = self.bindings.write().unwrap_or_else(PoisonError::into_inner);
			bindings
				.insert(key, BindingEntry { type_name, provider })
				.is_some()
		};
		if replaced {
			let mut instances = self.instances.write().unwrap_or_else(PoisonError::into_inner);
			if instances.remove(&key).is_some() {
				warn!(type_name, "rebinding discarded a memoized instance");
			}
		}
		debug!(type_name, "bound provider");
		self
	}

	/// Resolves the instance bound to `T`.
	///
	/// Under [`ResolvePolicy::Memoize`] the first resolution invokes the
	/// provider and caches the result; later calls return the cached
	/// instance. Under [`ResolvePolicy::Factory`] the provider runs on every
	/// call. A key with no binding fails with [`DiError::UnboundProvider`].
	pub fn get<T>(&self) -> DiResult<Arc<T>>
	where
		T: Send + Sync + 'static,
	{
		let key = TypeId::of::<T>();
		let type_name = std::any::type_name::<T>();

		if self.policy == ResolvePolicy::Memoize {
			let instances = self.instances.read().unwrap_or_else(PoisonError::into_inner);
			if let Some(instance) = instances.get(&key) {
				trace!(type_name, "memoized instance hit");
				return downcast(Arc::clone(instance), type_name);
			}
		}

		// Clone the provider out so no lock is held while it runs; providers
		// are allowed to resolve (and even bind) against this registry.
		let provider = {
			let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);
			bindings
				.get(&key)
				.map(|entry| Arc::clone(&entry.provider))
				.ok_or(DiError::UnboundProvider { type_name })?
		};

		let instance = {
			let _guard = resolve_stack::begin(key, type_name)?;
			provider(self)?
		};

		if self.policy == ResolvePolicy::Memoize {
			let mut instances = self.instances.write().unwrap_or_else(PoisonError::into_inner);
			let cached = instances.entry(key).or_insert(instance);
			return downcast(Arc::clone(cached), type_name);
		}
		downcast(instance, type_name)
	}

	/// Whether a provider is bound for `T`.
	pub fn contains<T: 'static>(&self) -> bool {
		let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);
		bindings.contains_key(&TypeId::of::<T>())
	}

	/// Number of bound keys.
	pub fn len(&self) -> usize {
		let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);
		bindings.len()
	}

	/// Whether the registry has no bindings.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Read-only snapshot of the current bindings, sorted by type name.
	///
	/// The snapshot is a copy; mutating it cannot bypass `bind`.
	pub fn bindings(&self) -> Vec<BindingInfo> {
		let bindings = self.bindings.read().unwrap_or_else(PoisonError::into_inner);
		let instances = self.instances.read().unwrap_or_else(PoisonError::into_inner);
		let mut infos: Vec<BindingInfo> = bindings
			.iter()
			.map(|(key, entry)| BindingInfo {
				type_name: entry.type_name,
				memoized: instances.contains_key(key),
			})
			.collect();
		infos.sort_by_key(|info| info.type_name);
		infos
	}

	/// Binds `Vec<T>` to a provider that invokes each of `impls` in order and
	/// collects the results.
	///
	/// Used to aggregate several implementations of one interface (a plugin
	/// or handler list) behind a single key.
	///
	/// # Examples
	///
	/// ```
	/// use nuages_di::{provider, ProviderRegistry};
	/// use std::sync::Arc;
	///
	/// trait UseCase: Send + Sync {
	///     fn name(&self) -> &'static str;
	/// }
	///
	/// struct CreateUser;
	/// struct GetUser;
	///
	/// impl UseCase for CreateUser {
	///     fn name(&self) -> &'static str {
	///         "create_user"
	///     }
	/// }
	///
	/// impl UseCase for GetUser {
	///     fn name(&self) -> &'static str {
	///         "get_user"
	///     }
	/// }
	///
	/// let registry = ProviderRegistry::new();
	/// registry.provide_many::<Arc<dyn UseCase>>(vec![
	///     provider(|_| Ok(Arc::new(CreateUser) as Arc<dyn UseCase>)),
	///     provider(|_| Ok(Arc::new(GetUser) as Arc<dyn UseCase>)),
	/// ]);
	///
	/// let usecases = registry.get::<Vec<Arc<dyn UseCase>>>().unwrap();
	/// assert_eq!(usecases.len(), 2);
	/// assert_eq!(usecases[0].name(), "create_user");
	/// ```
	pub fn provide_many<T>(&self, impls: Vec<Provider<T>>) -> &Self
	where
		T: Send + Sync + 'static,
	{
		self.bind::<Vec<T>, _>(move |registry| impls.iter().map(|p| p(registry)).collect())
	}

	/// Applies a module's providers to this registry.
	///
	/// Installation happens here and only here: declaring a module has no
	/// side effects. A module's `imports` are not installed recursively;
	/// install each one explicitly if its bindings are needed.
	pub fn install(&self, module: &dyn Module) -> &Self {
		debug!(module = module.name(), "installing module providers");
		module.providers(self);
		self
	}
}

fn downcast<T: Send + Sync + 'static>(
	instance: AnyInstance,
	type_name: &'static str,
) -> DiResult<Arc<T>> {
	instance
		.downcast::<T>()
		.map_err(|_| DiError::TypeMismatch { type_name })
}

impl Default for ProviderRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ProviderRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderRegistry")
			.field("policy", &self.policy)
			.field("bindings", &self.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[derive(Debug)]
	struct Counter {
		n: usize,
	}

	#[test]
	fn get_unbound_key_fails() {
		let registry = ProviderRegistry::new();
		let err = registry.get::<Counter>().unwrap_err();
		assert!(matches!(err, DiError::UnboundProvider { .. }));
	}

	#[test]
	fn memoize_invokes_provider_once() {
		static CALLS: AtomicUsize = AtomicUsize::new(0);
		let registry = ProviderRegistry::new();
		registry.bind::<Counter, _>(|_| {
			Ok(Counter {
				n: CALLS.fetch_add(1, Ordering::SeqCst),
			})
		});

		let first = registry.get::<Counter>().unwrap();
		let second = registry.get::<Counter>().unwrap();
		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(first.n, second.n);
		assert_eq!(CALLS.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn rebind_replaces_and_discards_memoized_instance() {
		let registry = ProviderRegistry::new();
		registry.bind::<Counter, _>(|_| Ok(Counter { n: 1 }));
		assert_eq!(registry.get::<Counter>().unwrap().n, 1);

		registry.bind::<Counter, _>(|_| Ok(Counter { n: 2 }));
		assert_eq!(registry.get::<Counter>().unwrap().n, 2);
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn bind_value_returns_the_same_instance_under_factory_policy() {
		let registry = ProviderRegistry::factory();
		registry.bind_value(Counter { n: 9 });
		let a = registry.get::<Counter>().unwrap();
		let b = registry.get::<Counter>().unwrap();
		assert!(Arc::ptr_eq(&a, &b));
	}

	#[test]
	fn bindings_snapshot_reports_memoization() {
		let registry = ProviderRegistry::new();
		registry.bind::<Counter, _>(|_| Ok(Counter { n: 0 }));
		assert!(!registry.bindings()[0].memoized);

		registry.get::<Counter>().unwrap();
		assert!(registry.bindings()[0].memoized);
	}
}
