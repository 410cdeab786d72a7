//! DI error types

/// Errors produced while binding or resolving providers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiError {
	/// Resolution was attempted for a key that has no registered provider.
	///
	/// This is always surfaced to the caller; resolution never falls back to
	/// a default instance.
	#[error("no provider bound for `{type_name}`")]
	UnboundProvider { type_name: &'static str },

	/// A provider (transitively) resolved its own key.
	#[error("circular resolution of `{type_name}`: {path}")]
	CircularResolution {
		type_name: &'static str,
		path: String,
	},

	/// The resolution chain exceeded the depth cap.
	#[error("provider resolution exceeded {depth} levels")]
	MaxDepthExceeded { depth: usize },

	/// The cached instance for a key had an unexpected concrete type.
	///
	/// Unreachable when bindings are created through the `bind` family, which
	/// ties the key and the stored type together; kept as a guard.
	#[error("bound provider for `{type_name}` produced a value of another type")]
	TypeMismatch { type_name: &'static str },
}

pub type DiResult<T> = Result<T, DiError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unbound_provider_names_the_interface() {
		let err = DiError::UnboundProvider {
			type_name: "myapp::Database",
		};
		assert_eq!(err.to_string(), "no provider bound for `myapp::Database`");
	}

	#[test]
	fn circular_resolution_carries_the_path() {
		let err = DiError::CircularResolution {
			type_name: "A",
			path: "A -> B -> A".to_string(),
		};
		assert!(err.to_string().contains("A -> B -> A"));
	}
}
