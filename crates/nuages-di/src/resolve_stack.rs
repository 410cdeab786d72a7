//! Thread-local resolution stack for circular-dependency detection
//!
//! Providers may resolve further dependencies from the registry they were
//! invoked on. The stack of in-flight resolutions is tracked per thread so
//! that a provider which (transitively) resolves its own key fails with a
//! [`DiError::CircularResolution`] carrying the full `A -> B -> A` path
//! instead of recursing until the stack overflows. A depth cap guards
//! pathological non-cyclic chains.

use crate::error::{DiError, DiResult};
use std::any::TypeId;
use std::cell::RefCell;

/// Maximum number of nested resolutions.
const MAX_RESOLUTION_DEPTH: usize = 64;

thread_local! {
	static RESOLUTION_STACK: RefCell<Vec<(TypeId, &'static str)>> = RefCell::new(Vec::new());
}

/// RAII guard popping one frame off the resolution stack.
///
/// Dropped on both the success and the error path, so a failed resolution
/// leaves the stack clean for the next `get`.
#[derive(Debug)]
pub(crate) struct ResolutionGuard {
	_private: (),
}

impl Drop for ResolutionGuard {
	fn drop(&mut self) {
		RESOLUTION_STACK.with(|stack| {
			stack.borrow_mut().pop();
		});
	}
}

/// Record the start of a resolution for `type_id`.
///
/// Fails if the key is already somewhere on the current thread's stack
/// (a cycle) or if the stack has reached [`MAX_RESOLUTION_DEPTH`].
pub(crate) fn begin(type_id: TypeId, type_name: &'static str) -> DiResult<ResolutionGuard> {
	RESOLUTION_STACK.with(|stack| {
		let mut stack = stack.borrow_mut();
		if stack.len() >= MAX_RESOLUTION_DEPTH {
			return Err(DiError::MaxDepthExceeded { depth: stack.len() });
		}
		if stack.iter().any(|(id, _)| *id == type_id) {
			let path = stack
				.iter()
				.map(|(_, name)| *name)
				.chain(std::iter::once(type_name))
				.collect::<Vec<_>>()
				.join(" -> ");
			return Err(DiError::CircularResolution { type_name, path });
		}
		stack.push((type_id, type_name));
		Ok(ResolutionGuard { _private: () })
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	struct A;
	struct B;

	#[test]
	fn repeated_begin_for_same_key_is_a_cycle() {
		let _a = begin(TypeId::of::<A>(), "A").unwrap();
		let _b = begin(TypeId::of::<B>(), "B").unwrap();
		let err = begin(TypeId::of::<A>(), "A").unwrap_err();
		assert_eq!(
			err,
			DiError::CircularResolution {
				type_name: "A",
				path: "A -> B -> A".to_string(),
			}
		);
	}

	#[test]
	fn guard_drop_unwinds_the_stack() {
		{
			let _a = begin(TypeId::of::<A>(), "A").unwrap();
		}
		// Stack is empty again, so re-entering A is fine.
		let _a = begin(TypeId::of::<A>(), "A").unwrap();
	}
}
