// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT
#![doc = include_str!("../README.md")]

pub mod demo;

/// Scope-style combinators, available on every sized type.
///
/// Each method takes the receiver by value and lends it to a closure:
/// [`apply`](Scoped::apply) and [`also`](Scoped::also) hand out `&mut`
/// access and return the same value, [`let_in`](Scoped::let_in) and
/// [`run`](Scoped::run) return whatever the closure computes, and
/// [`take_if`](Scoped::take_if) / [`take_unless`](Scoped::take_unless)
/// return the value wrapped in an [`Option`] guarded by a predicate.
pub trait Scoped: Sized {
	/// Run `block` with mutable access, then return the same value.
	///
	/// ```
	/// use withhold::Scoped;
	///
	/// let v = vec![1, 2].apply(|v| v.push(3));
	/// assert_eq!(v, vec![1, 2, 3]);
	/// ```
	fn apply(mut self, block: impl FnOnce(&mut Self)) -> Self {
		block(&mut self);
		self
	}

	/// Same contract as [`apply`](Scoped::apply). Two names exist so a call
	/// site can say what it means: `apply` for configuring the value,
	/// `also` for attaching a side effect mid-chain.
	fn also(mut self, block: impl FnOnce(&mut Self)) -> Self {
		block(&mut self);
		self
	}

	/// Consume the value and return whatever `block` computes from it.
	///
	/// ```
	/// use withhold::Scoped;
	///
	/// let len = String::from("four").let_in(|s| s.len());
	/// assert_eq!(len, 4);
	/// ```
	fn let_in<R>(self, block: impl FnOnce(Self) -> R) -> R {
		block(self)
	}

	/// Run `block` with mutable access and return its result; the receiver
	/// is dropped afterwards. The receiver-less form is the free
	/// [`run`](crate::run).
	fn run<R>(mut self, block: impl FnOnce(&mut Self) -> R) -> R {
		block(&mut self)
	}

	/// Return `Some(self)` when the predicate holds, `None` otherwise.
	/// A `None` outcome drops the value.
	///
	/// Types with an inherent `take_if` (e.g. [`Option`]) resolve to that
	/// method first; this one stays reachable as `Scoped::take_if(value, ..)`.
	///
	/// ```
	/// use withhold::Scoped;
	///
	/// assert_eq!(10_i32.take_if(|n| n % 2 == 0), Some(10));
	/// assert_eq!(11_i32.take_if(|n| n % 2 == 0), None);
	/// ```
	fn take_if(self, predicate: impl FnOnce(&Self) -> bool) -> Option<Self> {
		if predicate(&self) { Some(self) } else { None }
	}

	/// Inverse of [`take_if`](Scoped::take_if): return `Some(self)` when the
	/// predicate does NOT hold.
	fn take_unless(self, predicate: impl FnOnce(&Self) -> bool) -> Option<Self> {
		if predicate(&self) { None } else { Some(self) }
	}
}

impl<T> Scoped for T {}

/// Execute a receiver-less block and return its result. Gives a name to
/// "evaluate this block here" in expression position.
pub fn run<R>(block: impl FnOnce() -> R) -> R {
	block()
}

/// Evaluate a read-only expression against a borrowed receiver and return
/// the result. The receiver stays usable at the call site; for mutation use
/// [`Scoped::apply`] or [`Scoped::run`].
pub fn with<T, R>(receiver: &T, block: impl FnOnce(&T) -> R) -> R {
	block(receiver)
}
