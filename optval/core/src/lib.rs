//! An explicit optional-value type with a combinator API.
//!
//! [`Optional<T>`] is either [`Present`](Optional::Present) holding exactly one
//! value, or [`Absent`](Optional::Absent). It can be transformed, combined and
//! extracted without ever touching a null reference.

pub mod convert;
pub mod error;
mod iter;
mod optional;
#[cfg(feature = "serde")]
mod serde_impl;

pub use convert::OptionExt;
pub use error::AbsentError;
pub use iter::{IntoIter, Iter, IterMut};
pub use optional::Optional;

/// Creates a present [`Optional`] holding `value`.
pub fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Creates an absent [`Optional`].
pub fn absent<T>() -> Optional<T> {
    Optional::Absent
}

/// Combines two optionals with `f` if both are present.
///
/// Equivalent to `a.zip_with(b, f)`.
pub fn zip_with<T, U, R, F>(a: Optional<T>, b: Optional<U>, f: F) -> Optional<R>
where
    F: FnOnce(T, U) -> R,
{
    a.zip_with(b, f)
}
