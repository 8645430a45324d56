use std::{any, fmt, hint, mem, ptr};

use crate::iter::{Iter, IterMut};

use self::Optional::{Absent, Present};

/// An optional value: either [`Present`] holding exactly one `T`, or [`Absent`].
///
/// Combinators consume the optional and return a new one. The only operations
/// that change an existing optional are the ones taking `&mut self`:
/// [`insert`](Optional::insert), [`get_or_insert`](Optional::get_or_insert),
/// [`get_or_insert_with`](Optional::get_or_insert_with),
/// [`replace`](Optional::replace) and [`take`](Optional::take).
///
/// `Absent` orders before any `Present` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// Some value of type `T`.
    Present(T),
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T> Optional<T> {
    // CONSTRUCTION
    // ===============================================

    /// Wraps `value`.
    pub const fn present(value: T) -> Self {
        Present(value)
    }

    /// Constructs an empty optional.
    pub const fn absent() -> Self {
        Absent
    }

    // QUERIES
    // ===============================================

    /// Returns `true` if a value is held.
    pub const fn is_present(&self) -> bool {
        matches!(*self, Present(_))
    }

    /// Returns `true` if no value is held.
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns `true` if a value is held and it matches `predicate`.
    pub fn is_present_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Present(value) => predicate(value),
            Absent => false,
        }
    }

    /// Returns `true` if a value is held and it compares equal to `x`.
    ///
    /// This compares contents. Use [`holds`](Optional::holds) to check whether
    /// `x` is the very same object.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Present(value) => value == x,
            Absent => false,
        }
    }

    /// Returns `true` if a value is held and it lives at the same address as `x`.
    ///
    /// Zero-sized values may share addresses, so this is only meaningful for
    /// types with a non-zero size.
    pub fn holds(&self, x: &T) -> bool {
        match self {
            Present(value) => ptr::eq(value, x),
            Absent => false,
        }
    }

    // EXTRACTION
    // ===============================================

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics with `msg` if the optional is absent.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Present(value) => value,
            Absent => extraction_failed(msg),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics if the optional is absent. The message names `T`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Present(value) => value,
            Absent => extraction_failed(&format!(
                "called `Optional<{}>::unwrap()` on an `Absent` value",
                any::type_name::<T>()
            )),
        }
    }

    /// Returns the held value, or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(value) => value,
            Absent => default,
        }
    }

    /// Returns the held value, or computes one with `f`.
    ///
    /// `f` is only called if the optional is absent.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Present(value) => value,
            Absent => f(),
        }
    }

    /// Returns the held value without checking that there is one.
    ///
    /// # Safety
    /// The optional must be present. Calling this on an absent optional is
    /// undefined behaviour.
    #[track_caller]
    pub unsafe fn unwrap_unchecked(self) -> T {
        debug_assert!(self.is_present(), "unwrap_unchecked on an absent optional");
        match self {
            Present(value) => value,
            // SAFETY: the caller guarantees presence.
            Absent => unsafe { hint::unreachable_unchecked() },
        }
    }

    // TRANSFORMATION
    // ===============================================

    /// Applies `f` to the held value, if any.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// Calls `f` with a reference to the held value, if any, and returns `self` unchanged.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Present(value) = &self {
            f(value);
        }
        self
    }

    /// Applies `f` to the held value, or returns `default` if absent.
    ///
    /// `default` is evaluated eagerly; use [`map_or_else`](Optional::map_or_else)
    /// when it is expensive.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => f(value),
            Absent => default,
        }
    }

    /// Applies `f` to the held value, or computes a fallback with `default` if absent.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Present(value) => f(value),
            Absent => default(),
        }
    }

    // COMBINATION
    // ===============================================

    /// Returns `other` if `self` is present, otherwise [`Absent`].
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Present(_) => other,
            Absent => Absent,
        }
    }

    /// Calls `f` with the held value and returns its result, or [`Absent`].
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// Keeps the held value only if it matches `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Present(value) = self {
            if predicate(&value) {
                return Present(value);
            }
        }
        Absent
    }

    /// Returns `self` if present, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Present(_) => self,
            Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `f`.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Present(_) => self,
            Absent => f(),
        }
    }

    /// Returns whichever of `self` and `other` is present, if exactly one of them is.
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (a @ Present(_), Absent) => a,
            (Absent, b @ Present(_)) => b,
            _ => Absent,
        }
    }

    /// Combines the held values of `self` and `other` with `f` if both are present.
    pub fn zip_with<U, R, F>(self, other: Optional<U>, f: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Present(a), Present(b)) => Present(f(a, b)),
            _ => Absent,
        }
    }

    /// Pairs the held values of `self` and `other` if both are present.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    // IN-PLACE MUTATION
    // ===============================================

    /// Stores `value`, dropping any previously held value, and returns a
    /// reference to it.
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Present(value);
        // SAFETY: a value was stored just above.
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /// Stores `value` if absent, then returns a reference to the held value.
    ///
    /// If a value is already held, `value` is dropped and the optional is left
    /// untouched.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Stores the result of `f` if absent, then returns a reference to the held value.
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_absent() {
            *self = Present(f());
        }
        // SAFETY: either a value was already held or one was stored just above.
        unsafe { self.as_mut().unwrap_unchecked() }
    }

    /// Stores `value` and returns what was held before.
    pub fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Present(value))
    }

    /// Moves the held value out, leaving the optional absent.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Absent)
    }

    // ADAPTERS
    // ===============================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Iterates over the held value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref())
    }

    /// Iterates mutably over the held value, if any.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut())
    }
}

impl<T: Copy> Optional<&T> {
    /// Copies the referenced value.
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

impl<T: Clone> Optional<&T> {
    /// Clones the referenced value.
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Present(value) => write!(f, "Present({})", value),
            Absent => f.write_str("Absent"),
        }
    }
}

#[cold]
#[track_caller]
fn extraction_failed(msg: &str) -> ! {
    log::error!("{}", msg);
    panic!("{}", msg)
}
