//! Checked extraction: turning an absent [`Optional`] into an error value.

use std::any;

use thiserror::Error;

use crate::Optional;

/// Error returned by [`Optional::try_unwrap`] when no value is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("expected a present `{type_name}`, found `Absent`")]
pub struct AbsentError {
    type_name: &'static str,
}

impl AbsentError {
    /// Creates the error for a missing value of type `T`.
    pub fn of<T>() -> Self {
        Self {
            type_name: any::type_name::<T>(),
        }
    }

    /// Name of the type that was expected.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<T> Optional<T> {
    /// Returns the held value, or an [`AbsentError`] naming `T`.
    pub fn try_unwrap(self) -> Result<T, AbsentError> {
        self.ok_or_else(AbsentError::of::<T>)
    }

    /// Converts to a [`Result`], mapping [`Absent`](Optional::Absent) to `err`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(err),
        }
    }

    /// Converts to a [`Result`], mapping [`Absent`](Optional::Absent) to the result of `f`.
    pub fn ok_or_else<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => Err(f()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AbsentError;
    use crate::{absent, present, Optional};

    #[test]
    fn test_try_unwrap() {
        assert_eq!(present(9).try_unwrap(), Ok(9));

        let err = absent::<u16>().try_unwrap().unwrap_err();
        assert_eq!(err, AbsentError::of::<u16>());
        assert_eq!(err.type_name(), "u16");
        assert_eq!(err.to_string(), "expected a present `u16`, found `Absent`");
    }

    #[test]
    fn test_question_mark_propagation() {
        fn first_char(s: Optional<&str>) -> Result<char, AbsentError> {
            let s = s.try_unwrap()?;
            s.chars().next().ok_or(AbsentError::of::<char>())
        }

        assert_eq!(first_char(present("xy")), Ok('x'));
        assert!(first_char(absent()).is_err());
        assert_eq!(
            first_char(present("")).unwrap_err().type_name(),
            "char",
            "empty string falls through to the inner error"
        );
    }

    #[test]
    fn test_ok_or() {
        assert_eq!(present(1).ok_or("none"), Ok(1));
        assert_eq!(absent::<i32>().ok_or("none"), Err("none"));
        assert_eq!(absent::<i32>().ok_or_else(|| 7u8), Err(7u8));
    }
}
