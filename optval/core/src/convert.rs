//! Conversions between [`Optional`] and the standard [`Option`].

use crate::Optional;

mod sealed {
    pub trait Sealed {}
}

/// Extension methods for [`Option`].
pub trait OptionExt<T>: sealed::Sealed {
    /// Converts `Some(v)` to `Present(v)` and `None` to `Absent`.
    fn into_optional(self) -> Optional<T>;
}

impl<T> sealed::Sealed for Option<T> {}
impl<T> OptionExt<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}

impl<T> Optional<T> {
    /// Converts `Present(v)` to `Some(v)` and `Absent` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::OptionExt;
    use crate::{absent, present, Optional};

    #[test]
    fn test_option_round_trip() {
        assert_eq!(Some(3).into_optional(), present(3));
        assert_eq!(None::<i32>.into_optional(), absent());
        assert_eq!(Option::<&str>::from(present("a")), Some("a"));
        assert_eq!(absent::<u8>().into_option(), None);
    }

    #[test]
    fn test_nullable_reference() {
        let target = 5;
        let lookup = |hit: bool| if hit { Some(&target) } else { None };

        let found: Optional<&i32> = lookup(true).into_optional();
        assert!(found.is_present_and(|r| std::ptr::eq(*r, &target)));
        assert_eq!(found.copied(), present(5));
        assert!(lookup(false).into_optional().is_absent());
    }
}
