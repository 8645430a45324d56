//! Iterators yielding the held value of an [`Optional`], if any.

use std::iter::FusedIterator;

use crate::Optional;

#[derive(Clone, Debug)]
struct Item<A> {
    slot: Optional<A>,
}

impl<A> Item<A> {
    fn len(&self) -> usize {
        if self.slot.is_present() {
            1
        } else {
            0
        }
    }
}

impl<A> Iterator for Item<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        self.slot.take().into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<A> DoubleEndedIterator for Item<A> {
    fn next_back(&mut self) -> Option<A> {
        self.next()
    }
}

macro_rules! item_iterator {
    ($(#[$meta:meta])* $name:ident<$($lt:lifetime,)? $t:ident> => $item:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<$($lt,)? $t> {
            inner: Item<$item>,
        }

        impl<$($lt,)? $t> $name<$($lt,)? $t> {
            pub(crate) fn new(slot: Optional<$item>) -> Self {
                Self { inner: Item { slot } }
            }
        }

        impl<$($lt,)? $t> Iterator for $name<$($lt,)? $t> {
            type Item = $item;

            fn next(&mut self) -> Option<$item> {
                self.inner.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lt,)? $t> DoubleEndedIterator for $name<$($lt,)? $t> {
            fn next_back(&mut self) -> Option<$item> {
                self.inner.next_back()
            }
        }

        impl<$($lt,)? $t> ExactSizeIterator for $name<$($lt,)? $t> {}
        impl<$($lt,)? $t> FusedIterator for $name<$($lt,)? $t> {}
    };
}

item_iterator! {
    /// Borrowing iterator over an [`Optional`], created by [`Optional::iter`].
    Iter<'a, T> => &'a T
}

item_iterator! {
    /// Mutably borrowing iterator over an [`Optional`], created by [`Optional::iter_mut`].
    IterMut<'a, T> => &'a mut T
}

item_iterator! {
    /// Owning iterator over an [`Optional`].
    IntoIter<T> => T
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
