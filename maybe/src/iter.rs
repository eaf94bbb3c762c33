use crate::Maybe;
use core::iter::FusedIterator;

macro_rules! single_item_iter {
    ($(#[$meta:meta])* $name:ident<$($lt:lifetime,)? $ty:ident> => $item:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<$($lt,)? $ty> {
            pub(crate) inner: Maybe<$item>,
        }

        impl<$($lt,)? $ty> Iterator for $name<$($lt,)? $ty> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.take().into_option()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let len = usize::from(self.inner.is_present());
                (len, Some(len))
            }
        }

        impl<$($lt,)? $ty> DoubleEndedIterator for $name<$($lt,)? $ty> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.take().into_option()
            }
        }

        impl<$($lt,)? $ty> ExactSizeIterator for $name<$($lt,)? $ty> {}

        impl<$($lt,)? $ty> FusedIterator for $name<$($lt,)? $ty> {}
    };
}

single_item_iter! {
    /// An iterator over a reference to the value of a [`Present`](Maybe::Present).
    ///
    /// Created by [`Maybe::iter`].
    Iter<'a, T> => &'a T
}

single_item_iter! {
    /// An iterator over a mutable reference to the value of a
    /// [`Present`](Maybe::Present).
    ///
    /// Created by [`Maybe::iter_mut`].
    IterMut<'a, T> => &'a mut T
}

single_item_iter! {
    /// An iterator over the value of a [`Present`](Maybe::Present), by value.
    IntoIter<T> => T
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner }
    }
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        IntoIter {
            inner: self.inner.clone(),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Maybe<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Collects an iterator of `Maybe`s: if every element is `Present`, the
/// collected values are returned as `Present`; otherwise iteration stops at the
/// first `Absent` and `Absent` is returned.
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}
