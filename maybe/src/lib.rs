#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! An optional-value container: a [`Maybe<T>`] is either [`Present`] and
//! holds a `T`, or it is [`Absent`].
//!
//! The absence marker is its own variant, so any `T` can be stored, including
//! other `Maybe`s and [`Option`]s.
//!
//! ```rust
//! use maybe::Maybe;
//!
//! let name = Maybe::some("ferris");
//! let greeting = name.map(|n| format!("hello, {n}")).unwrap_or_default();
//! assert_eq!(greeting, "hello, ferris");
//!
//! let mut slot: Maybe<u32> = Maybe::none();
//! *slot.get_or_insert(1) += 1;
//! assert_eq!(slot.take(), Maybe::some(2));
//! assert!(slot.is_absent());
//! ```
//!
//! Most combinators consume the receiver and return a new value. The methods
//! documented as *mutating* (`take`, `replace`, `insert`, `get_or_insert` and
//! friends) work through `&mut self` and change the receiver in place.
//!
//! [`Present`]: Maybe::Present
//! [`Absent`]: Maybe::Absent

mod error;
mod iter;

pub use error::MaybeError;
use error::access_failed;
pub use iter::{IntoIter, Iter, IterMut};
use std::mem;

/// A container holding either one value of type `T` or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    Absent,
    /// Some value of type `T`.
    Present(T),
}

impl<T> Default for Maybe<T> {
    /// Returns [`Maybe::Absent`].
    #[inline]
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> Maybe<T> {
    /// Creates a [`Maybe::Present`] holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Creates a [`Maybe::Absent`].
    #[inline]
    pub const fn none() -> Self {
        Maybe::Absent
    }

    /// Calls exactly one of the two closures, depending on the current state,
    /// and returns its output.
    ///
    /// ```
    /// # use maybe::Maybe;
    /// let described = Maybe::some(3).match_with(|n| format!("got {n}"), || "nothing".into());
    /// assert_eq!(described, "got 3");
    /// ```
    #[inline]
    pub fn match_with<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Returns `true` if this holds a value.
    #[must_use]
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if this holds no value.
    #[must_use]
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Alias for [`Maybe::is_present`].
    #[must_use]
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.is_present()
    }

    /// Alias for [`Maybe::is_absent`].
    #[must_use]
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.is_absent()
    }

    /// Returns `true` if this holds a value that satisfies `f`.
    #[must_use]
    #[inline]
    pub fn is_present_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => false,
        }
    }

    /// Returns `true` if this is absent, or holds a value that satisfies `f`.
    #[must_use]
    #[inline]
    pub fn is_absent_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => true,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Returns the value, or an error if there is none.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, MaybeError> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(MaybeError::Absent),
        }
    }

    /// Returns the value, or an error carrying `msg` if there is none.
    #[inline]
    pub fn try_expect(self, msg: &str) -> Result<T, MaybeError> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(MaybeError::Expect(msg.to_owned())),
        }
    }

    /// Returns the value.
    ///
    /// ## Panics
    ///
    /// Panics if this is [`Maybe::Absent`]. Use [`Maybe::unwrap_or`],
    /// [`Maybe::unwrap_or_else`] or [`Maybe::try_unwrap`] to handle absence.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => access_failed(error),
        }
    }

    /// Returns the value.
    ///
    /// ## Panics
    ///
    /// Panics with `msg` if this is [`Maybe::Absent`].
    ///
    /// ```should_panic
    /// # use maybe::Maybe;
    /// let config: Maybe<&str> = Maybe::none();
    /// config.expect("config should be loaded before startup"); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(value) => value,
            Err(error) => access_failed(error),
        }
    }

    /// Returns the value, or `default`.
    ///
    /// `default` is evaluated before the call; use [`Maybe::unwrap_or_else`]
    /// to compute it only when needed.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Returns the value, or computes one with `f`. `f` is only called when
    /// this is absent.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f(),
        }
    }

    /// Returns the value, or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => T::default(),
        }
    }

    /// Maps `Present(v)` to `Present(f(v))` and leaves `Absent` untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Calls `f` with a reference to the value, if any, and returns `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Returns `f(v)` if present, otherwise `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => default,
        }
    }

    /// Returns `f(v)` if present, otherwise `default()`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => default(),
        }
    }

    /// Returns an iterator over a reference to the value.
    ///
    /// Every call starts a fresh iterator; the container itself is unchanged.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref(),
        }
    }

    /// Returns an iterator over a mutable reference to the value.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut(),
        }
    }

    /// Returns `Absent` if this is absent, otherwise returns `other`.
    ///
    /// `other` is already evaluated; use [`Maybe::and_then`] to build it only
    /// when this holds a value.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Present(_) => other,
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Returns `Absent` if this is absent, otherwise calls `f` with the value.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keeps the value only if `predicate` returns `true` for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Maybe::Present(value) = self {
            if predicate(&value) {
                return Maybe::Present(value);
            }
        }
        Maybe::Absent
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    ///
    /// `other` is already evaluated; use [`Maybe::or_else`] to build it only
    /// when needed.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            present @ Maybe::Present(_) => present,
            Maybe::Absent => other,
        }
    }

    /// Returns `self` if it holds a value, otherwise calls `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            present @ Maybe::Present(_) => present,
            Maybe::Absent => f(),
        }
    }

    /// Returns whichever of `self` and `other` holds a value, if exactly one
    /// does; otherwise `Absent`.
    #[inline]
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (present @ Maybe::Present(_), Maybe::Absent)
            | (Maybe::Absent, present @ Maybe::Present(_)) => present,
            _ => Maybe::Absent,
        }
    }

    /// Pairs the values of `self` and `other` if both are present.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present((a, b)),
            _ => Maybe::Absent,
        }
    }

    /// Returns `true` if this holds a value equal to `x`.
    #[must_use]
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Maybe::Present(value) => x == value,
            Maybe::Absent => false,
        }
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    /// *Mutating.* Moves the value out, leaving [`Maybe::Absent`] in its
    /// place.
    ///
    /// Takes `&mut self`: callers sharing a `Maybe` across threads must
    /// synchronize access themselves.
    ///
    /// ```
    /// # use maybe::Maybe;
    /// let mut x = Maybe::some(2);
    /// assert_eq!(x.take(), Maybe::some(2));
    /// assert_eq!(x.take(), Maybe::none());
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        mem::take(self)
    }

    /// *Mutating.* Takes the value out only if `predicate` returns `true` for
    /// it.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    #[inline]
    pub fn take_if<P>(&mut self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&mut T) -> bool,
    {
        let matched = match self.as_mut() {
            Maybe::Present(value) => predicate(value),
            Maybe::Absent => false,
        };
        if matched {
            self.take()
        } else {
            Maybe::Absent
        }
    }

    /// *Mutating.* Stores `value` and returns whatever was held before.
    ///
    /// ```
    /// # use maybe::Maybe;
    /// let mut x = Maybe::some(2);
    /// let old = x.replace(5);
    /// assert_eq!(x, Maybe::some(5));
    /// assert_eq!(old, Maybe::some(2));
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    #[inline]
    pub fn replace(&mut self, value: T) -> Maybe<T> {
        mem::replace(self, Maybe::Present(value))
    }

    /// *Mutating.* Stores `value`, dropping any previous value, and returns a
    /// mutable reference to it.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Maybe::Present(value);
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => unreachable!(),
        }
    }

    /// *Mutating.* Stores `value` if this is absent, then returns a mutable
    /// reference to the held value.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// *Mutating.* Stores `T::default()` if this is absent, then returns a
    /// mutable reference to the held value.
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    /// *Mutating.* Stores `f()` if this is absent, then returns a mutable
    /// reference to the held value. `f` is only called when this is absent.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all)
    )]
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Maybe::Absent = self {
            *self = Maybe::Present(f());
        }
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => unreachable!(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// ```
    /// # use maybe::Maybe;
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Present(inner) => inner,
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T, U> Maybe<(T, U)> {
    /// Splits a held pair into a pair of `Maybe`s.
    #[inline]
    pub fn unzip(self) -> (Maybe<T>, Maybe<U>) {
        match self {
            Maybe::Present((a, b)) => (Maybe::Present(a), Maybe::Present(b)),
            Maybe::Absent => (Maybe::Absent, Maybe::Absent),
        }
    }
}

impl<T: Copy> Maybe<&T> {
    /// Copies the referenced value.
    #[inline]
    pub fn copied(self) -> Maybe<T> {
        self.map(|value| *value)
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones the referenced value.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(T::clone)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn predicates_are_complementary() {
        let present = Maybe::some(0);
        let absent = Maybe::<i32>::none();
        assert!(present.is_present() && !present.is_absent());
        assert!(absent.is_absent() && !absent.is_present());
        assert_eq!(present.is_some(), present.is_present());
        assert_eq!(absent.is_none(), absent.is_absent());
    }

    #[test]
    fn nested_and_nullable_values_are_storable() {
        let nested: Maybe<Maybe<i32>> = Maybe::some(Maybe::none());
        assert!(nested.is_present());
        let wrapped: Maybe<Option<i32>> = Maybe::some(None);
        assert!(wrapped.is_present());
        assert_eq!(wrapped.unwrap(), None);
        let unit = Maybe::some(());
        assert!(unit.is_present());
    }

    #[test]
    fn match_with_runs_one_branch() {
        let calls = Cell::new(0);
        let out = Maybe::some(2).match_with(
            |v| v * 10,
            || {
                calls.set(calls.get() + 1);
                0
            },
        );
        assert_eq!(out, 20);
        assert_eq!(calls.get(), 0);

        let out = Maybe::<i32>::none().match_with(
            |_| {
                calls.set(calls.get() + 1);
                0
            },
            || -1,
        );
        assert_eq!(out, -1);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap()` on an `Absent` value")]
    fn unwrap_absent_panics() {
        Maybe::<i32>::none().unwrap();
    }

    #[test]
    #[should_panic(expected = "no user")]
    fn expect_absent_panics_with_message() {
        Maybe::<i32>::none().expect("no user");
    }

    #[test]
    fn try_unwrap_reports_absence() {
        assert_eq!(Maybe::some(1).try_unwrap(), Ok(1));
        assert_eq!(Maybe::<i32>::none().try_unwrap(), Err(MaybeError::Absent));
        assert_eq!(
            Maybe::<i32>::none().try_expect("gone").unwrap_err().to_string(),
            "gone"
        );
    }

    #[test]
    fn ordering_puts_absent_first() {
        assert!(Maybe::none() < Maybe::some(0));
        assert!(Maybe::some(1) < Maybe::some(2));
    }

    #[test]
    fn take_if_only_takes_on_match() {
        let mut x = Maybe::some(3);
        assert_eq!(x.take_if(|v| *v > 5), Maybe::none());
        assert_eq!(x, Maybe::some(3));
        assert_eq!(x.take_if(|v| *v == 3), Maybe::some(3));
        assert!(x.is_absent());
    }

    #[test]
    fn insert_overwrites_and_returns_new_value() {
        let mut x = Maybe::some(1);
        let v = x.insert(7);
        *v += 1;
        assert_eq!(x, Maybe::some(8));
    }

    #[test]
    fn std_option_round_trip() {
        let x: Maybe<i32> = Some(4).into();
        assert_eq!(x, Maybe::some(4));
        let back: Option<i32> = x.into();
        assert_eq!(back, Some(4));
        assert_eq!(Maybe::<i32>::from(None), Maybe::none());
    }
}
