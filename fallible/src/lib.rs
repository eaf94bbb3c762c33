#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! A success-or-failure container: a [`Fallible<T, E>`] is either
//! [`Ok`](Fallible::Ok) with a value of type `T`, or [`Err`](Fallible::Err)
//! with an error of type `E`.
//!
//! ```rust
//! use fallible::Fallible;
//! use maybe::Maybe;
//!
//! fn parse(input: &str) -> Fallible<u16, String> {
//!     input.parse::<u16>().map_err(|e| e.to_string()).into()
//! }
//!
//! let port = parse("8080").and_then(|p| {
//!     if p >= 1024 {
//!         Fallible::Ok(p)
//!     } else {
//!         Fallible::Err(format!("port {p} is privileged"))
//!     }
//! });
//! assert_eq!(port.ok(), Maybe::some(8080));
//! assert_eq!(parse("nope").unwrap_or(80), 80);
//! ```
//!
//! A `Fallible` is never modified after it is built; every combinator
//! consumes it and returns something new.

mod error;

use error::access_failed;
pub use error::FallibleError;
use maybe::Maybe;
use std::fmt::Debug;

/// A container holding exactly one of a success value or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fallible<T, E> {
    /// The success value.
    Ok(T),
    /// The error.
    Err(E),
}

impl<T, E> Fallible<T, E> {
    /// Builds a `Fallible` from loose parts. A present `value` wins; otherwise
    /// a present `error` is used; if both are absent this fails with
    /// [`FallibleError::Empty`].
    ///
    /// ```
    /// # use fallible::{Fallible, FallibleError};
    /// # use maybe::Maybe;
    /// let built = Fallible::<i32, &str>::try_from_parts(Maybe::none(), Maybe::some("e"));
    /// assert_eq!(built, Ok(Fallible::Err("e")));
    /// let empty = Fallible::<i32, &str>::try_from_parts(Maybe::none(), Maybe::none());
    /// assert_eq!(empty, Err(FallibleError::Empty));
    /// ```
    pub fn try_from_parts(
        value: Maybe<T>,
        error: Maybe<E>,
    ) -> Result<Self, FallibleError> {
        match (value, error) {
            (Maybe::Present(value), _) => Ok(Fallible::Ok(value)),
            (Maybe::Absent, Maybe::Present(error)) => Ok(Fallible::Err(error)),
            (Maybe::Absent, Maybe::Absent) => Err(FallibleError::Empty),
        }
    }

    /// Builds a `Fallible` from loose parts, like
    /// [`Fallible::try_from_parts`].
    ///
    /// ## Panics
    ///
    /// Panics if neither part is present.
    #[track_caller]
    pub fn from_parts(value: Maybe<T>, error: Maybe<E>) -> Self {
        match Self::try_from_parts(value, error) {
            Ok(this) => this,
            Err(error) => access_failed(error),
        }
    }

    /// Calls `on_ok` with the value or `on_err` with the error, and returns
    /// its output.
    #[inline]
    pub fn match_with<U, O, R>(self, on_ok: O, on_err: R) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        match self {
            Fallible::Ok(value) => on_ok(value),
            Fallible::Err(error) => on_err(error),
        }
    }

    /// Returns `true` if this is `Ok`.
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Fallible::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[must_use]
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if this is `Ok` and the value satisfies `f`.
    #[must_use]
    #[inline]
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Fallible::Ok(value) => f(value),
            Fallible::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `f`.
    #[must_use]
    #[inline]
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Fallible::Ok(_) => false,
            Fallible::Err(error) => f(error),
        }
    }

    /// Converts into a [`Maybe`] of the value, discarding any error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Fallible::Ok(value) => Maybe::Present(value),
            Fallible::Err(_) => Maybe::Absent,
        }
    }

    /// Converts into a [`Maybe`] of the error, discarding any value.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Fallible::Ok(_) => Maybe::Absent,
            Fallible::Err(error) => Maybe::Present(error),
        }
    }

    /// Converts from `&Fallible<T, E>` to `Fallible<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Fallible<&T, &E> {
        match self {
            Fallible::Ok(value) => Fallible::Ok(value),
            Fallible::Err(error) => Fallible::Err(error),
        }
    }

    /// Converts from `&mut Fallible<T, E>` to `Fallible<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Fallible<&mut T, &mut E> {
        match self {
            Fallible::Ok(value) => Fallible::Ok(value),
            Fallible::Err(error) => Fallible::Err(error),
        }
    }

    /// Maps the success value, leaving an error untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Fallible::Ok(value) => Fallible::Ok(f(value)),
            Fallible::Err(error) => Fallible::Err(error),
        }
    }

    /// Maps the error, leaving a success value untouched.
    #[inline]
    pub fn map_err<F, O>(self, op: O) -> Fallible<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Fallible::Ok(value) => Fallible::Ok(value),
            Fallible::Err(error) => Fallible::Err(op(error)),
        }
    }

    /// Returns `f(value)` if `Ok`, otherwise `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Fallible::Ok(value) => f(value),
            Fallible::Err(_) => default,
        }
    }

    /// Returns `f(value)` if `Ok`, otherwise `default(error)`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Fallible::Ok(value) => f(value),
            Fallible::Err(error) => default(error),
        }
    }

    /// Calls `f` with a reference to the value, if `Ok`.
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Fallible::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error, if `Err`.
    #[inline]
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Fallible::Err(error) = &self {
            f(error);
        }
        self
    }

    /// Returns an iterator over a reference to the success value.
    #[inline]
    pub fn iter(&self) -> maybe::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }

    /// Returns `other` if this is `Ok`, otherwise this error.
    ///
    /// `other` is already evaluated; use [`Fallible::and_then`] to build it
    /// only when needed.
    #[inline]
    pub fn and<U>(self, other: Fallible<U, E>) -> Fallible<U, E> {
        match self {
            Fallible::Ok(_) => other,
            Fallible::Err(error) => Fallible::Err(error),
        }
    }

    /// Calls `f` with the value if `Ok`, otherwise returns this error. `f` is
    /// not called on an error.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Fallible<U, E>
    where
        F: FnOnce(T) -> Fallible<U, E>,
    {
        match self {
            Fallible::Ok(value) => f(value),
            Fallible::Err(error) => Fallible::Err(error),
        }
    }

    /// Returns this value if `Ok`, otherwise `other`.
    ///
    /// `other` is already evaluated; use [`Fallible::or_else`] to build it
    /// only when needed.
    #[inline]
    pub fn or<F>(self, other: Fallible<T, F>) -> Fallible<T, F> {
        match self {
            Fallible::Ok(value) => Fallible::Ok(value),
            Fallible::Err(_) => other,
        }
    }

    /// Returns this value if `Ok`, otherwise calls `op` with the error.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Fallible<T, F>
    where
        O: FnOnce(E) -> Fallible<T, F>,
    {
        match self {
            Fallible::Ok(value) => Fallible::Ok(value),
            Fallible::Err(error) => op(error),
        }
    }

    /// Returns the value, or `default` if this is an error.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Fallible::Ok(value) => value,
            Fallible::Err(_) => default,
        }
    }

    /// Returns the value, or computes one from the error with `op`. `op` is
    /// only called on an error.
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Fallible::Ok(value) => value,
            Fallible::Err(error) => op(error),
        }
    }

    /// Returns the value, or `T::default()` if this is an error.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Fallible::Ok(value) => value,
            Fallible::Err(_) => T::default(),
        }
    }

    /// Returns `true` if this is `Ok` with a value equal to `x`.
    #[must_use]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Fallible::Ok(value) => x == value,
            Fallible::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` with an error equal to `f`.
    #[must_use]
    pub fn contains_err<F>(&self, f: &F) -> bool
    where
        F: PartialEq<E>,
    {
        match self {
            Fallible::Ok(_) => false,
            Fallible::Err(error) => f == error,
        }
    }

    /// Converts into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Fallible::Ok(value) => Ok(value),
            Fallible::Err(error) => Err(error),
        }
    }
}

impl<T, E: Debug> Fallible<T, E> {
    /// Returns the value, or an error describing the held error.
    pub fn try_unwrap(self) -> Result<T, FallibleError> {
        match self {
            Fallible::Ok(value) => Ok(value),
            Fallible::Err(error) => {
                Err(FallibleError::UnwrapOnErr(format!("{error:?}")))
            }
        }
    }

    /// Returns the value, or an error carrying `msg` and the held error.
    pub fn try_expect(self, msg: &str) -> Result<T, FallibleError> {
        match self {
            Fallible::Ok(value) => Ok(value),
            Fallible::Err(error) => Err(FallibleError::Expect {
                message: msg.to_owned(),
                found: format!("{error:?}"),
            }),
        }
    }

    /// Returns the value.
    ///
    /// ## Panics
    ///
    /// Panics if this is `Err`, with a message that includes the error's
    /// `Debug` text.
    ///
    /// ```should_panic
    /// # use fallible::Fallible;
    /// Fallible::<u8, &str>::Err("disk full").unwrap(); // panics
    /// ```
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
    /// Panics if this is `Err`, with `msg` followed by the error's `Debug`
    /// text.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(value) => value,
            Err(error) => access_failed(error),
        }
    }
}

impl<T: Debug, E> Fallible<T, E> {
    /// Returns the error, or an error describing the held value.
    pub fn try_unwrap_err(self) -> Result<E, FallibleError> {
        match self {
            Fallible::Ok(value) => {
                Err(FallibleError::UnwrapErrOnOk(format!("{value:?}")))
            }
            Fallible::Err(error) => Ok(error),
        }
    }

    /// Returns the error, or an error carrying `msg` and the held value.
    pub fn try_expect_err(self, msg: &str) -> Result<E, FallibleError> {
        match self {
            Fallible::Ok(value) => Err(FallibleError::Expect {
                message: msg.to_owned(),
                found: format!("{value:?}"),
            }),
            Fallible::Err(error) => Ok(error),
        }
    }

    /// Returns the error.
    ///
    /// ## Panics
    ///
    /// Panics if this is `Ok`, with a message that includes the value's
    /// `Debug` text.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(error) => access_failed(error),
        }
    }

    /// Returns the error.
    ///
    /// ## Panics
    ///
    /// Panics if this is `Ok`, with `msg` followed by the value's `Debug`
    /// text.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self.try_expect_err(msg) {
            Ok(error) => error,
            Err(error) => access_failed(error),
        }
    }
}

impl<T, E> Fallible<Fallible<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Fallible<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Fallible<Maybe<T>, E> {
    /// Swaps a `Fallible` of a `Maybe` into a `Maybe` of a `Fallible`.
    ///
    /// `Ok(Absent)` becomes `Absent`; `Ok(Present(v))` becomes
    /// `Present(Ok(v))`; `Err(e)` becomes `Present(Err(e))`.
    #[inline]
    pub fn transpose(self) -> Maybe<Fallible<T, E>> {
        match self {
            Fallible::Ok(Maybe::Present(value)) => {
                Maybe::Present(Fallible::Ok(value))
            }
            Fallible::Ok(Maybe::Absent) => Maybe::Absent,
            Fallible::Err(error) => Maybe::Present(Fallible::Err(error)),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Fallible<T, E> {
    type Item = &'a T;
    type IntoIter = maybe::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> IntoIterator for Fallible<T, E> {
    type Item = T;
    type IntoIter = maybe::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<T, E> From<Result<T, E>> for Fallible<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Fallible::Ok(value),
            Err(error) => Fallible::Err(error),
        }
    }
}

impl<T, E> From<Fallible<T, E>> for Result<T, E> {
    fn from(value: Fallible<T, E>) -> Self {
        value.into_result()
    }
}
