/// Error returned when a [`Fallible`](crate::Fallible) is accessed in a state
/// the operation does not allow, or cannot be built at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FallibleError {
    /// A success value was requested from an `Err`. Carries the error's
    /// `Debug` text.
    #[error("called `Fallible::unwrap()` on an `Err` value: {_0}")]
    UnwrapOnErr(String),
    /// An error was requested from an `Ok`. Carries the value's `Debug` text.
    #[error("called `Fallible::unwrap_err()` on an `Ok` value: {_0}")]
    UnwrapErrOnOk(String),
    /// An `expect`-style access failed; `found` is the `Debug` text of
    /// whatever was held instead.
    #[error("{message}: {found}")]
    Expect {
        /// The caller's message.
        message: String,
        /// What the container held instead.
        found: String,
    },
    /// Neither a value nor an error was supplied.
    #[error("a `Fallible` must hold either a value or an error")]
    Empty,
}

/// Reports an unrecoverable access and panics with the error's message.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn access_failed(error: FallibleError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(%error, "unrecoverable access on `Fallible`");
    panic!("{error}")
}
