/// Error returned when a value is requested from a [`Maybe`](crate::Maybe)
/// that does not hold one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaybeError {
    /// Returned by [`Maybe::try_unwrap`](crate::Maybe::try_unwrap).
    #[error("called `Maybe::unwrap()` on an `Absent` value")]
    Absent,
    /// Returned by [`Maybe::try_expect`](crate::Maybe::try_expect), carrying
    /// the caller's message verbatim.
    #[error("{_0}")]
    Expect(String),
}

/// Reports an unrecoverable access and panics with the error's message.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn access_failed(error: MaybeError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(%error, "unrecoverable access on `Maybe`");
    panic!("{error}")
}
