use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an [`Ok`] value, or panics with the message of the contained error. This is how the
    /// panicking accessors of each collection are built from their `try_` counterparts.
    ///
    /// The panic is reported at the caller's location, so a failed precondition points at the code
    /// that violated it rather than at this crate.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
