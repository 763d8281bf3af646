use std::error::Error;

/// Turns a `try_` operation into its panicking form. Each plain insert or removal in
/// [`collections`](crate::collections) is its `try_` twin followed by
/// [`throw`](ResultExtension::throw).
pub(crate) trait ResultExtension<T> {
    /// Unwraps the value, or panics with the error's `Display` message.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
