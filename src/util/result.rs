use std::error::Error;

use super::diag;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;

    /// Reports the error, if any, as a diagnostic and converts the result into an [`Option`]. Used
    /// by the lenient counterpart of every `try_` method.
    fn reported(self) -> Option<T>;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }

    fn reported(self) -> Option<T> {
        match self {
            Ok(val) => Some(val),
            Err(error) => {
                diag::report(&error);
                None
            },
        }
    }
}
