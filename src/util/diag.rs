use std::error::Error;

/// Reports a recoverable error that the caller chose not to handle. The operation that produced it
/// has already been abandoned and left its collection unchanged.
#[cfg(feature = "diagnostics")]
pub fn report<E: Error>(error: &E) {
    eprintln!("generic-containers: {error}");
}

#[cfg(not(feature = "diagnostics"))]
pub const fn report<E: Error>(_error: &E) {}
