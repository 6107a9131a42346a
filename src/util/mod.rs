#[cfg(test)]
pub mod alloc;
pub mod diag;
pub mod error;
#[cfg(test)]
pub mod panic;
pub mod result;
