//! Cache directory cleanup
//!
//! Finds every directory named after a configured marker (`__pycache__` by
//! default) beneath the project root and removes it with its contents.

mod sweeper;

pub use sweeper::{clean, CleanReport};
#[cfg(test)]
pub use sweeper::CleanFailure;
