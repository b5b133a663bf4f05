//! # fincal-core
//!
//! Shared foundations for the fincal workspace: the error enum, the
//! `Result` alias, and the `ensure!` guard macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

pub use errors::{Error, Result};
