//! # goalcraft-error
//!
//! Unified error handling for goalcraft.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., RateLimited, EmptyResponse)
//! - **ErrorStatus**: Know whether trying again could help (Permanent, Temporary)
//! - **Error Context**: Assist in locating the cause with key-value context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use goalcraft_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::EmptyResponse, "provider returned no text")
//!         .with_operation("agent::run")
//!         .with_context("stage", "PLAN"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, goalcraft_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent layers only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using goalcraft Error
pub type Result<T> = std::result::Result<T, Error>;
