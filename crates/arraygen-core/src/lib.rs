//! Core contracts shared across the arraygen crates.
//!
//! This crate defines the error type, the stateless parameter checks every
//! public operation runs before producing output, and the `ArrayLength`
//! request type with its global size cap.

pub mod error;
pub mod length;
pub mod validation;

pub use error::{Error, Result};
pub use length::{ArrayLength, MAX_ARRAY_LENGTH};
