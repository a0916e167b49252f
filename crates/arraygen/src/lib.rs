//! Synthetic array generation for tests and prototypes.
//!
//! Flat arrays come from [`builder`], nested arrays from [`dimensional`],
//! policy-driven fills (equal-chance, weighted-chance, fixed-count) from
//! [`compose`], and post-processing transforms from [`utils`]. The
//! [`generators`] module supplies ready-made leaf generator factories
//! (integers, strings, uuids, phone numbers, ...) consumed by the
//! composition engine as opaque zero-argument closures.
//!
//! Every operation validates its parameters up front and returns
//! [`Error::InvalidParameter`] instead of a partial array on bad input.

pub mod builder;
mod charset;
pub mod compose;
pub mod dimensional;
pub mod generators;
pub mod utils;

pub use arraygen_core::{ArrayLength, Error, MAX_ARRAY_LENGTH, Result};
pub use compose::{BoxGenerator, CountedGenerator, WeightedGenerator};
pub use dimensional::{LeafSpec, Nested};
