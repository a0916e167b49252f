//! Recursive multidimensional array construction.
//!
//! A nested array has `length` siblings per level and `depth` levels; the
//! innermost level is materialized from a [`LeafSpec`] resolved once at
//! the API boundary.

use arraygen_core::{ArrayLength, Result, validation};
use tracing::debug;

/// Nested array value with runtime-known depth.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Leaf(Vec<T>),
    Node(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Number of immediate children (or leaf elements) at this level.
    pub fn len(&self) -> usize {
        match self {
            Nested::Leaf(values) => values.len(),
            Nested::Node(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Innermost-array specification, chosen once by the caller and
/// materialized fresh at every leaf position.
pub enum LeafSpec<T> {
    /// Scalar wrapped into a one-element leaf.
    Value(T),
    /// Concrete leaf array; cloned fresh for every leaf position so
    /// mutating one leaf never affects a sibling.
    Array(Vec<T>),
    /// Invoked fresh for every leaf position; each leaf is independent.
    Producer(Box<dyn FnMut() -> Vec<T>>),
}

impl<T: Clone> LeafSpec<T> {
    fn materialize(&mut self) -> Vec<T> {
        match self {
            LeafSpec::Value(value) => vec![value.clone()],
            LeafSpec::Array(arr) => arr.clone(),
            LeafSpec::Producer(producer) => producer(),
        }
    }
}

/// Build a nested array of `depth` levels with `length` siblings per
/// level, materializing `spec` at every leaf position. `depth` below 2 is
/// rejected: a one-level build is just the leaf spec itself.
pub fn build<T: Clone>(
    mut spec: LeafSpec<T>,
    length: impl Into<ArrayLength>,
    depth: usize,
) -> Result<Nested<T>> {
    let length = length.into().resolve("length")?;
    validation::at_least(depth as i64, 2, "depth")?;
    debug!(length, depth, "building nested array");
    Ok(build_level(&mut spec, length, depth))
}

/// Pure recursive step: leaves at depth 1, otherwise `length` children one
/// level shallower.
fn build_level<T: Clone>(spec: &mut LeafSpec<T>, length: usize, depth: usize) -> Nested<T> {
    if depth == 1 {
        return Nested::Leaf(spec.materialize());
    }
    Nested::Node(
        (0..length)
            .map(|_| build_level(spec, length, depth - 1))
            .collect(),
    )
}

/// Nested array with empty arrays at every leaf position.
pub fn empty<T: Clone>(length: impl Into<ArrayLength>, depth: usize) -> Result<Nested<T>> {
    build(LeafSpec::Array(Vec::new()), length, depth)
}

/// Nested array with `[value]` at every leaf position. To use a whole
/// array as the leaf, pass [`LeafSpec::Array`] to [`build`] instead.
pub fn uniform<T: Clone>(
    value: T,
    length: impl Into<ArrayLength>,
    depth: usize,
) -> Result<Nested<T>> {
    build(LeafSpec::Value(value), length, depth)
}

/// Nested array whose leaves each come from a fresh invocation of
/// `producer`.
pub fn custom<T: Clone>(
    producer: impl FnMut() -> Vec<T> + 'static,
    length: impl Into<ArrayLength>,
    depth: usize,
) -> Result<Nested<T>> {
    build(LeafSpec::Producer(Box::new(producer)), length, depth)
}
