//! Post-processing transforms on already-built arrays.

use std::collections::HashSet;
use std::fmt::Display;

use arraygen_core::{Error, MAX_ARRAY_LENGTH, Result, validation};

use crate::dimensional::Nested;

/// Wrap `arr` in `depth` single-element array layers:
/// `add_dimensions(arr, 2)` yields `[[arr]]`.
pub fn add_dimensions<T>(arr: Vec<T>, depth: usize) -> Result<Nested<T>> {
    validation::count(depth, "depth")?;
    let mut nested = Nested::Leaf(arr);
    for _ in 0..depth {
        nested = Nested::Node(vec![nested]);
    }
    Ok(nested)
}

/// Depth-first, left-to-right flattening to a single dimension,
/// preserving element order at unbounded depth.
pub fn flatten<T>(arr: Nested<T>) -> Vec<T> {
    let mut flat = Vec::new();
    collect(arr, &mut flat);
    flat
}

fn collect<T>(node: Nested<T>, flat: &mut Vec<T>) {
    match node {
        Nested::Leaf(values) => flat.extend(values),
        Nested::Node(children) => {
            for child in children {
                collect(child, flat);
            }
        }
    }
}

/// Repeat the array `factor` times end-to-end, or each element `factor`
/// times contiguously when `element_wise`. Single pass, O(N * factor).
pub fn multiply_length<T: Clone>(arr: &[T], factor: usize, element_wise: bool) -> Result<Vec<T>> {
    validation::at_least(factor as i64, 2, "factor")?;
    let total = arr.len() as u128 * factor as u128;
    if total > MAX_ARRAY_LENGTH as u128 {
        return Err(Error::invalid_parameter(
            "factor",
            format!("must keep the result within {MAX_ARRAY_LENGTH} elements (2^32 - 1)"),
            total,
        ));
    }

    let mut result = Vec::with_capacity(total as usize);
    if element_wise {
        for value in arr {
            for _ in 0..factor {
                result.push(value.clone());
            }
        }
    } else {
        for _ in 0..factor {
            result.extend(arr.iter().cloned());
        }
    }
    Ok(result)
}

/// Stable first-occurrence-order dedup.
///
/// Equality is the string form of each element, so distinct values with
/// identical renderings merge. Kept as the documented contract.
pub fn remove_duplicates<T: Clone + Display>(arr: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for value in arr {
        if seen.insert(value.to_string()) {
            result.push(value.clone());
        }
    }
    result
}
