//! Flat array construction: blank, uniform, custom, counting and random
//! numeric/string fills.
//!
//! Every function resolves its [`ArrayLength`] (fixed or `[min, max]`
//! range, sampled once per call) before allocating anything.

use arraygen_core::{ArrayLength, Error, MAX_ARRAY_LENGTH, Result, validation};
use rand::Rng;

use crate::charset;

/// Length-N array of empty slots.
pub fn blank<T>(length: impl Into<ArrayLength>) -> Result<Vec<Option<T>>> {
    let length = length.into().resolve("length")?;
    let mut arr = Vec::with_capacity(length);
    arr.resize_with(length, || None);
    Ok(arr)
}

/// Length-N array with every slot a clone of `value`.
pub fn uniform<T: Clone>(length: impl Into<ArrayLength>, value: T) -> Result<Vec<T>> {
    let length = length.into().resolve("length")?;
    Ok(vec![value; length])
}

/// Length-N array where each slot is one independent invocation of
/// `generator`.
pub fn custom<T>(mut generator: impl FnMut() -> T, length: impl Into<ArrayLength>) -> Result<Vec<T>> {
    let length = length.into().resolve("length")?;
    Ok((0..length).map(|_| generator()).collect())
}

/// Arithmetic sequence from `start` towards `end` in increments of `step`,
/// stopping at or before overshooting `end`.
///
/// Direction follows the sign of `step`: a positive step requires
/// `end >= start`, a negative step requires `start >= end`.
pub fn counting(start: i64, end: i64, step: i64) -> Result<Vec<i64>> {
    if step == 0 {
        return Err(Error::invalid_parameter("step", "must be non-zero", step));
    }
    if step > 0 {
        validation::at_least(end, start, "end")?;
    } else {
        validation::at_least(start, end, "start")?;
    }

    let length = start.abs_diff(end) / step.unsigned_abs() + 1;
    if length > MAX_ARRAY_LENGTH {
        return Err(Error::invalid_parameter(
            "length",
            format!("must not exceed {MAX_ARRAY_LENGTH} (2^32 - 1)"),
            length,
        ));
    }

    let mut arr = Vec::with_capacity(length as usize);
    let mut value = start;
    for _ in 0..length {
        arr.push(value);
        value = value.wrapping_add(step);
    }
    Ok(arr)
}

/// Length-N array of integers sampled uniformly over `[min, max)`.
/// Conventional bounds are `0, 100`.
pub fn integers(length: impl Into<ArrayLength>, min: i64, max: i64) -> Result<Vec<i64>> {
    let length = length.into().resolve("length")?;
    validation::ordered_i64(min, max, "max")?;
    let mut rng = rand::rng();
    Ok((0..length).map(|_| rng.random_range(min..max)).collect())
}

/// Length-N array of floats sampled uniformly over `[min, max)`.
/// Conventional bounds are `0, 1`.
pub fn decimals(length: impl Into<ArrayLength>, min: f64, max: f64) -> Result<Vec<f64>> {
    let length = length.into().resolve("length")?;
    validation::finite(min, "min")?;
    validation::ordered_f64(min, max, "max")?;
    let mut rng = rand::rng();
    Ok((0..length).map(|_| rng.random_range(min..max)).collect())
}

/// Length-N array of random strings. Each element independently samples
/// its own length in `[min_length, max_length]`, then draws that many
/// characters from the alphanumeric alphabet (or the alphabet with space
/// and punctuation when `special_chars`). Conventional length bounds are
/// `1, 10`.
pub fn strings(
    length: impl Into<ArrayLength>,
    min_length: usize,
    max_length: usize,
    special_chars: bool,
) -> Result<Vec<String>> {
    let length = length.into().resolve("length")?;
    validation::count(min_length, "min_length")?;
    validation::at_least(max_length as i64, min_length as i64, "max_length")?;
    if max_length as u64 > MAX_ARRAY_LENGTH {
        return Err(Error::invalid_parameter(
            "max_length",
            format!("must not exceed {MAX_ARRAY_LENGTH} (2^32 - 1)"),
            max_length,
        ));
    }

    let alphabet = charset::alphabet(special_chars);
    let mut rng = rand::rng();
    let mut arr = Vec::with_capacity(length);
    for _ in 0..length {
        let len = if min_length == max_length {
            min_length
        } else {
            rng.random_range(min_length..=max_length)
        };
        arr.push(charset::random_chars(&mut rng, len, alphabet));
    }
    Ok(arr)
}
