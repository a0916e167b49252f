//! Generator composition: filling one array from several generator
//! closures under equal-chance, weighted-chance or fixed-count selection.
//!
//! Generator sets are consumed by value; entries live for exactly one
//! generation call.

use arraygen_core::{ArrayLength, Error, Result, validation};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Tolerance for the aggregate of weighted chances against 1.
const CHANCE_TOLERANCE: f64 = 1e-6;

/// Boxed zero-argument generator closure.
pub type BoxGenerator<T> = Box<dyn FnMut() -> T>;

/// Generator paired with its selection probability, strictly inside
/// (0, 1). Chances across a set must sum to 1 within 1e-6.
pub struct WeightedGenerator<T> {
    pub generator: BoxGenerator<T>,
    pub chance: f64,
}

impl<T> WeightedGenerator<T> {
    pub fn new(chance: f64, generator: impl FnMut() -> T + 'static) -> Self {
        Self {
            generator: Box::new(generator),
            chance,
        }
    }
}

/// Generator paired with the exact number of slots it must fill. Counts
/// across a set must sum to the requested array length.
pub struct CountedGenerator<T> {
    pub generator: BoxGenerator<T>,
    pub count: usize,
}

impl<T> CountedGenerator<T> {
    pub fn new(count: usize, generator: impl FnMut() -> T + 'static) -> Self {
        Self {
            generator: Box::new(generator),
            count,
        }
    }
}

/// Equal-chance fill: each slot independently samples a generator under a
/// discrete uniform distribution over the set, then invokes it.
pub fn generators<T>(
    length: impl Into<ArrayLength>,
    mut set: Vec<BoxGenerator<T>>,
) -> Result<Vec<T>> {
    let length = length.into().resolve("length")?;
    if set.is_empty() {
        return Err(Error::invalid_parameter(
            "generators",
            "must contain at least one generator",
            "[]",
        ));
    }

    debug!(length, generators = set.len(), "equal-chance fill");
    let mut rng = rand::rng();
    let mut arr = Vec::with_capacity(length);
    for _ in 0..length {
        let idx = rng.random_range(0..set.len());
        arr.push((set[idx])());
    }
    Ok(arr)
}

/// Weighted-chance fill: each slot draws `r` uniform in `[0, 1)` and the
/// first generator whose cumulative chance is at least `r` produces the
/// value.
pub fn weighted_generators<T>(
    length: impl Into<ArrayLength>,
    mut set: Vec<WeightedGenerator<T>>,
) -> Result<Vec<T>> {
    let length = length.into().resolve("length")?;
    if set.is_empty() {
        return Err(Error::invalid_parameter(
            "generators",
            "must contain at least one generator",
            "[]",
        ));
    }

    let mut total = 0.0;
    for entry in &set {
        validation::chance(entry.chance, "chance")?;
        total += entry.chance;
    }
    if (total - 1.0).abs() > CHANCE_TOLERANCE {
        let chances: Vec<f64> = set.iter().map(|entry| entry.chance).collect();
        return Err(Error::invalid_composite(
            "chance",
            format!("must sum to 1 across all generators (got {total})"),
            &chances,
        ));
    }

    // Higher chance first so the common draw exits the scan early; the
    // output distribution is unchanged.
    set.sort_by(|a, b| b.chance.total_cmp(&a.chance));
    let mut cumulative = Vec::with_capacity(set.len());
    let mut acc = 0.0;
    for entry in &set {
        acc += entry.chance;
        cumulative.push(acc);
    }

    debug!(length, generators = set.len(), "weighted-chance fill");
    let mut rng = rand::rng();
    let mut arr = Vec::with_capacity(length);
    for _ in 0..length {
        let draw: f64 = rng.random();
        // Float drift near the top of the table can leave no bucket for
        // draws close to 1; the last bucket owns those.
        let idx = cumulative
            .iter()
            .position(|&bound| draw <= bound)
            .unwrap_or(set.len() - 1);
        arr.push((set[idx].generator)());
    }
    Ok(arr)
}

/// Fixed-count fill: each generator produces exactly its declared count of
/// values in declaration order. With `random_order` the concatenated
/// result is shuffled in place (Fisher-Yates, every permutation equally
/// likely); otherwise the per-generator contiguous grouping is kept.
pub fn fixed_count_generators<T>(
    length: usize,
    set: Vec<CountedGenerator<T>>,
    random_order: bool,
) -> Result<Vec<T>> {
    let length = ArrayLength::from(length).resolve("length")?;
    if set.is_empty() {
        return Err(Error::invalid_parameter(
            "generators",
            "must contain at least one generator",
            "[]",
        ));
    }

    let mut total: usize = 0;
    for entry in &set {
        validation::count(entry.count, "count")?;
        total += entry.count;
    }
    if total != length {
        return Err(Error::invalid_parameter(
            "count",
            format!("must sum to the requested length {length}"),
            total,
        ));
    }

    debug!(length, generators = set.len(), random_order, "fixed-count fill");
    let mut arr = Vec::with_capacity(length);
    for mut entry in set {
        for _ in 0..entry.count {
            arr.push((entry.generator)());
        }
    }
    if random_order {
        arr.shuffle(&mut rand::rng());
    }
    Ok(arr)
}
