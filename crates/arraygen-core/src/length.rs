use rand::Rng;

use crate::error::{Error, Result};

/// Largest array length any operation will produce: 2^32 - 1.
pub const MAX_ARRAY_LENGTH: u64 = (1 << 32) - 1;

/// Requested length of a generated array.
///
/// Either a fixed element count or an inclusive `[min, max]` range sampled
/// once per generation call. Both forms are checked against a lower bound
/// of 1 and the global [`MAX_ARRAY_LENGTH`] cap before anything is
/// allocated. Bounds are held signed so out-of-contract negative inputs
/// surface in the error instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayLength {
    Fixed(i64),
    Range(i64, i64),
}

impl From<usize> for ArrayLength {
    fn from(length: usize) -> Self {
        ArrayLength::Fixed(i64::try_from(length).unwrap_or(i64::MAX))
    }
}

impl From<i32> for ArrayLength {
    fn from(length: i32) -> Self {
        ArrayLength::Fixed(i64::from(length))
    }
}

impl From<(usize, usize)> for ArrayLength {
    fn from((min, max): (usize, usize)) -> Self {
        ArrayLength::Range(
            i64::try_from(min).unwrap_or(i64::MAX),
            i64::try_from(max).unwrap_or(i64::MAX),
        )
    }
}

impl From<(i32, i32)> for ArrayLength {
    fn from((min, max): (i32, i32)) -> Self {
        ArrayLength::Range(i64::from(min), i64::from(max))
    }
}

impl ArrayLength {
    /// Check the contract without sampling: value (or range lower bound)
    /// at least 1, range ordered, upper bound within the global cap.
    pub fn validate(&self, name: &str) -> Result<()> {
        match *self {
            ArrayLength::Fixed(length) => {
                if length < 1 {
                    return Err(Error::invalid_parameter(name, "must be at least 1", length));
                }
                if length as u64 > MAX_ARRAY_LENGTH {
                    return Err(Error::invalid_parameter(
                        name,
                        format!("must not exceed {MAX_ARRAY_LENGTH} (2^32 - 1)"),
                        length,
                    ));
                }
            }
            ArrayLength::Range(min, max) => {
                if min < 1 {
                    return Err(Error::invalid_parameter(name, "must be at least 1", min));
                }
                if min > max {
                    return Err(Error::invalid_parameter(
                        name,
                        "must be an ordered [min, max] range",
                        format!("[{min}, {max}]"),
                    ));
                }
                if max as u64 > MAX_ARRAY_LENGTH {
                    return Err(Error::invalid_parameter(
                        name,
                        format!("must not exceed {MAX_ARRAY_LENGTH} (2^32 - 1)"),
                        max,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Concrete length for one call. Ranges draw uniformly over the
    /// inclusive bounds; callers must have validated first.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        match *self {
            ArrayLength::Fixed(length) => length as usize,
            ArrayLength::Range(min, max) => rng.random_range(min..=max) as usize,
        }
    }

    /// Validate, then sample the concrete length once.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        self.validate(name)?;
        Ok(self.sample(&mut rand::rng()))
    }
}
