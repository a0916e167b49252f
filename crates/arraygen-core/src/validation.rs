//! Stateless contract checks invoked by every public operation.
//!
//! Each check inspects one value and a human-readable parameter name, then
//! either passes or fails with [`Error::InvalidParameter`]. Shape checks
//! (is-integer, is-boolean, is-array, is-function) are carried by the
//! type system and have no runtime counterpart here.

use crate::error::{Error, Result};

/// Integer parameter with an inclusive lower bound.
pub fn at_least(value: i64, min: i64, name: &str) -> Result<()> {
    if value < min {
        return Err(Error::invalid_parameter(
            name,
            format!("must be at least {min}"),
            value,
        ));
    }
    Ok(())
}

/// Element count: a positive integer.
pub fn count(value: usize, name: &str) -> Result<()> {
    if value < 1 {
        return Err(Error::invalid_parameter(name, "must be at least 1", value));
    }
    Ok(())
}

/// Number that must be finite (rejects NaN and infinities).
pub fn finite(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_parameter(
            name,
            "must be a finite number",
            value,
        ));
    }
    Ok(())
}

/// Selection probability strictly inside (0, 1).
pub fn chance(value: f64, name: &str) -> Result<()> {
    finite(value, name)?;
    if value <= 0.0 || value >= 1.0 {
        return Err(Error::invalid_parameter(
            name,
            "must be greater than 0 and less than 1",
            value,
        ));
    }
    Ok(())
}

/// Probability inside the closed interval [0, 1].
pub fn probability(value: f64, name: &str) -> Result<()> {
    finite(value, name)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid_parameter(
            name,
            "must be between 0 and 1",
            value,
        ));
    }
    Ok(())
}

/// Integer bounds of a half-open sampling range: max strictly above min.
pub fn ordered_i64(min: i64, max: i64, name: &str) -> Result<()> {
    if max <= min {
        return Err(Error::invalid_parameter(
            name,
            format!("must be greater than {min}"),
            max,
        ));
    }
    Ok(())
}

/// Float bounds of a half-open sampling range: finite, max strictly above min.
pub fn ordered_f64(min: f64, max: f64, name: &str) -> Result<()> {
    finite(max, name)?;
    if max <= min {
        return Err(Error::invalid_parameter(
            name,
            format!("must be greater than {min}"),
            max,
        ));
    }
    Ok(())
}
