use std::ops::RangeInclusive;

use crate::error::GuardError;
use crate::record::{HEALTH, POINTS};
use crate::types::PropertyKey;
use crate::value::Value;

pub const HEALTH_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Decide whether `value` may be written to `key`. Only `health` and
/// `points` are constrained; NaN never falls inside [`HEALTH_RANGE`].
pub fn check_write(key: &PropertyKey, value: &Value) -> Result<(), GuardError> {
    match key.as_name() {
        Some(HEALTH) => match value.as_f64() {
            Some(v) if HEALTH_RANGE.contains(&v) => Ok(()),
            _ => Err(GuardError::InvalidHealth(value.clone())),
        },
        Some(POINTS) if !value.is_number() => Err(GuardError::InvalidPoints(value.clone())),
        _ => Ok(()),
    }
}
