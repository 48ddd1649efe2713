//! Sacred resonance correction.
//!
//! A numerology-flavored closing step: one pseudo-random draw is folded
//! onto the 3-6-9 cycle and recorded in the log. Nothing reads the value;
//! it exists only as a logged artifact.

use rand::Rng;

use crate::error::AppError;
use crate::logger::Logger;

/// Base factor of the 3-6-9 cycle.
pub const RESONANCE_FACTOR: f64 = 3.69;

/// Cycle length the draw is folded onto.
pub const RESONANCE_CYCLE: u32 = 12;

/// Fold a draw onto the resonance cycle.
pub fn correction_factor(draw: u32) -> f64 {
    RESONANCE_FACTOR * f64::from(draw % RESONANCE_CYCLE)
}

/// Draw from [0, 100), compute the correction factor, and log it.
///
/// Returns the factor; callers are free to ignore it.
pub fn sacred_resonance_correction(logger: &Logger) -> Result<f64, AppError> {
    let draw = rand::thread_rng().gen_range(0..100u32);
    let factor = correction_factor(draw);
    logger.log(&format!("Sacred resonance correction applied: factor {factor:.2}"))?;
    Ok(factor)
}
