//! Unit conversions and frequency-band parsing.
//!
//! The database stores sensor frequencies as descriptive band labels
//! (e.g. `"Radar, E-M Band (2-100 GHz)"` or `"Visual Light"`); everything
//! here resolves those to plain Hz for the range equations.

use crate::constants::{
    FAR_IR_HZ, LASER_HZ, METERS_PER_NMI, NEAR_IR_HZ, VISUAL_LIGHT_HZ,
};
use crate::error::{ModelError, ModelResult};

/// Convert a decibel value to its linear ratio: `10^(db/10)`.
///
/// Also converts dBsm cross sections to square meters.
pub fn decibel_to_linear(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// Meters to kilometers.
pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Meters to nautical miles.
pub fn meters_to_nmi(meters: f64) -> f64 {
    meters / METERS_PER_NMI
}

/// Resolve a frequency band label to Hz.
///
/// Named light/IR/laser bands (exact database labels) map to fixed
/// constants; any other label must contain `"<int>-<int> [K|M|G]?Hz"`
/// somewhere and resolves to the interval midpoint times the SI prefix.
pub fn frequency_band_to_hz(label: &str) -> ModelResult<f64> {
    match label {
        "Visual Light" => return Ok(VISUAL_LIGHT_HZ),
        "Near IR (0.75-8 µm)" => return Ok(NEAR_IR_HZ),
        "Far IR (8-1000 µm)" => return Ok(FAR_IR_HZ),
        "Laser" => return Ok(LASER_HZ),
        _ => {}
    }
    parse_numeric_band(label).ok_or_else(|| ModelError::Format(label.to_string()))
}

/// Effective frequency for a sensor with multiple bands: the minimum
/// resolved Hz across the list (deterministic worst-case choice).
pub fn effective_frequency_hz(labels: &[&str]) -> ModelResult<f64> {
    if labels.is_empty() {
        return Err(ModelError::value_range("frequency band count", 0.0));
    }
    let mut min_hz = f64::INFINITY;
    for label in labels {
        min_hz = min_hz.min(frequency_band_to_hz(label)?);
    }
    Ok(min_hz)
}

/// Scan for `"<int>-<int> [K|M|G]?Hz"` anywhere in the label and evaluate it.
fn parse_numeric_band(label: &str) -> Option<f64> {
    let bytes = label.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        if start > 0 && bytes[start - 1].is_ascii_digit() {
            continue; // not the start of a number
        }
        if let Some(hz) = parse_band_at(&label[start..]) {
            return Some(hz);
        }
    }
    None
}

/// Parse `"<int>-<int> [K|M|G]?Hz"` at the start of `s`.
fn parse_band_at(s: &str) -> Option<f64> {
    let (low, rest) = take_integer(s)?;
    let rest = rest.strip_prefix('-')?;
    let (high, rest) = take_integer(rest)?;
    let rest = rest.strip_prefix(' ')?;
    let (multiplier, rest) = match rest.as_bytes().first()? {
        b'K' => (1e3, &rest[1..]),
        b'M' => (1e6, &rest[1..]),
        b'G' => (1e9, &rest[1..]),
        _ => (1.0, rest),
    };
    if !rest.starts_with("Hz") {
        return None;
    }
    Some((low + high) / 2.0 * multiplier)
}

/// Split a leading run of ASCII digits off `s`.
fn take_integer(s: &str) -> Option<(f64, &str)> {
    let digits = s.len() - s.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let value: f64 = s[..digits].parse().ok()?;
    Some((value, &s[digits..]))
}
