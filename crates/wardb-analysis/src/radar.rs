//! Radar detection-range model.
//!
//! Combines a power-budget-limited range (classic radar equation, evaluated
//! in log space so large powers and tiny cross sections cannot overflow)
//! with the unambiguous range set by the pulse repetition frequency, and
//! returns the smaller of the two.
//!
//! Validation policy is strict: every input is checked against its physical
//! domain before any arithmetic and violations return
//! `ModelError::ValueRange`. NaN never propagates, including in the batch
//! form (first invalid cross section aborts the whole batch).

use wardb_core::enums::Aspect;
use wardb_core::error::{ModelError, ModelResult};
use wardb_core::types::{RadarCharacteristics, RcsSignature};
use wardb_core::units::{decibel_to_linear, meters_to_km, meters_to_nmi};

/// Detection ranges for one aspect-dependent RCS table row (meters).
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRanges {
    /// Band description carried over from the signature row.
    pub description: String,
    pub front_m: f64,
    pub side_m: f64,
    pub rear_m: f64,
}

/// Maximum detection range in meters for a target of `rcs_m2` square meters.
///
/// Steps: antenna gain from the beamwidths, wavelength from the carrier
/// frequency, log-space power-budget range, quarter-power noise and
/// processing-gain corrections, then the PRF cap.
pub fn detection_range(radar: &RadarCharacteristics, rcs_m2: f64) -> ModelResult<f64> {
    validate_radar(radar)?;
    validate_rcs(rcs_m2)?;
    Ok(unchecked_range(radar, rcs_m2))
}

/// `detection_range` in kilometers.
pub fn detection_range_km(radar: &RadarCharacteristics, rcs_m2: f64) -> ModelResult<f64> {
    Ok(meters_to_km(detection_range(radar, rcs_m2)?))
}

/// `detection_range` in nautical miles.
pub fn detection_range_nmi(radar: &RadarCharacteristics, rcs_m2: f64) -> ModelResult<f64> {
    Ok(meters_to_nmi(detection_range(radar, rcs_m2)?))
}

/// Element-wise `detection_range` over many cross sections with one radar.
///
/// The radar is validated once; the formula is applied independently per
/// element with no cross-element interaction.
pub fn detection_range_batch(
    radar: &RadarCharacteristics,
    rcs_m2: &[f64],
) -> ModelResult<Vec<f64>> {
    validate_radar(radar)?;
    rcs_m2
        .iter()
        .map(|&rcs| {
            validate_rcs(rcs)?;
            Ok(unchecked_range(radar, rcs))
        })
        .collect()
}

/// Detection ranges for each aspect of a dBsm signature row.
pub fn signature_detection_ranges(
    radar: &RadarCharacteristics,
    signature: &RcsSignature,
) -> ModelResult<AspectRanges> {
    validate_radar(radar)?;
    Ok(AspectRanges {
        description: signature.description.clone(),
        front_m: unchecked_range(radar, signature.aspect_m2(Aspect::Front)),
        side_m: unchecked_range(radar, signature.aspect_m2(Aspect::Side)),
        rear_m: unchecked_range(radar, signature.aspect_m2(Aspect::Rear)),
    })
}

/// Power-budget range with corrections, capped at the PRF range.
/// Inputs must already be validated.
fn unchecked_range(radar: &RadarCharacteristics, rcs_m2: f64) -> f64 {
    let four_pi = 4.0 * std::f64::consts::PI;
    let log_range = 0.25
        * (radar.peak_power_w.ln() + 2.0 * radar.gain().ln() + 2.0 * radar.wavelength_m().ln()
            + rcs_m2.ln()
            - 3.0 * four_pi.ln()
            - radar.minimum_power_w.ln());

    // Noise divides; processing gain loss multiplies. The sign convention
    // is the reference tool's — the "loss" field acts as a gain on range.
    let adjusted = log_range.exp()
        / decibel_to_linear(radar.system_noise_level_db).powf(0.25)
        * decibel_to_linear(radar.processing_gain_loss_db).powf(0.25);

    adjusted.min(radar.prf_range_m())
}

fn validate_radar(radar: &RadarCharacteristics) -> ModelResult<()> {
    if !(radar.peak_power_w > 0.0) {
        return Err(ModelError::value_range("peak power", radar.peak_power_w));
    }
    if !(radar.frequency_hz > 0.0) {
        return Err(ModelError::value_range("frequency", radar.frequency_hz));
    }
    if !(radar.minimum_power_w > 0.0) {
        return Err(ModelError::value_range(
            "minimum power",
            radar.minimum_power_w,
        ));
    }
    if !(radar.prf_hz > 0.0) {
        return Err(ModelError::value_range(
            "pulse repetition frequency",
            radar.prf_hz,
        ));
    }
    for (name, beamwidth) in [
        ("vertical beamwidth", radar.vertical_beamwidth_deg),
        ("horizontal beamwidth", radar.horizontal_beamwidth_deg),
    ] {
        if !(beamwidth > 0.0 && beamwidth <= 360.0) {
            return Err(ModelError::value_range(name, beamwidth));
        }
    }
    Ok(())
}

fn validate_rcs(rcs_m2: f64) -> ModelResult<()> {
    if !(rcs_m2 > 0.0) {
        return Err(ModelError::value_range("radar cross section", rcs_m2));
    }
    Ok(())
}
