//! Missile hit-probability model.
//!
//! A deterministic pipeline of named coefficients, each a pure function of
//! the missile profile, target profile, and engagement geometry. Additive
//! modifiers are applied through `clamp_add` (clamp to [0, 1] after every
//! addition); multiplicative coefficients are never clamped — they are
//! bounded by construction. Order matters because the clamp is non-linear.
//!
//! The coefficient functions are public so the presentation layer can show
//! intermediate values next to the final probability. They assume inputs
//! already validated by `hit_probability`, which checks every domain
//! constraint up front and returns `ModelError::ValueRange` instead of
//! letting a NaN surface mid-pipeline.

use wardb_core::constants::{SEASKIM_ALT_CEILING_M, SEASKIM_ALT_HIGH_M, SEASKIM_ALT_LOW_M};
use wardb_core::enums::{GuidanceMode, Proficiency, TerminalManeuver};
use wardb_core::error::{ModelError, ModelResult};
use wardb_core::types::{EngagementGeometry, MissileProfile, TargetProfile};

/// Probability that the missile hits the target in this engagement.
pub fn hit_probability(
    missile: &MissileProfile,
    target: &TargetProfile,
    env: &EngagementGeometry,
) -> ModelResult<f64> {
    validate(missile, target, env)?;

    let mut ph = clamp_add(
        missile.base_hit_probability * distance_coef(missile, env),
        speed_mod(missile, target),
    );

    if !target.is_missile {
        ph = clamp_add(ph, agility_mod(target, env));
    } else {
        ph *= crossing_angle_coef(env.bearing_deg);
        ph *= terminal_maneuver_coef(target.terminal_maneuver);
        ph = clamp_add(ph, signature_mod(missile, target));
    }

    Ok(clamp_add(ph, seaskimmer_mod(missile, target, env)))
}

/// Add a modifier and clamp the running probability back into [0, 1].
fn clamp_add(ph: f64, modifier: f64) -> f64 {
    (ph + modifier).clamp(0.0, 1.0)
}

/// Range falloff: full effectiveness out to a fraction of maximum range
/// (half for rocket/unpowered weapons, three quarters otherwise), then a
/// linear decay from 1 down to that fraction as the shot reaches max range.
pub fn distance_coef(missile: &MissileProfile, env: &EngagementGeometry) -> f64 {
    let p = env.distance_nmi / missile.range_max_nmi;
    let pf = if missile.rocket_or_unpowered { 0.5 } else { 0.75 };
    if p < pf {
        1.0
    } else {
        pf + (1.0 - pf) * (1.0 - (p - pf) / (1.0 - pf))
    }
}

/// Penalty for a target near or beyond the weapon's rated speed envelope.
pub fn speed_mod(missile: &MissileProfile, target: &TargetProfile) -> f64 {
    let p = target.speed_kt / missile.max_target_speed_kt;
    if p > 1.0 {
        -0.5
    } else if p > 0.8 {
        -0.25
    } else if p > 0.7 {
        -0.15
    } else if p > 0.6 {
        -0.1
    } else if p > 0.4 {
        -0.05
    } else {
        0.0
    }
}

/// Agility falls off with altitude (thin air); supermaneuverable airframes
/// keep more of it near their ceiling.
pub fn altitude_coef(target: &TargetProfile) -> f64 {
    let p = target.altitude_m / target.altitude_max_m;
    if target.supermaneuverable {
        (1.0 - 0.5 * p).max(0.5)
    } else {
        (1.0 - 0.75 * p).max(0.25)
    }
}

/// How much of the rated agility the crew can actually fly.
pub fn proficiency_coef(proficiency: Proficiency) -> f64 {
    match proficiency {
        Proficiency::Novice => 0.3,
        Proficiency::Cadet => 0.5,
        Proficiency::Regular => 0.8,
        Proficiency::Veteran => 1.0,
        Proficiency::Ace => 1.2,
    }
}

/// Agility penalty for carried load: a clean airframe flies at 1.0, a full
/// one at 0.4. The loadout fraction compares current disposable load
/// against the valid load margin above empty weight plus reserve fuel.
pub fn weight_coef(target: &TargetProfile) -> f64 {
    let weight_current = target.weight_empty + target.weight_payload + target.weight_fuel;
    let weight_base = target.weight_empty + 0.6 * target.weight_fuel;
    let weight_valid = target.weight_max - weight_base;
    let loadout_coef = ((weight_current - weight_base) / weight_valid).min(0.99);
    0.4 + 0.6 * (1.0 - loadout_coef)
}

/// Remaining agility after accumulated damage.
pub fn damage_coef(target: &TargetProfile) -> f64 {
    1.0 - target.damage
}

/// How well the target can put the missile on its beam: beam attacks
/// (around 90/270°) leave the full agility available, head-on and tail
/// geometries much less. Buckets are half-open on the ascending side.
pub fn attack_angle_coef(bearing_deg: f64) -> f64 {
    let b = bearing_deg.rem_euclid(360.0);
    if b < 15.0 || b > 345.0 {
        0.6
    } else if b < 60.0 || b > 300.0 {
        0.7
    } else if b < 110.0 || b > 250.0 {
        1.0
    } else if b < 165.0 || b > 195.0 {
        0.85
    } else {
        0.5
    }
}

/// Rated agility scaled by every situational coefficient.
pub fn modified_agility(target: &TargetProfile, env: &EngagementGeometry) -> f64 {
    target.agility
        * altitude_coef(target)
        * proficiency_coef(target.proficiency)
        * weight_coef(target)
        * damage_coef(target)
        * attack_angle_coef(env.bearing_deg)
}

/// Additive penalty for an agile, well-flown aircraft target.
pub fn agility_mod(target: &TargetProfile, env: &EngagementGeometry) -> f64 {
    -0.1 * modified_agility(target, env)
}

/// Additive penalty against a sea-skimming target. Zero when the
/// engagement is not over the sea, the weapon is rated against skimmers,
/// or the target is above the skimming ceiling (300 ft).
pub fn seaskimmer_mod(
    missile: &MissileProfile,
    target: &TargetProfile,
    env: &EngagementGeometry,
) -> f64 {
    if !env.on_sea || missile.capable_vs_seaskimmer || target.altitude_m > SEASKIM_ALT_CEILING_M {
        return 0.0;
    }
    if target.altitude_m > SEASKIM_ALT_HIGH_M {
        -0.05
    } else if target.altitude_m > SEASKIM_ALT_LOW_M {
        -0.15
    } else {
        -0.3
    }
}

/// Crossing-geometry coefficient for missile targets: 1 at head-on, 0 at
/// a stern chase, linear in the bearing folded into [0, 180].
pub fn crossing_angle_coef(bearing_deg: f64) -> f64 {
    let b = bearing_deg.rem_euclid(360.0);
    let folded = if b > 180.0 { 360.0 - b } else { b };
    1.0 - folded / 180.0
}

/// Coefficient for the target missile's terminal maneuver; no maneuver
/// means no penalty.
pub fn terminal_maneuver_coef(maneuver: Option<TerminalManeuver>) -> f64 {
    match maneuver {
        Some(TerminalManeuver::PopUp) => 3.0 / 4.0,
        Some(TerminalManeuver::ZigZag) => 2.0 / 3.0,
        Some(TerminalManeuver::Random) => 1.0 / 2.0,
        None => 1.0,
    }
}

/// Additive penalty for a low-signature missile target, keyed off RCS for
/// radar seekers and off IR detection distance for infrared seekers.
pub fn signature_mod(missile: &MissileProfile, target: &TargetProfile) -> f64 {
    match missile.guidance {
        GuidanceMode::Radar => {
            let rcs = target.rcs_m2;
            if rcs >= 1.0 {
                0.0
            } else if rcs > 0.1 {
                -0.1
            } else if rcs > 0.01 {
                -0.15
            } else {
                -0.2
            }
        }
        GuidanceMode::Infrared => {
            let ir_dist = target.ir_detection_distance_nmi;
            if ir_dist > 1.0 {
                0.0
            } else if ir_dist > 0.5 {
                -0.1
            } else if ir_dist > 0.25 {
                -0.15
            } else {
                -0.2
            }
        }
    }
}

fn validate(
    missile: &MissileProfile,
    target: &TargetProfile,
    env: &EngagementGeometry,
) -> ModelResult<()> {
    let poh = missile.base_hit_probability;
    if !(0.0..=1.0).contains(&poh) {
        return Err(ModelError::value_range("base hit probability", poh));
    }
    if !(missile.range_max_nmi > 0.0) {
        return Err(ModelError::value_range(
            "maximum range",
            missile.range_max_nmi,
        ));
    }
    if !(missile.max_target_speed_kt > 0.0) {
        return Err(ModelError::value_range(
            "maximum target speed",
            missile.max_target_speed_kt,
        ));
    }
    if !(target.speed_kt >= 0.0) {
        return Err(ModelError::value_range("target speed", target.speed_kt));
    }
    if !(0.0..=1.0).contains(&target.damage) {
        return Err(ModelError::value_range("damage fraction", target.damage));
    }
    if !(target.altitude_max_m > 0.0) {
        return Err(ModelError::value_range(
            "maximum altitude",
            target.altitude_max_m,
        ));
    }
    // Altitude ratio must land in [0, 1].
    if !(target.altitude_m >= 0.0 && target.altitude_m <= target.altitude_max_m) {
        return Err(ModelError::value_range("altitude", target.altitude_m));
    }
    for (name, weight) in [
        ("empty weight", target.weight_empty),
        ("payload weight", target.weight_payload),
        ("fuel weight", target.weight_fuel),
        ("maximum weight", target.weight_max),
    ] {
        if !(weight >= 0.0) {
            return Err(ModelError::value_range(name, weight));
        }
    }
    // Degenerate loadout denominator would divide by zero or flip sign.
    let weight_valid = target.weight_max - (target.weight_empty + 0.6 * target.weight_fuel);
    if !(weight_valid > 0.0) {
        return Err(ModelError::value_range("valid weight margin", weight_valid));
    }
    if !(env.distance_nmi >= 0.0) {
        return Err(ModelError::value_range("distance", env.distance_nmi));
    }
    Ok(())
}
