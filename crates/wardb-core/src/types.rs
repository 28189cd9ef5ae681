//! Parameter records consumed by the analysis models.
//!
//! These are value objects: built fresh per calculation from a database
//! record or raw user input, never mutated, compared by value. Derived
//! radar quantities are recomputed on every read — they are cheap and
//! caching would only add state.

use serde::{Deserialize, Serialize};

use crate::constants::LIGHT_SPEED;
use crate::enums::{Aspect, GuidanceMode, Proficiency, TerminalManeuver};
use crate::units::decibel_to_linear;

/// Transmitter/antenna/receiver characteristics of a radar sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarCharacteristics {
    /// Peak transmit power (W).
    pub peak_power_w: f64,
    /// Operating frequency (Hz). For multi-band sensors, resolve the band
    /// list with `units::effective_frequency_hz` before packing it here.
    pub frequency_hz: f64,
    /// Minimum detectable return power (W).
    pub minimum_power_w: f64,
    /// Vertical beamwidth (degrees).
    pub vertical_beamwidth_deg: f64,
    /// Horizontal beamwidth (degrees).
    pub horizontal_beamwidth_deg: f64,
    /// Pulse repetition frequency (Hz).
    pub prf_hz: f64,
    /// System noise level (dB).
    pub system_noise_level_db: f64,
    /// Processing gain loss (dB). Applied with the reference tool's sign
    /// convention: it multiplies range despite the name.
    pub processing_gain_loss_db: f64,
}

impl RadarCharacteristics {
    /// Antenna gain from the beamwidths: `4π / (θ_v · θ_h)` in radians.
    pub fn gain(&self) -> f64 {
        4.0 * std::f64::consts::PI
            / self.vertical_beamwidth_deg.to_radians()
            / self.horizontal_beamwidth_deg.to_radians()
    }

    /// Carrier wavelength (meters).
    pub fn wavelength_m(&self) -> f64 {
        LIGHT_SPEED / self.frequency_hz
    }

    /// Maximum unambiguous range set by the PRF (meters).
    pub fn prf_range_m(&self) -> f64 {
        LIGHT_SPEED / self.prf_hz / 2.0
    }
}

/// One aspect-dependent RCS row as stored in the database (dBsm per aspect).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcsSignature {
    /// Band description, e.g. "Radar, E-M Band (2-100 GHz)".
    pub description: String,
    pub front_dbsm: f64,
    pub side_dbsm: f64,
    pub rear_dbsm: f64,
}

impl RcsSignature {
    /// Stored dBsm value for one aspect.
    pub fn aspect_dbsm(&self, aspect: Aspect) -> f64 {
        match aspect {
            Aspect::Front => self.front_dbsm,
            Aspect::Side => self.side_dbsm,
            Aspect::Rear => self.rear_dbsm,
        }
    }

    /// Cross section for one aspect in square meters.
    pub fn aspect_m2(&self, aspect: Aspect) -> f64 {
        decibel_to_linear(self.aspect_dbsm(aspect))
    }
}

/// Kinematic and guidance profile of an attacking missile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissileProfile {
    /// Base probability of hit before situational modifiers, in [0, 1].
    pub base_hit_probability: f64,
    /// Fastest target this weapon can effectively engage (kt).
    pub max_target_speed_kt: f64,
    /// Pure rocket booster or unpowered in the terminal phase — shortens
    /// the full-effectiveness envelope.
    pub rocket_or_unpowered: bool,
    /// Rated against sea-skimming targets (weapon code 2006).
    pub capable_vs_seaskimmer: bool,
    /// Maximum range (nmi).
    pub range_max_nmi: f64,
    /// Seeker guidance mode.
    pub guidance: GuidanceMode,
}

/// Kinematic, maneuver, and signature profile of the target under attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Current speed (kt).
    pub speed_kt: f64,
    /// Maneuverability rating (Harpoon-style agility).
    pub agility: f64,
    /// Current altitude (meters).
    pub altitude_m: f64,
    /// Service ceiling (meters).
    pub altitude_max_m: f64,
    /// Supermaneuverability (aircraft code 4001).
    pub supermaneuverable: bool,
    /// Crew proficiency.
    pub proficiency: Proficiency,
    pub weight_empty: f64,
    pub weight_payload: f64,
    pub weight_fuel: f64,
    pub weight_max: f64,
    /// Damage fraction in [0, 1] (0 = undamaged).
    pub damage: f64,
    /// Terminal maneuver flown if the target is itself a missile.
    pub terminal_maneuver: Option<TerminalManeuver>,
    /// Radar cross section (m²).
    pub rcs_m2: f64,
    /// IR detection distance (nmi).
    pub ir_detection_distance_nmi: f64,
    /// Missile target (true) vs aircraft target (false) — selects the
    /// modifier branch in the hit-probability pipeline.
    pub is_missile: bool,
}

/// Geometry of one missile-vs-target engagement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementGeometry {
    /// Bearing of the attack (degrees, any real; normalized mod 360).
    /// 0 = head-on, 90/270 = beam attack.
    pub bearing_deg: f64,
    /// Distance flown to the target (nmi).
    pub distance_nmi: f64,
    /// Engagement over the sea surface (enables the sea-skimmer modifier).
    pub on_sea: bool,
}
