//! Physical constants and model thresholds.

/// Propagation speed used by the range equations (m/s).
///
/// The reference outputs were produced with c rounded to 3e8 exactly.
/// Keep it that way — results must reproduce bit-for-bit.
pub const LIGHT_SPEED: f64 = 300_000_000.0;

/// Meters per nautical mile (display conversion only).
pub const METERS_PER_NMI: f64 = 1_852.0;

// --- Sea-skimmer altitude bands ---

/// Above this altitude (300 ft, meters) a target no longer counts as skimming.
pub const SEASKIM_ALT_CEILING_M: f64 = 91.44;

/// Upper skimming band floor (200 ft, meters) — mild penalty above this.
pub const SEASKIM_ALT_HIGH_M: f64 = 60.96;

/// Lower skimming band floor (100 ft, meters) — heavy penalty below this.
pub const SEASKIM_ALT_LOW_M: f64 = 30.48;

// --- Named sensor frequency bands ---

/// Visual-light band center frequency (Hz).
pub const VISUAL_LIGHT_HZ: f64 = 300e12;

/// Near-infrared band (0.75-8 µm) center frequency (Hz).
pub const NEAR_IR_HZ: f64 = 30e12;

/// Far-infrared band (8-1000 µm) center frequency (Hz).
pub const FAR_IR_HZ: f64 = 3e12;

/// Laser designator frequency (Hz).
pub const LASER_HZ: f64 = 300e9;
