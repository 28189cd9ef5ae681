//! Cross-cutting tests: the reference engagement scenario and seeded
//! domain sweeps over both models.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use wardb_core::enums::{GuidanceMode, Proficiency, TerminalManeuver};
use wardb_core::types::{EngagementGeometry, MissileProfile, RadarCharacteristics, TargetProfile};

use crate::missile::hit_probability;
use crate::radar::{detection_range, detection_range_batch};

/// Reference engagement: radar-guided missile vs a regular-crew fighter at
/// medium altitude, beam attack at half the weapon's range.
#[test]
fn test_reference_aircraft_engagement() {
    let missile = MissileProfile {
        base_hit_probability: 0.8,
        max_target_speed_kt: 600.0,
        rocket_or_unpowered: false,
        capable_vs_seaskimmer: false,
        range_max_nmi: 20.0,
        guidance: GuidanceMode::Radar,
    };
    let target = TargetProfile {
        speed_kt: 500.0,
        agility: 5.0,
        altitude_m: 5000.0,
        altitude_max_m: 15_000.0,
        supermaneuverable: false,
        proficiency: Proficiency::Regular,
        weight_empty: 10_000.0,
        weight_payload: 2000.0,
        weight_fuel: 3000.0,
        weight_max: 20_000.0,
        damage: 0.0,
        terminal_maneuver: None,
        rcs_m2: 0.5,
        ir_detection_distance_nmi: 0.8,
        is_missile: false,
    };
    let env = EngagementGeometry {
        bearing_deg: 90.0,
        distance_nmi: 10.0,
        on_sea: false,
    };

    // distance_coef = 1 (p = 0.5 < 0.75); speed_mod = -0.25 (p = 5/6);
    // ph = 0.55. Agility chain: altitude 0.75, proficiency 0.8,
    // weight 0.4 + 0.6*(1 - 3200/8200), damage 1, angle 1 at 90°.
    let weight_coef = 0.4 + 0.6 * (1.0 - 3200.0 / 8200.0);
    let expected = 0.55 - 0.1 * (5.0 * 0.75 * 0.8 * weight_coef);
    let ph = hit_probability(&missile, &target, &env).unwrap();
    assert!(
        (ph - expected).abs() < 1e-12,
        "ph={ph}, expected={expected}"
    );
    // Same inputs, same bits.
    assert_eq!(ph, hit_probability(&missile, &target, &env).unwrap());
}

fn random_missile(rng: &mut ChaCha8Rng) -> MissileProfile {
    MissileProfile {
        base_hit_probability: rng.gen_range(0.0..=1.0),
        max_target_speed_kt: rng.gen_range(100.0..2000.0),
        rocket_or_unpowered: rng.gen_bool(0.5),
        capable_vs_seaskimmer: rng.gen_bool(0.5),
        range_max_nmi: rng.gen_range(1.0..300.0),
        guidance: if rng.gen_bool(0.5) {
            GuidanceMode::Radar
        } else {
            GuidanceMode::Infrared
        },
    }
}

fn random_target(rng: &mut ChaCha8Rng) -> TargetProfile {
    let altitude_max_m = rng.gen_range(100.0..20_000.0);
    let weight_empty = rng.gen_range(0.0..50_000.0);
    let weight_fuel = rng.gen_range(0.0..20_000.0);
    // Keep the loadout denominator positive.
    let weight_max = weight_empty + 0.6 * weight_fuel + rng.gen_range(1.0..30_000.0);
    let proficiency = match rng.gen_range(1..=5) {
        1 => Proficiency::Novice,
        2 => Proficiency::Cadet,
        3 => Proficiency::Regular,
        4 => Proficiency::Veteran,
        _ => Proficiency::Ace,
    };
    let terminal_maneuver = match rng.gen_range(0..4) {
        0 => Some(TerminalManeuver::PopUp),
        1 => Some(TerminalManeuver::ZigZag),
        2 => Some(TerminalManeuver::Random),
        _ => None,
    };
    TargetProfile {
        speed_kt: rng.gen_range(0.0..2500.0),
        agility: rng.gen_range(0.0..10.0),
        altitude_m: rng.gen_range(0.0..=1.0) * altitude_max_m,
        altitude_max_m,
        supermaneuverable: rng.gen_bool(0.5),
        proficiency,
        weight_empty,
        weight_payload: rng.gen_range(0.0..20_000.0),
        weight_fuel,
        weight_max,
        damage: rng.gen_range(0.0..=1.0),
        terminal_maneuver,
        rcs_m2: rng.gen_range(0.0001..100.0),
        ir_detection_distance_nmi: rng.gen_range(0.0..5.0),
        is_missile: rng.gen_bool(0.5),
    }
}

/// Any combination of valid inputs must yield a probability in [0, 1].
#[test]
fn test_hit_probability_domain_sweep() {
    let mut rng = ChaCha8Rng::seed_from_u64(424242);
    for i in 0..10_000 {
        let missile = random_missile(&mut rng);
        let target = random_target(&mut rng);
        let env = EngagementGeometry {
            bearing_deg: rng.gen_range(-720.0..720.0),
            distance_nmi: rng.gen_range(0.0..1.5) * missile.range_max_nmi,
            on_sea: rng.gen_bool(0.5),
        };
        let ph = hit_probability(&missile, &target, &env)
            .unwrap_or_else(|e| panic!("iteration {i} rejected valid inputs: {e}"));
        assert!(
            (0.0..=1.0).contains(&ph),
            "iteration {i}: ph={ph} outside [0, 1]"
        );
    }
}

fn random_radar(rng: &mut ChaCha8Rng) -> RadarCharacteristics {
    RadarCharacteristics {
        peak_power_w: rng.gen_range(1.0..1e7),
        frequency_hz: rng.gen_range(1e6..40e9),
        minimum_power_w: 10f64.powf(rng.gen_range(-16.0..-8.0)),
        vertical_beamwidth_deg: rng.gen_range(0.1..90.0),
        horizontal_beamwidth_deg: rng.gen_range(0.1..90.0),
        prf_hz: rng.gen_range(100.0..10_000.0),
        system_noise_level_db: rng.gen_range(0.0..10.0),
        processing_gain_loss_db: rng.gen_range(-10.0..5.0),
    }
}

/// The PRF cap holds over the whole radar parameter domain, and the batch
/// form agrees with scalar evaluation element for element.
#[test]
fn test_detection_range_domain_sweep() {
    let mut rng = ChaCha8Rng::seed_from_u64(31337);
    for i in 0..2_000 {
        let radar = random_radar(&mut rng);
        let rcs: Vec<f64> = (0..4).map(|_| rng.gen_range(0.001..100.0)).collect();
        let batch = detection_range_batch(&radar, &rcs).unwrap();
        for (&sigma, &range) in rcs.iter().zip(batch.iter()) {
            assert!(range.is_finite(), "iteration {i}: non-finite range");
            assert!(
                range <= radar.prf_range_m(),
                "iteration {i}: range {range} beyond PRF cap {}",
                radar.prf_range_m()
            );
            assert_eq!(range, detection_range(&radar, sigma).unwrap());
        }
    }
}

/// Larger cross sections never shorten the detection range.
#[test]
fn test_detection_range_rcs_monotonicity_sweep() {
    let mut rng = ChaCha8Rng::seed_from_u64(777);
    for _ in 0..2_000 {
        let radar = random_radar(&mut rng);
        let small = rng.gen_range(0.001..10.0);
        let large = small * rng.gen_range(1.0..100.0);
        let range_small = detection_range(&radar, small).unwrap();
        let range_large = detection_range(&radar, large).unwrap();
        assert!(
            range_large >= range_small,
            "rcs {small}->{large}: range {range_small}->{range_large}"
        );
    }
}
