//! Target model: raid creation and radial motion.
//!
//! Every function here is pure apart from the injected RNG. Collections are
//! taken by slice and returned as new vectors; callers replace their copy.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chainhome_core::aircraft::AircraftTable;
use chainhome_core::config::StationConfig;
use chainhome_core::constants::*;
use chainhome_core::enums::FormationRole;
use chainhome_core::error::SignalError;
use chainhome_core::types::{check_time_step, Target};

/// Create a raid at `range` miles on `bearing` degrees, drawing the formation
/// role with the configured escort probability.
pub fn create_target(
    rng: &mut ChaCha8Rng,
    config: &StationConfig,
    range: f64,
    bearing: f64,
) -> Target {
    let role = if rng.gen_bool(config.escort_probability) {
        FormationRole::Escort
    } else {
        FormationRole::Bomber
    };
    create_target_with_role(rng, &config.aircraft, role, range, bearing)
}

/// Create a raid of a given formation role.
pub fn create_target_with_role(
    rng: &mut ChaCha8Rng,
    table: &AircraftTable,
    role: FormationRole,
    range: f64,
    bearing: f64,
) -> Target {
    let candidates = table.entries(role);
    let aircraft = &candidates[rng.gen_range(0..candidates.len())];

    let speed_mph = sample(rng, aircraft.min_speed, aircraft.max_speed);
    let altitude = sample(rng, aircraft.min_alt, aircraft.max_alt);
    let (min_count, max_count) = role.count_range();
    let bearing_rad = bearing.to_radians();

    Target {
        id: rng.gen_range(RAID_ID_MIN..=RAID_ID_MAX),
        x: range * bearing_rad.cos(),
        y: range * bearing_rad.sin(),
        bearing,
        speed: speed_mph / SECONDS_PER_HOUR,
        altitude,
        aircraft_type: aircraft.name.clone(),
        wingspan: aircraft.wingspan,
        count: rng.gen_range(min_count..=max_count),
        is_escort: role.is_escort(),
    }
}

/// Uniform sample in [min, max].
fn sample(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

/// Advance every raid by `dt` seconds toward the station along its fixed
/// bearing. Raids already inside the overflight range, or whose position is
/// no longer a number, are dropped.
pub fn update_targets(targets: &[Target], dt: f64) -> Result<Vec<Target>, SignalError> {
    let dt = check_time_step(dt)?;
    Ok(targets
        .iter()
        .filter_map(|target| {
            let range = target.range();
            if range.is_nan() || range < OVERFLIGHT_RANGE {
                return None;
            }
            let new_range = range - target.speed * dt;
            let bearing_rad = target.bearing.to_radians();
            Some(Target {
                x: new_range * bearing_rad.cos(),
                y: new_range * bearing_rad.sin(),
                ..target.clone()
            })
        })
        .collect())
}

/// Random spawn point inside the coverage arc, biased toward the outer edge.
/// Returns (range miles, bearing degrees).
pub fn random_spawn_point(rng: &mut ChaCha8Rng) -> (f64, f64) {
    let range = rng.gen::<f64>().sqrt() * RADAR_RANGE;
    let bearing = rng.gen_range(COVERAGE_ARC_START..COVERAGE_ARC_END);
    (range, bearing)
}

/// Spawn a raid at a random point in the coverage arc.
pub fn spawn_random_target(rng: &mut ChaCha8Rng, config: &StationConfig) -> Target {
    let (range, bearing) = random_spawn_point(rng);
    create_target(rng, config, range, bearing)
}

/// Initial population at power-on: 1 to `initial_targets_spread` raids.
pub fn seed_population(rng: &mut ChaCha8Rng, config: &StationConfig) -> Vec<Target> {
    let count = 1 + rng.gen_range(0..config.initial_targets_spread.max(1));
    (0..count)
        .map(|_| spawn_random_target(rng, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_create_bomber_scenario() {
        let mut rng = rng();
        let table = AircraftTable::default();
        let t = create_target_with_role(&mut rng, &table, FormationRole::Bomber, 100.0, 160.0);

        assert!((t.x - -93.969).abs() < 1e-3, "x={}", t.x);
        assert!((t.y - 34.202).abs() < 1e-3, "y={}", t.y);
        assert_eq!(t.bearing, 160.0);
        assert_eq!(t.aircraft_type, "He 111");
        assert_eq!(t.wingspan, 22.5);
        assert!(!t.is_escort);
        assert!(
            t.speed >= 230.0 / 3600.0 && t.speed <= 255.0 / 3600.0,
            "speed={}",
            t.speed
        );
        assert!((13_000.0..=22_000.0).contains(&t.altitude));
        assert!((3..=10).contains(&t.count));
        assert!((100..=999).contains(&t.id));
    }

    #[test]
    fn test_create_escort_counts() {
        let mut rng = rng();
        let table = AircraftTable::default();
        for _ in 0..200 {
            let t = create_target_with_role(&mut rng, &table, FormationRole::Escort, 80.0, 120.0);
            assert!(t.is_escort);
            assert!((1..=2).contains(&t.count), "count={}", t.count);
            assert_eq!(t.aircraft_type, "Bf 109 E");
        }
    }

    #[test]
    fn test_escort_probability_extremes() {
        let mut rng = rng();
        let mut config = StationConfig {
            escort_probability: 0.0,
            ..Default::default()
        };
        for _ in 0..50 {
            assert!(!create_target(&mut rng, &config, 50.0, 150.0).is_escort);
        }
        config.escort_probability = 1.0;
        for _ in 0..50 {
            assert!(create_target(&mut rng, &config, 50.0, 150.0).is_escort);
        }
    }

    #[test]
    fn test_create_is_deterministic_for_seed() {
        let config = StationConfig::default();
        let a = create_target(&mut rng(), &config, 120.0, 190.0);
        let b = create_target(&mut rng(), &config, 120.0, 190.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_update_moves_toward_station() {
        let mut rng = rng();
        let table = AircraftTable::default();
        let t = create_target_with_role(&mut rng, &table, FormationRole::Bomber, 100.0, 160.0);
        let before = vec![t.clone()];
        let after = update_targets(&before, 0.1).unwrap();

        assert_eq!(after.len(), 1);
        assert!(after[0].range() < t.range());
        assert!((t.range() - after[0].range() - t.speed * 0.1).abs() < 1e-9);
        // Input is untouched
        assert_eq!(before[0], t);
    }

    #[test]
    fn test_update_preserves_fixed_fields() {
        let mut rng = rng();
        let config = StationConfig::default();
        let targets: Vec<Target> = (0..20)
            .map(|i| {
                let i = i as f64;
                create_target(&mut rng, &config, 40.0 + i * 5.0, 110.0 + i * 5.0)
            })
            .collect();
        let moved = update_targets(&targets, 3.0).unwrap();
        assert_eq!(moved.len(), targets.len());
        for (a, b) in targets.iter().zip(&moved) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.bearing, b.bearing);
            assert_eq!(a.speed, b.speed);
            assert_eq!(a.altitude, b.altitude);
            assert_eq!(a.aircraft_type, b.aircraft_type);
            assert_eq!(a.wingspan, b.wingspan);
            assert_eq!(a.count, b.count);
            assert_eq!(a.is_escort, b.is_escort);
            assert!((b.computed_bearing() - a.computed_bearing()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_update_removes_overflown_targets() {
        let mut rng = rng();
        let table = AircraftTable::default();
        let near = create_target_with_role(&mut rng, &table, FormationRole::Bomber, 4.9, 160.0);
        assert!(update_targets(&[near.clone()], 0.1).unwrap().is_empty());
        for dt in [0.0, 0.1, 10.0, 1000.0] {
            assert!(update_targets(&[near.clone()], dt).unwrap().is_empty());
        }
    }

    #[test]
    fn test_update_keeps_target_at_threshold() {
        let mut rng = rng();
        let table = AircraftTable::default();
        let t = create_target_with_role(&mut rng, &table, FormationRole::Bomber, 5.5, 200.0);
        let moved = update_targets(&[t], 0.1).unwrap();
        assert_eq!(moved.len(), 1);
    }

    #[test]
    fn test_update_rejects_bad_time_step() {
        let mut rng = rng();
        let config = StationConfig::default();
        let targets = seed_population(&mut rng, &config);
        for dt in [f64::NAN, f64::INFINITY, -0.1] {
            assert!(matches!(
                update_targets(&targets, dt),
                Err(SignalError::InvalidTimeStep(_))
            ));
        }
    }

    #[test]
    fn test_update_drops_target_with_nan_position() {
        let mut rng = rng();
        let table = AircraftTable::default();
        let good = create_target_with_role(&mut rng, &table, FormationRole::Bomber, 60.0, 150.0);
        let lost = Target {
            x: f64::NAN,
            y: f64::NAN,
            ..good.clone()
        };
        let moved = update_targets(&[good, lost], 0.1).unwrap();
        assert_eq!(moved.len(), 1);
        assert!(moved[0].range().is_finite());
    }

    #[test]
    fn test_random_spawn_point_within_arc() {
        let mut rng = rng();
        for _ in 0..500 {
            let (range, bearing) = random_spawn_point(&mut rng);
            assert!((0.0..=RADAR_RANGE).contains(&range));
            assert!((COVERAGE_ARC_START..COVERAGE_ARC_END).contains(&bearing));
        }
    }

    #[test]
    fn test_seed_population_size() {
        let mut rng = rng();
        let config = StationConfig::default();
        for _ in 0..50 {
            let targets = seed_population(&mut rng, &config);
            assert!((1..=5).contains(&targets.len()), "len={}", targets.len());
        }
    }
}
