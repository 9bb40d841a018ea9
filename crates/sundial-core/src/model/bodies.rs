/// Planetary catalog — static descriptors and visual properties.
///
/// Distances are real mean orbital distances in millions of km; speeds are
/// relative angular speed factors with Earth = 1. Visual sizes are exaggerated
/// for readability (to scale, every planet would be sub-pixel).

use serde::Serialize;

use crate::api::types::BodyId;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLANET_COUNT: usize = 8;

/// Static descriptor for one planet.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BodyInfo {
    pub name: &'static str,
    /// Mean distance from the Sun, millions of km.
    pub distance_mkm: f64,
    /// Relative angular speed factor (Earth = 1). Kept to three decimals so
    /// the shared time wrap in `orbit` stays exact for every body.
    pub speed: f64,
    /// Render radius in scene units.
    pub size: f32,
    /// Display color (r, g, b).
    pub color: (f32, f32, f32),
    /// Known moon count, display only.
    pub moons: u32,
    /// Rotation period in hours, display only.
    pub day_hours: f64,
    /// Orbital period in Earth days, display only.
    pub year_days: f64,
    /// Saturn gets its ring pass in the renderer.
    pub has_rings: bool,
}

/// The catalog, ordered innermost to outermost. This order is the iteration
/// and quick-select order and never changes within a session.
pub const BODIES: [BodyInfo; PLANET_COUNT] = [
    BodyInfo {
        name: "Mercury",
        distance_mkm: 58.0,
        speed: 4.152,
        size: 4.0,
        color: (0.60, 0.55, 0.50),
        moons: 0,
        day_hours: 1407.6,
        year_days: 88.0,
        has_rings: false,
    },
    BodyInfo {
        name: "Venus",
        distance_mkm: 108.0,
        speed: 1.626,
        size: 7.5,
        color: (0.90, 0.75, 0.40),
        moons: 0,
        day_hours: 5832.5,
        year_days: 224.7,
        has_rings: false,
    },
    BodyInfo {
        name: "Earth",
        distance_mkm: 150.0,
        speed: 1.0,
        size: 8.0,
        color: (0.20, 0.40, 0.80),
        moons: 1,
        day_hours: 24.0,
        year_days: 365.25,
        has_rings: false,
    },
    BodyInfo {
        name: "Mars",
        distance_mkm: 228.0,
        speed: 0.532,
        size: 5.5,
        color: (0.80, 0.30, 0.15),
        moons: 2,
        day_hours: 24.7,
        year_days: 687.0,
        has_rings: false,
    },
    BodyInfo {
        name: "Jupiter",
        distance_mkm: 778.0,
        speed: 0.084,
        size: 16.0,
        color: (0.80, 0.70, 0.50),
        moons: 95,
        day_hours: 9.9,
        year_days: 4332.6,
        has_rings: false,
    },
    BodyInfo {
        name: "Saturn",
        distance_mkm: 1433.0,
        speed: 0.034,
        size: 14.0,
        color: (0.85, 0.75, 0.50),
        moons: 146,
        day_hours: 10.7,
        year_days: 10759.0,
        has_rings: true,
    },
    BodyInfo {
        name: "Uranus",
        distance_mkm: 2872.0,
        speed: 0.012,
        size: 10.0,
        color: (0.50, 0.75, 0.85),
        moons: 28,
        day_hours: 17.2,
        year_days: 30688.0,
        has_rings: false,
    },
    BodyInfo {
        name: "Neptune",
        distance_mkm: 4497.0,
        speed: 0.006,
        size: 9.5,
        color: (0.25, 0.35, 0.80),
        moons: 16,
        day_hours: 16.1,
        year_days: 60182.0,
        has_rings: false,
    },
];

/// Look up a planet by id.
pub fn body_info(id: BodyId) -> &'static BodyInfo {
    &BODIES[id.index()]
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_SIZE: f32 = 24.0;
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 0.9, 0.5);

// ── Earth's moon ─────────────────────────────────────────────────────

/// Orbit radius around Earth, scene units.
pub const MOON_ORBIT_RADIUS: f64 = 14.0;
/// Relative angular speed factor, same scale as planet speeds. Driven by
/// simulation time directly, not by Earth's own coefficient.
pub const MOON_SPEED: f64 = 4.2;
pub const MOON_SIZE: f32 = 3.0;
pub const MOON_COLOR: (f32, f32, f32) = (0.70, 0.70, 0.70);

// ── Asteroid belt ────────────────────────────────────────────────────

pub const ASTEROID_COUNT: usize = 200;
/// Belt reference distance, millions of km (between Mars and Jupiter).
pub const BELT_DISTANCE_MKM: f64 = 420.0;
/// Jitter applied to the scaled belt radius, scene units.
pub const BELT_JITTER: f64 = 9.0;
/// Relative angular speed band for belt members.
pub const BELT_SPEED_MIN: f64 = 0.25;
pub const BELT_SPEED_MAX: f64 = 0.45;
pub const ASTEROID_SIZE_MIN: f32 = 0.6;
pub const ASTEROID_SIZE_MAX: f32 = 2.2;
pub const ASTEROID_OPACITY_MIN: f32 = 0.25;
pub const ASTEROID_OPACITY_MAX: f32 = 0.95;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ordered_innermost_out() {
        for pair in BODIES.windows(2) {
            assert!(
                pair[0].distance_mkm < pair[1].distance_mkm,
                "{} should be inside {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn names_unique() {
        for (i, a) in BODIES.iter().enumerate() {
            for b in &BODIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn descriptors_positive() {
        for body in &BODIES {
            assert!(body.distance_mkm > 0.0, "{}", body.name);
            assert!(body.speed > 0.0, "{}", body.name);
            assert!(body.size > 0.0, "{}", body.name);
        }
    }

    #[test]
    fn speeds_quantized_to_milli() {
        // The shared time wrap assumes every coefficient is a multiple of 0.001.
        for body in &BODIES {
            let scaled = body.speed * 1000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "{} speed {} not milli-quantized",
                body.name,
                body.speed
            );
        }
        let moon_scaled = MOON_SPEED * 1000.0;
        assert!((moon_scaled - moon_scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn only_saturn_has_rings() {
        for (i, body) in BODIES.iter().enumerate() {
            assert_eq!(body.has_rings, i == SATURN, "{}", body.name);
        }
    }
}
