/// Session-scoped decorative fields: the asteroid belt and the star field.
///
/// Both are generated exactly once per session from an injectable seed.
/// Regenerating mid-session would make the belt visibly jump, so the
/// generators live here and the session holds the results for its lifetime.

use crate::model::bodies::{
    ASTEROID_OPACITY_MAX, ASTEROID_OPACITY_MIN, ASTEROID_SIZE_MAX, ASTEROID_SIZE_MIN,
    BELT_DISTANCE_MKM, BELT_JITTER, BELT_SPEED_MAX, BELT_SPEED_MIN,
};
use crate::model::orbit::scale_distance;
use crate::model::rng::Rng;
use crate::view::viewport::HALF_EXTENT;

/// One belt member. Radius is scene-space (already scaled); phase offsets the
/// shared simulation clock so members spread around the ring.
#[derive(Debug, Clone, Copy)]
pub struct Asteroid {
    pub phase: f64,
    pub radius: f64,
    pub speed: f64,
    pub size: f32,
    pub opacity: f32,
}

/// Generate the belt. Same seed and count produce an identical belt.
pub fn generate_belt(seed: u64, count: usize) -> Vec<Asteroid> {
    let mut rng = Rng::new(seed);
    let belt_radius = scale_distance(BELT_DISTANCE_MKM);
    let mut belt = Vec::with_capacity(count);
    for _ in 0..count {
        // Quantize to 0.001 so the shared time wrap keeps every angle exact.
        let speed = (rng.range_f64(BELT_SPEED_MIN, BELT_SPEED_MAX) * 1000.0).round() / 1000.0;
        belt.push(Asteroid {
            phase: rng.range_f64(0.0, std::f64::consts::TAU),
            radius: belt_radius + rng.range_f64(-BELT_JITTER, BELT_JITTER),
            speed,
            size: rng.range_f32(ASTEROID_SIZE_MIN, ASTEROID_SIZE_MAX),
            opacity: rng.range_f32(ASTEROID_OPACITY_MIN, ASTEROID_OPACITY_MAX),
        });
    }
    belt
}

/// A background star. Static position, no coupling to simulation time.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

/// Stars spawned per density point (density runs 0..=100).
pub const STARS_PER_DENSITY: usize = 3;

/// Generate the star field across the full scene square.
pub fn generate_stars(seed: u64, density: u32) -> Vec<Star> {
    let mut rng = Rng::new(seed);
    let count = density as usize * STARS_PER_DENSITY;
    let extent = HALF_EXTENT as f32;
    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        stars.push(Star {
            x: rng.range_f32(-extent, extent),
            y: rng.range_f32(-extent, extent),
            opacity: rng.range_f32(0.2, 1.0),
        });
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn belt_is_reproducible() {
        let a = generate_belt(99, 50);
        let b = generate_belt(99, 50);
        assert_eq!(a.len(), 50);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.phase, y.phase);
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.speed, y.speed);
        }
    }

    #[test]
    fn belt_members_in_band() {
        let belt_radius = scale_distance(BELT_DISTANCE_MKM);
        for a in generate_belt(3, 200) {
            assert!(a.phase >= 0.0 && a.phase < std::f64::consts::TAU);
            assert!((a.radius - belt_radius).abs() <= BELT_JITTER);
            assert!(a.speed >= BELT_SPEED_MIN && a.speed <= BELT_SPEED_MAX);
            assert!(a.size >= ASTEROID_SIZE_MIN && a.size <= ASTEROID_SIZE_MAX);
            assert!(a.opacity >= ASTEROID_OPACITY_MIN && a.opacity <= ASTEROID_OPACITY_MAX);
        }
    }

    #[test]
    fn belt_speeds_quantized() {
        for a in generate_belt(17, 200) {
            let scaled = a.speed * 1000.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn star_count_follows_density() {
        assert_eq!(generate_stars(1, 0).len(), 0);
        assert_eq!(generate_stars(1, 100).len(), 100 * STARS_PER_DENSITY);
    }

    #[test]
    fn stars_inside_scene_square() {
        let extent = HALF_EXTENT as f32;
        for s in generate_stars(5, 100) {
            assert!(s.x >= -extent && s.x < extent);
            assert!(s.y >= -extent && s.y < extent);
            assert!(s.opacity >= 0.2 && s.opacity <= 1.0);
        }
    }
}
