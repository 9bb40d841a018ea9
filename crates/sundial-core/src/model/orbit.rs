/// Circular orbital motion — pure math, no engine dependencies.
///
/// Uses f64 throughout; positions convert to f32 only at the snapshot step.
/// All paths are fixed circles traversed at constant angular velocity, which
/// keeps every position a pure function of (descriptor, simulation time).

use crate::model::bodies::{BodyInfo, MOON_ORBIT_RADIUS, MOON_SPEED};
use crate::model::sky::Asteroid;

/// Scalar tying simulated seconds to angular progress (rad per second for a
/// body with speed factor 1).
pub const ORBIT_RATE: f64 = 0.3;

/// Distance scale: screen_radius = BASE_OFFSET + d^EXPONENT * FACTOR.
/// Compresses real distances so Neptune (4497) does not dwarf Mercury (58).
pub const BASE_OFFSET: f64 = 35.0;
pub const DISTANCE_EXPONENT: f64 = 0.45;
pub const DISTANCE_FACTOR: f64 = 3.5;

/// Simulation-time wrap period. Subtracting a multiple of this shifts every
/// body's angle by an exact multiple of 2π, because all speed coefficients
/// (including asteroids, which the generator quantizes) are multiples of
/// 0.001. Wrapping keeps angles precise over multi-day sessions.
pub const TIME_WRAP: f64 = std::f64::consts::TAU * 1000.0 / ORBIT_RATE;

/// Map a real orbital distance (millions of km) to a scene-space radius.
pub fn scale_distance(d: f64) -> f64 {
    BASE_OFFSET + d.powf(DISTANCE_EXPONENT) * DISTANCE_FACTOR
}

/// Orbital angle of a planet at simulation time `t` (radians, unbounded).
pub fn body_angle(body: &BodyInfo, t: f64) -> f64 {
    t * body.speed * ORBIT_RATE
}

/// Heliocentric scene-space position of a planet at simulation time `t`.
pub fn planet_position(body: &BodyInfo, t: f64) -> (f64, f64) {
    let angle = body_angle(body, t);
    let r = scale_distance(body.distance_mkm);
    (r * angle.cos(), r * angle.sin())
}

/// Moon position: the parent's position plus a small fixed-radius orbit whose
/// angle comes from simulation time directly (an orbit of an orbit).
pub fn moon_position(parent: (f64, f64), t: f64) -> (f64, f64) {
    let angle = t * MOON_SPEED * ORBIT_RATE;
    (
        parent.0 + MOON_ORBIT_RADIUS * angle.cos(),
        parent.1 + MOON_ORBIT_RADIUS * angle.sin(),
    )
}

/// Asteroid position. The radius is already in scene units (no distance
/// scaling); the randomized phase offsets the shared clock.
pub fn asteroid_position(a: &Asteroid, t: f64) -> (f64, f64) {
    let angle = a.phase + t * a.speed * ORBIT_RATE;
    (a.radius * angle.cos(), a.radius * angle.sin())
}

/// Sample a planet's orbit circle for path rendering.
pub fn orbit_path(body: &BodyInfo, samples: usize) -> Vec<(f32, f32)> {
    let r = scale_distance(body.distance_mkm);
    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let angle = (i as f64 / samples as f64) * std::f64::consts::TAU;
        points.push(((r * angle.cos()) as f32, (r * angle.sin()) as f32));
    }
    points
}
