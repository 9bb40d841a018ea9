/// Simulation clock: a single scalar time accumulator gated by pause state
/// and scaled by a user-controlled speed multiplier.
///
/// Callers feed it measured wall-clock deltas; the tick cadence itself is
/// advisory. A per-frame cap bounds the jump after a stalled or backgrounded
/// frame so the scene never lurches.

use crate::model::orbit::TIME_WRAP;

pub const SPEED_MIN: f64 = 0.1;
pub const SPEED_MAX: f64 = 10.0;

/// Largest single frame delta the clock will honor, in seconds.
pub const MAX_FRAME_DT: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct SimulationClock {
    time: f64,
    paused: bool,
    speed: f64,
}

impl SimulationClock {
    pub fn new(start_paused: bool) -> Self {
        Self {
            time: 0.0,
            paused: start_paused,
            speed: 1.0,
        }
    }

    /// Advance by a measured real-time delta (seconds). No-op while paused.
    pub fn advance(&mut self, dt: f64) {
        if self.paused {
            return;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.time += dt * self.speed;
        // Wrap keeps orbital angles precise over multi-day sessions; every
        // speed coefficient is milli-quantized so positions are unchanged.
        if self.time >= TIME_WRAP {
            self.time -= TIME_WRAP * (self.time / TIME_WRAP).floor();
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_speed(&mut self, multiplier: f64) {
        self.speed = multiplier.clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_scales_by_speed() {
        let mut clock = SimulationClock::new(false);
        clock.set_speed(2.0);
        clock.advance(0.1);
        assert!((clock.time() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn paused_clock_holds_time() {
        let mut clock = SimulationClock::new(false);
        clock.advance(0.1);
        let before = clock.time();
        clock.toggle_pause();
        for _ in 0..100 {
            clock.advance(0.1);
        }
        assert_eq!(clock.time(), before);
        clock.toggle_pause();
        clock.advance(0.1);
        assert!(clock.time() > before);
    }

    #[test]
    fn speed_clamped_to_bounds() {
        let mut clock = SimulationClock::new(false);
        clock.set_speed(-5.0);
        assert_eq!(clock.speed(), SPEED_MIN);
        clock.set_speed(999.0);
        assert_eq!(clock.speed(), SPEED_MAX);
    }

    #[test]
    fn giant_frame_delta_is_capped() {
        let mut clock = SimulationClock::new(false);
        clock.advance(30.0); // backgrounded tab coming back
        assert!((clock.time() - MAX_FRAME_DT).abs() < 1e-12);
    }

    #[test]
    fn negative_delta_ignored() {
        let mut clock = SimulationClock::new(false);
        clock.advance(0.1);
        let before = clock.time();
        clock.advance(-1.0);
        assert_eq!(clock.time(), before);
    }

    #[test]
    fn time_wraps_without_going_negative() {
        let mut clock = SimulationClock::new(false);
        clock.set_speed(SPEED_MAX);
        // Push more than one wrap period of simulated time through the cap.
        for _ in 0..10_000 {
            clock.advance(MAX_FRAME_DT);
        }
        assert!(clock.time() >= 0.0);
        assert!(clock.time() < TIME_WRAP);
    }
}
