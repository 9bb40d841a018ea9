/// A visualization session: one object owning every state machine, driven by
/// measured frame deltas from the embedder.
///
/// Per tick: drain queued input, advance the orbital clock and the Pomodoro,
/// collect notifications. `snapshot` then derives every position from the
/// same simulation-time value so the scene moves in lockstep. Dropping the
/// session is teardown; nothing fires afterwards.

use glam::Vec2;

use crate::api::types::{BodyId, SessionEvent};
use crate::bridge::snapshot::{BodySnapshot, FrameSnapshot, MoonSnapshot, SpriteSnapshot};
use crate::config::settings::{
    Settings, BREAK_MINUTES_MAX, BREAK_MINUTES_MIN, WORK_MINUTES_MAX, WORK_MINUTES_MIN,
};
use crate::config::store::{load_or_default, PreferenceStore};
use crate::core::clock::SimulationClock;
use crate::core::timer::Pomodoro;
use crate::input::queue::{InputEvent, InputQueue};
use crate::model::bodies::{body_info, ASTEROID_COUNT, BODIES, EARTH, MOON_SIZE};
use crate::model::orbit::{asteroid_position, moon_position, orbit_path, planet_position};
use crate::model::sky::{generate_belt, generate_stars, Asteroid, Star};
use crate::view::selection::{hit_test, Selection};
use crate::view::viewport::Viewport;

/// Sample count for orbit path rendering.
pub const ORBIT_SAMPLES: usize = 96;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Seed for belt and star generation; same seed, same sky.
    pub seed: u64,
    pub asteroid_count: usize,
    /// Whether the orbital simulation starts paused.
    pub start_paused: bool,
    pub settings: Settings,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            asteroid_count: ASTEROID_COUNT,
            start_paused: false,
            settings: Settings::default(),
        }
    }
}

pub struct Session {
    clock: SimulationClock,
    pomodoro: Pomodoro,
    viewport: Viewport,
    selection: Selection,
    belt: Vec<Asteroid>,
    stars: Vec<Star>,
    settings: Settings,
    seed: u64,
    input: InputQueue,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let settings = config.settings.clamped();
        log::debug!(
            "session start: seed={} asteroids={} density={}",
            config.seed,
            config.asteroid_count,
            settings.star_density
        );
        Self {
            clock: SimulationClock::new(config.start_paused),
            pomodoro: Pomodoro::new(&settings),
            viewport: Viewport::new(),
            selection: Selection::new(),
            belt: generate_belt(config.seed, config.asteroid_count),
            stars: generate_stars(config.seed.wrapping_add(1), settings.star_density),
            settings,
            seed: config.seed,
            input: InputQueue::new(),
            events: Vec::new(),
        }
    }

    /// Build a session with settings loaded from a preference store.
    pub fn restore(mut config: SessionConfig, store: &dyn PreferenceStore) -> Self {
        config.settings = load_or_default(store);
        Self::new(config)
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// One frame: `dt` is the measured real time since the previous tick, in
    /// seconds. The orbital clock caps oversized deltas internally; the
    /// Pomodoro consumes the full delta so focus time keeps counting through
    /// a stalled frame.
    pub fn tick(&mut self, dt: f64) {
        self.events.clear();
        for event in self.input.drain() {
            self.apply(event);
        }
        self.clock.advance(dt);
        if let Some(finished) = self.pomodoro.tick(dt.max(0.0)) {
            self.events.push(SessionEvent::TimerPhaseEnded { finished });
        }
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Zoom { value } => self.viewport.set_zoom(value),
            InputEvent::ZoomDelta { factor } => self.viewport.zoom_by(factor),
            InputEvent::TapBody { id } => {
                let selected = self.selection.toggle(id);
                self.events.push(SessionEvent::SelectionChanged { selected });
            }
            InputEvent::TapAt { pos } => self.tap_at(pos),
            InputEvent::SetSpeed { value } => self.clock.set_speed(value),
            InputEvent::TogglePause => self.clock.toggle_pause(),
            InputEvent::TimerStartPause => self.pomodoro.start_pause(),
            InputEvent::TimerReset => self.pomodoro.reset(),
            InputEvent::SetWorkMinutes { minutes } => {
                self.pomodoro.set_work_minutes(minutes);
                self.settings.work_minutes = minutes.clamp(WORK_MINUTES_MIN, WORK_MINUTES_MAX);
            }
            InputEvent::SetBreakMinutes { minutes } => {
                self.pomodoro.set_break_minutes(minutes);
                self.settings.break_minutes = minutes.clamp(BREAK_MINUTES_MIN, BREAK_MINUTES_MAX);
            }
            InputEvent::ApplySettings { settings } => self.apply_settings(settings),
        }
    }

    fn tap_at(&mut self, pos: Vec2) {
        let before = self.selection.current();
        let after = match hit_test(pos, self.clock.time(), self.viewport.zoom()) {
            Some(id) => self.selection.toggle(id),
            None => {
                self.selection.clear();
                None
            }
        };
        if after != before {
            self.events.push(SessionEvent::SelectionChanged { selected: after });
        }
    }

    fn apply_settings(&mut self, settings: Settings) {
        let settings = settings.clamped();
        if settings.star_density != self.settings.star_density {
            // Same seed: density changes reshape the field without reshuffling
            // the belt.
            self.stars = generate_stars(self.seed.wrapping_add(1), settings.star_density);
        }
        self.pomodoro.set_work_minutes(settings.work_minutes);
        self.pomodoro.set_break_minutes(settings.break_minutes);
        self.settings = settings;
    }

    /// Notifications produced by the most recent tick.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// A consistent view of the scene: every position below comes from the
    /// one simulation-time value read at the top.
    pub fn snapshot(&self) -> FrameSnapshot {
        let t = self.clock.time();
        let selected = self.selection.current();

        let bodies = BODIES
            .iter()
            .enumerate()
            .map(|(i, info)| {
                let id = BodyId(i as u8);
                let (x, y) = planet_position(info, t);
                BodySnapshot {
                    id,
                    x: x as f32,
                    y: y as f32,
                    size: info.size,
                    selected: selected == Some(id),
                    has_rings: info.has_rings,
                }
            })
            .collect();

        let (mx, my) = moon_position(planet_position(&BODIES[EARTH], t), t);
        let moon = MoonSnapshot {
            x: mx as f32,
            y: my as f32,
            size: MOON_SIZE,
        };

        let asteroids = self
            .belt
            .iter()
            .map(|a| {
                let (x, y) = asteroid_position(a, t);
                SpriteSnapshot {
                    x: x as f32,
                    y: y as f32,
                    size: a.size,
                    opacity: a.opacity,
                }
            })
            .collect();

        FrameSnapshot {
            time: t,
            bodies,
            moon,
            asteroids,
            stars: self.stars.clone(),
            view_box: self.viewport.view_box(),
            zoom: self.viewport.zoom(),
            selected: selected.map(body_info),
            show_orbits: self.settings.show_orbits,
            timer_display: self.pomodoro.display(),
            timer_remaining_secs: self.pomodoro.remaining_secs(),
            timer_phase: self.pomodoro.phase(),
            timer_state: self.pomodoro.state(),
        }
    }

    /// Orbit circle of one planet, for path rendering when orbits are shown.
    pub fn orbit_path(&self, id: BodyId) -> Vec<(f32, f32)> {
        orbit_path(body_info(id), ORBIT_SAMPLES)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    pub fn paused(&self) -> bool {
        self.clock.paused()
    }

    pub fn speed(&self) -> f64 {
        self.clock.speed()
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selection.current()
    }
}
