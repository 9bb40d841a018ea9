use sundial_core::config::settings::STAR_DENSITY_MAX;
use sundial_core::config::store::load_or_default;
use sundial_core::model::sky::STARS_PER_DENSITY;
use sundial_core::{
    BodyId, InputEvent, MemoryStore, Session, SessionConfig, Settings, WireBuffer, WireLayout,
};

/// Event records kept per frame on the wire.
const EVENT_CAPACITY: usize = 16;

/// Wires a session to the browser loop: pushes input between frames, ticks
/// with the measured `requestAnimationFrame` delta, and repacks the flat
/// snapshot buffer the UI thread reads out of WASM memory.
///
/// The browser owns actual persistence (localStorage); settings travel in and
/// out of the runner as serialized JSON documents.
pub struct SessionRunner {
    session: Session,
    wire: WireBuffer,
    timer_text: String,
}

impl SessionRunner {
    /// `settings_json` is the document previously saved by the host, if any.
    pub fn new(seed: u64, settings_json: Option<&str>) -> Self {
        let store = match settings_json {
            Some(json) => MemoryStore::with_document(json),
            None => MemoryStore::new(),
        };
        let config = SessionConfig {
            seed,
            ..SessionConfig::default()
        };
        let asteroid_count = config.asteroid_count;
        let session = Session::restore(config, &store);
        let star_capacity = STAR_DENSITY_MAX as usize * STARS_PER_DENSITY;
        let wire = WireBuffer::new(WireLayout::new(asteroid_count, star_capacity, EVENT_CAPACITY));
        let timer_text = session.snapshot().timer_display;
        Self {
            session,
            wire,
            timer_text,
        }
    }

    /// Run one frame. `dt` is the measured delta in seconds.
    pub fn tick(&mut self, dt: f64) {
        self.session.tick(dt);
        let snap = self.session.snapshot();
        self.wire.pack(&snap, self.session.events());
        self.timer_text = snap.timer_display;
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.session.push_input(event);
    }

    // ---- Data accessors (read by JS out of linear memory) ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.wire.as_ptr()
    }

    pub fn frame_floats(&self) -> u32 {
        self.wire.len_floats() as u32
    }

    pub fn timer_text(&self) -> String {
        self.timer_text.clone()
    }

    /// Selected body metadata as JSON, or "null" when nothing is selected.
    pub fn selected_json(&self) -> String {
        match self.session.selected() {
            Some(id) => serde_json::to_string(sundial_core::body_info(id))
                .unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    /// Current settings as JSON for the host to persist.
    pub fn settings_json(&self) -> String {
        serde_json::to_string(self.session.settings()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Apply a settings document saved by the host UI. Malformed or
    /// out-of-range documents degrade to defaults/clamped values, never fail.
    pub fn apply_settings_json(&mut self, json: &str) {
        let store = MemoryStore::with_document(json);
        let settings: Settings = load_or_default(&store);
        self.session.push_input(InputEvent::ApplySettings { settings });
    }

    /// Quick-select by catalog index; ignores indices outside the catalog.
    pub fn select_index(&mut self, index: u32) {
        if (index as usize) < sundial_core::PLANET_COUNT {
            self.session.push_input(InputEvent::TapBody {
                id: BodyId(index as u8),
            });
        } else {
            log::warn!("select_index out of range: {index}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sundial_core::bridge::wire::{HEADER_BODY_COUNT, HEADER_TIMER_REMAINING};

    #[test]
    fn runner_packs_a_frame() {
        let mut runner = SessionRunner::new(7, None);
        runner.tick(0.016);
        let floats = runner.frame_floats() as usize;
        assert!(floats > 0);
        // Header reflects the full catalog
        let data = unsafe { std::slice::from_raw_parts(runner.frame_ptr(), floats) };
        assert_eq!(data[HEADER_BODY_COUNT] as usize, sundial_core::PLANET_COUNT);
        assert!(data[HEADER_TIMER_REMAINING] > 0.0);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let mut runner = SessionRunner::new(7, Some(r#"{"work_minutes": 30}"#));
        assert_eq!(runner.timer_text(), "30:00");
        runner.apply_settings_json(r#"{"work_minutes": 45, "star_density": 10}"#);
        runner.tick(0.016);
        let json = runner.settings_json();
        assert!(json.contains("\"work_minutes\":45"));
    }

    #[test]
    fn malformed_settings_fall_back() {
        let runner = SessionRunner::new(7, Some("{broken"));
        assert_eq!(runner.timer_text(), "25:00");
    }

    #[test]
    fn selected_json_follows_selection() {
        let mut runner = SessionRunner::new(7, None);
        assert_eq!(runner.selected_json(), "null");
        runner.select_index(2);
        runner.tick(0.016);
        assert!(runner.selected_json().contains("Earth"));
        runner.select_index(99); // ignored
        runner.tick(0.016);
        assert!(runner.selected_json().contains("Earth"));
    }
}
