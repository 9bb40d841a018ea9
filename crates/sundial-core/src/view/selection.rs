/// Body selection, independent of simulation time. Selecting the selected
/// body again clears the selection (a toggle, not a stack).

use glam::Vec2;

use crate::api::types::BodyId;
use crate::model::bodies::{BODIES, PLANET_COUNT};
use crate::model::orbit::planet_position;

/// Extra hit radius in screen units so small planets stay tappable.
pub const TAP_SLOP: f32 = 12.0;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<BodyId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<BodyId> {
        self.current
    }

    /// Toggle semantics: same id clears, a different id replaces. Returns the
    /// new selection. An id outside the catalog is a caller bug.
    pub fn toggle(&mut self, id: BodyId) -> Option<BodyId> {
        debug_assert!(id.index() < PLANET_COUNT, "unknown body id {:?}", id);
        self.current = if self.current == Some(id) { None } else { Some(id) };
        self.current
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Resolve a pointer position (scene coordinates) to the nearest planet whose
/// hit circle contains it. The slop margin shrinks with zoom so it stays a
/// constant screen-space size.
pub fn hit_test(pos: Vec2, t: f64, zoom: f64) -> Option<BodyId> {
    let slop = TAP_SLOP / zoom as f32;
    let mut best: Option<(usize, f32)> = None;
    for (i, body) in BODIES.iter().enumerate() {
        let (px, py) = planet_position(body, t);
        let dist = pos.distance(Vec2::new(px as f32, py as f32));
        let hit_r = body.size + slop;
        if dist < hit_r && best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| BodyId(i as u8))
}
