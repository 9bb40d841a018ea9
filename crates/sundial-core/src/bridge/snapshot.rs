/// Per-frame snapshot the core hands to renderers. Plain data only; every
/// position in one snapshot is computed from the same simulation-time value.

use crate::api::types::BodyId;
use crate::core::timer::{Phase, TimerState};
use crate::model::bodies::BodyInfo;
use crate::model::sky::Star;
use crate::view::viewport::ViewBox;

/// One planet, in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub selected: bool,
    pub has_rings: bool,
}

/// Earth's moon.
#[derive(Debug, Clone, Copy)]
pub struct MoonSnapshot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// An asteroid-belt sprite.
#[derive(Debug, Clone, Copy)]
pub struct SpriteSnapshot {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    /// Simulation time every position below was derived from.
    pub time: f64,
    /// Planets in fixed innermost-to-outermost order.
    pub bodies: Vec<BodySnapshot>,
    pub moon: MoonSnapshot,
    pub asteroids: Vec<SpriteSnapshot>,
    /// Static for the whole session (until star density changes).
    pub stars: Vec<Star>,
    pub view_box: ViewBox,
    pub zoom: f64,
    /// Full metadata of the highlighted body, for the info panel.
    pub selected: Option<&'static BodyInfo>,
    pub show_orbits: bool,
    /// Countdown as MM:SS.
    pub timer_display: String,
    pub timer_remaining_secs: f64,
    pub timer_phase: Phase,
    pub timer_state: TimerState,
}
