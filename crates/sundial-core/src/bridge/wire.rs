/// Flat f32 buffer layout for handing snapshots across the WASM boundary.
/// The UI thread reads the buffer straight out of linear memory, so the
/// layout is fixed-stride records behind a small header.
///
/// Layout (all values f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: PLANET_COUNT × 6 floats]
/// [Moon: 3 floats]
/// [Asteroids: asteroid_capacity × 4 floats]
/// [Stars: star_capacity × 3 floats]
/// [Events: event_capacity × 4 floats]
/// ```
///
/// Capacities are written into the header once; readers compute offsets from
/// them instead of hardcoding sizes.

use bytemuck::{Pod, Zeroable};

use crate::api::types::SessionEvent;
use crate::bridge::snapshot::FrameSnapshot;
use crate::core::timer::{Phase, TimerState};
use crate::model::bodies::PLANET_COUNT;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_BODY_COUNT: usize = 1;
pub const HEADER_ASTEROID_CAPACITY: usize = 2;
pub const HEADER_ASTEROID_COUNT: usize = 3;
pub const HEADER_STAR_CAPACITY: usize = 4;
pub const HEADER_STAR_COUNT: usize = 5;
pub const HEADER_EVENT_CAPACITY: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_ZOOM: usize = 8;
pub const HEADER_VIEW_MIN: usize = 9;
pub const HEADER_VIEW_SIZE: usize = 10;
pub const HEADER_SELECTED: usize = 11;
pub const HEADER_SHOW_ORBITS: usize = 12;
pub const HEADER_TIMER_PHASE: usize = 13;
pub const HEADER_TIMER_STATE: usize = 14;
pub const HEADER_TIMER_REMAINING: usize = 15;

/// Floats per record (wire format).
pub const BODY_FLOATS: usize = 6;
pub const MOON_FLOATS: usize = 3;
pub const SPRITE_FLOATS: usize = 4;
pub const STAR_FLOATS: usize = 3;
pub const EVENT_FLOATS: usize = 4;

/// Event kinds.
pub const EVENT_TIMER_PHASE_ENDED: f32 = 1.0;
pub const EVENT_SELECTION_CHANGED: f32 = 2.0;

/// Wire record for one planet: id, x, y, size, selected, has_rings.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyRecord {
    pub id: f32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub selected: f32,
    pub has_rings: f32,
}

/// Wire record for one asteroid: x, y, size, opacity.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SpriteRecord {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

/// Wire record for one event: kind, a, b, c.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

pub fn phase_tag(phase: Phase) -> f32 {
    match phase {
        Phase::Work => 0.0,
        Phase::Break => 1.0,
    }
}

pub fn state_tag(state: TimerState) -> f32 {
    match state {
        TimerState::Idle => 0.0,
        TimerState::Running => 1.0,
        TimerState::Paused => 2.0,
    }
}

fn event_record(event: &SessionEvent) -> EventRecord {
    match event {
        SessionEvent::TimerPhaseEnded { finished } => EventRecord {
            kind: EVENT_TIMER_PHASE_ENDED,
            a: phase_tag(*finished),
            ..EventRecord::default()
        },
        SessionEvent::SelectionChanged { selected } => EventRecord {
            kind: EVENT_SELECTION_CHANGED,
            a: selected.map(|id| id.index() as f32).unwrap_or(-1.0),
            ..EventRecord::default()
        },
    }
}

/// Runtime-computed offsets for one buffer instance.
#[derive(Debug, Clone, PartialEq)]
pub struct WireLayout {
    pub asteroid_capacity: usize,
    pub star_capacity: usize,
    pub event_capacity: usize,
    pub bodies_offset: usize,
    pub moon_offset: usize,
    pub asteroids_offset: usize,
    pub stars_offset: usize,
    pub events_offset: usize,
    pub total_floats: usize,
}

impl WireLayout {
    pub fn new(asteroid_capacity: usize, star_capacity: usize, event_capacity: usize) -> Self {
        let bodies_offset = HEADER_FLOATS;
        let moon_offset = bodies_offset + PLANET_COUNT * BODY_FLOATS;
        let asteroids_offset = moon_offset + MOON_FLOATS;
        let stars_offset = asteroids_offset + asteroid_capacity * SPRITE_FLOATS;
        let events_offset = stars_offset + star_capacity * STAR_FLOATS;
        let total_floats = events_offset + event_capacity * EVENT_FLOATS;
        Self {
            asteroid_capacity,
            star_capacity,
            event_capacity,
            bodies_offset,
            moon_offset,
            asteroids_offset,
            stars_offset,
            events_offset,
            total_floats,
        }
    }
}

/// Reusable flat buffer a snapshot is packed into each frame.
#[derive(Debug)]
pub struct WireBuffer {
    layout: WireLayout,
    data: Vec<f32>,
    frame: u32,
}

impl WireBuffer {
    pub fn new(layout: WireLayout) -> Self {
        let data = vec![0.0; layout.total_floats];
        Self {
            layout,
            data,
            frame: 0,
        }
    }

    pub fn layout(&self) -> &WireLayout {
        &self.layout
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len_floats(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Pack one snapshot plus this tick's events. Records beyond a section's
    /// capacity are dropped.
    pub fn pack(&mut self, snap: &FrameSnapshot, events: &[SessionEvent]) {
        self.frame = self.frame.wrapping_add(1);
        let l = self.layout.clone();

        let asteroid_count = snap.asteroids.len().min(l.asteroid_capacity);
        let star_count = snap.stars.len().min(l.star_capacity);
        let event_count = events.len().min(l.event_capacity);

        let header = &mut self.data[..HEADER_FLOATS];
        header[HEADER_FRAME_COUNTER] = self.frame as f32;
        header[HEADER_BODY_COUNT] = snap.bodies.len() as f32;
        header[HEADER_ASTEROID_CAPACITY] = l.asteroid_capacity as f32;
        header[HEADER_ASTEROID_COUNT] = asteroid_count as f32;
        header[HEADER_STAR_CAPACITY] = l.star_capacity as f32;
        header[HEADER_STAR_COUNT] = star_count as f32;
        header[HEADER_EVENT_CAPACITY] = l.event_capacity as f32;
        header[HEADER_EVENT_COUNT] = event_count as f32;
        header[HEADER_ZOOM] = snap.zoom as f32;
        header[HEADER_VIEW_MIN] = snap.view_box.min_x as f32;
        header[HEADER_VIEW_SIZE] = snap.view_box.width as f32;
        header[HEADER_SELECTED] = snap
            .bodies
            .iter()
            .find(|b| b.selected)
            .map(|b| b.id.index() as f32)
            .unwrap_or(-1.0);
        header[HEADER_SHOW_ORBITS] = if snap.show_orbits { 1.0 } else { 0.0 };
        header[HEADER_TIMER_PHASE] = phase_tag(snap.timer_phase);
        header[HEADER_TIMER_STATE] = state_tag(snap.timer_state);
        header[HEADER_TIMER_REMAINING] = snap.timer_remaining_secs as f32;

        for (i, body) in snap.bodies.iter().enumerate() {
            let record = BodyRecord {
                id: body.id.index() as f32,
                x: body.x,
                y: body.y,
                size: body.size,
                selected: if body.selected { 1.0 } else { 0.0 },
                has_rings: if body.has_rings { 1.0 } else { 0.0 },
            };
            let offset = l.bodies_offset + i * BODY_FLOATS;
            self.data[offset..offset + BODY_FLOATS]
                .copy_from_slice(&bytemuck::cast::<BodyRecord, [f32; BODY_FLOATS]>(record));
        }

        let moon = [snap.moon.x, snap.moon.y, snap.moon.size];
        self.data[l.moon_offset..l.moon_offset + MOON_FLOATS].copy_from_slice(&moon);

        for (i, sprite) in snap.asteroids.iter().take(asteroid_count).enumerate() {
            let record = SpriteRecord {
                x: sprite.x,
                y: sprite.y,
                size: sprite.size,
                opacity: sprite.opacity,
            };
            let offset = l.asteroids_offset + i * SPRITE_FLOATS;
            self.data[offset..offset + SPRITE_FLOATS]
                .copy_from_slice(&bytemuck::cast::<SpriteRecord, [f32; SPRITE_FLOATS]>(record));
        }

        for (i, star) in snap.stars.iter().take(star_count).enumerate() {
            let offset = l.stars_offset + i * STAR_FLOATS;
            self.data[offset..offset + STAR_FLOATS].copy_from_slice(&[star.x, star.y, star.opacity]);
        }

        for (i, event) in events.iter().take(event_count).enumerate() {
            let offset = l.events_offset + i * EVENT_FLOATS;
            self.data[offset..offset + EVENT_FLOATS]
                .copy_from_slice(&bytemuck::cast::<EventRecord, [f32; EVENT_FLOATS]>(event_record(event)));
        }
    }
}
