/// Input events the session understands.
/// Platform-agnostic; the embedder translates gestures and widgets into these.

use glam::Vec2;

use crate::api::types::BodyId;
use crate::config::settings::Settings;

#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Absolute zoom level from a slider.
    Zoom { value: f64 },
    /// Multiplicative zoom step from a pinch or scroll gesture.
    ZoomDelta { factor: f64 },
    /// A quick-select control tapped a specific body.
    TapBody { id: BodyId },
    /// A pointer tap at scene coordinates, resolved by hit-testing.
    TapAt { pos: Vec2 },
    /// Absolute simulation speed from a slider.
    SetSpeed { value: f64 },
    /// Play/pause button for the orbital simulation.
    TogglePause,
    /// Start/pause button for the Pomodoro countdown.
    TimerStartPause,
    TimerReset,
    SetWorkMinutes { minutes: u32 },
    SetBreakMinutes { minutes: u32 },
    /// A full settings document saved from the settings panel.
    ApplySettings { settings: Settings },
}

/// A queue of input events. The embedder pushes between frames; the session
/// drains the queue once per tick.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::TogglePause);
        q.push(InputEvent::SetSpeed { value: 2.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Zoom { value: 2.0 });
        q.push(InputEvent::TimerReset);
        let events = q.drain();
        assert!(matches!(events[0], InputEvent::Zoom { .. }));
        assert!(matches!(events[1], InputEvent::TimerReset));
    }
}
