use serde::Serialize;

use crate::core::timer::Phase;

/// Index into the planet catalog, in fixed innermost-to-outermost order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BodyId(pub u8);

impl BodyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Notifications the session emits for the embedder, drained once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// A Pomodoro countdown crossed zero; `finished` is the phase that ended.
    /// Hook point for the completion sound and visual cue.
    TimerPhaseEnded { finished: Phase },
    /// The highlighted body changed (tap or quick-select).
    SelectionChanged { selected: Option<BodyId> },
}
