/// Pomodoro countdown: a two-phase work/break timer with its own
/// start/pause/reset state machine, advanced by measured wall-clock deltas.
///
/// Duration edits while a countdown is running are pending: they apply at the
/// next phase boundary, never to the session already in flight. While idle,
/// edits update the displayed remaining time immediately.

use crate::config::settings::{Settings, BREAK_MINUTES_MAX, BREAK_MINUTES_MIN, WORK_MINUTES_MAX, WORK_MINUTES_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone)]
pub struct Pomodoro {
    phase: Phase,
    state: TimerState,
    /// Seconds left in the current countdown. Fractional between ticks.
    remaining: f64,
    /// Durations the countdown in flight was started with.
    current_work_secs: f64,
    current_break_secs: f64,
    /// User-configured durations; picked up at start and at phase boundaries.
    configured_work_min: u32,
    configured_break_min: u32,
}

impl Pomodoro {
    pub fn new(settings: &Settings) -> Self {
        let work = settings.work_minutes.clamp(WORK_MINUTES_MIN, WORK_MINUTES_MAX);
        let brk = settings.break_minutes.clamp(BREAK_MINUTES_MIN, BREAK_MINUTES_MAX);
        Self {
            phase: Phase::Work,
            state: TimerState::Idle,
            remaining: (work * 60) as f64,
            current_work_secs: (work * 60) as f64,
            current_break_secs: (brk * 60) as f64,
            configured_work_min: work,
            configured_break_min: brk,
        }
    }

    /// Idle or paused to running. On the idle transition, the configured
    /// durations are snapshotted into the countdown.
    pub fn start(&mut self) {
        match self.state {
            TimerState::Idle => {
                self.current_work_secs = (self.configured_work_min * 60) as f64;
                self.current_break_secs = (self.configured_break_min * 60) as f64;
                self.remaining = self.current_secs_for(self.phase);
                self.state = TimerState::Running;
            }
            TimerState::Paused => self.state = TimerState::Running,
            TimerState::Running => {}
        }
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Single-button surface: idle/paused starts, running pauses.
    pub fn start_pause(&mut self) {
        match self.state {
            TimerState::Running => self.pause(),
            _ => self.start(),
        }
    }

    /// Back to idle, work phase, full configured work duration.
    pub fn reset(&mut self) {
        self.phase = Phase::Work;
        self.state = TimerState::Idle;
        self.remaining = (self.configured_work_min * 60) as f64;
    }

    /// Advance by a measured real-time delta. Returns the phase that finished
    /// when the countdown crossed zero this tick.
    pub fn tick(&mut self, dt: f64) -> Option<Phase> {
        if self.state != TimerState::Running || dt <= 0.0 {
            return None;
        }
        self.remaining -= dt;
        if self.remaining > 0.0 {
            return None;
        }
        // Phase boundary: pending duration edits apply from here on, and the
        // overshoot carries into the new countdown so no fraction is lost.
        let finished = self.phase;
        let leftover = self.remaining;
        self.current_work_secs = (self.configured_work_min * 60) as f64;
        self.current_break_secs = (self.configured_break_min * 60) as f64;
        self.phase = match self.phase {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        };
        self.remaining = (self.current_secs_for(self.phase) + leftover).max(0.0);
        Some(finished)
    }

    /// Set the configured work duration (minutes, clamped to 1..=60). Applies
    /// immediately when idle in the work phase, otherwise at the next boundary.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        self.configured_work_min = minutes.clamp(WORK_MINUTES_MIN, WORK_MINUTES_MAX);
        if self.state == TimerState::Idle && self.phase == Phase::Work {
            self.remaining = (self.configured_work_min * 60) as f64;
        }
    }

    /// Set the configured break duration (minutes, clamped to 1..=30).
    pub fn set_break_minutes(&mut self, minutes: u32) {
        self.configured_break_min = minutes.clamp(BREAK_MINUTES_MIN, BREAK_MINUTES_MAX);
        if self.state == TimerState::Idle && self.phase == Phase::Break {
            self.remaining = (self.configured_break_min * 60) as f64;
        }
    }

    fn current_secs_for(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Work => self.current_work_secs,
            Phase::Break => self.current_break_secs,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining.max(0.0)
    }

    /// Countdown as MM:SS, rounding partial seconds up so the display only
    /// shows 00:00 once the boundary has actually fired.
    pub fn display(&self) -> String {
        let total = self.remaining.max(0.0).ceil() as u64;
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}
