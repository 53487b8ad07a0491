//! Match countdown timer
//!
//! Counts a match down from 15 minutes, firing one-shot Warning (5 minutes
//! left), Critical (1 minute left) and Finished events. Display concerns
//! are exposed as data: [`TimerPhase`] for color mapping and `MM:SS`
//! formatting.

use log::info;

/// Default match length: 15 minutes.
pub const DEFAULT_MATCH_SECONDS: f32 = 900.0;

/// Warning threshold: 5 minutes remaining.
pub const WARNING_THRESHOLD: f32 = 300.0;

/// Critical threshold: 1 minute remaining.
pub const CRITICAL_THRESHOLD: f32 = 60.0;

/// One-shot timer notifications, returned by [`MatchTimer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Five minutes remaining
    Warning,
    /// One minute remaining
    Critical,
    /// Time is up
    Finished,
}

/// Display phase for the remaining time (the UI maps these to colors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// More than five minutes left
    Normal,
    /// Five minutes or less
    Warning,
    /// One minute or less
    Critical,
}

/// Countdown timer with one-shot threshold events.
#[derive(Debug, Clone)]
pub struct MatchTimer {
    remaining: f32,
    running: bool,
    warning_fired: bool,
    critical_fired: bool,
}

impl MatchTimer {
    /// Creates a running timer with `seconds` on the clock.
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
            running: true,
            warning_fired: false,
            critical_fired: false,
        }
    }

    /// Advances the countdown and returns any threshold events crossed
    /// this tick. Paused or finished timers return nothing.
    pub fn tick(&mut self, dt: f32) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        self.remaining -= dt;

        if !self.warning_fired && self.remaining <= WARNING_THRESHOLD {
            self.warning_fired = true;
            info!("match timer: 5 minutes remaining");
            events.push(TimerEvent::Warning);
        }
        if !self.critical_fired && self.remaining <= CRITICAL_THRESHOLD {
            self.critical_fired = true;
            info!("match timer: 1 minute remaining");
            events.push(TimerEvent::Critical);
        }
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.running = false;
            info!("match timer: time is up");
            events.push(TimerEvent::Finished);
        }

        events
    }

    /// Stops the countdown without resetting it.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resumes a paused countdown. Has no effect once finished.
    pub fn resume(&mut self) {
        if self.remaining > 0.0 {
            self.running = true;
        }
    }

    /// Adds bonus seconds to the clock.
    pub fn add_time(&mut self, seconds: f32) {
        self.remaining += seconds;
    }

    /// Sets the clock and re-arms the threshold events.
    pub fn set_time(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
        self.warning_fired = false;
        self.critical_fired = false;
        self.running = self.remaining > 0.0;
    }

    /// Seconds remaining.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Whether the countdown is advancing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the countdown reached zero.
    pub fn is_time_up(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Current display phase.
    pub fn phase(&self) -> TimerPhase {
        if self.remaining <= CRITICAL_THRESHOLD {
            TimerPhase::Critical
        } else if self.remaining <= WARNING_THRESHOLD {
            TimerPhase::Warning
        } else {
            TimerPhase::Normal
        }
    }

    /// Remaining time formatted as `MM:SS`.
    pub fn formatted(&self) -> String {
        let total = self.remaining.max(0.0) as u32;
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}

impl Default for MatchTimer {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_SECONDS)
    }
}
