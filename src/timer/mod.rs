//! Countdown timer for focus sessions
//!
//! This module provides:
//! - A pure countdown state machine (Pomodoro-style)
//! - A wall-clock tick driver that feeds it one tick per elapsed second

pub mod driver;

pub use driver::TickDriver;

/// Operating phase of the session timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Timer is not running, counter is at the full duration
    #[default]
    Idle,
    /// Timer is actively counting down
    Running,
    /// Timer is suspended, counter holds its value
    Paused,
}

/// Result of delivering one tick to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick was ignored because the timer was not running
    Ignored,
    /// Counter decremented by one second
    Ticked,
    /// Countdown expired; the timer has reset itself to Idle
    Completed,
}

/// A focus session countdown
///
/// Pure state machine: it knows nothing about wall-clock time or rendering.
/// The caller delivers `tick()` once per second while the timer is Running
/// (see [`TickDriver`]) and reacts to [`TickOutcome::Completed`].
///
/// Out-of-phase calls (`start()` while Running, `pause()` while Idle, ...)
/// are silent no-ops rather than errors; the controller gates calls by the
/// current phase.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    duration_seconds: u32,
    remaining_seconds: u32,
    phase: Phase,
}

impl SessionTimer {
    /// Create a new timer with the given duration in minutes
    pub fn new(minutes: u32) -> Self {
        // Guard against a zero-length countdown from a hand-edited config
        let duration_seconds = minutes.max(1) * 60;
        Self {
            duration_seconds,
            remaining_seconds: duration_seconds,
            phase: Phase::Idle,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left on the countdown
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Full countdown duration in seconds
    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Check if the timer is currently counting down
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Start the countdown; only valid from Idle
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
        }
    }

    /// Suspend the countdown; only valid from Running
    ///
    /// No time elapses while paused.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Continue the countdown from the held value; only valid from Paused
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Abandon the countdown from any phase and restore the full duration
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining_seconds = self.duration_seconds;
    }

    /// Deliver one one-second tick
    ///
    /// A tick that arrives with one second left completes the session
    /// instead of displaying 00:00: the counter is restored to the full
    /// duration and the phase returns to Idle.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }

        if self.remaining_seconds <= 1 {
            self.remaining_seconds = self.duration_seconds;
            self.phase = Phase::Idle;
            return TickOutcome::Completed;
        }

        self.remaining_seconds -= 1;
        TickOutcome::Ticked
    }

    /// Format the remaining time as MM:SS
    pub fn format_remaining(&self) -> String {
        let mins = self.remaining_seconds / 60;
        let secs = self.remaining_seconds % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}
