// src/quiz/timer.rs

/// Default test length in seconds.
pub const DEFAULT_DURATION_SECS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Expired,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still running with this many seconds left.
    Running(u32),
    /// Reached zero on this tick. Reported exactly once.
    Expired,
    /// Was already expired before this tick.
    Idle,
}

/// Countdown that moves from `Running` to `Expired` and never back.
#[derive(Debug, Clone)]
pub struct Timer {
    remaining: u32,
    state: TimerState,
}

impl Timer {
    /// A zero duration starts out expired.
    pub fn new(duration_secs: u32) -> Self {
        let state = if duration_secs == 0 {
            TimerState::Expired
        } else {
            TimerState::Running
        };
        Self {
            remaining: duration_secs,
            state,
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.state == TimerState::Expired {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    /// Remaining time as `M:SS`.
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}
