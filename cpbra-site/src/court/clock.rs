use serde::{Deserialize, Serialize};

/// What happens when the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Stop at zero and wait for the user.
    Manual,
    /// Hold a "game over" state, then reset and start the next game.
    #[default]
    Looping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    Paused,
    Running,
    GameOver { hold_remaining: u32 },
}

/// Result of one one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Counted { remaining: u32 },
    Expired,
    Holding { hold_remaining: u32 },
    Restarted,
}

/// Countdown for one court. Driven by an external one-second interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameClock {
    mode: ClockMode,
    duration_secs: u32,
    remaining: u32,
    hold_secs: u32,
    status: ClockStatus,
}

impl GameClock {
    #[must_use]
    pub const fn new(game_minutes: u32, hold_secs: u32, mode: ClockMode) -> Self {
        let duration_secs = game_minutes.saturating_mul(60);
        Self {
            mode,
            duration_secs,
            remaining: duration_secs,
            hold_secs,
            status: ClockStatus::Paused,
        }
    }

    /// No-op once the clock is at zero; reset first.
    pub const fn start(&mut self) {
        if self.remaining > 0 && matches!(self.status, ClockStatus::Paused) {
            self.status = ClockStatus::Running;
        }
    }

    pub const fn stop(&mut self) {
        if matches!(self.status, ClockStatus::Running) {
            self.status = ClockStatus::Paused;
        }
    }

    pub const fn toggle(&mut self) {
        match self.status {
            ClockStatus::Running => self.stop(),
            ClockStatus::Paused => self.start(),
            ClockStatus::GameOver { .. } => {}
        }
    }

    /// Stop and refill to the full game length.
    pub const fn reset(&mut self) {
        self.status = ClockStatus::Paused;
        self.remaining = self.duration_secs;
    }

    /// Change the game length; remaining time is refilled.
    pub const fn set_game_minutes(&mut self, minutes: u32) {
        self.duration_secs = minutes.saturating_mul(60);
        self.remaining = self.duration_secs;
    }

    pub const fn tick(&mut self) -> TickOutcome {
        match self.status {
            ClockStatus::Paused => TickOutcome::Idle,
            ClockStatus::Running if self.remaining > 1 => {
                self.remaining -= 1;
                TickOutcome::Counted {
                    remaining: self.remaining,
                }
            }
            ClockStatus::Running => {
                self.remaining = 0;
                self.status = match self.mode {
                    ClockMode::Manual => ClockStatus::Paused,
                    ClockMode::Looping => ClockStatus::GameOver {
                        hold_remaining: self.hold_secs,
                    },
                };
                TickOutcome::Expired
            }
            ClockStatus::GameOver { hold_remaining } if hold_remaining > 1 => {
                self.status = ClockStatus::GameOver {
                    hold_remaining: hold_remaining - 1,
                };
                TickOutcome::Holding {
                    hold_remaining: hold_remaining - 1,
                }
            }
            ClockStatus::GameOver { .. } => {
                self.remaining = self.duration_secs;
                self.status = ClockStatus::Running;
                TickOutcome::Restarted
            }
        }
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_secs / 60
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn status(&self) -> ClockStatus {
        self.status
    }

    #[must_use]
    pub const fn mode(&self) -> ClockMode {
        self.mode
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.status, ClockStatus::Running)
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.status, ClockStatus::GameOver { .. })
    }

    #[must_use]
    pub fn display(&self) -> String {
        format_time(self.remaining)
    }
}

/// `MM:SS`, minutes not capped at 59.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
