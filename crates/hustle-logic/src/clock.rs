//! In-game clock — day-second counter, day rollover, exam deadline.
//!
//! The clock advances strictly by simulated seconds handed in by the caller;
//! there is no wall-clock source anywhere. Gating (pause, sleep cutscene) is
//! the caller's responsibility — a gated caller simply does not call
//! [`GameClock::advance`].

use serde::{Deserialize, Serialize};

use crate::constants::clock::{DEADLINE_DAY, SECONDS_PER_DAY};

/// Time-of-day plus day counter for one play session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    /// Seconds since midnight, always in `[0, SECONDS_PER_DAY)`.
    pub day_seconds: f32,
    /// Day number, starting at 1.
    pub day: u32,
    /// Reaching this day ends the run.
    pub deadline_day: u32,
}

/// Outcome of one `advance` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advance {
    /// At least one midnight was crossed.
    pub day_changed: bool,
    /// The day counter has reached the deadline.
    pub game_over: bool,
}

impl GameClock {
    /// A clock at the given time on day 1, with the default deadline.
    pub fn new(day_seconds: f32) -> Self {
        Self {
            day_seconds: day_seconds.rem_euclid(SECONDS_PER_DAY),
            day: 1,
            deadline_day: DEADLINE_DAY,
        }
    }

    pub fn with_deadline(mut self, deadline_day: u32) -> Self {
        self.deadline_day = deadline_day;
        self
    }

    /// Advance by simulated seconds, wrapping past midnight as needed.
    /// Negative input is treated as zero.
    pub fn advance(&mut self, seconds: f32) -> Advance {
        let mut result = Advance::default();
        if seconds > 0.0 {
            self.day_seconds += seconds;
            while self.day_seconds >= SECONDS_PER_DAY {
                self.day_seconds -= SECONDS_PER_DAY;
                self.day += 1;
                result.day_changed = true;
            }
        }
        result.game_over = self.day >= self.deadline_day;
        result
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        (self.day_seconds / 60.0) as u32
    }

    /// Minute within the hour, 0-59.
    pub fn minute(&self) -> u32 {
        (self.day_seconds % 60.0) as u32
    }

    /// `HH:MM` text for the on-screen clock.
    pub fn time_text(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// Seconds until the next occurrence of `target` seconds-past-midnight.
    /// A target at or before the current time wraps to tomorrow.
    pub fn seconds_until(&self, target: f32) -> f32 {
        if self.day_seconds < target {
            target - self.day_seconds
        } else {
            target + SECONDS_PER_DAY - self.day_seconds
        }
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(0.0)
    }
}
