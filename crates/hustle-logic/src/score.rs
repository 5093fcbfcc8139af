//! Score accrual — per-hour rates for each activity class.
//!
//! Points are earned as activities commit and summed into the session score;
//! the same rates reproduce a final score from the session totals for the
//! leaderboard.

use crate::constants::score::{RECREATION_PER_HOUR, SLEEP_PER_HOUR, STUDY_PER_HOUR};
use crate::vitals::Vitals;

pub fn study_points(hours: f32) -> i32 {
    (hours * STUDY_PER_HOUR as f32).round() as i32
}

pub fn recreation_points(hours: f32) -> i32 {
    (hours * RECREATION_PER_HOUR as f32).round() as i32
}

pub fn sleep_points(hours: f32) -> i32 {
    (hours * SLEEP_PER_HOUR as f32).round() as i32
}

/// Recompute the total score from session counters.
pub fn final_score(vitals: &Vitals) -> i32 {
    study_points(vitals.hours_studied)
        + recreation_points(vitals.hours_recreational)
        + sleep_points(vitals.hours_slept)
}
