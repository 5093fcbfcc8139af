//! Player vitals — bounded energy plus monotonic session counters.

use serde::{Deserialize, Serialize};

use crate::constants::energy::{MAX, MIN};

/// Energy and cumulative stats for one play session.
///
/// Energy is always clamped to `[MIN, MAX]`; the hour counters only ever
/// grow. `sleeping` gates time and energy updates while the sleep sequence
/// is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub energy: i32,
    pub hours_studied: f32,
    pub hours_recreational: f32,
    pub hours_slept: f32,
    pub sleeping: bool,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            energy: MAX,
            hours_studied: 0.0,
            hours_recreational: 0.0,
            hours_slept: 0.0,
            sleeping: false,
        }
    }
}

impl Vitals {
    /// Set energy, clamping to the valid range for any input.
    pub fn set_energy(&mut self, value: i32) {
        self.energy = value.clamp(MIN, MAX);
    }

    /// Spend energy, clamping at the lower bound for any input.
    pub fn decrease_energy(&mut self, amount: i32) {
        self.set_energy(self.energy.saturating_sub(amount));
    }

    /// Accumulate studied hours. Non-positive input is ignored so the
    /// counter stays monotonic.
    pub fn add_study_hours(&mut self, hours: f32) {
        if hours > 0.0 {
            self.hours_studied += hours;
        }
    }

    pub fn add_recreational_hours(&mut self, hours: f32) {
        if hours > 0.0 {
            self.hours_recreational += hours;
        }
    }

    pub fn add_slept_hours(&mut self, hours: f32) {
        if hours > 0.0 {
            self.hours_slept += hours;
        }
    }
}
