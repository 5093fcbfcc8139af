//! Gameplay constants — clock, energy, player geometry, dialogue layout.
//!
//! Plain `pub const` tables with no runtime dependency. Both the session
//! engine and the headless harness read these.

pub mod clock {
    /// In-game seconds in one day (24 h x 60).
    pub const SECONDS_PER_DAY: f32 = 1440.0;
    /// In-game seconds in one activity hour.
    pub const SECONDS_PER_HOUR: f32 = 60.0;
    /// Fixed wake-up time, 08:00.
    pub const WAKE_TIME: f32 = 480.0;
    /// Campus buildings open at 08:00.
    pub const OPENING_TIME: f32 = 480.0;
    /// The exam lands on the morning of this day; reaching it ends the run.
    pub const DEADLINE_DAY: u32 = 8;
}

pub mod energy {
    pub const MAX: i32 = 100;
    pub const MIN: i32 = 0;
    /// Energy drained by one hour of any waking activity.
    pub const COST_PER_HOUR: i32 = 10;
    /// Energy restored per hour slept.
    pub const RESTORE_PER_HOUR: i32 = 13;
}

pub mod player {
    /// Sprite pixels are scaled up 4x on the map.
    pub const SCALE: f32 = 4.0;
    pub const SPRITE_W: f32 = 17.0 * SCALE;
    pub const SPRITE_H: f32 = 28.0 * SCALE;
    /// The feet hitbox is inset from the sprite's left edge.
    pub const FEET_OFFSET_X: f32 = 4.0 * SCALE;
    pub const FEET_W: f32 = 9.0 * SCALE;
    pub const FEET_H: f32 = 7.0 * SCALE;
    /// The reach hitbox is the sprite bounds scaled about its centre.
    pub const REACH_SCALE_X: f32 = 2.2;
    pub const REACH_SCALE_Y: f32 = 1.7;
    /// Walking speed in map units per second.
    pub const SPEED: f32 = 300.0;
    /// Movement runs on a fixed step so the three hitboxes never desync.
    pub const FIXED_TICK: f32 = 1.0 / 60.0;
}

pub mod dialogue {
    /// Character budget of one wrapped dialogue line.
    pub const LINE_CHARS: usize = 35;
    /// Wrapped lines shown per dialogue page.
    pub const LINES_PER_PAGE: usize = 3;
    /// Typewriter reveal, characters per tick.
    pub const SCROLL_CHARS_PER_TICK: f32 = 1.0;
}

pub mod fade {
    /// Screen fade played while falling asleep, in simulated seconds.
    pub const SLEEP_FADE_SECONDS: f32 = 3.0;
}

pub mod score {
    pub const STUDY_PER_HOUR: i32 = 100;
    pub const RECREATION_PER_HOUR: i32 = 30;
    pub const SLEEP_PER_HOUR: i32 = 10;
}
