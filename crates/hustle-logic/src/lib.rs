//! Pure gameplay logic for Campus Hustle.
//!
//! This crate contains all simulation logic that is independent of any ECS,
//! renderer, or runtime. Functions take plain data and return results, making
//! them unit-testable and portable across the session engine, the headless
//! harness, and any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`clock`] | In-game day clock: rollover, deadline, time-of-day queries |
//! | [`collision`] | AABB rectangles and separable-axis movement resolution |
//! | [`constants`] | Gameplay numbers: energy rates, hitbox geometry, layout |
//! | [`score`] | Per-activity scoring rates and final-score aggregation |
//! | [`vitals`] | Bounded energy plus monotonic session hour counters |
//! | [`wrap`] | Dialogue text wrapping and pagination |

pub mod clock;
pub mod collision;
pub mod constants;
pub mod score;
pub mod vitals;
pub mod wrap;
