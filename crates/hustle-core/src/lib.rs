//! Campus Hustle Core - day-structured life-simulation engine.
//!
//! A player character roams a tile map, interacts with fixed activity
//! objects (study building, social hub, dining hub, dormitory), and manages
//! a depleting energy meter against an advancing in-game clock until the
//! exam deadline ends the run.
//!
//! # Architecture
//!
//! The map and the player live in a `hecs` ECS world:
//! - **Entities**: the player, map obstacle rectangles
//! - **Components**: pure data (hitboxes, colliders, interaction properties)
//! - **Systems**: movement/collision, nearest-interactable lookup, event
//!   dispatch, dialogue sequencing, deferred continuations
//!
//! [`session::Session`] owns the world plus the clock, vitals, score and
//! dialogue state, and is the only mutation path - there is no global game
//! state. Rendering, audio and input devices are external collaborators
//! that read per-frame snapshots and feed discrete input events in.
//!
//! # Example
//!
//! ```rust,no_run
//! use hustle_core::prelude::*;
//!
//! let mut session = Session::new(SessionConfig::default());
//! session
//!     .insert_map_json("campus", r#"{ "name": "Campus", "width": 800.0, "height": 600.0 }"#)
//!     .unwrap();
//! session.switch_map("campus").unwrap();
//!
//! loop {
//!     session.update(&InputState::default(), 1.0 / 60.0);
//! }
//! ```

pub mod components;
pub mod events;
pub mod leaderboard;
pub mod map;
pub mod session;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::events::{Category, EventKey};
    pub use crate::session::{Phase, Session, SessionConfig};
    pub use crate::systems::InputState;
}
