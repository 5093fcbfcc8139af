//! Map object components: collider rectangles and interaction properties.

use serde::{Deserialize, Serialize};

use crate::events::EventKey;
use hustle_logic::collision::Rect;

/// A static map rectangle the player collides with.
///
/// `order` is the object's position in the map document, used to keep
/// nearest-object tie-breaking deterministic regardless of ECS iteration
/// order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapObject {
    pub rect: Rect,
    pub order: u32,
}

/// Interaction properties, attached only to objects that have any.
///
/// Properties are decided at map-load time; there is no string-keyed bag to
/// probe at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interactable {
    /// Behavior to run on interaction.
    pub event: Option<EventKey>,
    /// Passive signage shown when no event is present.
    pub text: Option<String>,
}

impl Interactable {
    pub fn is_empty(&self) -> bool {
        self.event.is_none() && self.text.is_none()
    }
}
