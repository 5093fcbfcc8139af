//! Player components: hitboxes, facing direction, movement flags.

use serde::{Deserialize, Serialize};

use hustle_logic::collision::Rect;
use hustle_logic::constants::player::{
    FEET_H, FEET_OFFSET_X, FEET_W, REACH_SCALE_X, REACH_SCALE_Y, SPRITE_H, SPRITE_W,
};

/// Marker component identifying the player entity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player;

/// Facing direction, used by the presentation layer to pick animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Right,
    #[default]
    Down,
    Left,
}

/// The player's three rectangles, kept in sync through [`Hitboxes::set_pos`].
///
/// `sprite` covers the drawn character, `feet` is the smaller ground-contact
/// box used for collision, and `reach` is the enlarged box used only for
/// proximity queries against interactable objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitboxes {
    pub sprite: Rect,
    pub feet: Rect,
    pub reach: Rect,
}

impl Hitboxes {
    /// Hitboxes for a sprite whose bottom-left corner is at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        let sprite = Rect::new(x, y, SPRITE_W, SPRITE_H);
        Self {
            sprite,
            feet: Rect::new(x + FEET_OFFSET_X, y, FEET_W, FEET_H),
            reach: sprite.scaled_about_centre(REACH_SCALE_X, REACH_SCALE_Y),
        }
    }

    /// Move the sprite's bottom-left corner, re-deriving feet and reach so
    /// the three rectangles cannot drift apart.
    pub fn set_pos(&mut self, x: f32, y: f32) {
        *self = Self::at(x, y);
    }

    /// Position the sprite from a resolved feet rectangle.
    pub fn set_feet_pos(&mut self, feet_x: f32, feet_y: f32) {
        self.set_pos(feet_x - FEET_OFFSET_X, feet_y);
    }

    /// Centre of the sprite, used for distance comparisons.
    pub fn centre(&self) -> (f32, f32) {
        self.sprite.centre()
    }
}

impl Default for Hitboxes {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

/// Movement flags. A frozen player ignores input and cannot interact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveState {
    pub moving: bool,
    pub frozen: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitboxes_stay_in_sync() {
        let mut boxes = Hitboxes::at(100.0, 200.0);
        assert_eq!(boxes.feet.x, 100.0 + FEET_OFFSET_X);
        assert_eq!(boxes.feet.y, 200.0);

        boxes.set_pos(40.0, 60.0);
        assert_eq!(boxes.sprite.x, 40.0);
        assert_eq!(boxes.feet.x, 40.0 + FEET_OFFSET_X);

        // Reach stays centred on the sprite.
        let (sx, sy) = boxes.sprite.centre();
        let (rx, ry) = boxes.reach.centre();
        assert!((sx - rx).abs() < 0.001);
        assert!((sy - ry).abs() < 0.001);
    }

    #[test]
    fn test_set_feet_pos_round_trips() {
        let mut boxes = Hitboxes::at(0.0, 0.0);
        boxes.set_feet_pos(116.0, 80.0);
        assert!((boxes.feet.x - 116.0).abs() < 0.001);
        assert!((boxes.feet.y - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_reach_is_larger_than_sprite() {
        let boxes = Hitboxes::at(0.0, 0.0);
        assert!(boxes.reach.w > boxes.sprite.w);
        assert!(boxes.reach.h > boxes.sprite.h);
    }
}
