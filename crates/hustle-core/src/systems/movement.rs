//! Movement system - input intents to a collision-resolved player position.
//!
//! Displacement is applied to the feet hitbox only; sprite and reach boxes
//! are re-derived from the resolved feet position, so the three rectangles
//! cannot drift apart however the frame rate varies.

use hecs::World;

use crate::components::{Facing, Hitboxes, MapObject, MoveState, Player};
use hustle_logic::collision::{resolve_move, Rect};
use hustle_logic::constants::player::SPEED;

/// Keyboard intents for one tick. Opposing keys are legal and cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Move the player for one fixed step, resolving collisions against every
/// map object and clamping into `bounds` when present. Facing follows the
/// last-applied axis; a frozen player only clears its moving flag.
pub fn player_movement_system(
    world: &mut World,
    input: &InputState,
    dt: f32,
    bounds: Option<&Rect>,
) {
    let obstacles: Vec<Rect> = world
        .query::<&MapObject>()
        .iter()
        .map(|(_, obj)| obj.rect)
        .collect();

    for (_, (_, hitboxes, state, facing)) in
        world.query_mut::<(&Player, &mut Hitboxes, &mut MoveState, &mut Facing)>()
    {
        state.moving = false;
        if state.frozen {
            continue;
        }

        let step = SPEED * dt;
        let mut dx = 0.0;
        let mut dy = 0.0;
        if input.left {
            dx -= step;
            *facing = Facing::Left;
            state.moving = true;
        }
        if input.right {
            dx += step;
            *facing = Facing::Right;
            state.moving = true;
        }
        if input.up {
            dy += step;
            *facing = Facing::Up;
            state.moving = true;
        }
        if input.down {
            dy -= step;
            *facing = Facing::Down;
            state.moving = true;
        }

        if !state.moving && bounds.is_none() {
            continue;
        }

        let resolved = resolve_move(hitboxes.feet, dx, dy, &obstacles, bounds);
        hitboxes.set_feet_pos(resolved.x, resolved.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_player(world: &mut World, x: f32, y: f32) -> hecs::Entity {
        world.spawn((
            Player,
            Hitboxes::at(x, y),
            MoveState::default(),
            Facing::default(),
        ))
    }

    fn spawn_wall(world: &mut World, rect: Rect) {
        world.spawn((MapObject { rect, order: 0 },));
    }

    #[test]
    fn test_moves_right() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0.0, 0.0);

        let input = InputState {
            right: true,
            ..InputState::default()
        };
        player_movement_system(&mut world, &input, 1.0 / 60.0, None);

        let boxes = world.get::<&Hitboxes>(player).unwrap();
        assert!((boxes.sprite.x - SPEED / 60.0).abs() < 0.001);
        let state = world.get::<&MoveState>(player).unwrap();
        assert!(state.moving);
        let facing = world.get::<&Facing>(player).unwrap();
        assert_eq!(*facing, Facing::Right);
    }

    #[test]
    fn test_frozen_player_stays_put() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 50.0, 50.0);
        world.get::<&mut MoveState>(player).unwrap().frozen = true;

        let input = InputState {
            up: true,
            ..InputState::default()
        };
        player_movement_system(&mut world, &input, 1.0 / 60.0, None);

        let boxes = world.get::<&Hitboxes>(player).unwrap();
        assert_eq!(boxes.sprite.x, 50.0);
        assert_eq!(boxes.sprite.y, 50.0);
        assert!(!world.get::<&MoveState>(player).unwrap().moving);
    }

    #[test]
    fn test_blocked_by_wall_but_slides() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0.0, 0.0);
        let feet = world.get::<&Hitboxes>(player).unwrap().feet;
        // Wall flush against the right edge of the feet box, tall enough
        // that upward sliding stays in contact.
        spawn_wall(
            &mut world,
            Rect::new(feet.right() + 1.0, -100.0, 40.0, 300.0),
        );

        let input = InputState {
            right: true,
            up: true,
            ..InputState::default()
        };
        let before = *world.get::<&Hitboxes>(player).unwrap();
        player_movement_system(&mut world, &input, 1.0 / 60.0, None);

        let after = world.get::<&Hitboxes>(player).unwrap();
        assert!((after.feet.x - before.feet.x).abs() < 0.001, "x blocked");
        assert!(after.feet.y > before.feet.y, "y slides free");
    }

    #[test]
    fn test_bounds_clamp_applies() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 2.0, 2.0);
        let bounds = Rect::new(0.0, 0.0, 2000.0, 2000.0);

        let input = InputState {
            left: true,
            down: true,
            ..InputState::default()
        };
        for _ in 0..240 {
            player_movement_system(&mut world, &input, 1.0 / 60.0, Some(&bounds));
        }

        let boxes = world.get::<&Hitboxes>(player).unwrap();
        assert!(boxes.feet.x >= bounds.x);
        assert!(boxes.feet.y >= bounds.y);
    }

    #[test]
    fn test_opposing_keys_cancel_but_count_as_moving() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 10.0, 10.0);

        let input = InputState {
            left: true,
            right: true,
            ..InputState::default()
        };
        player_movement_system(&mut world, &input, 1.0 / 60.0, None);

        let boxes = world.get::<&Hitboxes>(player).unwrap();
        assert!((boxes.sprite.x - 10.0).abs() < 0.001);
        assert!(world.get::<&MoveState>(player).unwrap().moving);
    }
}
