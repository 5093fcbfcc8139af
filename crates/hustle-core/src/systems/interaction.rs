//! Nearest-interactable lookup.
//!
//! Candidates are map objects carrying an event or signage text whose
//! rectangle overlaps the player's reach hitbox. The winner is the one whose
//! centre is closest to the player's centre; exact ties fall back to the
//! map document order so the result never depends on ECS iteration order.

use hecs::{Entity, World};

use crate::components::{Hitboxes, Interactable, MapObject, Player};

/// The interactable object the player could trigger right now, if any.
pub fn nearest_interactable(world: &World) -> Option<Entity> {
    let (reach, centre) = world
        .query::<(&Player, &Hitboxes)>()
        .iter()
        .next()
        .map(|(_, (_, boxes))| (boxes.reach, boxes.centre()))?;

    let mut best: Option<(Entity, f32, u32)> = None;
    for (entity, (obj, props)) in world.query::<(&MapObject, &Interactable)>().iter() {
        if props.is_empty() {
            continue;
        }
        if !reach.overlaps(&obj.rect) {
            continue;
        }

        let (ox, oy) = obj.rect.centre();
        let distance = ((centre.0 - ox).powi(2) + (centre.1 - oy).powi(2)).sqrt();
        let closer = match best {
            None => true,
            Some((_, best_distance, best_order)) => {
                distance < best_distance
                    || (distance == best_distance && obj.order < best_order)
            }
        };
        if closer {
            best = Some((entity, distance, obj.order));
        }
    }

    best.map(|(entity, _, _)| entity)
}
