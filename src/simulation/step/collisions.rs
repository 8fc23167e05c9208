use crate::systems::collision::collide;

use super::WorldCore;

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct CollisionCounts {
    pub(super) pairs_checked: u32,
    pub(super) contacts: u32,
}

/// Every ball pair, then every ball against every wall.
///
/// Pairs run as (0,1), (0,2), ..., (1,2), ... and each resolution sees the
/// positions left by the previous one.
pub(super) fn resolve_collisions(world: &mut WorldCore) -> CollisionCounts {
    let mut counts = CollisionCounts::default();
    let balls = &mut world.balls;

    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            counts.pairs_checked += 1;
            if collide(a, b).is_some() {
                counts.contacts += 1;
            }
        }
    }

    for ball in balls.iter_mut() {
        for wall in world.walls.iter_mut() {
            counts.pairs_checked += 1;
            if collide(ball, wall).is_some() {
                counts.contacts += 1;
            }
        }
    }

    counts
}
