use serde::Serialize;

use crate::core::math::Vector;
use crate::domain::{Ball, Capsule, SceneError, Wall};

use super::WorldCore;

pub(super) const BALL_STRIDE: usize = 3;
pub(super) const WALL_STRIDE: usize = 4;
pub(super) const CAPSULE_STRIDE: usize = 6;

/// Rebuild all render buffers from the current bodies
pub(super) fn extract(world: &mut WorldCore) {
    let render = &mut world.render;

    render.balls.clear();
    render.balls.reserve(world.balls.len() * BALL_STRIDE);
    for ball in world.balls.iter() {
        render.balls.extend_from_slice(&[ball.position.x, ball.position.y, ball.radius]);
    }

    render.walls.clear();
    render.walls.reserve(world.walls.len() * WALL_STRIDE);
    for wall in world.walls.iter() {
        push_segment(&mut render.walls, wall.start_position, wall.end_position);
    }

    render.capsules.clear();
    render.capsules.reserve(world.capsules.len() * CAPSULE_STRIDE);
    for capsule in world.capsules.iter() {
        push_segment(&mut render.capsules, capsule.start_position, capsule.end_position);
        render.capsules.push(capsule.r);
        render.capsules.push(capsule.arc_angle());
    }
}

fn push_segment(buf: &mut Vec<f64>, start: Vector, end: Vector) {
    buf.extend_from_slice(&[start.x, start.y, end.x, end.y]);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    frame: u64,
    gravity: Vector,
    balls: &'a [Ball],
    walls: &'a [Wall],
    capsules: &'a [Capsule],
}

pub(super) fn snapshot_json(world: &WorldCore) -> Result<String, SceneError> {
    let snapshot = Snapshot {
        frame: world.frame,
        gravity: world.gravity,
        balls: &world.balls,
        walls: &world.walls,
        capsules: &world.capsules,
    };
    Ok(serde_json::to_string(&snapshot)?)
}
