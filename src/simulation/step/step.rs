use super::collisions::resolve_collisions;
use super::render_extract;
use super::timing::{now_ms, timed};
use super::WorldCore;

/// One tick: input -> reposition -> collisions -> render extraction
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let step_start = if perf_on {
        world.perf_stats.reset();
        world.perf_stats.ball_count = world.balls.len() as u32;
        world.perf_stats.wall_count = world.walls.len() as u32;
        world.perf_stats.capsule_count = world.capsules.len() as u32;
        Some(now_ms())
    } else {
        None
    };

    // Input lands before anything integrates this tick
    timed(world, |s| &mut s.input_ms, apply_input);
    timed(world, |s| &mut s.integrate_ms, reposition_bodies);

    // Runs on post-integration geometry so walls collide where they are drawn
    let counts = timed(world, |s| &mut s.collision_ms, resolve_collisions);
    if perf_on {
        world.perf_stats.pairs_checked = counts.pairs_checked;
        world.perf_stats.contacts = counts.contacts;
    }

    timed(world, |s| &mut s.render_ms, render_extract::extract);

    world.frame += 1;

    if let Some(start) = step_start {
        world.perf_stats.step_ms = now_ms() - start;
    }
}

fn apply_input(world: &mut WorldCore) {
    let mut input = world.input;
    if !world.mouse_controls {
        input.pointer = None;
    }

    for ball in world.balls.iter_mut().filter(|b| b.is_player) {
        ball.apply_input(&input);
    }
    for wall in world.walls.iter_mut().filter(|w| w.is_player) {
        wall.apply_input(&input);
    }
    for capsule in world.capsules.iter_mut().filter(|c| c.is_player) {
        capsule.apply_input(&input);
    }
}

fn reposition_bodies(world: &mut WorldCore) {
    let gravity = world.gravity;
    for ball in world.balls.iter_mut() {
        ball.reposition(gravity);
    }
    for wall in world.walls.iter_mut() {
        wall.reposition();
    }
    for capsule in world.capsules.iter_mut() {
        capsule.reposition();
    }
}
