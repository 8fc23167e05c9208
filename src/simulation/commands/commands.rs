use crate::core::math::Vector;
use crate::core::utils::random::random_int;
use crate::domain::{Ball, BallConfig, Capsule, SceneConfig, Wall, MIN_BALL_RADIUS};

use super::render_extract;
use super::WorldCore;

/// Random balls never get a radius above this
const RANDOM_BALL_MAX_RADIUS: i32 = 30;

pub(super) fn load_scene(world: &mut WorldCore, scene: &SceneConfig) {
    world.balls = scene.balls.iter().map(Ball::from_config).collect();
    world.walls = scene.walls.iter().map(Wall::from_config).collect();
    world.capsules = scene.capsules.iter().map(Capsule::from_config).collect();
    world.gravity = scene.gravity;
    world.frame = 0;

    console_log!(
        "scene loaded: {} balls, {} walls, {} capsules",
        world.balls.len(),
        world.walls.len(),
        world.capsules.len()
    );
    render_extract::extract(world);
}

pub(super) fn add_ball(world: &mut WorldCore, config: BallConfig) -> usize {
    world.balls.push(Ball::from_config(&config));
    render_extract::extract(world);
    world.balls.len() - 1
}

pub(super) fn add_wall(world: &mut WorldCore, start: Vector, end: Vector) -> usize {
    world.walls.push(Wall::new(start, end));
    render_extract::extract(world);
    world.walls.len() - 1
}

pub(super) fn add_capsule(world: &mut WorldCore, start: Vector, end: Vector, r: f64) -> usize {
    world.capsules.push(Capsule::new(start, end, r));
    render_extract::extract(world);
    world.capsules.len() - 1
}

pub(super) fn remove_ball(world: &mut WorldCore, index: usize) -> Option<Ball> {
    if index >= world.balls.len() {
        return None;
    }
    let ball = world.balls.remove(index);
    render_extract::extract(world);
    Some(ball)
}

/// Balls get a random position inside the area, radius in
/// `[MIN_BALL_RADIUS, 30]` and mass in `[0, 10]`
pub(super) fn spawn_random_balls(world: &mut WorldCore, count: u32, width: u32, height: u32) {
    let max_x = width.min(i32::MAX as u32) as i32;
    let max_y = height.min(i32::MAX as u32) as i32;

    for _ in 0..count {
        let x = random_int(&mut world.rng_state, 0, max_x);
        let y = random_int(&mut world.rng_state, 0, max_y);
        let r = random_int(&mut world.rng_state, MIN_BALL_RADIUS as i32, RANDOM_BALL_MAX_RADIUS);
        let mass = random_int(&mut world.rng_state, 0, 10);

        let mut config = BallConfig::new(Vector::new(x as f64, y as f64), r as f64);
        config.mass = mass as f64;
        world.balls.push(Ball::from_config(&config));
    }

    console_log!("spawned {} random balls", count);
    render_extract::extract(world);
}

pub(super) fn clear(world: &mut WorldCore) {
    world.balls.clear();
    world.walls.clear();
    world.capsules.clear();
    world.frame = 0;
    render_extract::extract(world);
}
