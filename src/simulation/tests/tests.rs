use super::*;
use crate::domain::{STANDARD_GRAVITY, ROTATION_INPUT_STEP};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn new_world_is_empty() {
    let world = WorldCore::new();
    assert_eq!(world.ball_count(), 0);
    assert_eq!(world.wall_count(), 0);
    assert_eq!(world.capsule_count(), 0);
    assert_eq!(world.gravity(), Vector::zero());
    assert_eq!(world.frame(), 0);
    assert!(world.ball_buffer().is_empty());
}

#[test]
fn step_advances_frame_and_moves_balls() {
    let mut world = WorldCore::new();
    let idx = world.add_ball(100.0, 100.0, 10.0);
    world.ball_mut(idx).unwrap().velocity = Vector::new(2.0, 0.0);

    world.step();

    assert_eq!(world.frame(), 1);
    let ball = world.ball(idx).unwrap();
    assert_close(ball.position.x, 100.0 + 2.0 * 0.99);
    assert_eq!(world.ball_buffer(), &[ball.position.x, 100.0, 10.0]);
}

#[test]
fn input_only_reaches_player_bodies() {
    let mut world = WorldCore::new();
    let player = world.add_ball_with(BallConfig {
        is_player: true,
        ..BallConfig::new(Vector::new(0.0, 0.0), 10.0)
    });
    let npc = world.add_ball(200.0, 0.0, 10.0);
    let wall = world.add_wall(Vector::new(0.0, 300.0), Vector::new(100.0, 300.0));

    world.set_input(InputState { right: true, rotate_right: true, ..Default::default() });
    world.step();

    assert!(world.ball(player).unwrap().position.x > 0.0);
    assert_eq!(world.ball(npc).unwrap().position, Vector::new(200.0, 0.0));
    assert_eq!(world.walls()[wall].rotation_speed, 0.0);

    world.wall_mut(wall).unwrap().is_player = true;
    world.step();
    assert_close(world.walls()[wall].rotation_speed, ROTATION_INPUT_STEP * 0.99);
}

#[test]
fn pointer_ignored_without_mouse_controls() {
    let mut world = WorldCore::new();
    let player = world.add_ball_with(BallConfig {
        is_player: true,
        ..BallConfig::new(Vector::new(0.0, 0.0), 10.0)
    });

    world.set_input(InputState { pointer: Some(Vector::new(0.0, 500.0)), ..Default::default() });
    world.step();
    assert_eq!(world.ball(player).unwrap().position, Vector::zero());

    world.set_mouse_controls(true);
    world.step();
    let ball = world.ball(player).unwrap();
    assert!(ball.position.y > 0.0);
    assert_close(ball.position.x, 0.0);
}

#[test]
fn gravity_pulls_every_ball() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, STANDARD_GRAVITY);
    world.add_ball(0.0, 0.0, 10.0);
    world.add_ball(500.0, 0.0, 10.0);

    for _ in 0..10 {
        world.step();
    }

    for ball in world.balls() {
        assert!(ball.position.y > 0.0);
        assert!(ball.velocity.y > 0.0);
    }
}

#[test]
fn overlapping_balls_end_the_tick_apart() {
    let mut world = WorldCore::new();
    let a = world.add_ball(0.0, 0.0, 10.0);
    let b = world.add_ball(12.0, 0.0, 10.0);

    world.step();

    let pa = world.ball(a).unwrap().position;
    let pb = world.ball(b).unwrap().position;
    assert_close(pa.distance(pb), 20.0);
    assert_close(pa.x, -4.0);
    assert_close(pb.x, 16.0);
}

#[test]
fn ball_rests_on_floor_under_gravity() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, STANDARD_GRAVITY);
    world.add_wall(Vector::new(-100.0, 50.0), Vector::new(100.0, 50.0));
    let idx = world.add_ball_with(BallConfig {
        elasticity: 0.0,
        ..BallConfig::new(Vector::new(0.0, 0.0), 10.0)
    });

    for _ in 0..2000 {
        world.step();
    }

    let ball = world.ball(idx).unwrap();
    // never sinks through; settles at the floor
    assert!(ball.position.y <= 40.0 + 1e-6);
    assert!(ball.position.y > 39.0);
    assert!(ball.velocity.y.abs() < 0.02);
}

#[test]
fn rotating_wall_sweeps_a_resting_ball() {
    let mut world = WorldCore::new();
    let wall = world.add_wall(Vector::new(-100.0, 0.0), Vector::new(100.0, 0.0));
    world.wall_mut(wall).unwrap().rotation_speed = 0.05;
    let idx = world.add_ball(60.0, 15.0, 10.0);

    for _ in 0..10 {
        world.step();
    }

    let ball = world.ball(idx).unwrap();
    let w = &world.walls()[wall];
    let gap = ball.position.distance(w.closest_point(ball.position));
    assert!(gap >= 10.0 - 1e-9, "ball inside the wall: gap {gap}");
    assert!((w.start_position.distance(w.end_position) - 200.0).abs() < 1e-9);
}

#[test]
fn render_buffers_track_bodies() {
    let mut world = WorldCore::new();
    world.add_ball(1.0, 2.0, 5.0);
    world.add_wall(Vector::new(0.0, 0.0), Vector::new(10.0, 0.0));
    world.add_capsule(Vector::new(0.0, 0.0), Vector::new(0.0, 20.0), 4.0);

    assert_eq!(world.ball_buffer(), &[1.0, 2.0, 10.0]);
    assert_eq!(world.wall_buffer(), &[0.0, 0.0, 10.0, 0.0]);
    assert_eq!(world.capsule_buffer().len(), 6);
    assert_eq!(world.capsule_buffer()[4], 4.0);
    assert_close(world.capsule_buffer()[5], std::f64::consts::FRAC_PI_2);

    world.remove_ball(0);
    assert!(world.ball_buffer().is_empty());
    assert!(world.remove_ball(0).is_none());
}

#[test]
fn clear_resets_bodies_and_frame() {
    let mut world = WorldCore::new();
    world.add_ball(0.0, 0.0, 10.0);
    world.add_wall(Vector::new(0.0, 0.0), Vector::new(10.0, 0.0));
    world.step();
    world.clear();

    assert_eq!(world.ball_count(), 0);
    assert_eq!(world.wall_count(), 0);
    assert_eq!(world.frame(), 0);
    assert!(world.wall_buffer().is_empty());
}

#[test]
fn random_balls_are_deterministic_and_in_bounds() {
    let mut a = WorldCore::new();
    let mut b = WorldCore::new();
    a.spawn_random_balls(20, 640, 480);
    b.spawn_random_balls(20, 640, 480);

    assert_eq!(a.balls(), b.balls());
    for ball in a.balls() {
        assert!((0.0..=640.0).contains(&ball.position.x));
        assert!((0.0..=480.0).contains(&ball.position.y));
        assert!((10.0..=30.0).contains(&ball.radius));
        assert!((0.0..=10.0).contains(&ball.mass));
    }
}

#[test]
fn scene_load_replaces_world() {
    let mut world = WorldCore::new();
    world.add_ball(0.0, 0.0, 10.0);

    let json = r#"{
        "gravity": { "x": 0, "y": 0.5 },
        "walls": [{ "start": { "x": 0, "y": 100 }, "end": { "x": 100, "y": 100 } }],
        "capsules": [{ "start": { "x": 0, "y": 0 }, "end": { "x": 30, "y": 0 }, "r": 6 }]
    }"#;
    world.load_scene_json(json).unwrap();

    assert_eq!(world.ball_count(), 0);
    assert_eq!(world.wall_count(), 1);
    assert_eq!(world.capsule_count(), 1);
    assert_eq!(world.gravity(), Vector::new(0.0, 0.5));
    assert_eq!(world.wall_buffer().len(), 4);
}

#[test]
fn bad_scene_leaves_world_untouched() {
    let mut world = WorldCore::new();
    world.add_ball(0.0, 0.0, 10.0);

    assert!(world.load_scene_json("not json").is_err());
    assert_eq!(world.ball_count(), 1);
}

#[test]
fn perf_stats_count_pairs() {
    let mut world = WorldCore::new();
    world.enable_perf_metrics(true);
    world.add_ball(0.0, 0.0, 10.0);
    world.add_ball(15.0, 0.0, 10.0);
    world.add_ball(300.0, 0.0, 10.0);
    world.add_wall(Vector::new(-50.0, 200.0), Vector::new(50.0, 200.0));

    world.step();
    let stats = world.get_perf_stats();

    // 3 ball pairs + 3 ball-wall pairs
    assert_eq!(stats.pairs_checked(), 6);
    assert_eq!(stats.contacts(), 1);
    assert_eq!(stats.ball_count(), 3);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn snapshot_lists_every_body() {
    let mut world = WorldCore::new();
    world.add_ball(1.0, 2.0, 10.0);
    world.add_capsule(Vector::new(0.0, 0.0), Vector::new(10.0, 0.0), 3.0);

    let value: serde_json::Value = serde_json::from_str(&world.snapshot_json().unwrap()).unwrap();
    assert_eq!(value["balls"].as_array().unwrap().len(), 1);
    assert_eq!(value["capsules"].as_array().unwrap().len(), 1);
    assert_eq!(value["walls"].as_array().unwrap().len(), 0);
    assert_eq!(value["balls"][0]["position"]["x"], 1.0);
}

#[test]
fn snapshot_json_round_trips_into_a_scene() {
    let mut world = WorldCore::new();
    world.set_gravity(0.0, STANDARD_GRAVITY);
    world.add_ball(40.0, 60.0, 12.0);
    world.add_wall(Vector::new(0.0, 100.0), Vector::new(200.0, 100.0));

    let json = world.snapshot_json().expect("snapshot serializes");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["frame"], 0);
    assert_eq!(value["gravity"]["y"], STANDARD_GRAVITY);
    assert_eq!(value["walls"][0]["startPosition"]["x"], 0.0);
    assert_eq!(value["walls"][0]["endPosition"]["x"], 200.0);
}

#[test]
fn perf_phases_fit_inside_the_step() {
    let mut world = WorldCore::new();
    world.spawn_random_balls(30, 400, 300);
    world.add_wall(Vector::new(0.0, 300.0), Vector::new(400.0, 300.0));
    world.enable_perf_metrics(true);

    world.step();
    let stats = world.get_perf_stats();

    let phases = stats.input_ms() + stats.integrate_ms() + stats.collision_ms() + stats.render_ms();
    for phase in [stats.input_ms(), stats.integrate_ms(), stats.collision_ms(), stats.render_ms()] {
        assert!(phase >= 0.0);
    }
    assert!(phases <= stats.step_ms() + 1e-6, "{phases} > {}", stats.step_ms());
    assert_eq!(stats.pairs_checked(), 30 * 29 / 2 + 30);

    world.enable_perf_metrics(false);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.step_ms(), 0.0);
    assert_eq!(stats.collision_ms(), 0.0);
    assert_eq!(stats.pairs_checked(), 0);
}

#[test]
fn facade_exposes_every_render_buffer_zero_copy() {
    let mut world = World::new();
    world.add_ball(1.0, 2.0, 10.0);
    world.add_wall(0.0, 0.0, 10.0, 0.0);
    world.add_capsule(0.0, 0.0, 0.0, 20.0, 4.0);

    let core = world.core();
    assert_eq!(world.ball_buffer_ptr(), core.ball_buffer().as_ptr());
    assert_eq!(world.ball_buffer_len(), 3);
    assert_eq!(world.wall_buffer_ptr(), core.wall_buffer().as_ptr());
    assert_eq!(world.wall_buffer_len(), 4);
    assert_eq!(world.capsule_buffer_ptr(), core.capsule_buffer().as_ptr());
    assert_eq!(world.capsule_buffer_len(), 6);
}
