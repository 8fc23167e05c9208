//! World - the sandbox host loop
//!
//! Owns every body and drives one tick at a time:
//! input -> reposition -> pairwise collisions -> render extraction.
//!
//! The physics itself lives in domain/ (integration) and
//! systems/collision (detection and resolution); this module only
//! orchestrates.

use crate::core::math::Vector;
use crate::domain::{Ball, BallConfig, Capsule, InputState, SceneConfig, SceneError, Wall};

#[path = "perf/timing.rs"]
mod timing;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/collisions.rs"]
mod collisions;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

/// Flat buffers the renderer reads after each tick
pub(crate) struct RenderBuffers {
    /// `[x, y, radius]` per ball
    pub(crate) balls: Vec<f64>,
    /// `[sx, sy, ex, ey]` per wall
    pub(crate) walls: Vec<f64>,
    /// `[sx, sy, ex, ey, r, arc_angle]` per capsule
    pub(crate) capsules: Vec<f64>,
}

/// The simulation world
pub struct WorldCore {
    balls: Vec<Ball>,
    walls: Vec<Wall>,
    capsules: Vec<Capsule>,

    // Settings
    gravity: Vector,
    mouse_controls: bool,

    // State
    input: InputState,
    frame: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world without gravity
    pub fn new() -> Self {
        init::create_world_core()
    }

    /// Create a world populated from a JSON scene
    pub fn from_scene_json(json: &str) -> Result<Self, SceneError> {
        let mut world = Self::new();
        world.load_scene_json(json)?;
        Ok(world)
    }

    /// Replace every body (and gravity) with the scene's
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), SceneError> {
        let scene = SceneConfig::from_json(json)?;
        commands::load_scene(self, &scene);
        Ok(())
    }

    pub fn load_scene(&mut self, scene: &SceneConfig) -> Result<(), SceneError> {
        scene.validate()?;
        commands::load_scene(self, scene);
        Ok(())
    }

    /// Serialize every body for debugging
    pub fn snapshot_json(&self) -> Result<String, SceneError> {
        render_extract::snapshot_json(self)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn balls(&self) -> &[Ball] { &self.balls }

    pub fn walls(&self) -> &[Wall] { &self.walls }

    pub fn capsules(&self) -> &[Capsule] { &self.capsules }

    pub fn ball(&self, index: usize) -> Option<&Ball> { self.balls.get(index) }

    pub fn ball_mut(&mut self, index: usize) -> Option<&mut Ball> { self.balls.get_mut(index) }

    pub fn wall_mut(&mut self, index: usize) -> Option<&mut Wall> { self.walls.get_mut(index) }

    pub fn capsule_mut(&mut self, index: usize) -> Option<&mut Capsule> { self.capsules.get_mut(index) }

    // === SETTINGS ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        settings::set_gravity(self, x, y);
    }

    pub fn gravity(&self) -> Vector {
        settings::gravity(self)
    }

    /// When off, the pointer in the input snapshot is ignored
    pub fn set_mouse_controls(&mut self, enabled: bool) {
        settings::set_mouse_controls(self, enabled);
    }

    pub fn mouse_controls(&self) -> bool {
        settings::mouse_controls(self)
    }

    /// Input for the next tick. Stays in effect until replaced.
    pub fn set_input(&mut self, input: InputState) {
        settings::set_input(self, input);
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    // === BODY COMMANDS ===

    /// Add a ball with default material; returns its index
    pub fn add_ball(&mut self, x: f64, y: f64, r: f64) -> usize {
        commands::add_ball(self, BallConfig::new(Vector::new(x, y), r))
    }

    pub fn add_ball_with(&mut self, config: BallConfig) -> usize {
        commands::add_ball(self, config)
    }

    pub fn add_wall(&mut self, start: Vector, end: Vector) -> usize {
        commands::add_wall(self, start, end)
    }

    pub fn add_capsule(&mut self, start: Vector, end: Vector, r: f64) -> usize {
        commands::add_capsule(self, start, end, r)
    }

    /// Remove a ball; later balls shift down one index
    pub fn remove_ball(&mut self, index: usize) -> Option<Ball> {
        commands::remove_ball(self, index)
    }

    /// Scatter `count` balls with random radius and mass inside `width` x `height`
    pub fn spawn_random_balls(&mut self, count: u32, width: u32, height: u32) {
        commands::spawn_random_balls(self, count, width, height);
    }

    /// Remove every body and reset the frame counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    pub fn ball_count(&self) -> usize { self.balls.len() }

    pub fn wall_count(&self) -> usize { self.walls.len() }

    pub fn capsule_count(&self) -> usize { self.capsules.len() }

    // === STEP ===

    /// Advance the world one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === RENDER ===

    /// `[x, y, radius]` per ball, as of the last tick
    pub fn ball_buffer(&self) -> &[f64] { &self.render.balls }

    /// `[sx, sy, ex, ey]` per wall
    pub fn wall_buffer(&self) -> &[f64] { &self.render.walls }

    /// `[sx, sy, ex, ey, r, arc_angle]` per capsule
    pub fn capsule_buffer(&self) -> &[f64] { &self.render.capsules }

    /// Rebuild the render buffers from the current bodies
    pub fn extract_render(&mut self) {
        render_extract::extract(self);
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
