use wasm_bindgen::prelude::*;

use crate::core::math::Vector;
use crate::domain::InputState;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// JS handle to the simulation
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn ball_count(&self) -> usize { self.core.ball_count() }

    #[wasm_bindgen(getter)]
    pub fn wall_count(&self) -> usize { self.core.wall_count() }

    #[wasm_bindgen(getter)]
    pub fn capsule_count(&self) -> usize { self.core.capsule_count() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        self.core.set_gravity(x, y);
    }

    pub fn set_mouse_controls(&mut self, enabled: bool) {
        self.core.set_mouse_controls(enabled);
    }

    /// Keyboard state for the next tick (WASD + rotate keys)
    pub fn set_keys(
        &mut self,
        up: bool,
        down: bool,
        left: bool,
        right: bool,
        rotate_left: bool,
        rotate_right: bool,
    ) {
        let pointer = self.core.input().pointer;
        self.core.set_input(InputState {
            up,
            down,
            left,
            right,
            rotate_left,
            rotate_right,
            pointer,
        });
    }

    /// Pointer position in world coordinates
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        let mut input = self.core.input();
        input.pointer = Some(Vector::new(x, y));
        self.core.set_input(input);
    }

    pub fn clear_pointer(&mut self) {
        let mut input = self.core.input();
        input.pointer = None;
        self.core.set_input(input);
    }

    /// Replace the world contents with a JSON scene
    pub fn load_scene(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_scene_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // === BODY API ===

    /// Add a ball with default material; returns its index
    pub fn add_ball(&mut self, x: f64, y: f64, r: f64) -> usize {
        self.core.add_ball(x, y, r)
    }

    /// Add a ball from a JSON `BallConfig`; returns its index
    pub fn add_ball_json(&mut self, json: String) -> Result<usize, JsValue> {
        let config = serde_json::from_str(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.core.add_ball_with(config))
    }

    pub fn add_wall(&mut self, sx: f64, sy: f64, ex: f64, ey: f64) -> usize {
        self.core.add_wall(Vector::new(sx, sy), Vector::new(ex, ey))
    }

    pub fn add_capsule(&mut self, sx: f64, sy: f64, ex: f64, ey: f64, r: f64) -> usize {
        self.core.add_capsule(Vector::new(sx, sy), Vector::new(ex, ey), r)
    }

    pub fn remove_ball(&mut self, index: usize) -> bool {
        self.core.remove_ball(index).is_some()
    }

    /// Tag a ball as player-controlled (or not)
    pub fn set_ball_player(&mut self, index: usize, is_player: bool) -> bool {
        match self.core.ball_mut(index) {
            Some(ball) => {
                ball.is_player = is_player;
                true
            }
            None => false,
        }
    }

    /// Tag a wall as rotated by the player's rotate keys
    pub fn set_wall_player(&mut self, index: usize, is_player: bool) -> bool {
        match self.core.wall_mut(index) {
            Some(wall) => {
                wall.is_player = is_player;
                true
            }
            None => false,
        }
    }

    pub fn set_capsule_player(&mut self, index: usize, is_player: bool) -> bool {
        match self.core.capsule_mut(index) {
            Some(capsule) => {
                capsule.is_player = is_player;
                true
            }
            None => false,
        }
    }

    pub fn spawn_random_balls(&mut self, count: u32, width: u32, height: u32) {
        self.core.spawn_random_balls(count, width, height);
    }

    /// Remove every body
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    // === RENDER API ===

    /// `[x, y, radius]` per ball
    pub fn ball_buffer(&self) -> Vec<f64> {
        self.core.ball_buffer().to_vec()
    }

    /// `[sx, sy, ex, ey]` per wall
    pub fn wall_buffer(&self) -> Vec<f64> {
        self.core.wall_buffer().to_vec()
    }

    /// `[sx, sy, ex, ey, r, arcAngle]` per capsule
    pub fn capsule_buffer(&self) -> Vec<f64> {
        self.core.capsule_buffer().to_vec()
    }

    // Zero-copy views: JS wraps `ptr`/`len` in a Float64Array over wasm
    // memory. Valid until the next call that mutates the world.

    pub fn ball_buffer_ptr(&self) -> *const f64 {
        self.core.ball_buffer().as_ptr()
    }

    pub fn ball_buffer_len(&self) -> usize {
        self.core.ball_buffer().len()
    }

    pub fn wall_buffer_ptr(&self) -> *const f64 {
        self.core.wall_buffer().as_ptr()
    }

    pub fn wall_buffer_len(&self) -> usize {
        self.core.wall_buffer().len()
    }

    pub fn capsule_buffer_ptr(&self) -> *const f64 {
        self.core.capsule_buffer().as_ptr()
    }

    pub fn capsule_buffer_len(&self) -> usize {
        self.core.capsule_buffer().len()
    }

    pub fn ball_color(&self, index: usize) -> Option<String> {
        self.core.ball(index).map(|b| b.color.clone())
    }

    pub fn wall_color(&self, index: usize) -> Option<String> {
        self.core.walls().get(index).map(|w| w.color.clone())
    }

    pub fn capsule_color(&self, index: usize) -> Option<String> {
        self.core.capsules().get(index).map(|c| c.color.clone())
    }

    /// Debug overlay values for one ball as JSON
    pub fn ball_debug_json(&self, index: usize) -> Option<String> {
        let ball = self.core.ball(index)?;
        serde_json::to_string(&ball.debug()).ok()
    }
}

impl World {
    /// Native access to the wrapped world
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
