use wasm_bindgen::prelude::*;

/// Timings and counters for the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) input_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) render_ms: f64,
    /// Pairs run through detection
    pub(super) pairs_checked: u32,
    /// Pairs that collided and were resolved
    pub(super) contacts: u32,
    pub(super) ball_count: u32,
    pub(super) wall_count: u32,
    pub(super) capsule_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn input_ms(&self) -> f64 { self.input_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn ball_count(&self) -> u32 { self.ball_count }
    #[wasm_bindgen(getter)]
    pub fn wall_count(&self) -> u32 { self.wall_count }
    #[wasm_bindgen(getter)]
    pub fn capsule_count(&self) -> u32 { self.capsule_count }
}
