//! Ballpit Engine - 2D ball / wall / capsule physics in WASM
//!
//! Architecture:
//! - core/        - Vector & rotation Matrix, logging, RNG
//! - domain/      - Bodies (Ball, Wall, Capsule), input snapshot, scene config
//! - systems/     - Collision detection and impulse resolution
//! - simulation/  - Host loop orchestration and the JS facade

// Logging macro (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::collision;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Ballpit engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{Matrix, Vector};
pub use domain::{Ball, BallConfig, Capsule, CapsuleConfig, InputState, SceneConfig, SceneError, Wall, WallConfig};
pub use simulation::{PerfStats, World, WorldCore};
