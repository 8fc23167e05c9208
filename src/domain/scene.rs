//! Scene description loaded from JSON
//!
//! ```json
//! {
//!   "gravity": { "x": 0, "y": 0.01 },
//!   "balls":    [{ "position": { "x": 100, "y": 100 }, "r": 20, "isPlayer": true }],
//!   "walls":    [{ "start": { "x": 0, "y": 400 }, "end": { "x": 600, "y": 400 } }],
//!   "capsules": [{ "start": { "x": 200, "y": 200 }, "end": { "x": 260, "y": 200 }, "r": 15 }]
//! }
//! ```
//!
//! Every section is optional. Body fields left out take the same defaults as
//! the `*Config::new` constructors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::math::Vector;

use super::ball::BallConfig;
use super::capsule::CapsuleConfig;
use super::wall::WallConfig;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} #{index} is invalid: {reason}")]
    InvalidBody {
        kind: &'static str,
        index: usize,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    #[serde(default)]
    pub gravity: Vector,
    #[serde(default)]
    pub balls: Vec<BallConfig>,
    #[serde(default)]
    pub walls: Vec<WallConfig>,
    #[serde(default)]
    pub capsules: Vec<CapsuleConfig>,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: SceneConfig = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject bodies the physics can't represent (NaN/inf coordinates,
    /// zero-length segments). Radii and masses are normalized, not rejected.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, ball) in self.balls.iter().enumerate() {
            if !is_finite(ball.position) || !is_finite(ball.velocity) {
                return Err(invalid("ball", index, "position and velocity must be finite"));
            }
        }

        for (index, wall) in self.walls.iter().enumerate() {
            check_segment("wall", index, wall.start, wall.end)?;
        }

        for (index, capsule) in self.capsules.iter().enumerate() {
            check_segment("capsule", index, capsule.start, capsule.end)?;
            if !capsule.r.is_finite() {
                return Err(invalid("capsule", index, "radius must be finite"));
            }
        }

        Ok(())
    }
}

fn check_segment(kind: &'static str, index: usize, start: Vector, end: Vector) -> Result<(), SceneError> {
    if !is_finite(start) || !is_finite(end) {
        return Err(invalid(kind, index, "endpoints must be finite"));
    }
    if start == end {
        return Err(invalid(kind, index, "start and end coincide"));
    }
    Ok(())
}

fn is_finite(v: Vector) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

fn invalid(kind: &'static str, index: usize, reason: &'static str) -> SceneError {
    SceneError::InvalidBody { kind, index, reason }
}
