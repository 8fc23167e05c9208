use serde::{Deserialize, Serialize};

use crate::core::math::{Matrix, Vector};

use super::input::InputState;

/// Fraction of rotation speed a wall keeps from one tick to the next
pub const WALL_ANGULAR_DAMPING: f64 = 0.99;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallConfig {
    pub start: Vector,
    pub end: Vector,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub is_player: bool,
    #[serde(default)]
    pub rotation_speed: f64,
}

fn default_color() -> String { "white".to_string() }

impl WallConfig {
    pub fn new(start: Vector, end: Vector) -> Self {
        Self {
            start,
            end,
            color: default_color(),
            is_player: false,
            rotation_speed: 0.0,
        }
    }
}

/// Line segment obstacle, fixed or spinning about its midpoint
///
/// The reference frame captured at construction (`initial_*`, `center`,
/// `length`) never changes; the current endpoints are re-derived from it
/// and `angle`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub start_position: Vector,
    pub end_position: Vector,

    // === Frozen Frame ===
    pub center: Vector,
    pub length: f64,
    pub initial_start: Vector,
    pub initial_end: Vector,
    pub initial_unit: Vector,

    // === Rotation ===
    /// Radians turned away from the initial frame
    pub angle: f64,
    /// Radians per tick
    pub rotation_speed: f64,

    pub color: String,
    pub is_player: bool,
}

impl Wall {
    pub fn new(start: Vector, end: Vector) -> Self {
        Self::from_config(&WallConfig::new(start, end))
    }

    pub fn from_config(config: &WallConfig) -> Self {
        let start = config.start;
        let end = config.end;
        Self {
            start_position: start,
            end_position: end,
            center: start.add(end).divide(2.0),
            length: start.distance(end),
            initial_start: start,
            initial_end: end,
            initial_unit: end.subtract(start).unit(),
            angle: 0.0,
            rotation_speed: config.rotation_speed,
            color: config.color.clone(),
            is_player: config.is_player,
        }
    }

    /// Direction from start to end
    pub fn unit(&self) -> Vector {
        self.end_position.subtract(self.start_position).unit()
    }

    pub fn apply_input(&mut self, input: &InputState) {
        self.rotation_speed += input.rotation_delta();
    }

    /// Advance the rotation one tick, then rebuild the endpoints
    pub fn reposition(&mut self) {
        self.angle += self.rotation_speed;
        self.rotation_speed *= WALL_ANGULAR_DAMPING;
        self.update_geometry();
    }

    /// Re-derive the endpoints from `center`, `initial_unit` and `angle`
    pub fn update_geometry(&mut self) {
        let direction = Matrix::rotation(self.angle).multiply_vector(self.initial_unit);
        let half = direction.multiply(self.length / 2.0);
        self.start_position = self.center.subtract(half);
        self.end_position = self.center.add(half);
    }

    /// Nearest point of the segment to `point`
    ///
    /// Points behind the start clamp to the start, points past the end clamp
    /// to the end, anything in between projects onto the segment.
    pub fn closest_point(&self, point: Vector) -> Vector {
        let unit = self.unit();

        let point_to_start = self.start_position.subtract(point);
        if unit.dot(point_to_start) > 0.0 {
            return self.start_position;
        }

        let end_to_point = point.subtract(self.end_position);
        if unit.dot(end_to_point) > 0.0 {
            return self.end_position;
        }

        let along = unit.dot(point_to_start);
        self.start_position.subtract(unit.multiply(along))
    }
}
