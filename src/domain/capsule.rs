use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::core::math::{Matrix, Vector};

use super::input::InputState;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapsuleConfig {
    pub start: Vector,
    pub end: Vector,
    pub r: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub is_player: bool,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_friction")]
    pub friction: f64,
}

fn default_color() -> String { "royalblue".to_string() }
fn default_speed() -> f64 { 0.1 }
fn default_friction() -> f64 { 0.05 }

impl CapsuleConfig {
    pub fn new(start: Vector, end: Vector, r: f64) -> Self {
        Self {
            start,
            end,
            r,
            color: default_color(),
            is_player: false,
            speed: default_speed(),
            friction: default_friction(),
        }
    }
}

/// Stadium shape: a segment of fixed `length` swept by a circle of radius `r`
///
/// Translates like a ball and rotates like a wall. The endpoints are always
/// derived from `position`, `direction` and `length`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capsule {
    pub start_position: Vector,
    pub end_position: Vector,
    /// Cap radius (half-width)
    pub r: f64,
    /// Segment midpoint
    pub position: Vector,
    pub length: f64,
    pub direction: Vector,

    // === Translation ===
    pub velocity: Vector,
    pub acceleration: Vector,
    pub speed: f64,
    /// Damps both velocity and rotation speed
    pub friction: f64,

    // === Rotation ===
    pub angle: f64,
    pub rotation_speed: f64,
    pub initial_direction: Vector,
    /// Signed angle of `initial_direction` from the x-axis. Only used to
    /// orient the cap arcs when drawing.
    pub initial_angle: f64,

    pub color: String,
    pub is_player: bool,
}

impl Capsule {
    pub fn new(start: Vector, end: Vector, r: f64) -> Self {
        Self::from_config(&CapsuleConfig::new(start, end, r))
    }

    pub fn from_config(config: &CapsuleConfig) -> Self {
        let start = config.start;
        let end = config.end;
        let initial_direction = end.subtract(start).unit();

        let x_axis = Vector::new(1.0, 0.0);
        // clamp keeps acos defined when rounding pushes the dot past 1
        let mut initial_angle = initial_direction.dot(x_axis).clamp(-1.0, 1.0).acos();
        if initial_direction.cross(x_axis) > 0.0 {
            initial_angle = -initial_angle;
        }

        Self {
            start_position: start,
            end_position: end,
            r: config.r,
            position: start.add(end).divide(2.0),
            length: start.distance(end),
            direction: initial_direction,
            velocity: Vector::zero(),
            acceleration: Vector::zero(),
            speed: config.speed,
            friction: config.friction,
            angle: 0.0,
            rotation_speed: 0.0,
            initial_direction,
            initial_angle,
            color: config.color.clone(),
            is_player: config.is_player,
        }
    }

    pub fn apply_input(&mut self, input: &InputState) {
        self.acceleration = input.acceleration_for(self.position, self.speed);
        self.rotation_speed += input.rotation_delta();
    }

    /// Advance translation and rotation one tick, then rebuild the endpoints
    pub fn reposition(&mut self) {
        self.acceleration = self.acceleration.unit().multiply(self.speed);
        self.velocity = self.velocity.add(self.acceleration);
        self.velocity = self.velocity.multiply(1.0 - self.friction);
        self.position = self.position.add(self.velocity);

        self.angle += self.rotation_speed;
        self.rotation_speed *= 1.0 - self.friction;

        self.update_geometry();
    }

    /// Re-derive `direction` and the endpoints from the current pose
    pub fn update_geometry(&mut self) {
        self.direction = Matrix::rotation(self.angle).multiply_vector(self.initial_direction);
        let half = self.direction.multiply(self.length / 2.0);
        self.start_position = self.position.subtract(half);
        self.end_position = self.position.add(half);
    }

    /// Orientation the cap arcs are drawn relative to
    pub fn arc_angle(&self) -> f64 {
        self.initial_angle + self.angle
    }

    /// `(from, to)` angles of the half circle around the start point
    pub fn start_arc(&self) -> (f64, f64) {
        let a = self.arc_angle();
        (a + FRAC_PI_2, a + 3.0 * PI / 2.0)
    }

    /// `(from, to)` angles of the half circle around the end point
    pub fn end_arc(&self) -> (f64, f64) {
        let a = self.arc_angle();
        (a - FRAC_PI_2, a + FRAC_PI_2)
    }
}
