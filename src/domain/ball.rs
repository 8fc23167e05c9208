use serde::{Deserialize, Serialize};

use crate::core::math::Vector;

use super::input::InputState;

/// Smallest radius a ball can have; smaller requests are raised to this
pub const MIN_BALL_RADIUS: f64 = 10.0;

/// Downward pull per tick used by the gravity-enabled sandbox
pub const STANDARD_GRAVITY: f64 = 0.01;

/// Construction parameters for a [`Ball`]. Omitted fields take the sandbox defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallConfig {
    pub position: Vector,
    pub r: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub is_player: bool,
    #[serde(default)]
    pub velocity: Vector,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_friction")]
    pub friction: f64,
    #[serde(default = "default_elasticity")]
    pub elasticity: f64,
}

fn default_mass() -> f64 { 1.0 }
fn default_color() -> String { "red".to_string() }
fn default_speed() -> f64 { 0.05 }
fn default_friction() -> f64 { 0.01 }
fn default_elasticity() -> f64 { 1.0 }

impl BallConfig {
    pub fn new(position: Vector, r: f64) -> Self {
        Self {
            position,
            r,
            mass: default_mass(),
            color: default_color(),
            is_player: false,
            velocity: Vector::zero(),
            speed: default_speed(),
            friction: default_friction(),
            elasticity: default_elasticity(),
        }
    }
}

/// Circular dynamic body (point mass, no spin)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ball {
    // === Physics State ===
    pub position: Vector,
    /// Pixels per tick
    pub velocity: Vector,
    /// Thrust for the next tick. Only its direction matters, `reposition`
    /// rescales it to `speed`.
    pub acceleration: Vector,

    // === Shape & Material ===
    /// Never below [`MIN_BALL_RADIUS`]
    pub radius: f64,
    /// 0 means immovable in collisions
    pub mass: f64,
    /// Thrust magnitude
    pub speed: f64,
    /// Per-tick velocity damping factor (0 = none)
    pub friction: f64,
    /// Restitution (0 = fully inelastic, 1 = perfectly elastic)
    pub elasticity: f64,

    // === Presentation ===
    pub color: String,
    /// Driven by player input; physics ignores it
    pub is_player: bool,
}

/// Values a debug overlay draws next to a ball
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BallDebug {
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
    pub mass: f64,
    pub elasticity: f64,
}

impl Ball {
    /// Ball with default material at `position`
    pub fn new(position: Vector, r: f64) -> Self {
        Self::from_config(&BallConfig::new(position, r))
    }

    pub fn from_config(config: &BallConfig) -> Self {
        Self {
            position: config.position,
            velocity: config.velocity,
            acceleration: Vector::zero(),
            radius: clamp_radius(config.r),
            mass: config.mass,
            speed: config.speed,
            friction: config.friction,
            elasticity: config.elasticity,
            color: config.color.clone(),
            is_player: config.is_player,
        }
    }

    /// `1 / mass`, or 0 for a massless (immovable) ball
    #[inline]
    pub fn inverse_mass(&self) -> f64 {
        if self.mass == 0.0 {
            return 0.0;
        }
        1.0 / self.mass
    }

    /// Change the radius, keeping the minimum
    pub fn set_radius(&mut self, r: f64) {
        self.radius = clamp_radius(r);
    }

    /// Point the thrust from this tick's input snapshot
    pub fn apply_input(&mut self, input: &InputState) {
        self.acceleration = input.acceleration_for(self.position, self.speed);
    }

    /// Advance one tick (semi-implicit Euler).
    ///
    /// Thrust is rescaled to `speed`, `gravity` is added to it as a single
    /// combined acceleration, then friction damps the velocity before the
    /// position moves. Pass [`Vector::zero`] for a gravity-free world.
    pub fn reposition(&mut self, gravity: Vector) {
        self.acceleration = self.acceleration.set_magnitude(1.0).multiply(self.speed);
        self.velocity = self.velocity.add(self.acceleration).add(gravity);
        self.velocity = self.velocity.multiply(1.0 - self.friction);
        self.position = self.position.add(self.velocity);
    }

    pub fn debug(&self) -> BallDebug {
        BallDebug {
            position: self.position,
            velocity: self.velocity,
            acceleration: self.acceleration,
            mass: self.mass,
            elasticity: self.elasticity,
        }
    }
}

fn clamp_radius(r: f64) -> f64 {
    // NaN falls through to the minimum as well
    if r >= MIN_BALL_RADIUS { r } else { MIN_BALL_RADIUS }
}
