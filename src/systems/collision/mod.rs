//! Ball collisions against other balls and walls
//!
//! Everything a ball can hit implements [`CollisionTarget`], so detection and
//! both resolution passes are written once. A collision is handled in three
//! steps, all sharing one [`Contact`] computed up front:
//! 1. detect (`is_colliding` / `detect`)
//! 2. push the bodies apart (`resolve_penetration`)
//! 3. exchange velocity along the normal (`resolve_collision`)
//!
//! No broad phase: the host checks every pair.

mod detection;
mod resolution;

pub use detection::{detect, find_closest_point, is_colliding};
pub use resolution::{
    apply_collision, apply_penetration, collide, resolve_collision, resolve_penetration,
};

use crate::core::math::Vector;
use crate::domain::{Ball, Wall};

/// How an exact touch (distance == combined reach) is classified
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlap {
    /// Touching is not colliding (ball vs ball)
    Strict,
    /// Touching counts as colliding (ball vs wall)
    Inclusive,
}

/// Something a ball can collide with
pub trait CollisionTarget {
    /// Point of this body's core (center or segment) nearest to `point`
    fn closest_point(&self, point: Vector) -> Vector;

    /// Extra distance around the core that still counts as solid
    fn reach(&self) -> f64;

    fn overlap(&self) -> Overlap;

    fn velocity(&self) -> Vector;

    fn inverse_mass(&self) -> f64;

    /// `None` leaves the ball's own elasticity in charge
    fn elasticity(&self) -> Option<f64>;

    /// Static targets never move and take none of the correction, whatever
    /// the ball's mass.
    fn is_static(&self) -> bool;

    fn shift(&mut self, offset: Vector);

    fn add_velocity(&mut self, delta: Vector);
}

/// Geometry of one ball/target pair, measured before any resolution
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub closest_point: Vector,
    /// Unit vector from the closest point toward the ball center.
    /// Zero when the two coincide.
    pub normal: Vector,
    /// Center distance between ball and closest point
    pub distance: f64,
    /// Overlap length; negative when apart
    pub depth: f64,
}

impl Contact {
    pub fn between<T: CollisionTarget + ?Sized>(ball: &Ball, target: &T) -> Self {
        let closest_point = target.closest_point(ball.position);
        let offset = ball.position.subtract(closest_point);
        let distance = offset.magnitude();
        Self {
            closest_point,
            normal: offset.unit(),
            distance,
            depth: ball.radius + target.reach() - distance,
        }
    }
}

impl CollisionTarget for Ball {
    fn closest_point(&self, _point: Vector) -> Vector {
        self.position
    }

    fn reach(&self) -> f64 {
        self.radius
    }

    fn overlap(&self) -> Overlap {
        Overlap::Strict
    }

    fn velocity(&self) -> Vector {
        self.velocity
    }

    fn inverse_mass(&self) -> f64 {
        Ball::inverse_mass(self)
    }

    fn elasticity(&self) -> Option<f64> {
        Some(self.elasticity)
    }

    fn is_static(&self) -> bool {
        false
    }

    fn shift(&mut self, offset: Vector) {
        self.position = self.position.add(offset);
    }

    fn add_velocity(&mut self, delta: Vector) {
        self.velocity = self.velocity.add(delta);
    }
}

impl CollisionTarget for Wall {
    fn closest_point(&self, point: Vector) -> Vector {
        Wall::closest_point(self, point)
    }

    fn reach(&self) -> f64 {
        0.0
    }

    fn overlap(&self) -> Overlap {
        Overlap::Inclusive
    }

    /// Spinning walls still push as if at rest
    fn velocity(&self) -> Vector {
        Vector::zero()
    }

    fn inverse_mass(&self) -> f64 {
        0.0
    }

    fn elasticity(&self) -> Option<f64> {
        None
    }

    fn is_static(&self) -> bool {
        true
    }

    fn shift(&mut self, _offset: Vector) {}

    fn add_velocity(&mut self, _delta: Vector) {}
}
