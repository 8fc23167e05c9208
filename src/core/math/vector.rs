use serde::{Deserialize, Serialize};

/// 2D Vector for positions, velocities and directions
///
/// Every arithmetic operation returns a new vector. `set` and `limit` are the
/// only methods that mutate in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Rebind both components at once
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn add(&self, other: Vector) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }

    pub fn subtract(&self, other: Vector) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    pub fn multiply(&self, scalar: f64) -> Self {
        Self { x: self.x * scalar, y: self.y * scalar }
    }

    pub fn divide(&self, scalar: f64) -> Self {
        Self { x: self.x / scalar, y: self.y / scalar }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: Vector) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Unit vector in the same direction. The zero vector is returned as is.
    pub fn unit(&self) -> Self {
        let len = self.magnitude();
        if len == 0.0 {
            return *self;
        }
        self.divide(len)
    }

    /// Same as [`Vector::unit`]
    pub fn normalize(&self) -> Self {
        self.unit()
    }

    /// Rescale to length `magnitude`. The zero vector is returned as is.
    pub fn set_magnitude(&self, magnitude: f64) -> Self {
        let len = self.magnitude();
        if len == 0.0 {
            return *self;
        }
        self.multiply(magnitude / len)
    }

    /// Clamp the length to `max` in place
    pub fn limit(&mut self, max: f64) -> &mut Self {
        if self.magnitude() > max {
            *self = self.set_magnitude(max);
        }
        self
    }

    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product of two vectors in the xy-plane
    pub fn cross(&self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}
