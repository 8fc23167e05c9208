use serde::{Deserialize, Serialize};

use crate::core::math::Vector;

/// Rotation speed change per tick while a rotate key is held
pub const ROTATION_INPUT_STEP: f64 = 0.001;

/// Snapshot of the player controls for one tick
///
/// The host fills this from whatever devices it listens to (keyboard,
/// mouse) and hands it to the player bodies before they reposition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Pointer position, set only while mouse control is on
    pub pointer: Option<Vector>,
}

impl InputState {
    /// Thrust direction from the movement keys, each axis in {-1, 0, 1}.
    /// Down wins over up and right wins over left when both are held.
    pub fn thrust_axes(&self) -> Vector {
        Vector::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    /// Rotation speed delta for this tick
    pub fn rotation_delta(&self) -> f64 {
        let mut delta = 0.0;
        if self.rotate_left {
            delta -= ROTATION_INPUT_STEP;
        }
        if self.rotate_right {
            delta += ROTATION_INPUT_STEP;
        }
        delta
    }

    /// Acceleration a body at `position` with thrust `speed` should take.
    /// The pointer, when present, overrides the keys.
    pub fn acceleration_for(&self, position: Vector, speed: f64) -> Vector {
        match self.pointer {
            Some(pointer) => pointer.subtract(position).normalize(),
            None => self.thrust_axes().multiply(speed),
        }
    }
}

fn axis(negative: bool, positive: bool) -> f64 {
    if positive {
        1.0
    } else if negative {
        -1.0
    } else {
        0.0
    }
}
