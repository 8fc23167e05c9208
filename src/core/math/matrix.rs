use super::vector::Vector;

/// 2x2 matrix, row-major. Only built as a rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix {
    pub data: [[f64; 2]; 2],
}

impl Matrix {
    /// Counter-clockwise rotation by `angle` radians (clockwise on a y-down canvas)
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            data: [[cos, -sin], [sin, cos]],
        }
    }

    #[inline]
    pub fn multiply_vector(&self, v: Vector) -> Vector {
        Vector::new(
            self.data[0][0] * v.x + self.data[0][1] * v.y,
            self.data[1][0] * v.x + self.data[1][1] * v.y,
        )
    }
}
