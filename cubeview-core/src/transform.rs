/// Euler rotation of cube vertices, applied axis by axis
use nalgebra::Point3;

/// Rotation angles about the three axes, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    fn to_radians(self) -> (f64, f64, f64) {
        (
            self.x.to_radians(),
            self.y.to_radians(),
            self.z.to_radians(),
        )
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotate a point about X, then Y, then Z.
///
/// The steps chain: the Y rotation consumes the z produced by the X
/// rotation, and the Z rotation consumes the x and y produced by the
/// earlier steps. Reordering the axes gives a different orientation.
pub fn rotate_xyz(p: &Point3<f64>, rot: &Rotation) -> Point3<f64> {
    let (rx, ry, rz) = rot.to_radians();
    let (sin_x, cos_x) = rx.sin_cos();
    let (sin_y, cos_y) = ry.sin_cos();
    let (sin_z, cos_z) = rz.sin_cos();

    // About X: y and z move, x holds.
    let y1 = p.y * cos_x - p.z * sin_x;
    let z1 = p.y * sin_x + p.z * cos_x;

    // About Y: x and the rotated z move.
    let x2 = p.x * cos_y + z1 * sin_y;
    let z2 = -p.x * sin_y + z1 * cos_y;

    // About Z: the rotated x and y move, depth holds.
    let x3 = x2 * cos_z - y1 * sin_z;
    let y3 = x2 * sin_z + y1 * cos_z;

    Point3::new(x3, y3, z2)
}
