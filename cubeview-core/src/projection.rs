/// Weak perspective projection from rotated 3D vertices to 2D
use nalgebra::{Point2, Point3};

use crate::geometry::{cube_vertices, CUBE_VERTEX_COUNT};
use crate::transform::{rotate_xyz, Rotation};
use crate::view::ViewParams;

/// Distance from the eye to the projection plane.
pub const FOCAL_LENGTH: f64 = 300.0;

/// A projected vertex, centered on the origin. Adapters translate by
/// half the surface size when painting.
pub type ProjectedPoint = Point2<f64>;

/// Project a rotated point onto the viewing plane.
///
/// Every coordinate scales by the single depth factor 300 / (300 + z);
/// there is no per-axis divide. A point at z = -300 sits on the eye
/// plane and projects to an infinite coordinate; nothing clamps that.
pub fn project(p: &Point3<f64>, scale: f64) -> ProjectedPoint {
    let perspective = FOCAL_LENGTH / (FOCAL_LENGTH + p.z);
    Point2::new(p.x * perspective * scale, p.y * perspective * scale)
}

/// Run the whole per-frame pipeline: rotate each cube corner by the
/// current angles, then project with the current scale.
pub fn project_cube(params: &ViewParams) -> [ProjectedPoint; CUBE_VERTEX_COUNT] {
    let rotation = Rotation::new(params.rotation_x, params.rotation_y, params.rotation_z);
    cube_vertices().map(|v| project(&rotate_xyz(&v, &rotation), params.scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::cube_vertices;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_unrotated_projection_matches_closed_form() {
        let params = ViewParams::new();
        let projected = project_cube(&params);
        for (corner, point) in cube_vertices().iter().zip(projected.iter()) {
            let w = FOCAL_LENGTH / (FOCAL_LENGTH + corner.z);
            assert!((point.x - corner.x * w).abs() < EPS);
            assert!((point.y - corner.y * w).abs() < EPS);
        }
    }

    #[test]
    fn test_projection_is_scale_linear() {
        let mut params = ViewParams::new();
        params.rotation_x = 30.0;
        params.rotation_y = 45.0;
        params.rotation_z = 60.0;
        let base = project_cube(&params);
        params.scale = 2.0;
        let doubled = project_cube(&params);
        for (a, b) in base.iter().zip(doubled.iter()) {
            assert!((b.x - 2.0 * a.x).abs() < EPS);
            assert!((b.y - 2.0 * a.y).abs() < EPS);
        }
    }

    #[test]
    fn test_full_turn_reproduces_projection() {
        let mut params = ViewParams::new();
        params.rotation_y = 360.0;
        let turned = project_cube(&params);
        let home = project_cube(&ViewParams::new());
        for (a, b) in turned.iter().zip(home.iter()) {
            assert!((a.x - b.x).abs() < 1e-9);
            assert!((a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nearer_face_projects_larger() {
        // Negative z is toward the eye, so its depth factor exceeds 1.
        let near = project(&Point3::new(80.0, 80.0, -80.0), 1.0);
        let far = project(&Point3::new(80.0, 80.0, 80.0), 1.0);
        assert!(near.x > far.x);
        assert!(near.y > far.y);
    }

    #[test]
    fn test_negative_scale_mirrors() {
        let p = project(&Point3::new(80.0, -80.0, 0.0), -1.0);
        let q = project(&Point3::new(80.0, -80.0, 0.0), 1.0);
        assert!((p.x + q.x).abs() < EPS);
        assert!((p.y + q.y).abs() < EPS);
    }
}
