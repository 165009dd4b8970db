/// Cubeview Core Library - Shared cube geometry and projection logic
///
/// This library provides the stateless core for the cube viewer: the
/// fixed vertex and edge tables, Euler rotation, weak perspective
/// projection, and the view-parameter state shared by the terminal and
/// web front ends.

pub mod geometry;
pub mod projection;
pub mod transform;
pub mod view;

// Re-export commonly used types
pub use geometry::{cube_vertices, CUBE_EDGES, CUBE_HALF_EXTENT, CUBE_VERTEX_COUNT};
pub use projection::{project, project_cube, ProjectedPoint, FOCAL_LENGTH};
pub use transform::{rotate_xyz, Rotation};
pub use view::{ViewParams, AUTO_ROTATE_STEP_DEG};
