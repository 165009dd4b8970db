/// View parameters: the mutable state shared between input handling and
/// the per-frame renderer

/// Degrees added to the Y rotation on each auto-rotate frame.
pub const AUTO_ROTATE_STEP_DEG: f64 = 2.0;

/// Rotation angles (degrees), uniform scale, and the auto-rotate flag.
///
/// Fields are stored exactly as set; no range validation happens here.
/// A negative scale mirrors the cube, angles outside [0, 360) render
/// as-is. Input adapters clamp where their controls do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
    pub scale: f64,
    pub auto_rotate: bool,
}

impl ViewParams {
    pub fn new() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_z: 0.0,
            scale: 1.0,
            auto_rotate: false,
        }
    }

    /// Restore the home view: all rotations 0, scale 1, auto-rotate off.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Flip auto-rotate, returning the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Advance the Y rotation by one auto-rotate step, wrapped into
    /// [0, 360). Does nothing while auto-rotate is off.
    pub fn step_auto_rotate(&mut self) {
        if self.auto_rotate {
            self.rotation_y = (self.rotation_y + AUTO_ROTATE_STEP_DEG).rem_euclid(360.0);
        }
    }

    /// Status summary of the current angles, rounded to whole degrees.
    pub fn rotation_display(&self) -> String {
        format!(
            "X: {}\u{b0} | Y: {}\u{b0} | Z: {}\u{b0}",
            self.rotation_x.round(),
            self.rotation_y.round(),
            self.rotation_z.round()
        )
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_rotate_step_wraps() {
        let mut params = ViewParams::new();
        params.auto_rotate = true;
        params.rotation_y = 359.0;
        params.step_auto_rotate();
        assert_eq!(params.rotation_y, 1.0);
    }

    #[test]
    fn test_step_is_inert_when_disabled() {
        let mut params = ViewParams::new();
        params.rotation_y = 42.0;
        params.step_auto_rotate();
        assert_eq!(params.rotation_y, 42.0);
    }

    #[test]
    fn test_reset_restores_home_view() {
        let mut params = ViewParams::new();
        params.rotation_x = 15.0;
        params.rotation_y = 270.0;
        params.rotation_z = 99.5;
        params.scale = 2.4;
        params.toggle_auto_rotate();
        params.reset();
        assert_eq!(params, ViewParams::new());
        assert!(!params.auto_rotate);
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut params = ViewParams::new();
        assert!(params.toggle_auto_rotate());
        assert!(!params.toggle_auto_rotate());
    }

    #[test]
    fn test_values_stored_unvalidated() {
        let mut params = ViewParams::new();
        params.rotation_x = -45.0;
        params.scale = -2.0;
        assert_eq!(params.rotation_x, -45.0);
        assert_eq!(params.scale, -2.0);
    }

    #[test]
    fn test_rotation_display_rounds() {
        let mut params = ViewParams::new();
        params.rotation_x = 10.4;
        params.rotation_y = 10.6;
        assert_eq!(params.rotation_display(), "X: 10° | Y: 11° | Z: 0°");
    }
}
