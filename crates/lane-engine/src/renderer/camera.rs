use glam::Vec2;

/// Axis-aligned view rectangle in world units. Y grows upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl ViewRect {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    /// Screen-space view: world units map 1:1 to screen pixels.
    pub fn identity(screen_width: f32, screen_height: f32) -> Self {
        Self::new(0.0, screen_width, 0.0, screen_height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.bottom + self.top) * 0.5)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.left, self.right, self.bottom, self.top]
    }
}

/// View rectangle that puts `target` at the screen center, scaled by `zoom`.
///
/// Each edge is `zoom * (target / zoom ± screen / 2)`, so the rectangle spans
/// `zoom * screen` units. `zoom > 1` shows more of the world.
pub fn compute_view(target: Vec2, zoom: f32, screen_width: f32, screen_height: f32) -> ViewRect {
    let half_w = screen_width / 2.0;
    let half_h = screen_height / 2.0;
    ViewRect {
        left: zoom * (target.x / zoom - half_w),
        right: zoom * (target.x / zoom + half_w),
        bottom: zoom * (target.y / zoom - half_h),
        top: zoom * (target.y / zoom + half_h),
    }
}

/// 2D camera. Derived state only: it observes a target each frame and never
/// feeds back into the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// World point mapped to the screen center.
    pub target: Vec2,
    /// Zoom factor, > 0.
    pub zoom: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Fixed cameras ignore `track` and always show the identity view.
    tracking: bool,
}

impl Camera2D {
    /// Camera that never moves: zoom 1 centered on the screen.
    pub fn fixed(screen_width: f32, screen_height: f32) -> Self {
        Self {
            target: Vec2::new(screen_width / 2.0, screen_height / 2.0),
            zoom: 1.0,
            screen_width,
            screen_height,
            tracking: false,
        }
    }

    /// Camera that follows whatever is passed to `track`.
    pub fn follow(screen_width: f32, screen_height: f32, zoom: f32) -> Self {
        Self {
            zoom,
            tracking: true,
            ..Self::fixed(screen_width, screen_height)
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Point the camera at `target`. No-op for a fixed camera.
    pub fn track(&mut self, target: Vec2) {
        if self.tracking {
            self.target = target;
        }
    }

    /// View used to draw the world.
    pub fn view(&self) -> ViewRect {
        compute_view(self.target, self.zoom, self.screen_width, self.screen_height)
    }

    /// View used to draw screen-space overlays.
    pub fn overlay_view(&self) -> ViewRect {
        ViewRect::identity(self.screen_width, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-2;

    #[test]
    fn unit_zoom_at_screen_center_is_identity() {
        let view = compute_view(Vec2::new(500.0, 400.0), 1.0, 1000.0, 800.0);
        assert_eq!(view, ViewRect::identity(1000.0, 800.0));
    }

    #[test]
    fn zoomed_view_left_edge_follows_formula() {
        let zoom = 1.2;
        let p = Vec2::new(400.0, 300.0);
        let view = compute_view(p, zoom, 1000.0, 800.0);
        let expected_left = zoom * (p.x / zoom - 1000.0 / 2.0);
        assert!((view.left - expected_left).abs() < EPS);
        assert!((view.left - -200.0).abs() < EPS);
    }

    #[test]
    fn view_is_centered_on_target_and_scaled() {
        let p = Vec2::new(650.0, 1234.0);
        let view = compute_view(p, 1.2, 1000.0, 800.0);
        assert!((view.center() - p).length() < EPS);
        assert!((view.width() - 1200.0).abs() < EPS);
        assert!((view.height() - 960.0).abs() < EPS);
    }

    #[test]
    fn fixed_camera_ignores_tracking() {
        let mut cam = Camera2D::fixed(1000.0, 800.0);
        cam.track(Vec2::new(650.0, 5000.0));
        assert!(!cam.is_tracking());
        assert_eq!(cam.view(), ViewRect::identity(1000.0, 800.0));
    }

    #[test]
    fn follow_camera_tracks_every_call() {
        let mut cam = Camera2D::follow(1000.0, 800.0, 1.2);
        cam.track(Vec2::new(400.0, 300.0));
        assert!((cam.view().center() - Vec2::new(400.0, 300.0)).length() < EPS);
        cam.track(Vec2::new(400.0, 900.0));
        assert!((cam.view().center() - Vec2::new(400.0, 900.0)).length() < EPS);
        assert_eq!(cam.overlay_view(), ViewRect::identity(1000.0, 800.0));
    }
}
