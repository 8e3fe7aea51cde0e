use bevy::prelude::{Resource, Vec2, Vec3};
use bouncer_shared::{Rect, SurfaceSize};

use crate::constants::{PANEL_MIN_HEIGHT, PANEL_WIDTH};

/// Window layout: drawing surface at the top-left, control panel to its
/// right.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    pub surface: SurfaceSize,
    pub window: Vec2,
}

impl CanvasLayout {
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            window: Vec2::new(
                surface.width as f32 + PANEL_WIDTH,
                (surface.height as f32).max(PANEL_MIN_HEIGHT),
            ),
        }
    }

    /// Surface pixel coordinates (origin top-left, Y-down) to Bevy world
    /// coordinates (origin window center, Y-up).
    pub fn px_to_world(&self, px: f32, py: f32, z: f32) -> Vec3 {
        Vec3::new(px - self.window.x * 0.5, self.window.y * 0.5 - py, z)
    }

    /// World position of the center of a ball box.
    pub fn ball_translation(&self, rect: &Rect, z: f32) -> Vec3 {
        let (cx, cy) = rect.center();
        self.px_to_world(cx, cy, z)
    }

    /// World position of the center of the drawing surface.
    pub fn surface_center(&self, z: f32) -> Vec3 {
        self.px_to_world(
            self.surface.width as f32 * 0.5,
            self.surface.height as f32 * 0.5,
            z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CanvasLayout {
        CanvasLayout::new(SurfaceSize::new(720, 720))
    }

    #[test]
    fn default_surface_gives_original_window() {
        assert_eq!(layout().window, Vec2::new(1080.0, 720.0));
    }

    #[test]
    fn surface_corners_map_to_window_left_half() {
        let l = layout();
        assert_eq!(l.px_to_world(0.0, 0.0, 0.0), Vec3::new(-540.0, 360.0, 0.0));
        assert_eq!(l.px_to_world(720.0, 720.0, 0.0), Vec3::new(180.0, -360.0, 0.0));
        assert_eq!(l.surface_center(0.0), Vec3::new(-180.0, 0.0, 0.0));
    }

    #[test]
    fn ball_translation_uses_box_center() {
        let t = layout().ball_translation(&Rect::new(0, 0, 50, 50), 1.0);
        assert_eq!(t, Vec3::new(-515.0, 335.0, 1.0));
    }

    #[test]
    fn short_surface_keeps_panel_height() {
        let l = CanvasLayout::new(SurfaceSize::new(400, 300));
        assert_eq!(l.window, Vec2::new(760.0, PANEL_MIN_HEIGHT));
    }
}
