//! Surface geometry tracker
//! Keeps width, height and the half-diagonal consistent with the canvas rect

use log::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    pub width: f32,
    pub height: f32,
    /// Distance from the center to a corner; the fade normalization range
    pub max_distance: f32,
}

impl SurfaceGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            max_distance: half_diagonal(width, height),
        }
    }

    /// Called every frame with the current canvas size; recomputes only on
    /// an actual change so a stable surface costs nothing.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.max_distance = half_diagonal(width, height);
        debug!("surface resized to {:.0}x{:.0}", width, height);
    }

    pub fn center(&self) -> egui::Vec2 {
        egui::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

fn half_diagonal(width: f32, height: f32) -> f32 {
    ((width / 2.0).powi(2) + (height / 2.0).powi(2)).sqrt()
}
