//! Spiral engine for Spiral Studio RS
//! Owns the live spiral collection; advances, prunes and draws it every frame

use crate::config::SpiralConfig;
use crate::geometry::SurfaceGeometry;
use egui::{Color32, Painter, Rect, Vec2};
use rayon::prelude::*;

/// One traveling point: a single arm of a spawned spiral group
#[derive(Clone, Debug)]
pub struct Spiral {
    /// Canvas-local position, derived from polar state each frame
    pub pos: Vec2,
    /// Radians, advanced by `angular_speed` per frame; unbounded
    pub angle: f32,
    /// Radial distance from center; non-decreasing while `speed >= 0`
    pub distance: f32,
    /// Signed angular step, fixed at creation (arm parity supplies the sign)
    pub angular_speed: f32,
    /// Radial step per frame, fixed at creation
    pub speed: f32,
    /// Draw radius snapshotted at spawn; only the bounds pass reads it
    pub spawn_radius: f32,
    pub reflect_x: bool,
    pub reflect_y: bool,
    /// Distance-based intensity, recomputed each frame. Computed but never
    /// applied to the fill color; the fill stays the flat configured color.
    #[allow(dead_code)]
    pub fade: f32,
}

impl Default for Spiral {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            angle: 0.0,
            distance: 0.0,
            angular_speed: 0.0,
            speed: 0.0,
            spawn_radius: 7.0,
            reflect_x: false,
            reflect_y: false,
            fade: 0.0,
        }
    }
}

/// A disk retained on the surface while mandala mode is on. An immediate-mode
/// painter repaints from scratch each frame, so "skip the clear" is modeled
/// by replaying retained stamps.
#[derive(Clone, Copy)]
pub struct Stamp {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color32,
}

/// Engine managing all live spirals
pub struct SpiralEngine {
    pub spirals: Vec<Spiral>,
    /// Reused each collision pass, sized to the live count
    removal_flags: Vec<bool>,
    stamps: Vec<Stamp>,
}

impl SpiralEngine {
    pub fn new() -> Self {
        Self {
            spirals: Vec::with_capacity(1024),
            removal_flags: Vec::new(),
            stamps: Vec::new(),
        }
    }

    /// Advance one frame: collision pass, then the position pass over the
    /// survivors. Drawing happens in [`Self::render`], the bounds prune in
    /// [`Self::prune_out_of_bounds`] after drawing. Skips entirely while
    /// paused.
    pub fn update(&mut self, config: &SpiralConfig, geometry: &SurfaceGeometry) {
        if config.paused {
            return;
        }

        if !config.mandala {
            self.stamps.clear();
        }

        if config.collide_kill {
            self.collision_pass(config);
        }

        let center = geometry.center();
        let max_distance = geometry.max_distance;

        self.spirals.par_iter_mut().for_each(|s| {
            s.angle += s.angular_speed;
            s.distance += s.speed;

            let mut offset = Vec2::new(s.distance * s.angle.cos(), s.distance * s.angle.sin());
            if s.reflect_x {
                offset.x = -offset.x;
            }
            if s.reflect_y {
                offset.y = -offset.y;
            }
            s.pos = center + offset;

            s.fade = if max_distance > 0.0 {
                (s.distance / max_distance * 255.0).clamp(0.0, 255.0)
            } else {
                0.0
            };
        });

        if config.mandala {
            let color = config.color32();
            let radius = config.radius;
            self.stamps.extend(self.spirals.iter().map(|s| Stamp {
                pos: s.pos,
                radius,
                color,
            }));
        }
    }

    /// All-pairs overlap check on the positions of the previous frame. Every
    /// spiral in any colliding pair is removed before the position pass, so
    /// collided spirals are not drawn this frame.
    fn collision_pass(&mut self, config: &SpiralConfig) {
        let n = self.spirals.len();
        let mut flags = std::mem::take(&mut self.removal_flags);
        flags.clear();
        flags.resize(n, false);

        // Draw radius is shared config, so the kill distance is twice it.
        let kill_distance = config.radius * 2.0;
        let kill_sq = kill_distance * kill_distance;

        for i in 0..n {
            for j in (i + 1)..n {
                let delta = self.spirals[i].pos - self.spirals[j].pos;
                if delta.length_sq() < kill_sq {
                    flags[i] = true;
                    flags[j] = true;
                }
            }
        }

        let mut idx = 0;
        self.spirals.retain(|_| {
            let keep = !flags[idx];
            idx += 1;
            keep
        });

        self.removal_flags = flags;
    }

    /// Remove spirals whose bounding box, inflated by the radius snapshotted
    /// at spawn, no longer intersects the surface rectangle.
    pub fn prune_out_of_bounds(&mut self, geometry: &SurfaceGeometry) {
        let width = geometry.width;
        let height = geometry.height;
        self.spirals.retain(|s| {
            s.pos.x + s.spawn_radius >= 0.0
                && s.pos.x - s.spawn_radius <= width
                && s.pos.y + s.spawn_radius >= 0.0
                && s.pos.y - s.spawn_radius <= height
        });
    }

    /// Replay retained mandala stamps, then draw every live spiral as a
    /// filled disk with the current shared radius and color.
    pub fn render(&self, painter: &Painter, rect: Rect, config: &SpiralConfig) {
        for stamp in &self.stamps {
            painter.circle_filled(rect.min + stamp.pos, stamp.radius, stamp.color);
        }

        let color = config.color32();
        for s in &self.spirals {
            painter.circle_filled(rect.min + s.pos, config.radius, color);
        }
    }

    /// Full clear: live spirals and any accumulated mandala stamps
    pub fn reset(&mut self) {
        self.spirals.clear();
        self.stamps.clear();
    }

    #[allow(dead_code)]
    pub fn stamp_count(&self) -> usize {
        self.stamps.len()
    }
}
