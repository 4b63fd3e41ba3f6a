//! Configuration system for Spiral Studio RS
//! Shared settings: written by the control panel, read by the spawner and engine

use serde::{Deserialize, Serialize};

// ============================================================================
// Spiral Configuration
// ============================================================================

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct SpiralConfig {
    /// Flat fill color for every drawn disk
    pub color: [u8; 3],
    /// Particles created per spawn batch
    pub circles_per_batch: usize,
    /// Shared draw radius, read at draw time
    pub radius: f32,
    /// Angular step magnitude per frame (radians); arm parity applies the sign
    pub angular_speed: f32,
    /// Multiplier on the per-particle random radial speed
    pub linear_speed: f32,
    /// Spawn cadence; takes effect on reset, like rescheduling a timer
    pub interval_ms: u64,
    /// Arms per spawned particle. The reflection table covers indices 0-7;
    /// higher arms repeat the parity rule with no reflection.
    pub arm_count: usize,
    /// Overlapping spirals mutually annihilate
    pub collide_kill: bool,
    /// Trail persistence: drawn disks accumulate instead of being cleared
    pub mandala: bool,
    pub paused: bool,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            color: [255, 255, 255],
            circles_per_batch: 1,
            radius: 7.0,
            angular_speed: 0.01,
            linear_speed: 1.0,
            interval_ms: 1000,
            arm_count: 4,
            collide_kill: false,
            mandala: false,
            paused: false,
        }
    }
}

impl SpiralConfig {
    pub fn color32(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.color[0], self.color[1], self.color[2])
    }

    /// Clamp values the loops cannot tolerate. The panel sliders already
    /// enforce these ranges; hand-edited config files may not.
    pub fn sanitize(&mut self) {
        if self.circles_per_batch == 0 {
            self.circles_per_batch = 1;
        }
        if !(self.radius >= 1.0) {
            self.radius = 1.0;
        }
        if self.interval_ms == 0 {
            self.interval_ms = 1;
        }
        if self.arm_count == 0 {
            self.arm_count = 1;
        }
        if !self.linear_speed.is_finite() || self.linear_speed < 0.0 {
            self.linear_speed = 0.0;
        }
        if !self.angular_speed.is_finite() {
            self.angular_speed = 0.0;
        }
    }
}

// ============================================================================
// Main App Configuration
// ============================================================================

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub spirals: SpiralConfig,
    #[serde(default)]
    pub background: [u8; 3],
}

impl AppConfig {
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&json)?;
        config.spirals.sanitize();
        Ok(config)
    }

    pub fn background32(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.background[0], self.background[1], self.background[2])
    }
}
