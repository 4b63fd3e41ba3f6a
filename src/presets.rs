//! Named parameter presets for the control panel

use crate::config::SpiralConfig;
use serde::{Deserialize, Serialize};

/// Available preset types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetType {
    /// Default single spiral, four arms
    Classic,
    /// Trail persistence with full eight-arm symmetry
    Mandala,
    /// Two fast counter-rotating arms
    Pinwheel,
    /// Dense batches thinned by collision kill
    Swarm,
    /// Whatever the sliders currently say
    Custom,
}

impl Default for PresetType {
    fn default() -> Self {
        Self::Classic
    }
}

impl PresetType {
    pub fn all() -> Vec<PresetType> {
        vec![
            Self::Classic,
            Self::Mandala,
            Self::Pinwheel,
            Self::Swarm,
            Self::Custom,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Mandala => "Mandala",
            Self::Pinwheel => "Pinwheel",
            Self::Swarm => "Swarm",
            Self::Custom => "Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Classic => "One spiral per second, four arms",
            Self::Mandala => "Eight arms leaving persistent trails",
            Self::Pinwheel => "Two fast counter-rotating arms",
            Self::Swarm => "Dense batches thinned by collision kill",
            Self::Custom => "Whatever the sliders currently say",
        }
    }

    /// Overwrite the spiral settings with this preset. The paused flag is
    /// a playback control, not a look, and survives the switch.
    pub fn apply(&self, config: &mut SpiralConfig) {
        let paused = config.paused;
        *config = match self {
            Self::Classic => SpiralConfig::default(),
            Self::Mandala => SpiralConfig {
                color: [220, 180, 255],
                arm_count: 8,
                angular_speed: 0.02,
                linear_speed: 0.5,
                mandala: true,
                ..Default::default()
            },
            Self::Pinwheel => SpiralConfig {
                color: [120, 220, 255],
                arm_count: 2,
                angular_speed: 0.08,
                linear_speed: 2.0,
                radius: 4.0,
                interval_ms: 400,
                ..Default::default()
            },
            Self::Swarm => SpiralConfig {
                color: [255, 180, 80],
                circles_per_batch: 5,
                arm_count: 6,
                linear_speed: 1.5,
                interval_ms: 600,
                collide_kill: true,
                ..Default::default()
            },
            Self::Custom => return,
        };
        config.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_preserves_paused_flag() {
        let mut config = SpiralConfig {
            paused: true,
            ..Default::default()
        };
        PresetType::Mandala.apply(&mut config);
        assert!(config.paused);
        assert!(config.mandala);
        assert_eq!(config.arm_count, 8);
    }

    #[test]
    fn test_custom_is_a_no_op() {
        let mut config = SpiralConfig {
            arm_count: 7,
            linear_speed: 3.5,
            ..Default::default()
        };
        let before = config.clone();
        PresetType::Custom.apply(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn test_every_preset_yields_sane_config() {
        for preset in PresetType::all() {
            let mut config = SpiralConfig::default();
            preset.apply(&mut config);
            let before = config.clone();
            config.sanitize();
            assert_eq!(config, before, "{} preset needed sanitizing", preset.name());
        }
    }
}
