//! Batch spawner: fixed-cadence creation of spiral arm groups

use crate::config::SpiralConfig;
use crate::geometry::SurfaceGeometry;
use crate::spirals::Spiral;
use rand::Rng;
use std::time::Duration;

/// Produces new spiral groups at the canvas center on a fixed cadence.
///
/// The period is snapshotted when the spawner is armed; editing the interval
/// in the configuration takes effect on the next [`Spawner::rearm`] (the
/// reset action), matching cancel-and-reschedule timer semantics.
pub struct Spawner {
    period: Duration,
    elapsed: Duration,
}

impl Spawner {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            period: Duration::from_millis(interval_ms.max(1)),
            elapsed: Duration::ZERO,
        }
    }

    /// Cancel-and-reschedule: snapshot the interval and restart the cadence.
    pub fn rearm(&mut self, interval_ms: u64) {
        self.period = Duration::from_millis(interval_ms.max(1));
        self.elapsed = Duration::ZERO;
    }

    #[allow(dead_code)]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance the timer by the frame delta; fires one batch per elapsed
    /// period. The timer keeps its cadence while paused, but elapsed periods
    /// produce no batch, so nothing accumulates unrendered.
    pub fn tick(
        &mut self,
        dt: Duration,
        config: &SpiralConfig,
        geometry: &SurfaceGeometry,
        spirals: &mut Vec<Spiral>,
        rng: &mut impl Rng,
    ) {
        self.elapsed += dt;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            if config.paused {
                continue;
            }
            spawn_batch(config, geometry, spirals, rng);
        }
    }
}

/// Append one batch: `circles_per_batch` particles, each fanned into
/// `arm_count` arms sharing one random radial speed.
pub fn spawn_batch(
    config: &SpiralConfig,
    geometry: &SurfaceGeometry,
    spirals: &mut Vec<Spiral>,
    rng: &mut impl Rng,
) {
    let center = geometry.center();
    for _ in 0..config.circles_per_batch {
        let speed =
            (rng.gen_range(1..=5) as f32 / rng.gen_range(1..=3) as f32) * config.linear_speed;
        for arm in 0..config.arm_count {
            spirals.push(spawn_arm(arm, speed, center, config));
        }
    }
}

/// Arm symmetry table: angular direction alternates by parity; arms 2-3 and
/// 6-7 reflect across the Y axis, arms 4-7 across the X axis. Indices past 7
/// repeat the parity rule with no reflection.
fn spawn_arm(arm: usize, speed: f32, center: egui::Vec2, config: &SpiralConfig) -> Spiral {
    let angle_sign = if arm % 2 == 0 { 1.0 } else { -1.0 };
    Spiral {
        pos: center,
        angle: 0.0,
        distance: 0.0,
        angular_speed: config.angular_speed * angle_sign,
        speed,
        spawn_radius: config.radius,
        reflect_x: matches!(arm, 2 | 3 | 6 | 7),
        reflect_y: matches!(arm, 4..=7),
        fade: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_one_batch(config: &SpiralConfig) -> Vec<Spiral> {
        let geometry = SurfaceGeometry::new(800.0, 600.0);
        let mut spirals = Vec::new();
        let mut rng = rand::thread_rng();
        spawn_batch(config, &geometry, &mut spirals, &mut rng);
        spirals
    }

    #[test]
    fn test_four_arm_symmetry_table() {
        let config = SpiralConfig {
            arm_count: 4,
            ..Default::default()
        };
        let spirals = spawn_one_batch(&config);
        assert_eq!(spirals.len(), 4);

        assert!(spirals[0].angular_speed > 0.0);
        assert!(!spirals[0].reflect_x && !spirals[0].reflect_y);

        assert!(spirals[1].angular_speed < 0.0);
        assert!(!spirals[1].reflect_x && !spirals[1].reflect_y);

        assert!(spirals[2].angular_speed > 0.0);
        assert!(spirals[2].reflect_x && !spirals[2].reflect_y);

        assert!(spirals[3].angular_speed < 0.0);
        assert!(spirals[3].reflect_x && !spirals[3].reflect_y);
    }

    #[test]
    fn test_eight_arm_reflection_coverage() {
        let config = SpiralConfig {
            arm_count: 8,
            ..Default::default()
        };
        let spirals = spawn_one_batch(&config);

        let reflect_x: Vec<bool> = spirals.iter().map(|s| s.reflect_x).collect();
        let reflect_y: Vec<bool> = spirals.iter().map(|s| s.reflect_y).collect();
        assert_eq!(
            reflect_x,
            vec![false, false, true, true, false, false, true, true]
        );
        assert_eq!(
            reflect_y,
            vec![false, false, false, false, true, true, true, true]
        );
    }

    #[test]
    fn test_arms_past_seven_repeat_parity_without_reflection() {
        let config = SpiralConfig {
            arm_count: 10,
            ..Default::default()
        };
        let spirals = spawn_one_batch(&config);

        assert!(spirals[8].angular_speed > 0.0);
        assert!(!spirals[8].reflect_x && !spirals[8].reflect_y);
        assert!(spirals[9].angular_speed < 0.0);
        assert!(!spirals[9].reflect_x && !spirals[9].reflect_y);
    }

    #[test]
    fn test_batch_starts_at_center_with_zero_polar_state() {
        let config = SpiralConfig::default();
        let spirals = spawn_one_batch(&config);
        for s in &spirals {
            assert_eq!(s.pos, egui::Vec2::new(400.0, 300.0));
            assert_eq!(s.angle, 0.0);
            assert_eq!(s.distance, 0.0);
        }
    }

    #[test]
    fn test_arms_of_one_particle_share_speed() {
        let config = SpiralConfig {
            arm_count: 6,
            ..Default::default()
        };
        let spirals = spawn_one_batch(&config);
        let first = spirals[0].speed;
        assert!(spirals.iter().all(|s| s.speed == first));
    }

    #[test]
    fn test_speed_scale_stays_in_range() {
        let config = SpiralConfig {
            linear_speed: 2.0,
            arm_count: 1,
            circles_per_batch: 1,
            ..Default::default()
        };
        for _ in 0..200 {
            let spirals = spawn_one_batch(&config);
            let speed = spirals[0].speed;
            // (1..=5) / (1..=3) in [1/3, 5], scaled by linear_speed
            assert!(speed >= 2.0 / 3.0 - 0.001);
            assert!(speed <= 10.0 + 0.001);
        }
    }

    #[test]
    fn test_tick_fires_once_per_period() {
        let config = SpiralConfig::default();
        let geometry = SurfaceGeometry::new(800.0, 600.0);
        let mut spawner = Spawner::new(100);
        let mut spirals = Vec::new();
        let mut rng = rand::thread_rng();

        spawner.tick(
            Duration::from_millis(50),
            &config,
            &geometry,
            &mut spirals,
            &mut rng,
        );
        assert!(spirals.is_empty());

        spawner.tick(
            Duration::from_millis(60),
            &config,
            &geometry,
            &mut spirals,
            &mut rng,
        );
        assert_eq!(spirals.len(), config.arm_count);
    }

    #[test]
    fn test_tick_catches_up_over_long_frames() {
        let config = SpiralConfig::default();
        let geometry = SurfaceGeometry::new(800.0, 600.0);
        let mut spawner = Spawner::new(100);
        let mut spirals = Vec::new();
        let mut rng = rand::thread_rng();

        spawner.tick(
            Duration::from_millis(350),
            &config,
            &geometry,
            &mut spirals,
            &mut rng,
        );
        assert_eq!(spirals.len(), 3 * config.arm_count);
    }

    #[test]
    fn test_paused_periods_are_consumed_without_spawning() {
        let mut config = SpiralConfig::default();
        config.paused = true;
        let geometry = SurfaceGeometry::new(800.0, 600.0);
        let mut spawner = Spawner::new(100);
        let mut spirals = Vec::new();
        let mut rng = rand::thread_rng();

        spawner.tick(
            Duration::from_millis(500),
            &config,
            &geometry,
            &mut spirals,
            &mut rng,
        );
        assert!(spirals.is_empty());

        // Resuming does not replay the skipped periods
        config.paused = false;
        spawner.tick(
            Duration::from_millis(10),
            &config,
            &geometry,
            &mut spirals,
            &mut rng,
        );
        assert!(spirals.is_empty());
    }

    #[test]
    fn test_interval_change_applies_on_rearm_only() {
        let config = SpiralConfig::default();
        let geometry = SurfaceGeometry::new(800.0, 600.0);
        let mut spawner = Spawner::new(100);
        let mut spirals = Vec::new();
        let mut rng = rand::thread_rng();

        // Armed at 100ms; a 60ms frame does not fire
        spawner.tick(
            Duration::from_millis(60),
            &config,
            &geometry,
            &mut spirals,
            &mut rng,
        );
        assert!(spirals.is_empty());

        spawner.rearm(50);
        assert_eq!(spawner.period(), Duration::from_millis(50));

        // Accumulator was zeroed by rearm; a full new period fires
        spawner.tick(
            Duration::from_millis(50),
            &config,
            &geometry,
            &mut spirals,
            &mut rng,
        );
        assert_eq!(spirals.len(), config.arm_count);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let spawner = Spawner::new(0);
        assert_eq!(spawner.period(), Duration::from_millis(1));
    }
}
