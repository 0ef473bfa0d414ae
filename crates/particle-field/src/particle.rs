//! Particle type and per-particle behavior

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// A simulated point in the background field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in surface pixels
    pub position: Vec2,
    /// Velocity in pixels per frame
    pub velocity: Vec2,
    /// Render radius
    pub size: f32,
    /// Render opacity in [0, 1]
    pub opacity: f32,
}

impl Particle {
    /// Spawn a particle at a uniformly random position within `bounds`,
    /// with randomized velocity, size, and opacity.
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2) -> Self {
        Self {
            position: Vec2::new(
                rng.random::<f32>() * bounds.x,
                rng.random::<f32>() * bounds.y,
            ),
            velocity: Vec2::new(
                (rng.random::<f32>() - 0.5) * 2.0 * VELOCITY_RANGE,
                (rng.random::<f32>() - 0.5) * 2.0 * VELOCITY_RANGE,
            ),
            size: MIN_SIZE + rng.random::<f32>() * (MAX_SIZE - MIN_SIZE),
            opacity: MIN_OPACITY + rng.random::<f32>() * (MAX_OPACITY - MIN_OPACITY),
        }
    }

    /// Current speed in pixels per frame
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Rescale the velocity vector so its magnitude never exceeds [`MAX_SPEED`]
    pub fn limit_speed(&mut self) {
        let speed = self.velocity.length();
        if speed > MAX_SPEED {
            self.velocity = self.velocity / speed * MAX_SPEED;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_speed_rescales_to_exactly_max() {
        let mut particle = Particle {
            position: Vec2::ZERO,
            velocity: Vec2::new(3.0, 4.0),
            size: 1.0,
            opacity: 0.5,
        };

        particle.limit_speed();

        assert!((particle.speed() - MAX_SPEED).abs() < 1e-5);
        // Direction is preserved: (3, 4) scaled down to length 2
        assert!((particle.velocity.x - 1.2).abs() < 1e-5);
        assert!((particle.velocity.y - 1.6).abs() < 1e-5);
    }

    #[test]
    fn test_limit_speed_leaves_slow_particles_alone() {
        let mut particle = Particle {
            position: Vec2::ZERO,
            velocity: Vec2::new(0.1, -0.2),
            size: 1.0,
            opacity: 0.5,
        };

        particle.limit_speed();

        assert_eq!(particle.velocity, Vec2::new(0.1, -0.2));
    }

    #[test]
    fn test_spawn_respects_ranges() {
        let mut rng = rand::rng();
        let bounds = Vec2::new(800.0, 600.0);

        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, bounds);
            assert!(p.position.x >= 0.0 && p.position.x <= bounds.x);
            assert!(p.position.y >= 0.0 && p.position.y <= bounds.y);
            assert!(p.velocity.x.abs() <= VELOCITY_RANGE);
            assert!(p.velocity.y.abs() <= VELOCITY_RANGE);
            assert!(p.size >= MIN_SIZE && p.size <= MAX_SIZE);
            assert!(p.opacity >= MIN_OPACITY && p.opacity <= MAX_OPACITY);
        }
    }
}
