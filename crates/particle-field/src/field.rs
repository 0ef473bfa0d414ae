//! Per-frame simulation of the particle field
//!
//! Update order per particle: integrate, wall bounce + clamp, pointer
//! repulsion, speed clamp, damping. Link geometry is a pure read computed on
//! demand after a step.

use crate::constants::*;
use crate::params::FieldParams;
use crate::particle::Particle;
use glam::Vec2;

/// A line segment with a precomputed alpha, ready for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

/// The background particle field
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    pointer: Vec2,
    params: FieldParams,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, params: FieldParams) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            bounds: Vec2::new(width, height),
            pointer: OFFSCREEN_POINTER,
            params,
        };
        field.reseed();
        field
    }

    fn reseed(&mut self) {
        let mut rng = rand::rng();
        self.particles = (0..self.params.particle_count)
            .map(|_| Particle::spawn(&mut rng, self.bounds))
            .collect();
        log::debug!(
            "seeded {} particles in {}x{}",
            self.particles.len(),
            self.bounds.x,
            self.bounds.y
        );
    }

    /// Replace every particle for the new bounds; no state carries across
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.reseed();
    }

    /// Track the pointer (mouse or last touch point) in surface pixels
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Park the pointer far off-screen so repulsion has no reach
    pub fn clear_pointer(&mut self) {
        self.pointer = OFFSCREEN_POINTER;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self) {
        let bounds = self.bounds;
        let pointer = self.pointer;
        let radius = self.params.pointer_radius;

        for particle in &mut self.particles {
            particle.position += particle.velocity;

            // Elastic wall bounce, then clamp back into bounds
            if particle.position.x < 0.0 || particle.position.x > bounds.x {
                particle.velocity.x = -particle.velocity.x;
            }
            if particle.position.y < 0.0 || particle.position.y > bounds.y {
                particle.velocity.y = -particle.velocity.y;
            }
            particle.position = particle.position.clamp(Vec2::ZERO, bounds);

            // Pointer repulsion: impulse fades linearly to zero at the radius edge
            let to_pointer = pointer - particle.position;
            let distance = to_pointer.length();
            if distance < radius && distance > 0.0 {
                let force = (radius - distance) / radius;
                particle.velocity -= to_pointer / distance * force * REPULSION_STRENGTH;
            }

            particle.limit_speed();
            particle.velocity *= DAMPING;
        }
    }

    /// Pairwise connective lines, alpha fading with distance. O(n²) over the
    /// particle set; fine at the default count.
    pub fn links(&self) -> Vec<Link> {
        let max = self.params.connection_distance;
        let mut links = Vec::new();

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if distance < max {
                    links.push(Link {
                        a: a.position,
                        b: b.position,
                        alpha: (1.0 - distance / max) * LINK_ALPHA,
                    });
                }
            }
        }

        links
    }

    /// Lines from nearby particles to the pointer
    pub fn pointer_links(&self) -> Vec<Link> {
        let reach = self.params.pointer_radius * POINTER_LINK_RANGE;

        self.particles
            .iter()
            .filter_map(|p| {
                let distance = p.position.distance(self.pointer);
                (distance < reach).then(|| Link {
                    a: p.position,
                    b: self.pointer,
                    alpha: (1.0 - distance / reach) * POINTER_LINK_ALPHA,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_particle(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            size: 2.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());

        for _ in 0..500 {
            field.step();
            for p in field.particles() {
                assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
                assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
            }
        }
    }

    #[test]
    fn test_speed_never_exceeds_max_after_step() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        field.particles[0].velocity = Vec2::new(40.0, -30.0);

        field.step();

        for p in field.particles() {
            assert!(p.speed() <= MAX_SPEED + 1e-5);
        }
    }

    #[test]
    fn test_wall_bounce_reflects_velocity() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        field.particles = vec![Particle {
            position: Vec2::new(799.9, 300.0),
            velocity: Vec2::new(0.25, 0.0),
            size: 2.0,
            opacity: 0.5,
        }];

        field.step();

        let p = field.particles()[0];
        assert!(p.velocity.x < 0.0);
        assert!(p.position.x <= 800.0);
    }

    #[test]
    fn test_link_excluded_at_exact_connection_distance() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        let d = field.params.connection_distance;
        field.particles = vec![still_particle(100.0, 100.0), still_particle(100.0 + d, 100.0)];

        assert!(field.links().is_empty());
    }

    #[test]
    fn test_link_at_distance_zero_has_full_alpha() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        field.particles = vec![still_particle(100.0, 100.0), still_particle(100.0, 100.0)];

        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - LINK_ALPHA).abs() < 1e-6);
    }

    #[test]
    fn test_link_alpha_fades_with_distance() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        let d = field.params.connection_distance;
        field.particles = vec![still_particle(100.0, 100.0), still_particle(100.0 + d / 2.0, 100.0)];

        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - LINK_ALPHA * 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_repulsion_pushes_away() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        field.particles = vec![still_particle(100.0, 100.0)];
        field.set_pointer(150.0, 100.0);

        field.step();

        // Pointer is to the right; the particle is pushed left
        assert!(field.particles()[0].velocity.x < 0.0);
    }

    #[test]
    fn test_parked_pointer_has_no_effect() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        field.particles = vec![still_particle(100.0, 100.0)];
        field.clear_pointer();

        field.step();

        assert_eq!(field.particles()[0].velocity, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_links_within_reach_only() {
        let mut field = ParticleField::new(2000.0, 600.0, FieldParams::default());
        let reach = field.params.pointer_radius * POINTER_LINK_RANGE;
        field.particles = vec![
            still_particle(100.0, 100.0),
            still_particle(100.0 + reach + 1.0, 100.0),
        ];
        field.set_pointer(100.0, 100.0);

        let links = field.pointer_links();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - POINTER_LINK_ALPHA).abs() < 1e-6);
    }

    #[test]
    fn test_resize_reseeds_within_new_bounds() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        field.resize(200.0, 100.0);

        assert_eq!(field.particles().len(), field.params.particle_count);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= 200.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 100.0);
        }
    }

    #[test]
    fn test_damping_slows_free_particle() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default());
        field.particles = vec![Particle {
            position: Vec2::new(400.0, 300.0),
            velocity: Vec2::new(1.0, 0.0),
            size: 2.0,
            opacity: 0.5,
        }];

        field.step();

        assert!((field.particles()[0].velocity.x - DAMPING).abs() < 1e-6);
    }
}
