//! Tuning constants for the particle field
//!
//! Values are in surface pixels and pixels-per-frame, matching a display
//! running at its native refresh rate.

use glam::Vec2;

/// Number of particles seeded per surface
pub const PARTICLE_COUNT: usize = 80;

/// Pair distance below which a connective line is drawn
pub const CONNECTION_DISTANCE: f32 = 150.0;

/// Radius of the pointer's repulsive influence
pub const POINTER_RADIUS: f32 = 200.0;

/// Initial per-axis velocity range: components land in [-x, x]
pub const VELOCITY_RANGE: f32 = 0.25;

/// Particle radius range
pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 3.0;

/// Particle opacity range
pub const MIN_OPACITY: f32 = 0.3;
pub const MAX_OPACITY: f32 = 0.8;

/// Impulse scale for pointer repulsion
pub const REPULSION_STRENGTH: f32 = 0.02;

/// Speed ceiling in units per frame
pub const MAX_SPEED: f32 = 2.0;

/// Per-frame velocity damping; bounds energy gained from repeated repulsion
pub const DAMPING: f32 = 0.99;

/// Peak alpha of a particle-to-particle link (at distance zero)
pub const LINK_ALPHA: f32 = 0.3;

/// Peak alpha of a particle-to-pointer link
pub const POINTER_LINK_ALPHA: f32 = 0.5;

/// Pointer links reach this multiple of [`POINTER_RADIUS`]
pub const POINTER_LINK_RANGE: f32 = 1.5;

/// Parked pointer position: far enough off-screen that repulsion never reaches
pub const OFFSCREEN_POINTER: Vec2 = Vec2::new(-1000.0, -1000.0);
