//! # Particle Field
//!
//! CPU simulation of the background particle field: wall-bouncing particles,
//! pointer repulsion, and distance-faded connective links.

pub mod constants;
pub mod field;
pub mod params;
pub mod particle;

pub use constants::*;
pub use field::*;
pub use params::*;
pub use particle::*;
