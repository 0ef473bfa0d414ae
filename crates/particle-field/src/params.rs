//! Field parameters for runtime tuning

use crate::constants::*;

/// Knobs a host can adjust when constructing a field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Particles seeded per surface
    pub particle_count: usize,
    /// Pair distance below which a link is drawn
    pub connection_distance: f32,
    /// Radius of pointer repulsion
    pub pointer_radius: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            connection_distance: CONNECTION_DISTANCE,
            pointer_radius: POINTER_RADIUS,
        }
    }
}
