//! # Field Renderer
//!
//! wgpu visualization for the particle field: alpha-blended link lines under
//! instanced particle discs, tinted by the active theme's accent color.

pub mod renderer;
pub mod theme;

pub use renderer::*;
pub use theme::*;
