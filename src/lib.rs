/*
 * Boid & Ideal Gas Simulation - Module Definitions
 *
 * This file defines the module structure for the simulation.
 * The physics kernel (vectors, steering, boundaries, collisions and the two
 * population managers) has no graphics dependency. The nannou/egui host
 * shell is only built with the `viewer` feature.
 */

// Re-export key components for easier access
pub use boid::{Boid, Role, SteeringWeights};
pub use boundary::{BoundaryPolicy, Bounds, Contained};
pub use environment::{Environment, SimulationMode};
pub use error::{Error, Result};
pub use gas_tank::GasTank;
pub use obstacle::Obstacle;
pub use params::{EnvironmentParams, GasParams};
pub use particle::{Particle, ParticleTemplate};
pub use vector::{Axis, Vector};

// Define modules
pub mod boid;
pub mod boundary;
pub mod collision;
pub mod environment;
pub mod error;
pub mod gas_tank;
pub mod histogram;
pub mod obstacle;
pub mod params;
pub mod particle;
pub mod steering;
pub mod vector;

#[cfg(feature = "viewer")]
pub mod app;
#[cfg(feature = "viewer")]
pub mod debug;
#[cfg(feature = "viewer")]
pub mod input;
#[cfg(feature = "viewer")]
pub mod renderer;
#[cfg(feature = "viewer")]
pub mod ui;

// Colour tag carried by every drawable body
pub type Rgb = [u8; 3];

// Defaults for a freshly constructed boid
pub const BOID_SIZE: f32 = 7.0;
pub const BOID_VISION: f32 = 35.0;
pub const BOID_MAX_SPEED: f32 = 6.0;
