//! Explicit finite-difference integrators for a 2D scalar field.
//!
//! Two schemes share one triple-buffered grid:
//! - [`WaveIntegrator`]: leapfrog update of the wave equation.
//! - [`DiffusionIntegrator`]: explicit Euler update of the diffusion equation,
//!   plus disc injection for interactive seeding.
//!
//! Both fill the outer one-cell ring with a [`BoundaryPolicy`] after every
//! interior sweep. Rendering and input layers talk to them through
//! [`FieldIntegrator`] (`heights`, `get`, `set`) and
//! [`DiffusionIntegrator::inject`].

pub mod boundary;
pub mod diffusion;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod params;
pub mod simulation;
pub mod wave;

pub use boundary::BoundaryPolicy;
pub use diffusion::DiffusionIntegrator;
pub use error::ConfigError;
pub use grid::GridBuffer;
pub use integrator::FieldIntegrator;
pub use params::{
    DiffusionParams, GridSize, MAX_STABLE_COURANT, MAX_STABLE_DIFFUSION_NUMBER, WaveParams,
};
pub use simulation::{Model, SimConfig, Simulation};
pub use wave::WaveIntegrator;
