//! Owned simulation context handed to hosts, renderers and input layers.

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryPolicy;
use crate::diffusion::DiffusionIntegrator;
use crate::error::ConfigError;
use crate::grid::GridBuffer;
use crate::integrator::FieldIntegrator;
use crate::params::{DiffusionParams, GridSize, WaveParams};
use crate::wave::WaveIntegrator;

/// Which equation to integrate, with its physical parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    Wave(WaveParams),
    Diffusion(DiffusionParams),
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Wave(_) => "wave",
            Model::Diffusion(_) => "diffusion",
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Model::Wave(p) => p.validate(),
            Model::Diffusion(p) => p.validate(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub size: GridSize,
    #[serde(default)]
    pub boundary: BoundaryPolicy,
    pub model: Model,
}

impl SimConfig {
    /// Host-side acceptance check: extents plus stability of the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.size.validate()?;
        self.model.validate()
    }
}

/// One running simulation, either variant.
#[derive(Clone, Debug)]
pub enum Simulation {
    Wave(WaveIntegrator),
    Diffusion(DiffusionIntegrator),
}

impl Simulation {
    pub fn from_config(config: &SimConfig) -> Result<Simulation, ConfigError> {
        Ok(match config.model {
            Model::Wave(p) => Simulation::Wave(WaveIntegrator::new(config.size, p, config.boundary)?),
            Model::Diffusion(p) => {
                Simulation::Diffusion(DiffusionIntegrator::new(config.size, p, config.boundary)?)
            }
        })
    }

    /// Reallocate for new extents, keeping the model parameters and boundary.
    pub fn resize(&mut self, size: GridSize) -> Result<(), ConfigError> {
        match self {
            Simulation::Wave(w) => w.configure(size, w.params()),
            Simulation::Diffusion(d) => d.configure(size, d.params()),
        }
    }

    pub fn model(&self) -> Model {
        match self {
            Simulation::Wave(w) => Model::Wave(w.params()),
            Simulation::Diffusion(d) => Model::Diffusion(d.params()),
        }
    }

    /// Injection is only meaningful for diffusion.
    pub fn as_diffusion_mut(&mut self) -> Option<&mut DiffusionIntegrator> {
        match self {
            Simulation::Diffusion(d) => Some(d),
            Simulation::Wave(_) => None,
        }
    }

    fn inner(&self) -> &dyn FieldIntegrator {
        match self {
            Simulation::Wave(w) => w,
            Simulation::Diffusion(d) => d,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn FieldIntegrator {
        match self {
            Simulation::Wave(w) => w,
            Simulation::Diffusion(d) => d,
        }
    }
}

impl FieldIntegrator for Simulation {
    fn grid(&self) -> &GridBuffer {
        self.inner().grid()
    }

    fn grid_mut(&mut self) -> &mut GridBuffer {
        self.inner_mut().grid_mut()
    }

    fn boundary(&self) -> BoundaryPolicy {
        self.inner().boundary()
    }

    fn step(&mut self) {
        self.inner_mut().step();
    }

    fn ticks(&self) -> u64 {
        self.inner().ticks()
    }
}
