//! Grid extents and physical parameters for both integrators.
//!
//! The integrators accept any values through `configure`; `validate` is the
//! gate a host runs before handing parameters over.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest Courant number for which the 5-point leapfrog scheme stays bounded.
pub const MAX_STABLE_COURANT: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Largest diffusion number for which the 5-point explicit Euler scheme stays bounded.
pub const MAX_STABLE_DIFFUSION_NUMBER: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Self {
        GridSize { width, height }
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 3 || self.height < 3 {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Wave speed, cell spacing and time step of the leapfrog scheme.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    pub speed: f64,
    pub dx: f64,
    pub dt: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        WaveParams {
            speed: 0.5,
            dx: 0.01,
            dt: 0.0005,
        }
    }
}

impl WaveParams {
    /// r = c·dt/dx
    pub fn courant(&self) -> f64 {
        self.speed * self.dt / self.dx
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive_finite("speed", self.speed)?;
        positive_finite("dx", self.dx)?;
        positive_finite("dt", self.dt)?;

        let courant = self.courant();
        if courant > MAX_STABLE_COURANT {
            return Err(ConfigError::UnstableCourant {
                courant,
                limit: MAX_STABLE_COURANT,
            });
        }
        Ok(())
    }
}

/// Dimensionless diffusion number k = D·dt/dx².
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffusionParams {
    pub diffusion_number: f64,
}

impl Default for DiffusionParams {
    fn default() -> Self {
        DiffusionParams {
            diffusion_number: 0.25,
        }
    }
}

impl DiffusionParams {
    pub fn new(diffusion_number: f64) -> Self {
        DiffusionParams { diffusion_number }
    }

    pub fn from_physical(diffusivity: f64, dx: f64, dt: f64) -> Self {
        DiffusionParams {
            diffusion_number: diffusivity * dt / (dx * dx),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = self.diffusion_number;
        if !k.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "diffusion_number",
                value: k,
            });
        }
        if k <= 0.0 || k > MAX_STABLE_DIFFUSION_NUMBER {
            return Err(ConfigError::UnstableDiffusion {
                value: k,
                limit: MAX_STABLE_DIFFUSION_NUMBER,
            });
        }
        Ok(())
    }
}

fn positive_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(())
}
