//! Leapfrog integration of the 2D wave equation.
//!
//! u[n+1] = 2·u[n] - u[n-1] + r²·∇²u[n], with r = c·dt/dx and ∇² the 5-point
//! Laplacian. Stability needs r <= 1/√2; nothing here checks it on the step path.

use tracing::{info, warn};

use crate::boundary::BoundaryPolicy;
use crate::error::ConfigError;
use crate::grid::GridBuffer;
use crate::integrator::FieldIntegrator;
use crate::params::{GridSize, WaveParams};

#[derive(Clone, Debug)]
pub struct WaveIntegrator {
    grid: GridBuffer,
    params: WaveParams,
    boundary: BoundaryPolicy,
    r2: f64,
    ticks: u64,
}

impl WaveIntegrator {
    pub fn new(
        size: GridSize,
        params: WaveParams,
        boundary: BoundaryPolicy,
    ) -> Result<WaveIntegrator, ConfigError> {
        let mut wave = WaveIntegrator {
            grid: GridBuffer::default(),
            params,
            boundary,
            r2: 0.0,
            ticks: 0,
        };
        wave.configure(size, params)?;
        Ok(wave)
    }

    /// Reallocate and zero the field for new extents and parameters.
    ///
    /// The boundary policy is kept. Parameters outside the stable range are
    /// accepted with a warning.
    pub fn configure(&mut self, size: GridSize, params: WaveParams) -> Result<(), ConfigError> {
        size.validate()?;
        if let Err(e) = params.validate() {
            warn!(error = %e, "wave parameters accepted as given; the field may diverge");
        }

        self.grid.configure(size.width, size.height);
        self.params = params;
        self.r2 = params.courant().powi(2);
        self.ticks = 0;

        info!(
            width = size.width,
            height = size.height,
            courant = params.courant(),
            boundary = %self.boundary,
            "wave integrator configured"
        );
        Ok(())
    }

    pub fn params(&self) -> WaveParams {
        self.params
    }

    pub fn courant(&self) -> f64 {
        self.params.courant()
    }
}

impl FieldIntegrator for WaveIntegrator {
    fn grid(&self) -> &GridBuffer {
        &self.grid
    }

    fn grid_mut(&mut self) -> &mut GridBuffer {
        &mut self.grid
    }

    fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn step(&mut self) {
        let n = self.grid.width();
        let h = self.grid.height();
        let r2 = self.r2;
        let (prev, curr, next) = self.grid.levels_mut();

        for y in 1..(h - 1) {
            let row = y * n;
            for x in 1..(n - 1) {
                let i = row + x;

                let u = curr[i];
                let up = curr[i - n];
                let down = curr[i + n];
                let left = curr[i - 1];
                let right = curr[i + 1];

                let lap = (up + down + left + right) - 4.0 * u;
                next[i] = 2.0 * u - prev[i] + r2 * lap;
            }
        }

        self.boundary.apply(next, n, h);
        self.grid.rotate();
        self.ticks += 1;
    }
}
