//! Explicit Euler integration of the 2D diffusion equation.
//!
//! u[n+1] = u[n] + k·Σ(neighbour - centre) over the four axis neighbours,
//! with k = D·dt/dx². Stable for 0 < k <= 1/4.

use tracing::{debug, info, warn};

use crate::boundary::BoundaryPolicy;
use crate::error::ConfigError;
use crate::grid::GridBuffer;
use crate::integrator::FieldIntegrator;
use crate::params::{DiffusionParams, GridSize};

#[derive(Clone, Debug)]
pub struct DiffusionIntegrator {
    grid: GridBuffer,
    params: DiffusionParams,
    boundary: BoundaryPolicy,
    ticks: u64,
}

impl DiffusionIntegrator {
    pub fn new(
        size: GridSize,
        params: DiffusionParams,
        boundary: BoundaryPolicy,
    ) -> Result<DiffusionIntegrator, ConfigError> {
        let mut diffusion = DiffusionIntegrator {
            grid: GridBuffer::default(),
            params,
            boundary,
            ticks: 0,
        };
        diffusion.configure(size, params)?;
        Ok(diffusion)
    }

    /// Reallocate and zero the field. The boundary policy is kept.
    pub fn configure(
        &mut self,
        size: GridSize,
        params: DiffusionParams,
    ) -> Result<(), ConfigError> {
        size.validate()?;
        if let Err(e) = params.validate() {
            warn!(error = %e, "diffusion number accepted as given; the field may diverge");
        }

        self.grid.configure(size.width, size.height);
        self.params = params;
        self.ticks = 0;

        info!(
            width = size.width,
            height = size.height,
            diffusion_number = params.diffusion_number,
            boundary = %self.boundary,
            "diffusion integrator configured"
        );
        Ok(())
    }

    pub fn params(&self) -> DiffusionParams {
        self.params
    }

    /// Overwrite every cell strictly inside the disc of `radius` around
    /// (x0, y0) with `amplitude`.
    ///
    /// Not additive: repeated injections saturate at `amplitude`. Cells that
    /// fall outside the grid are skipped.
    pub fn inject(&mut self, x0: isize, y0: isize, radius: usize, amplitude: f64) {
        let w = self.grid.width() as isize;
        let h = self.grid.height() as isize;
        let r = radius as isize;
        let r2 = r * r;

        let mut written = 0usize;
        for y in (y0 - r).max(0)..=(y0 + r).min(h - 1) {
            let dy = y - y0;
            for x in (x0 - r).max(0)..=(x0 + r).min(w - 1) {
                let dx = x - x0;
                if dx * dx + dy * dy < r2 {
                    self.grid.set(x as usize, y as usize, amplitude);
                    written += 1;
                }
            }
        }

        debug!(x0, y0, radius, amplitude, cells = written, "injected");
    }
}

impl FieldIntegrator for DiffusionIntegrator {
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
        let k = self.params.diffusion_number;
        let (_, curr, next) = self.grid.levels_mut();

        for y in 1..(h - 1) {
            let row = y * n;
            for x in 1..(n - 1) {
                let i = row + x;
                let u = curr[i];

                let sum = (curr[i - n] - u)
                    + (curr[i + n] - u)
                    + (curr[i - 1] - u)
                    + (curr[i + 1] - u);
                next[i] = u + k * sum;
            }
        }

        self.boundary.apply(next, n, h);
        self.grid.rotate();
        self.ticks += 1;
    }
}
