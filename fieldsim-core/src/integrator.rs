use tracing::debug;

use crate::boundary::BoundaryPolicy;
use crate::grid::GridBuffer;

/// Shared surface of the explicit stencil integrators.
///
/// A host seeds the field with `set`, calls `start` once, then `step` once per
/// tick. Renderers read `heights` or `get` between steps.
pub trait FieldIntegrator {
    fn grid(&self) -> &GridBuffer;

    fn grid_mut(&mut self) -> &mut GridBuffer;

    fn boundary(&self) -> BoundaryPolicy;

    /// Advance one time level: interior stencil, boundary ring, rotation.
    fn step(&mut self);

    /// Completed steps since the last configure.
    fn ticks(&self) -> u64;

    fn start(&mut self) {
        let grid = self.grid_mut();
        grid.start();
        debug!(
            width = grid.width(),
            height = grid.height(),
            "previous level bootstrapped from current"
        );
    }

    fn set(&mut self, x: usize, y: usize, value: f64) {
        self.grid_mut().set(x, y, value);
    }

    fn get(&self, x: usize, y: usize) -> f64 {
        self.grid().get(x, y)
    }

    fn heights(&self) -> &[f64] {
        self.grid().heights()
    }

    fn width(&self) -> usize {
        self.grid().width()
    }

    fn height(&self) -> usize {
        self.grid().height()
    }
}
