//! Triple-buffered scalar field.
//!
//! Three equal-sized row-major arrays hold the field at consecutive time
//! levels. Callers only ever see the *current* level through `get`/`heights`;
//! which physical array backs each role changes on every `rotate`.

/// Previous / current / next time levels of a `width x height` field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridBuffer {
    width: usize,
    height: usize,
    previous: Vec<f64>,
    current: Vec<f64>,
    next: Vec<f64>,
}

impl GridBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = GridBuffer::default();
        grid.configure(width, height);
        grid
    }

    /// Reallocate all three levels to `width x height` and zero them.
    ///
    /// Any existing field state is discarded, whether or not the
    /// dimensions change.
    pub fn configure(&mut self, width: usize, height: usize) {
        let size = width * height;
        self.width = width;
        self.height = height;
        self.previous = vec![0.0; size];
        self.current = vec![0.0; size];
        self.next = vec![0.0; size];
    }

    // ---- Accessors ----

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Write one cell of the current level. Out-of-range coordinates panic.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        let idx = self.index(x, y);
        self.current[idx] = value;
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.current[self.index(x, y)]
    }

    /// The whole current level, row-major.
    pub fn heights(&self) -> &[f64] {
        &self.current
    }

    pub fn previous(&self) -> &[f64] {
        &self.previous
    }

    /// Copy current into previous. Run once after seeding, before the first step.
    pub fn start(&mut self) {
        self.previous.copy_from_slice(&self.current);
    }

    /// Zero every level without reallocating.
    pub fn clear(&mut self) {
        self.previous.fill(0.0);
        self.current.fill(0.0);
        self.next.fill(0.0);
    }

    // ---- Stepping support ----

    /// Borrow (previous, current) for reading and next for writing.
    pub(crate) fn levels_mut(&mut self) -> (&[f64], &[f64], &mut [f64]) {
        (&self.previous, &self.current, &mut self.next)
    }

    /// previous <- current, current <- next. The old previous array becomes
    /// the scratch space for the following step.
    pub(crate) fn rotate(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current);
        std::mem::swap(&mut self.current, &mut self.next);
    }

    // ---- Statistics ----

    /// Sum of the current level over interior cells.
    pub fn mass(&self) -> f64 {
        let w = self.width;
        if w < 3 || self.height < 3 {
            return 0.0;
        }
        (1..self.height - 1)
            .map(|y| self.current[y * w + 1..(y + 1) * w - 1].iter().sum::<f64>())
            .sum()
    }

    /// Sum of the current level over every cell, border ring included.
    pub fn total(&self) -> f64 {
        self.current.iter().sum()
    }

    /// (min, max) of the current level; `None` for an unconfigured grid.
    pub fn extrema(&self) -> Option<(f64, f64)> {
        let mut iter = self.current.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_zero_fills_every_level() {
        let g = GridBuffer::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.len(), 12);
        assert!(g.heights().iter().all(|&v| v == 0.0));
        assert!(g.previous().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn set_and_get_use_row_major_offsets() {
        let mut g = GridBuffer::new(5, 4);
        g.set(3, 2, 7.5);
        assert_eq!(g.get(3, 2), 7.5);
        assert_eq!(g.heights()[2 * 5 + 3], 7.5);
    }

    #[test]
    fn reconfigure_discards_old_state() {
        let mut g = GridBuffer::new(5, 5);
        g.set(2, 2, 1.0);
        g.start();
        g.configure(5, 5);
        assert!(g.heights().iter().all(|&v| v == 0.0));
        assert!(g.previous().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn start_copies_current_into_previous() {
        let mut g = GridBuffer::new(3, 3);
        g.set(1, 1, 2.0);
        g.set(0, 2, -1.0);
        assert_eq!(g.previous()[4], 0.0);
        g.start();
        assert_eq!(g.previous(), g.heights());
    }

    #[test]
    fn rotate_moves_each_role_forward() {
        let mut g = GridBuffer::new(3, 3);
        g.set(0, 0, 1.0);
        g.start();
        g.set(0, 0, 2.0);
        {
            let (_, _, next) = g.levels_mut();
            next[0] = 3.0;
        }
        g.rotate();
        assert_eq!(g.previous()[0], 2.0);
        assert_eq!(g.get(0, 0), 3.0);

        // the oldest level is recycled as scratch
        let (_, _, next) = g.levels_mut();
        assert_eq!(next[0], 1.0);
    }

    #[test]
    fn statistics_over_current_level() {
        let mut g = GridBuffer::new(4, 4);
        g.set(0, 0, 10.0);
        g.set(1, 1, 1.0);
        g.set(2, 2, -3.0);
        assert_eq!(g.mass(), -2.0);
        assert_eq!(g.total(), 8.0);
        assert_eq!(g.extrema(), Some((-3.0, 10.0)));

        g.clear();
        assert_eq!(g.total(), 0.0);
        assert_eq!(GridBuffer::default().extrema(), None);
    }

    #[test]
    #[should_panic]
    fn out_of_range_write_is_fatal() {
        let mut g = GridBuffer::new(3, 3);
        g.set(3, 3, 1.0);
    }
}
