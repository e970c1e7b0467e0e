use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rule applied to the outer one-cell ring after each interior update.
///
/// Chosen when an integrator is built and fixed for its lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Border cells are held at 0 (fixed edge). Energy and mass leave through it.
    Absorbing,
    /// Border cells take the negated value of their nearest interior
    /// neighbour along the perpendicular axis (odd reflection).
    #[default]
    Reflecting,
    /// Border cells copy their nearest interior neighbour (even reflection,
    /// zero-gradient edge). Interior mass is invariant under diffusion.
    Insulated,
}

impl BoundaryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Absorbing => "absorbing",
            BoundaryPolicy::Reflecting => "reflecting",
            BoundaryPolicy::Insulated => "insulated",
        }
    }

    /// Overwrite the border ring of a row-major `width x height` field.
    ///
    /// Rows are filled before columns, so each corner ends up tied to the
    /// diagonal interior cell.
    pub fn apply(self, field: &mut [f64], width: usize, height: usize) {
        debug_assert_eq!(field.len(), width * height);
        match self {
            BoundaryPolicy::Absorbing => fill_zero(field, width, height),
            BoundaryPolicy::Reflecting => mirror(field, width, height, -1.0),
            BoundaryPolicy::Insulated => mirror(field, width, height, 1.0),
        }
    }
}

fn fill_zero(field: &mut [f64], width: usize, height: usize) {
    let last_row = (height - 1) * width;
    field[..width].fill(0.0);
    field[last_row..last_row + width].fill(0.0);
    for y in 0..height {
        field[y * width] = 0.0;
        field[y * width + width - 1] = 0.0;
    }
}

fn mirror(field: &mut [f64], width: usize, height: usize, sign: f64) {
    let n = width;
    for x in 0..n {
        field[x] = sign * field[n + x];
        field[(height - 1) * n + x] = sign * field[(height - 2) * n + x];
    }
    for y in 0..height {
        let row = y * n;
        field[row] = sign * field[row + 1];
        field[row + n - 1] = sign * field[row + n - 2];
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absorbing" => Ok(BoundaryPolicy::Absorbing),
            "reflecting" => Ok(BoundaryPolicy::Reflecting),
            "insulated" => Ok(BoundaryPolicy::Insulated),
            _ => Err(ConfigError::UnknownBoundary(s.to_string())),
        }
    }
}
