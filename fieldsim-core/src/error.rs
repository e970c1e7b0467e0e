use thiserror::Error;

/// Rejection reasons for grid and integrator configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 3x3 to have an interior, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be > 0, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Courant number {courant} exceeds the 2D stability bound {limit}")]
    UnstableCourant { courant: f64, limit: f64 },

    #[error("diffusion number {value} is outside the stable range (0, {limit}]")]
    UnstableDiffusion { value: f64, limit: f64 },

    #[error("unknown boundary policy {0:?} (expected absorbing, reflecting or insulated)")]
    UnknownBoundary(String),
}
