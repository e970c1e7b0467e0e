use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fieldsim_core::{BoundaryPolicy, DiffusionParams, GridSize, Model, SimConfig, WaveParams};
use serde::{Deserialize, Serialize};

use crate::ic::{IcConfig, IcType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    Wave,
    Diffusion,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Output directory
    #[arg(long)]
    pub out: PathBuf,

    /// JSON run config; replaces every simulation flag below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Equation to integrate
    #[arg(long, value_enum, default_value_t = ModelKind::Wave)]
    pub model: ModelKind,

    /// Grid width (cells)
    #[arg(long, default_value_t = 200)]
    pub width: usize,

    /// Grid height (cells)
    #[arg(long, default_value_t = 200)]
    pub height: usize,

    /// Border rule: absorbing | reflecting | insulated
    #[arg(long, default_value_t = BoundaryPolicy::Reflecting)]
    pub boundary: BoundaryPolicy,

    /// Wave speed c
    #[arg(long, default_value_t = 0.5)]
    pub speed: f64,

    /// Cell spacing dx
    #[arg(long, default_value_t = 0.01)]
    pub dx: f64,

    /// Time step dt
    #[arg(long, default_value_t = 0.0005)]
    pub dt: f64,

    /// Diffusion number k = D·dt/dx²
    #[arg(long, default_value_t = 0.25)]
    pub diffusion_number: f64,

    /// Initial condition
    #[arg(long, value_enum, default_value_t = IcType::Pulse)]
    pub ic: IcType,

    /// Initial condition amplitude
    #[arg(long, default_value_t = 2.0)]
    pub amplitude: f64,

    /// Pulse sharpness
    #[arg(long, default_value_t = 5.0)]
    pub sharpness: f64,

    /// Injection radius (cells)
    #[arg(long, default_value_t = 15)]
    pub radius: usize,

    /// Number of injections
    #[arg(long, default_value_t = 3)]
    pub count: usize,

    /// Number of steps to run
    #[arg(long, default_value_t = 500)]
    pub ticks: u64,

    /// Record every N-th tick (tick 0 is always recorded)
    #[arg(long, default_value_t = 10)]
    pub every: u64,

    /// Log progress every N ticks (0 = never)
    #[arg(long, default_value_t = 100)]
    pub log_every: u64,

    /// RNG seed for injections
    #[arg(long, default_value_t = 123)]
    pub seed: u64,

    /// Run parameters that fail the stability check
    #[arg(long)]
    pub allow_unstable: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything that determines a run's output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub sim: SimConfig,
    #[serde(default)]
    pub ic: IcConfig,
    pub ticks: u64,
    #[serde(default = "default_every")]
    pub every: u64,
    #[serde(default)]
    pub seed: u64,
}

fn default_every() -> u64 {
    1
}

impl RunConfig {
    pub fn from_args(args: &Args) -> RunConfig {
        let model = match args.model {
            ModelKind::Wave => Model::Wave(WaveParams {
                speed: args.speed,
                dx: args.dx,
                dt: args.dt,
            }),
            ModelKind::Diffusion => Model::Diffusion(DiffusionParams::new(args.diffusion_number)),
        };

        RunConfig {
            sim: SimConfig {
                size: GridSize::new(args.width, args.height),
                boundary: args.boundary,
                model,
            },
            ic: IcConfig {
                kind: args.ic,
                amplitude: args.amplitude,
                sharpness: args.sharpness,
                spacing: args.dx,
                radius: args.radius,
                count: args.count,
            },
            ticks: args.ticks,
            every: args.every,
            seed: args.seed,
        }
    }

    pub fn load(path: &Path) -> Result<RunConfig> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading run config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing run config {}", path.display()))
    }

    /// Flags or file, whichever the arguments select.
    pub fn resolve(args: &Args) -> Result<RunConfig> {
        match &args.config {
            Some(path) => RunConfig::load(path),
            None => Ok(RunConfig::from_args(args)),
        }
    }
}
