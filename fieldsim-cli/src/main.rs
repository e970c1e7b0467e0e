mod config;
mod ic;

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use config::{Args, RunConfig};
use fieldsim_core::{FieldIntegrator, Simulation};
use ic::apply_ic;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct FrameRow<'a> {
    frame_idx: u64,
    tick: u64,

    model: &'a str,
    boundary: &'a str,
    width: usize,
    height: usize,

    mass: f64,
    total: f64,
    min: f64,
    max: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let run = RunConfig::resolve(&args)?;

    if let Err(e) = run.sim.validate() {
        if args.allow_unstable {
            warn!(error = %e, "configuration fails validation; running it anyway");
        } else {
            bail!("invalid configuration: {e} (pass --allow-unstable to run it anyway)");
        }
    }
    if run.every == 0 {
        bail!("every must be >= 1");
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    serde_json::to_writer_pretty(File::create(args.out.join("config.json"))?, &run)?;

    let mut frames = BufWriter::new(File::create(args.out.join("frames.bin"))?);
    let mut meta_file = BufWriter::new(
        OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(args.out.join("meta.jsonl"))?,
    );

    let mut sim = Simulation::from_config(&run.sim)?;
    let model = run.sim.model.as_str();
    let boundary = run.sim.boundary.as_str();

    let mut rng = ChaCha8Rng::seed_from_u64(run.seed);
    let seeded = apply_ic(&mut rng, &mut sim, &run.ic).map_err(|e| anyhow!("initial condition: {e}"))?;
    info!(ic = run.ic.kind.as_str(), cells = seeded, "field seeded");

    sim.start();

    let mut frame_idx: u64 = 0;
    for tick in 0..=run.ticks {
        if tick > 0 {
            sim.step();
        }

        if tick % run.every == 0 {
            let grid = sim.grid();
            let (min, max) = grid.extrema().unwrap_or((0.0, 0.0));

            write_f64_vec(&mut frames, grid.heights())?;

            let row = FrameRow {
                frame_idx,
                tick,
                model,
                boundary,
                width: grid.width(),
                height: grid.height(),
                mass: grid.mass(),
                total: grid.total(),
                min,
                max,
            };
            serde_json::to_writer(&mut meta_file, &row)?;
            meta_file.write_all(b"\n")?;

            frame_idx += 1;
        }

        if args.log_every > 0 && tick % args.log_every == 0 {
            let grid = sim.grid();
            let (min, max) = grid.extrema().unwrap_or((0.0, 0.0));
            info!(tick, mass = grid.mass(), min, max, "progress");
            if !(min.is_finite() && max.is_finite()) {
                warn!(tick, "field is no longer finite; check the stability bound");
            }
        }
    }

    frames.flush()?;
    meta_file.flush()?;

    println!("Wrote run to: {}", args.out.display());
    println!(
        "Frames: {} ({}x{}, ticks={}, every={})",
        frame_idx,
        sim.width(),
        sim.height(),
        run.ticks,
        run.every
    );

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn write_f64_vec<W: Write>(w: &mut W, v: &[f64]) -> std::io::Result<()> {
    for &x in v {
        w.write_all(&x.to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_little_endian_f64() {
        let mut buf = Vec::new();
        write_f64_vec(&mut buf, &[1.0, -0.5]).unwrap();
        assert_eq!(buf.len(), 16);
        assert_eq!(&buf[..8], &1.0f64.to_le_bytes());
        assert_eq!(&buf[8..], &(-0.5f64).to_le_bytes());
    }
}
