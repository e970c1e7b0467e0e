use clap::ValueEnum;
use fieldsim_core::{FieldIntegrator, Simulation};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IcType {
    /// Gaussian bump centred on the grid
    Pulse,
    /// Random disc injections (diffusion only)
    Injections,
    /// One cell set to the amplitude
    Impulse,
    /// Leave the field at zero
    Flat,
}

impl IcType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IcType::Pulse => "pulse",
            IcType::Injections => "injections",
            IcType::Impulse => "impulse",
            IcType::Flat => "flat",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcConfig {
    pub kind: IcType,
    pub amplitude: f64,
    /// Pulse: exponent factor in amp·exp(-sharpness·r²)
    pub sharpness: f64,
    /// Pulse: physical size of one cell
    pub spacing: f64,
    /// Injections: disc radius in cells
    pub radius: usize,
    /// Injections: how many discs
    pub count: usize,
}

impl Default for IcConfig {
    fn default() -> Self {
        IcConfig {
            kind: IcType::Pulse,
            amplitude: 2.0,
            sharpness: 5.0,
            spacing: 0.01,
            radius: 15,
            count: 3,
        }
    }
}

/// Seed `sim` according to `ic`. Returns the number of cells written.
pub fn apply_ic<R: Rng>(
    rng: &mut R,
    sim: &mut Simulation,
    ic: &IcConfig,
) -> Result<usize, String> {
    let w = sim.width();
    let h = sim.height();

    match ic.kind {
        IcType::Pulse => {
            // physical coordinates with the origin on the centre cell
            for y in 0..h {
                for x in 0..w {
                    let vx = (x as f64 - (w / 2) as f64) * ic.spacing;
                    let vy = (y as f64 - (h / 2) as f64) * ic.spacing;
                    let r2 = vx * vx + vy * vy;
                    sim.set(x, y, ic.amplitude * (-ic.sharpness * r2).exp());
                }
            }
            Ok(w * h)
        }

        IcType::Injections => {
            let Some(diffusion) = sim.as_diffusion_mut() else {
                return Err("injections seed needs the diffusion model".into());
            };
            for _ in 0..ic.count {
                // the input layer clamps picks into the grid before injecting
                let x0 = rng.gen_range(0..w) as isize;
                let y0 = rng.gen_range(0..h) as isize;
                diffusion.inject(x0, y0, ic.radius, ic.amplitude);
            }
            Ok(sim.heights().iter().filter(|&&v| v != 0.0).count())
        }

        IcType::Impulse => {
            sim.set(w / 2, h / 2, ic.amplitude);
            Ok(1)
        }

        IcType::Flat => Ok(0),
    }
}
