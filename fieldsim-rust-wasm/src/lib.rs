use fieldsim_core::{
    BoundaryPolicy, ConfigError, DiffusionIntegrator, DiffusionParams, FieldIntegrator, GridSize,
    WaveIntegrator, WaveParams,
};
use wasm_bindgen::prelude::*;

fn js_err(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_boundary(name: &str) -> Result<BoundaryPolicy, JsValue> {
    name.parse().map_err(js_err)
}

#[wasm_bindgen]
pub struct WaveSim {
    inner: WaveIntegrator,
}

#[wasm_bindgen]
impl WaveSim {
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: usize,
        height: usize,
        speed: f64,
        dx: f64,
        dt: f64,
        boundary: &str,
    ) -> Result<WaveSim, JsValue> {
        let params = WaveParams { speed, dx, dt };
        params.validate().map_err(js_err)?;
        let inner = WaveIntegrator::new(GridSize::new(width, height), params, parse_boundary(boundary)?)
            .map_err(js_err)?;
        Ok(WaveSim { inner })
    }

    pub fn configure(&mut self, width: usize, height: usize) -> Result<(), JsValue> {
        let params = self.inner.params();
        self.inner
            .configure(GridSize::new(width, height), params)
            .map_err(js_err)
    }

    pub fn courant(&self) -> f64 { self.inner.courant() }

    pub fn width(&self) -> usize { self.inner.width() }
    pub fn height(&self) -> usize { self.inner.height() }
    pub fn ticks(&self) -> u64 { self.inner.ticks() }

    // Picks arrive already clamped to the grid
    pub fn set(&mut self, x: usize, y: usize, value: f64) { self.inner.set(x, y, value); }
    pub fn get(&self, x: usize, y: usize) -> f64 { self.inner.get(x, y) }

    pub fn start(&mut self) { self.inner.start(); }
    pub fn clear(&mut self) { self.inner.grid_mut().clear(); }

    // Copy-based JS access (reliable)
    pub fn get_field(&self) -> Vec<f64> {
        self.inner.heights().to_vec()
    }

    pub fn step(&mut self) -> StepInfo {
        timed(&mut self.inner)
    }
}

#[wasm_bindgen]
pub struct DiffusionSim {
    inner: DiffusionIntegrator,
}

#[wasm_bindgen]
impl DiffusionSim {
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: usize,
        height: usize,
        diffusion_number: f64,
        boundary: &str,
    ) -> Result<DiffusionSim, JsValue> {
        let params = DiffusionParams::new(diffusion_number);
        params.validate().map_err(js_err)?;
        let inner = DiffusionIntegrator::new(
            GridSize::new(width, height),
            params,
            parse_boundary(boundary)?,
        )
        .map_err(js_err)?;
        Ok(DiffusionSim { inner })
    }

    pub fn configure(&mut self, width: usize, height: usize) -> Result<(), JsValue> {
        let params = self.inner.params();
        self.inner
            .configure(GridSize::new(width, height), params)
            .map_err(js_err)
    }

    pub fn width(&self) -> usize { self.inner.width() }
    pub fn height(&self) -> usize { self.inner.height() }
    pub fn ticks(&self) -> u64 { self.inner.ticks() }

    pub fn set(&mut self, x: usize, y: usize, value: f64) { self.inner.set(x, y, value); }
    pub fn get(&self, x: usize, y: usize) -> f64 { self.inner.get(x, y) }

    pub fn inject(&mut self, x0: isize, y0: isize, radius: usize, amplitude: f64) {
        self.inner.inject(x0, y0, radius, amplitude);
    }

    pub fn start(&mut self) { self.inner.start(); }
    pub fn clear(&mut self) { self.inner.grid_mut().clear(); }

    pub fn mass(&self) -> f64 { self.inner.grid().mass() }

    pub fn get_field(&self) -> Vec<f64> {
        self.inner.heights().to_vec()
    }

    pub fn step(&mut self) -> StepInfo {
        timed(&mut self.inner)
    }
}

#[wasm_bindgen]
pub struct StepInfo {
    tick: u64,
    compute_ms: f64,
}

#[wasm_bindgen]
impl StepInfo {
    pub fn tick(&self) -> u64 { self.tick }
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
}

fn timed<I: FieldIntegrator>(integrator: &mut I) -> StepInfo {
    let t0 = now_ms();
    integrator.step();
    let t1 = now_ms();
    StepInfo { tick: integrator.ticks(), compute_ms: t1 - t0 }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
