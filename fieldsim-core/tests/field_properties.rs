use approx::{assert_abs_diff_eq, assert_relative_eq};
use fieldsim_core::{
    BoundaryPolicy, DiffusionIntegrator, DiffusionParams, FieldIntegrator, GridSize,
    WaveIntegrator, WaveParams,
};

const ALL_BOUNDARIES: [BoundaryPolicy; 3] = [
    BoundaryPolicy::Absorbing,
    BoundaryPolicy::Reflecting,
    BoundaryPolicy::Insulated,
];

fn wave(n: usize, courant: f64, boundary: BoundaryPolicy) -> WaveIntegrator {
    let params = WaveParams {
        speed: courant,
        dx: 1.0,
        dt: 1.0,
    };
    WaveIntegrator::new(GridSize::new(n, n), params, boundary).unwrap()
}

fn diffusion(n: usize, k: f64, boundary: BoundaryPolicy) -> DiffusionIntegrator {
    DiffusionIntegrator::new(GridSize::new(n, n), DiffusionParams::new(k), boundary).unwrap()
}

#[test]
fn zero_field_is_a_fixed_point() {
    for boundary in ALL_BOUNDARIES {
        let mut w = wave(12, 0.5, boundary);
        let mut d = diffusion(12, 0.25, boundary);
        w.start();
        d.start();
        for _ in 0..50 {
            w.step();
            d.step();
        }
        assert!(w.heights().iter().all(|&v| v == 0.0), "{boundary}");
        assert!(d.heights().iter().all(|&v| v == 0.0), "{boundary}");
    }
}

#[test]
fn wave_pulse_keeps_fourfold_symmetry() {
    let n = 61;
    let c = (n / 2) as isize;
    let mut w = wave(n, 0.5, BoundaryPolicy::Reflecting);

    for y in 0..n {
        for x in 0..n {
            let dx = x as f64 - c as f64;
            let dy = y as f64 - c as f64;
            w.set(x, y, (-(dx * dx + dy * dy) / 9.0).exp());
        }
    }
    w.start();
    for _ in 0..20 {
        w.step();
    }

    let at = |x: isize, y: isize| w.get((c + x) as usize, (c + y) as usize);
    for j in -10..=10 {
        for i in -10..=10 {
            let v = at(i, j);
            assert_abs_diff_eq!(v, at(-i, j), epsilon = 1e-12);
            assert_abs_diff_eq!(v, at(i, -j), epsilon = 1e-12);
            assert_abs_diff_eq!(v, at(j, i), epsilon = 1e-12);
        }
    }
    // the pulse has actually moved
    assert!(at(0, 0) < 0.5);
}

#[test]
fn insulated_diffusion_conserves_interior_mass() {
    let mut d = diffusion(24, 0.2, BoundaryPolicy::Insulated);
    d.inject(8, 14, 4, 1.0);
    d.start();

    let initial = d.grid().mass();
    assert!(initial > 0.0);
    for _ in 0..400 {
        d.step();
        assert_relative_eq!(d.grid().mass(), initial, max_relative = 1e-10);
    }
    // spread across the whole grid by now
    assert!(d.get(1, 1) > 0.0);
    assert!(d.get(22, 22) > 0.0);
}

#[test]
fn absorbing_diffusion_loses_mass_at_the_border() {
    let mut d = diffusion(21, 0.2, BoundaryPolicy::Absorbing);
    d.inject(10, 10, 3, 1.0);
    d.start();

    let initial = d.grid().mass();
    let mut previous = initial;
    for _ in 0..300 {
        d.step();
        let mass = d.grid().mass();
        assert!(mass <= previous + 1e-12, "mass grew: {previous} -> {mass}");
        previous = mass;
    }
    assert!(previous < 0.9 * initial);
}

#[test]
fn reflecting_border_mirrors_interior_with_opposite_sign() {
    let n = 10;
    let mut d = diffusion(n, 0.2, BoundaryPolicy::Reflecting);
    d.inject(2, 5, 3, 1.0);
    d.start();
    for _ in 0..5 {
        d.step();
    }
    for i in 1..n - 1 {
        assert_eq!(d.get(i, 0), -d.get(i, 1));
        assert_eq!(d.get(i, n - 1), -d.get(i, n - 2));
        assert_eq!(d.get(0, i), -d.get(1, i));
        assert_eq!(d.get(n - 1, i), -d.get(n - 2, i));
    }

    let mut w = wave(10, 0.5, BoundaryPolicy::Reflecting);
    w.set(2, 4, 1.0);
    w.start();
    for _ in 0..4 {
        w.step();
    }
    for i in 1..9 {
        assert_eq!(w.get(0, i), -w.get(1, i));
        assert_eq!(w.get(i, 9), -w.get(i, 8));
    }
}

#[test]
fn quarter_diffusion_number_moves_unit_impulse_to_neighbours() {
    for boundary in ALL_BOUNDARIES {
        let mut d = diffusion(7, 0.25, boundary);
        d.set(3, 3, 1.0);
        d.start();
        d.step();

        assert_eq!(d.get(3, 3), 0.0);
        assert_eq!(d.get(2, 3), 0.25);
        assert_eq!(d.get(4, 3), 0.25);
        assert_eq!(d.get(3, 2), 0.25);
        assert_eq!(d.get(3, 4), 0.25);
        assert_eq!(d.get(2, 2), 0.0);
    }
}

#[test]
fn reconfigure_with_new_extents_starts_from_zero() {
    let mut d = diffusion(8, 0.2, BoundaryPolicy::Absorbing);
    d.inject(4, 4, 3, 5.0);
    d.start();
    d.step();

    d.configure(GridSize::new(13, 6), DiffusionParams::new(0.2))
        .unwrap();
    assert_eq!(d.width(), 13);
    assert_eq!(d.height(), 6);
    assert_eq!(d.heights().len(), 13 * 6);
    assert!(d.heights().iter().all(|&v| v == 0.0));
    assert!(d.grid().previous().iter().all(|&v| v == 0.0));

    let mut w = wave(8, 0.5, BoundaryPolicy::Absorbing);
    w.set(4, 4, 1.0);
    w.start();
    w.configure(GridSize::new(5, 9), WaveParams::default())
        .unwrap();
    assert_eq!(w.heights().len(), 45);
    assert!(w.heights().iter().all(|&v| v == 0.0));
    assert!(w.grid().previous().iter().all(|&v| v == 0.0));
}

#[test]
fn repeated_injection_saturates() {
    let mut d = diffusion(16, 0.2, BoundaryPolicy::Absorbing);
    d.inject(7, 7, 3, 0.8);
    let once = d.heights().to_vec();
    d.inject(7, 7, 3, 0.8);

    assert_eq!(d.heights(), once.as_slice());
    assert_eq!(d.get(7, 7), 0.8);
    assert_eq!(d.get(9, 8), 0.8);
}

#[test]
fn heights_track_the_current_level_across_rotations() {
    let mut d = diffusion(6, 0.1, BoundaryPolicy::Absorbing);
    d.set(2, 2, 1.0);
    d.start();
    for _ in 0..7 {
        let before = d.heights().to_vec();
        d.step();
        assert_eq!(d.grid().previous(), before.as_slice());
        assert_eq!(d.heights()[2 * 6 + 2], d.get(2, 2));
    }
    assert_eq!(d.ticks(), 7);
}
