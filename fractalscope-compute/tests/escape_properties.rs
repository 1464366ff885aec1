use fractalscope_compute::{
    iterate, ColorScheme, Complex, FractalMode, FractalParameters, Palette,
};

fn mandelbrot(max_iterations: u32) -> FractalParameters {
    FractalParameters::new(max_iterations, ColorScheme::Classic, FractalMode::Mandelbrot)
}

/// Regular grid over the default Mandelbrot framing, both half-planes.
fn sample_grid() -> Vec<Complex> {
    let mut points = Vec::new();
    for i in 0..=24 {
        for j in 0..=16 {
            let re = -2.25 + 3.5 * i as f64 / 24.0;
            let im = -1.25 + 2.5 * j as f64 / 16.0;
            points.push(Complex::new(re, im));
        }
    }
    points
}

#[test]
fn escape_index_does_not_depend_on_cap() {
    let escaping = [
        Complex::new(2.0, 0.0),
        Complex::new(0.4, 0.3),
        Complex::new(-0.75, 0.1),
        Complex::new(-0.1, 0.9),
        Complex::new(20.0, 0.0),
    ];
    for c in escaping {
        let reference = iterate(c, &mandelbrot(10_000));
        assert!(reference.escaped, "{c} should escape");
        for cap in [reference.iterations + 1, 500, 2_000, 50_000] {
            let result = iterate(c, &mandelbrot(cap));
            assert!(result.escaped);
            assert_eq!(result.iterations, reference.iterations, "cap {cap} for {c}");
            assert_eq!(result.smooth_iterations, reference.smooth_iterations);
        }
    }
}

#[test]
fn cap_below_escape_index_reports_interior() {
    let c = Complex::new(-0.75, 0.1);
    let n = iterate(c, &mandelbrot(10_000)).iterations;
    let result = iterate(c, &mandelbrot(n));
    assert!(!result.escaped);
    assert_eq!(result.iterations, n);
}

#[test]
fn origin_never_escapes() {
    for n in [1, 10, 1000] {
        let result = iterate(Complex::ZERO, &mandelbrot(n));
        assert!(!result.escaped, "origin escaped with cap {n}");
        assert_eq!(result.iterations, n);
    }
}

#[test]
fn far_real_point_escapes_immediately() {
    let result = iterate(Complex::new(20.0, 0.0), &mandelbrot(1000));
    assert!(result.escaped);
    assert_eq!(result.iterations, 0);
    assert_eq!(result.final_norm_sq, 400.0);
}

#[test]
fn mandelbrot_is_symmetric_about_real_axis() {
    let params = mandelbrot(300);
    for p in sample_grid() {
        let upper = iterate(p, &params);
        let lower = iterate(Complex::new(p.re, -p.im), &params);
        assert_eq!(upper.escaped, lower.escaped, "at {p}");
        assert_eq!(upper.iterations, lower.iterations, "at {p}");
        assert_eq!(upper.smooth_iterations, lower.smooth_iterations, "at {p}");
    }
}

#[test]
fn julia_is_symmetric_through_origin() {
    // z -> z² + c is invariant under z -> -z, so ±z behave identically
    let params = FractalParameters::new(
        300,
        ColorScheme::Classic,
        FractalMode::Julia {
            c: Complex::new(-0.8, 0.156),
        },
    );
    for p in sample_grid() {
        let a = iterate(p, &params);
        let b = iterate(Complex::new(-p.re, -p.im), &params);
        assert_eq!(a.escaped, b.escaped, "at {p}");
        assert_eq!(a.iterations, b.iterations, "at {p}");
    }
}

#[test]
fn palettes_are_deterministic_and_sized() {
    for scheme in ColorScheme::ALL {
        for n in [1, 64, 256, 5000] {
            let a = Palette::build(scheme, n);
            let b = Palette::build(scheme, n);
            assert_eq!(a.len(), n as usize + 1, "{:?} with {n}", scheme);
            assert_eq!(a.colors(), b.colors(), "{:?} with {n}", scheme);
        }
    }
}

#[test]
fn palettes_differ_between_schemes() {
    let tables: Vec<_> = ColorScheme::ALL
        .iter()
        .map(|s| Palette::build(*s, 128))
        .collect();
    for (i, a) in tables.iter().enumerate() {
        for b in &tables[i + 1..] {
            assert_ne!(a.colors(), b.colors());
        }
    }
}
