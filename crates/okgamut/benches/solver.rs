use criterion::{black_box, criterion_group, criterion_main, Criterion};
use okgamut::adjust::{self, AdjustMethod, ChromaTarget};
use okgamut::{find_cusp, Anchor, Hex, Oklch, Solver};

pub fn run_benchmarks(c: &mut Criterion) {
    // Compare the number of saturation steps for the cusp.
    let mut group = c.benchmark_group("find-cusp");

    for steps in [1, 2, 3] {
        let solver = Solver::default().with_saturation_steps(steps);
        group.bench_function(format!("{}-steps", steps), |b| {
            b.iter(|| {
                for degree in (0..360).step_by(15) {
                    black_box(solver.find_cusp(black_box(degree as f64)));
                }
            })
        });
    }

    group.finish();

    // Compare the anchors for clipping the same out-of-gamut colors.
    let mut group = c.benchmark_group("gamut-clip");
    let colors: Vec<Oklch> = (0..360)
        .step_by(15)
        .map(|degree| Oklch::new(0.8, 0.4, degree as f64))
        .collect();

    for (name, anchor) in [
        ("hue-dependent", Anchor::HueDependent),
        ("hue-independent", Anchor::HueIndependent),
        ("preserve-lightness", Anchor::PreserveLightness),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for color in colors.iter() {
                    black_box(okgamut::find_gamut_intersection_for(color, anchor));
                }
            })
        });
    }

    group.finish();

    let mut group = c.benchmark_group("adjust");
    let pink = ChromaTarget::from(Hex::new(0xdb, 0x70, 0x93));

    group.bench_function("chromatize", |b| {
        b.iter(|| adjust::chromatize(black_box(0.5), &pink, AdjustMethod::Relative))
    });
    group.bench_function("cusp-of-red", |b| b.iter(|| find_cusp(black_box(29.23))));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
