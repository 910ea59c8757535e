use std::{f64::consts::PI, hint::black_box};

use slmkit::prelude::*;

pub const CANVAS_SIZES: &[(usize, usize)] = &[(256, 256), (600, 800), (1080, 1920)];

pub fn size_label(size: (usize, usize)) -> String {
    format!("{}x{}", size.0, size.1)
}

pub fn gen_targets(n: usize) -> impl Iterator<Item = TargetBeam> {
    (0..n).map(move |i| {
        let theta = 2. * PI * i as f64 / n as f64;
        TargetBeam::new(
            black_box(0.1 * theta.cos()),
            black_box(0.1 * theta.sin()),
            black_box(1e-5 * i as f64),
        )
    })
}

pub fn phase_pattern(size: (usize, usize)) -> Pattern {
    LensesAndPrisms::new(gen_targets(2))
        .compute(size)
        .expect("two targets on a valid canvas")
}
