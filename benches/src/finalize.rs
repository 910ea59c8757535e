use std::hint::black_box;

use benches::{phase_pattern, size_label, CANVAS_SIZES};
use slmkit::prelude::*;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn phase_device(c: &mut Criterion) {
    let mut group = c.benchmark_group("slmkit/finalize/phase");

    CANVAS_SIZES.iter().for_each(|&size| {
        let phase = phase_pattern(size);
        let amplitude = Grid::new(size).radial_squared().map(|r| (-r * 1e-5).exp());
        let encoder = PatternEncoder::for_device(DeviceClass::Phase);
        group.bench_with_input(
            BenchmarkId::new("phase-only", size_label(size)),
            &phase,
            |b, phase| b.iter(|| encoder.finalize(Some(black_box(phase)), None).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("checker", size_label(size)),
            &(phase, amplitude),
            |b, (phase, amplitude)| {
                b.iter(|| {
                    encoder
                        .finalize(Some(black_box(phase)), Some(black_box(amplitude)))
                        .unwrap()
                })
            },
        );
    });
    group.finish();
}

fn amplitude_device(c: &mut Criterion) {
    let mut group = c.benchmark_group("slmkit/finalize/amplitude");

    CANVAS_SIZES.iter().for_each(|&size| {
        let phase = phase_pattern(size);
        let amplitude = Pattern::from_element(size.0, size.1, 1.);
        let encoder = PatternEncoder::for_device(DeviceClass::Amplitude);
        group.bench_with_input(
            BenchmarkId::new("fringe", size_label(size)),
            &(phase, amplitude),
            |b, (phase, amplitude)| {
                b.iter(|| {
                    encoder
                        .finalize(Some(black_box(phase)), Some(black_box(amplitude)))
                        .unwrap()
                })
            },
        );
    });
    group.finish();
}

criterion_group!(benches, phase_device, amplitude_device);
criterion_main!(benches);
