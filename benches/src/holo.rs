use std::{hint::black_box, sync::Arc};

use benches::{gen_targets, size_label, CANVAS_SIZES};
use slmkit::prelude::*;
use slmkit_holo::Backend;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const NUM_TARGETS: &[usize] = &[1, 10, 50];

fn lenses_and_prisms_with<B: Backend>(c: &mut Criterion, name: &str, backend: Arc<B>) {
    let mut group = c.benchmark_group(format!("slmkit/holo/lenses-and-prisms/{name}"));

    CANVAS_SIZES.iter().for_each(|&size| {
        let basis = BasisFields::new(size);
        NUM_TARGETS.iter().for_each(|&n| {
            group.bench_with_input(
                BenchmarkId::new(size_label(size), n),
                &n,
                |b, &n| {
                    let holo = LensesAndPrisms::with_backend(
                        gen_targets(n),
                        LensesAndPrismsOption::default(),
                        backend.clone(),
                    );
                    b.iter(|| holo.compute_with_basis(black_box(&basis)).unwrap())
                },
            );
        });
    });
    group.finish();
}

fn sequential(c: &mut Criterion) {
    lenses_and_prisms_with(c, "sequential", Arc::new(NalgebraBackend::new()));
}

#[cfg(feature = "parallel")]
fn parallel(c: &mut Criterion) {
    lenses_and_prisms_with(c, "parallel", Arc::new(NalgebraBackend::parallel()));
}

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, sequential);
#[cfg(feature = "parallel")]
criterion_group!(benches, sequential, parallel);
criterion_main!(benches);
