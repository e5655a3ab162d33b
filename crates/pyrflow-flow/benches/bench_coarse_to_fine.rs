use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use pyrflow_flow::{coarse_to_fine, get_pyramid, CoarseToFineParams, FlowError, FlowField};
use pyrflow_image::{GrayImage, Image};

fn bench_coarse_to_fine(c: &mut Criterion) {
    let mut group = c.benchmark_group("CoarseToFine");
    let mut rng = rand::rng();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let num_pixels = *width * *height;

        let i0 = Image::<u8, 1>::new(
            image_size,
            (0..num_pixels).map(|_| rng.random::<u8>()).collect(),
        )
        .unwrap();
        let i1 = Image::<u8, 1>::new(
            image_size,
            (0..num_pixels).map(|_| rng.random::<u8>()).collect(),
        )
        .unwrap();

        let params = CoarseToFineParams::default();

        group.bench_with_input(
            BenchmarkId::new("identity_solver", &parameter_string),
            &(&i0, &i1),
            |b, i| {
                let (i0, i1) = *i;
                let mut solver =
                    |_: &GrayImage, _: &GrayImage, flow: FlowField| Ok::<_, FlowError>(flow);
                b.iter(|| {
                    black_box(coarse_to_fine(i0, i1, &mut solver, &params)).unwrap();
                })
            },
        );

        let j0 = i0.cast_and_scale::<f32>(1.0 / 255.0).unwrap();
        let j1 = i1.cast_and_scale::<f32>(1.0 / 255.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("get_pyramid", &parameter_string),
            &(&j0, &j1),
            |b, i| {
                let (j0, j1) = *i;
                b.iter(|| {
                    black_box(get_pyramid(j0.clone(), j1.clone(), 2.0, 16)).unwrap();
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_coarse_to_fine);
criterion_main!(benches);
