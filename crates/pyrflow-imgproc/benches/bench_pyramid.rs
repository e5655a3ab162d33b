use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use pyrflow_image::Image;
use pyrflow_imgproc::pyramid::{pyramid_reduce, reduced_size};

fn bench_pyramid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pyramid Operations");
    let mut rng = rand::rng();

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image_data = (0..(*width * *height)).map(|_| rng.random::<f32>()).collect();
        let image = Image::<f32, 1>::new(image_size, image_data).unwrap();

        let down_image = Image::<f32, 1>::from_size_val(reduced_size(image_size, 2.0), 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("pyramid_reduce", &parameter_string),
            &(&image, &down_image),
            |b, i| {
                let (src, mut dst) = (i.0, i.1.clone());
                b.iter(|| {
                    black_box(pyramid_reduce(src, &mut dst, 2.0)).unwrap();
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_pyramid);
criterion_main!(benches);
