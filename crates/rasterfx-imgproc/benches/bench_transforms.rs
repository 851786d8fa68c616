use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rasterfx_image::{Image, PackedArgb};
use rasterfx_imgproc::{color, enhance, filter, resize, warp};

fn test_image(width: usize, height: usize) -> Image<u8, 3> {
    let data = (0..width * height * 3).map(|i| (i % 251) as u8).collect();
    Image::<u8, 3>::new([width, height].into(), data).unwrap()
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = test_image(*width, *height);

        group.bench_with_input(
            BenchmarkId::new("grayscale", &parameter_string),
            &image,
            |b, i| b.iter(|| color::grayscale(black_box(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("invert", &parameter_string),
            &image,
            |b, i| b.iter(|| enhance::invert(black_box(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("preserve_color", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    color::preserve_color(
                        black_box(i),
                        black_box(PackedArgb(0xFFFF_0000)),
                        black_box(color::ColorTolerance::default()),
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("Geometry");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = test_image(*width, *height);

        group.bench_with_input(
            BenchmarkId::new("rotate", &parameter_string),
            &image,
            |b, i| b.iter(|| warp::rotate(black_box(i), black_box(30.0))),
        );

        group.bench_with_input(
            BenchmarkId::new("swirl", &parameter_string),
            &image,
            |b, i| b.iter(|| warp::swirl(black_box(i), black_box(0.005))),
        );

        group.bench_with_input(
            BenchmarkId::new("scale_half", &parameter_string),
            &image,
            |b, i| b.iter(|| resize::scale(black_box(i), width / 2, height / 2)),
        );
    }
    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = test_image(*width, *height);

        group.bench_with_input(
            BenchmarkId::new("blur", &parameter_string),
            &image,
            |b, i| b.iter(|| filter::blur_with_seed(black_box(i), black_box(5), 0)),
        );

        group.bench_with_input(
            BenchmarkId::new("sobel", &parameter_string),
            &image,
            |b, i| b.iter(|| filter::detect_edges(black_box(i))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_color, bench_geometry, bench_filters);
criterion_main!(benches);
