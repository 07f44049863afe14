use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use justified::{Grid, ItemId, LayoutOptions, Size, layout};

fn photo_sizes(count: usize) -> Vec<Size> {
    (0..count)
        .map(|i| {
            let w = 150 + 50 * ((i * 7 + 1) % 6) as u32;
            let h = 150 + 50 * ((i * 11 + 4) % 6) as u32;
            Size::new(w, h)
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let options = LayoutOptions::new(1280).with_padding(2);

    for count in [15, 100, 1_000, 10_000] {
        let sizes = photo_sizes(count);
        group.bench_with_input(BenchmarkId::new("items", count), &sizes, |b, sizes| {
            b.iter(|| layout(black_box(&options), sizes.iter().copied()))
        });
    }
    group.finish();
}

fn bench_render_only(c: &mut Criterion) {
    // Assembly done once; measures the justification pass alone
    let sizes = photo_sizes(1_000);
    let mut grid = Grid::new(1280, 2);
    for (i, &size) in sizes.iter().enumerate() {
        grid.push_item(ItemId(i), size);
    }

    c.bench_function("render_1000", |b| b.iter(|| black_box(&grid).render()));
}

fn bench_container_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_width");
    let sizes = photo_sizes(500);

    for width in [320, 1024, 2560] {
        let options = LayoutOptions::new(width);
        group.bench_with_input(BenchmarkId::new("width", width), &options, |b, options| {
            b.iter(|| layout(options, sizes.iter().copied()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_layout,
    bench_render_only,
    bench_container_widths
);
criterion_main!(benches);
