use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tracelib::address::AddressRange;
use tracelib::generator::Generator;
use tracelib::trace::DEFAULT_LINE_WIDTH;

/// Drawing and wrapping traces of the sizes usually pasted into a simulator
pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generate");
    let range = AddressRange::new(0x1000, 0x8000).unwrap();

    for count in [100usize, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("Draw", count), &count, |bench, count| {
            let mut generator = Generator::seeded(Some(0));
            bench.iter(|| generator.generate(*count, &range).unwrap());
        });
        // Ignoring draw time, only the text form
        let list = Generator::seeded(Some(0)).generate(count, &range).unwrap();
        group.bench_with_input(BenchmarkId::new("Format", count), &list, |bench, list| {
            bench.iter(|| list.format(DEFAULT_LINE_WIDTH));
        });
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = criterion_benchmark
);
criterion_main!(benches);
