//! Benchmark for full item pool generation and junk sampling.
//!
//! Run with: cargo bench --bench pool_generation

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hatslot::{
    utils, GenerationContext, Generator, HatType, ItemPoolGenerator, JunkDistributor, PlayerId,
    SlotOptions, StaticWorldContext,
};

fn benchmark_pool_generation(c: &mut Criterion) {
    let options = SlotOptions {
        trap_chance: 25,
        enable_dlc1: 1,
        enable_dlc2: 1,
        ..SlotOptions::default()
    };
    let world = StaticWorldContext::vanilla(&options, 300);
    let ctx = GenerationContext {
        player: PlayerId(1),
        options: &options,
        world: &world,
        craft_order: HatType::ALL,
    };

    c.bench_function("item_pool_300_locations", |b| {
        let mut rng = utils::create_rng(1);
        b.iter(|| black_box(ItemPoolGenerator.generate(black_box(&ctx), &mut rng)))
    });
}

fn benchmark_junk_sampling(c: &mut Criterion) {
    let options = SlotOptions {
        trap_chance: 40,
        ..SlotOptions::default()
    };
    let world = StaticWorldContext::new(0);
    let ctx = GenerationContext {
        player: PlayerId(1),
        options: &options,
        world: &world,
        craft_order: HatType::ALL,
    };

    let mut group = c.benchmark_group("junk_sampling");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("ten_thousand_junk_items", |b| {
        let mut rng = utils::create_rng(2);
        let distributor = JunkDistributor { count: 10_000 };
        b.iter(|| black_box(distributor.generate(&ctx, &mut rng)))
    });
    group.finish();
}

criterion_group!(benches, benchmark_pool_generation, benchmark_junk_sampling);
criterion_main!(benches);
