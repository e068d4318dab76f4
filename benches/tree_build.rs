//! Benchmark tree construction across leaf counts

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hashtree::tree::builder::build_tree;
use hashtree::tree::node::{Element, Leaf};

fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for leaf_count in [4usize, 64, 1024, 16384] {
        let blocks: Vec<Vec<u8>> = (0..leaf_count)
            .map(|i| format!("block-{}", i).into_bytes())
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(leaf_count),
            &blocks,
            |b, blocks| {
                b.iter(|| {
                    let elements: Vec<Element> = blocks
                        .iter()
                        .map(|payload| Leaf::new(payload.clone()).into())
                        .collect();
                    build_tree(elements).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_tree);
criterion_main!(benches);
