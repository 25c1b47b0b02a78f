//! # Tree Layout Benchmarks
//!
//! The tidy-tree walk is linear in the node count; these groups check that
//! claim across shapes and sizes.
//!
//! | Group | Shape | Sizes |
//! |-------|-------|-------|
//! | layout/random | random recursive tree | 100 .. 10k nodes |
//! | layout/balanced | complete ternary tree | depth 4 .. 8 |
//! | layout/chain | single path | 500 .. 2k nodes |
//! | render/svg | random tree into an SVG document | 100 .. 5k nodes |

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use oq_02_tree_renderer::{layout_tree, Bounds, Margins, SvgSurface, TreeRenderer, TreeRendererApi};
use oq_tests::fixtures::{balanced, chain, random_tree};
use shared_types::{AnswerPayload, TreeNode};

fn bounds() -> (Bounds, Margins) {
    (
        Bounds::new(4096.0, 2048.0),
        Margins::new(40.0, 90.0, 50.0, 90.0),
    )
}

fn bench_shape(c: &mut Criterion, group_name: &str, trees: Vec<(usize, TreeNode)>) {
    let mut group = c.benchmark_group(group_name);
    group.measurement_time(Duration::from_secs(5));
    let (size, margins) = bounds();

    for (param, tree) in &trees {
        group.throughput(Throughput::Elements(tree.node_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(param), tree, |b, tree| {
            b.iter(|| black_box(layout_tree(Some(tree), size, margins)))
        });
    }

    group.finish();
}

fn bench_layout_random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let trees = [100, 1_000, 10_000]
        .into_iter()
        .map(|n| (n, random_tree(&mut rng, n)))
        .collect();
    bench_shape(c, "layout/random", trees);
}

fn bench_layout_balanced(c: &mut Criterion) {
    let trees = [4, 6, 8].into_iter().map(|d| (d, balanced(d, 3))).collect();
    bench_shape(c, "layout/balanced", trees);
}

fn bench_layout_chain(c: &mut Criterion) {
    let trees = [500, 2_000].into_iter().map(|n| (n, chain(n))).collect();
    bench_shape(c, "layout/chain", trees);
}

fn bench_render_svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/svg");
    let mut rng = StdRng::seed_from_u64(7);
    let renderer = TreeRenderer::default();
    let (size, _) = bounds();

    for n in [100, 1_000, 5_000] {
        let payload = AnswerPayload {
            question: String::new(),
            answer: String::new(),
            query: String::new(),
            tree: Some(random_tree(&mut rng, n)),
            response_time_ms: None,
        };
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &payload, |b, payload| {
            b.iter(|| {
                let mut svg = SvgSurface::new(size);
                renderer.visualize(payload, &mut svg).ok();
                black_box(svg.to_document().len())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_layout_random,
    bench_layout_balanced,
    bench_layout_chain,
    bench_render_svg
);
criterion_main!(benches);
