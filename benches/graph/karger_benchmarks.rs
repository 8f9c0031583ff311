use contraction_mincut::graph::{
    estimate_cut, estimate_cut_amplified, estimate_cut_amplified_parallel, AmplifierConfig,
    DefaultSelector, Graph, DEFAULT_STOP_SIZE,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Two complete graphs of `half` vertices joined by one edge.
fn barbell(half: usize) -> Graph {
    let mut edges = Vec::new();
    for side in [0, half] {
        for a in 0..half {
            for b in (a + 1)..half {
                edges.push((side + a, side + b));
            }
        }
    }
    edges.push((half - 1, half));
    Graph::from_edges(2 * half, &edges).expect("barbell edges are valid")
}

fn bench_karger(c: &mut Criterion) {
    let mut group = c.benchmark_group("karger");
    for half in [5, 10, 20] {
        let graph = barbell(half);
        let config = AmplifierConfig::default();

        group.bench_with_input(BenchmarkId::new("single_pass", half * 2), &graph, |b, g| {
            let mut selector = DefaultSelector::seeded(1);
            b.iter(|| estimate_cut(black_box(g), DEFAULT_STOP_SIZE, &mut selector))
        });
        group.bench_with_input(BenchmarkId::new("karger_stein", half * 2), &graph, |b, g| {
            let mut selector = DefaultSelector::seeded(1);
            b.iter(|| estimate_cut_amplified(black_box(g), &config, &mut selector))
        });
        group.bench_with_input(
            BenchmarkId::new("karger_stein_parallel", half * 2),
            &graph,
            |b, g| {
                let mut selector = DefaultSelector::seeded(1);
                b.iter(|| estimate_cut_amplified_parallel(black_box(g), &config, &mut selector))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_karger);
criterion_main!(benches);
