use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use phylo_edit_distance::{diff_with, Config, CostMatrix, LabeledTree};

fn tree(depth: usize, breadth: usize, next: &mut usize) -> LabeledTree {
    let label = *next;
    *next += 1;

    let children = if depth == 0 {
        Vec::new()
    } else {
        (0..breadth)
            .map(|_| tree(depth - 1, breadth, next))
            .collect()
    };

    LabeledTree::new(label, label, children)
}

fn costs(n: usize) -> CostMatrix {
    CostMatrix::from_rows((0..=n).map(move |a| {
        (0..=n).map(move |b| match (a == n, b == n) {
            (true, true) => 0.0,
            (false, false) => ((a + b) % 3) as f64,
            _ => 2.0,
        })
    }))
    .unwrap()
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary tree diff");
    for depth in [2, 3] {
        let t = tree(depth, 2, &mut 0);
        let costs = costs((1 << (depth + 1)) - 1);

        for parallel in [false, true] {
            let config = Config::builder().parallel(parallel).build();
            let id = BenchmarkId::new(if parallel { "parallel" } else { "sequential" }, depth);
            group.bench_with_input(id, &t, |b, t| {
                b.iter(|| diff_with(t, t, &costs, &config))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
