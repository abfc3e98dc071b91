use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use nuthatch_tree::{Builder, NodeIterator as _, SyntaxKind, SyntaxTree};
use nuthatch_visit::Collector;

fn build_usings(count: usize) -> SyntaxTree {
    let mut builder = Builder::new();
    builder.start_node(SyntaxKind::SOURCE_FILE);
    for index in 0..count {
        let root = if index % 2 == 0 { "System" } else { "Microsoft" };
        builder.start_node(SyntaxKind::USING_DIRECTIVE);
        builder.start_node(SyntaxKind::PATH);
        builder.leaf(SyntaxKind::NAME, root);
        builder.leaf(SyntaxKind::NAME, &format!("Module{index}"));
        builder.finish_node();
        builder.finish_node();
    }
    builder.finish_node();
    builder.finish()
}

fn benchmark_collector(c: &mut Criterion) {
    let mut group = c.benchmark_group("Collector Benchmark");

    for size in [64usize, 1024] {
        let tree = build_usings(size);
        group.throughput(Throughput::Elements(tree.node_count() as u64));

        group.bench_with_input(BenchmarkId::new("collect", size), &tree, |b, tree| {
            b.iter(|| {
                let mut collector = Collector::of_kind(SyntaxKind::USING_DIRECTIVE, |node| {
                    node.descendants()
                        .of_kind(SyntaxKind::NAME)
                        .next()
                        .is_some_and(|name| name.payload() == Some("System"))
                });
                collector.run(tree.root());
                black_box(collector.into_matches().len());
            });
        });

        group.bench_with_input(BenchmarkId::new("query", size), &tree, |b, tree| {
            b.iter(|| {
                let count =
                    tree.root().descendants().of_kind(SyntaxKind::USING_DIRECTIVE).count();
                black_box(count);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_collector);
criterion_main!(benches);
