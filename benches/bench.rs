use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use ordered_tree::OrderedTree;

/// Emits `values` in an insertion order that yields a balanced tree: midpoint
/// first, then each half the same way. The tree does not rebalance itself, so
/// inserting sorted values directly would degenerate it to a list.
fn balanced_order(values: &[i64], out: &mut Vec<i64>) {
    if values.is_empty() {
        return;
    }
    let mid = values.len() / 2;
    out.push(values[mid]);
    balanced_order(&values[..mid], out);
    balanced_order(&values[mid + 1..], out);
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut OrderedTree, i64)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes as i64 - 1;

        let sorted: Vec<i64> = (0..num_nodes as i64).collect();
        let mut order = Vec::with_capacity(num_nodes);
        balanced_order(&sorted, &mut order);
        let tree = OrderedTree::from_values(order).unwrap();

        let id = BenchmarkId::from_parameter(num_nodes);
        group.bench_function(id, |b| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| f(&mut tree, largest_element_in_tree),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn contains(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, largest| {
        black_box(tree.contains(largest));
    });
}

fn insert(c: &mut Criterion) {
    bench_helper(c, "insert", |tree, largest| {
        tree.insert(largest + 1).unwrap();
    });
}

fn delete(c: &mut Criterion) {
    bench_helper(c, "delete", |tree, largest| {
        tree.delete(largest).unwrap();
    });
}

fn inorder(c: &mut Criterion) {
    bench_helper(c, "inorder", |tree, _| {
        black_box(tree.inorder());
    });
}

criterion_group!(benches, contains, insert, delete, inorder);
criterion_main!(benches);
