use criterion::{criterion_group, criterion_main, Criterion};
use huffcode::{FrequencyTable, HuffmanTree, PriorityQueue};

fn bench_pqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("pqueue");
    // Pseudo-random but fixed input so runs are comparable.
    let input: Vec<u64> = (0..1000u64).map(|i| (i * 2654435761) % 4093).collect();

    group.bench_function("push_1000", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new(|a: &u64, b: &u64| a.cmp(b));
            for &v in &input {
                queue.push(v);
            }
            queue
        })
    });

    group.bench_function("push_pop_1000", |b| {
        b.iter(|| {
            let mut queue = PriorityQueue::new(|a: &u64, b: &u64| a.cmp(b));
            for &v in &input {
                queue.push(v);
            }
            let mut last = 0;
            while !queue.is_empty() {
                last = queue.pop_min();
            }
            last
        })
    });

    group.finish();
}

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");

    // Full alphabet, geometric-ish weights: a dense, deep tree.
    let mut dense = FrequencyTable::new();
    for s in 0..=255u16 {
        dense.set(s, 1 + (s as u64 * 37) % 1000);
    }

    // English-like text: a couple dozen symbols.
    let text = FrequencyTable::count_bytes(
        b"it was the best of times, it was the worst of times, \
          it was the age of wisdom, it was the age of foolishness",
    );

    group.bench_function("dense_256", |b| {
        b.iter(|| HuffmanTree::from_frequencies(&dense))
    });
    group.bench_function("text", |b| b.iter(|| HuffmanTree::from_frequencies(&text)));
    group.bench_function("sentinel_only", |b| {
        let empty = FrequencyTable::new();
        b.iter(|| HuffmanTree::from_frequencies(&empty))
    });

    group.finish();
}

fn bench_code_table(c: &mut Criterion) {
    let mut dense = FrequencyTable::new();
    for s in 0..=255u16 {
        dense.set(s, 1 + (s as u64 * 37) % 1000);
    }
    let tree = HuffmanTree::from_frequencies(&dense);

    c.bench_function("code_table_257", |b| b.iter(|| tree.code_table()));
}

criterion_group!(benches, bench_pqueue, bench_tree_build, bench_code_table);
criterion_main!(benches);
