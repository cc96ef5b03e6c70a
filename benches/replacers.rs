use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::{PageId, Policy, SimulationInput, Simulator};

fn reference_string(len: usize) -> Vec<PageId> {
    // Deterministic skewed pattern: a hot set of 4 pages and a cold tail.
    (0..len)
        .map(|i| {
            let id = if i % 3 == 0 { (i * 7) % 40 } else { i % 4 };
            PageId::new(id as i64)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let refs = reference_string(2_000);
    let mut group = c.benchmark_group("simulate");

    for policy in Policy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            b.iter(|| {
                let input = SimulationInput::new(8, refs.clone()).with_policy(policy);
                let log = Simulator::new(input).unwrap().run();
                black_box(log.stats.faults)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
