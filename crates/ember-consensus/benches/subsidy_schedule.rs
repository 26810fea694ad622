use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ember_consensus::{block_subsidy, cumulative_subsidy, Amount, ConsensusParams};

fn bench_subsidy_schedule(c: &mut Criterion) {
    let params = ConsensusParams::main();

    c.bench_function("block_subsidy_sparse_scan", |b| {
        b.iter(|| {
            let mut acc: Amount = 0;
            for height in (0..6_300_000u64).step_by(1_000) {
                acc += block_subsidy(black_box(height), &params);
            }
            acc
        })
    });

    c.bench_function("cumulative_subsidy_through_bootstrap", |b| {
        let end_height = params.fork_height + params.bootstrap_blocks + 2;
        b.iter(|| cumulative_subsidy(black_box(end_height), &params))
    });
}

criterion_group!(benches, bench_subsidy_schedule);
criterion_main!(benches);
