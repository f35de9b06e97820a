use std::hint::black_box;

use atuin_stats::models::{AliasTable, HistoryRecord};
use atuin_stats::{build_tally, normalize_command};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const COMMANDS: [&str; 8] = [
    "git status",
    "gs --short",
    "cargo test --workspace",
    "ls -la",
    "k get pods -n kube-system",
    "cd ..",
    "vim src/lib.rs",
    "docker compose up -d",
];

fn aliases() -> AliasTable {
    [("gs", "git status"), ("k", "kubectl"), ("ll", "ls -la")].into_iter().collect()
}

/// Generate N synthetic history records cycling through common commands
fn generate_records(num_records: usize) -> Vec<HistoryRecord> {
    (0..num_records)
        .map(|i| HistoryRecord {
            command: COMMANDS[i % COMMANDS.len()].to_string(),
            cwd: "/home/bench".to_string(),
            deleted_at: None,
            duration: 1_000,
            exit: 0,
            hostname: "bench:bench".to_string(),
            id: format!("{:032x}", i),
            session: "bench-session".to_string(),
            timestamp: i as i64,
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let aliases = aliases();
    c.bench_function("normalize_command", |b| {
        b.iter(|| {
            for command in COMMANDS {
                black_box(normalize_command(black_box(command), &aliases));
            }
        });
    });
}

fn bench_build_tally(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tally");
    let aliases = aliases();

    for size in [1_000, 10_000, 100_000].iter() {
        let records = generate_records(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| build_tally(black_box(&records), &aliases).top(10));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_build_tally);
criterion_main!(benches);
