//! Criterion benches for graph construction, ranking, and setlist enumeration.
//!
//! Rosters come from the seeded sampler so runs are comparable. Results live
//! under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use setlist::graph::Ranking;
use setlist::random::{draw_roster, MemberCount, ReplayToken, RosterCfg};
use setlist::{CompatibilityGraph, GenerateCfg};

fn showcase_cfg(teams: usize) -> RosterCfg {
    RosterCfg {
        teams,
        pool: teams * 4,
        members: MemberCount::Uniform { min: 4, max: 7 },
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for teams in [16usize, 64, 128] {
        let roster = draw_roster(showcase_cfg(teams), ReplayToken { seed: 42, index: 0 });
        group.bench_function(BenchmarkId::new("build_graph", teams), |b| {
            b.iter_batched(
                || roster.clone(),
                |r| CompatibilityGraph::new(r).unwrap(),
                BatchSize::SmallInput,
            )
        });
        let graph = CompatibilityGraph::new(roster).unwrap();
        group.bench_function(BenchmarkId::new("rank_by_degree", teams), |b| {
            b.iter(|| Ranking::by_degree(&graph).adjacency(&graph))
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let graph = CompatibilityGraph::new(draw_roster(
        showcase_cfg(16),
        ReplayToken { seed: 7, index: 1 },
    ))
    .unwrap();
    let first_team = graph.teams()[0].name.clone();
    let last_team = graph.teams()[graph.len() - 1].name.clone();
    for limit in [1usize, 100] {
        group.bench_function(BenchmarkId::new("first_k", limit), |b| {
            let cfg = GenerateCfg::default().limit(limit);
            b.iter(|| graph.generate(&cfg).unwrap().count())
        });
        group.bench_function(BenchmarkId::new("first_k_fixed_ends", limit), |b| {
            let cfg = GenerateCfg::default()
                .limit(limit)
                .start(first_team.clone())
                .end(last_team.clone());
            b.iter(|| graph.generate(&cfg).unwrap().count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_generate);
criterion_main!(benches);
