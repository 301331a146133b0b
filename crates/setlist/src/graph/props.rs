//! Property tests over small random rosters, checked against brute force.

use std::collections::HashSet;

use proptest::prelude::*;

use super::*;
use crate::random::{draw_roster, MemberCount, ReplayToken, RosterCfg};

fn small_graph(seed: u64, teams: usize, pool: usize) -> CompatibilityGraph {
    let cfg = RosterCfg {
        teams,
        pool,
        members: MemberCount::Uniform { min: 1, max: 3 },
    };
    CompatibilityGraph::new(draw_roster(cfg, ReplayToken { seed, index: 0 })).unwrap()
}

fn all_orderings(graph: &CompatibilityGraph) -> HashSet<Setlist> {
    fn extend(
        graph: &CompatibilityGraph,
        path: &mut Vec<usize>,
        used: &mut Vec<bool>,
        out: &mut HashSet<Setlist>,
    ) {
        if path.len() == graph.len() {
            out.insert(path.iter().map(|&i| graph.teams()[i].name.clone()).collect());
            return;
        }
        for j in 0..graph.len() {
            if used[j] {
                continue;
            }
            if let Some(&last) = path.last() {
                if !graph.team(TeamId(last)).is_disjoint(graph.team(TeamId(j))) {
                    continue;
                }
            }
            used[j] = true;
            path.push(j);
            extend(graph, path, used, out);
            path.pop();
            used[j] = false;
        }
    }
    let mut out = HashSet::new();
    extend(graph, &mut Vec::new(), &mut vec![false; graph.len()], &mut out);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn adjacency_symmetric_irreflexive(seed in any::<u64>(), teams in 1usize..12, pool in 2usize..12) {
        let g = small_graph(seed, teams, pool);
        for i in 0..g.len() {
            prop_assert!(!g.adjacent(TeamId(i), TeamId(i)));
            for j in 0..g.len() {
                prop_assert_eq!(g.adjacent(TeamId(i), TeamId(j)), g.adjacent(TeamId(j), TeamId(i)));
                if i != j {
                    prop_assert_eq!(g.adjacent(TeamId(i), TeamId(j)), g.team(TeamId(i)).is_disjoint(g.team(TeamId(j))));
                }
            }
        }
    }

    #[test]
    fn output_is_exactly_the_valid_permutations(seed in any::<u64>(), teams in 1usize..7, pool in 2usize..9) {
        let g = small_graph(seed, teams, pool);
        let got: Vec<Setlist> = g.generate(&GenerateCfg::default()).unwrap().collect();
        let unique: HashSet<Setlist> = got.iter().cloned().collect();
        prop_assert_eq!(unique.len(), got.len());
        for s in &got {
            prop_assert_eq!(s.len(), g.len());
            prop_assert!(g.validate(s).is_ok());
        }
        prop_assert_eq!(unique, all_orderings(&g));
    }

    #[test]
    fn endpoints_are_enforced(seed in any::<u64>(), teams in 1usize..7, pool in 2usize..9, a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let g = small_graph(seed, teams, pool);
        let start = g.teams()[a.index(g.len())].name.clone();
        let end = g.teams()[b.index(g.len())].name.clone();
        let cfg = GenerateCfg::default().start(start.clone()).end(end.clone());
        let got: Vec<Setlist> = g.generate(&cfg).unwrap().collect();
        let expected: Vec<Setlist> = g
            .generate(&GenerateCfg::default())
            .unwrap()
            .filter(|s| s[0] == start && s[s.len() - 1] == end)
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn pins_equal_filtered_sequence(seed in any::<u64>(), teams in 2usize..7, pool in 2usize..9, t in any::<prop::sample::Index>(), p in any::<prop::sample::Index>()) {
        let g = small_graph(seed, teams, pool);
        let team = g.teams()[t.index(g.len())].name.clone();
        let pos = p.index(g.len());
        let got: Vec<Setlist> = g.generate(&GenerateCfg::default().pin(team.clone(), pos)).unwrap().collect();
        let expected: Vec<Setlist> = g
            .generate(&GenerateCfg::default())
            .unwrap()
            .filter(|s| s[pos] == team)
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn cap_is_a_prefix_and_runs_repeat(seed in any::<u64>(), teams in 1usize..8, pool in 4usize..12, k in 0usize..10) {
        let g = small_graph(seed, teams, pool);
        let all: Vec<Setlist> = g.generate(&GenerateCfg::default()).unwrap().collect();
        let again: Vec<Setlist> = g.generate(&GenerateCfg::default()).unwrap().collect();
        prop_assert_eq!(&all, &again);
        let capped: Vec<Setlist> = g.generate(&GenerateCfg::default().limit(k)).unwrap().collect();
        prop_assert_eq!(&capped[..], &all[..k.min(all.len())]);
    }
}
