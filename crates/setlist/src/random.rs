//! Reproducible random rosters for property tests and benchmarks.
//!
//! Model
//! - `teams` teams named `t00, t01, ...`, each drawing a member count from
//!   `members` and then that many distinct members from a shared pool
//!   `m00, m01, ...` of size `pool`. A small pool relative to team size gives
//!   dense conflicts (sparse compatibility graph) and vice versa.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Member-count distribution per team.
#[derive(Clone, Copy, Debug)]
pub enum MemberCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl MemberCount {
    fn sample<R: Rng>(&self, rng: &mut R, pool: usize) -> usize {
        let k = match *self {
            MemberCount::Fixed(k) => k,
            MemberCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        };
        k.min(pool)
    }
}

/// Roster sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RosterCfg {
    pub teams: usize,
    pub pool: usize,
    pub members: MemberCount,
}

impl Default for RosterCfg {
    fn default() -> Self {
        // Roughly the shape of a 16-act showcase.
        Self {
            teams: 16,
            pool: 60,
            members: MemberCount::Uniform { min: 4, max: 7 },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a roster in team order, ready for [`crate::CompatibilityGraph::new`].
pub fn draw_roster(cfg: RosterCfg, tok: ReplayToken) -> Vec<(String, Vec<String>)> {
    let mut rng = tok.to_std_rng();
    let pool = cfg.pool.max(1);
    (0..cfg.teams)
        .map(|t| {
            let k = cfg.members.sample(&mut rng, pool);
            let mut picks: Vec<usize> = rand::seq::index::sample(&mut rng, pool, k).into_vec();
            picks.sort_unstable();
            let members = picks.into_iter().map(|m| format!("m{m:02}")).collect();
            (format!("t{t:02}"), members)
        })
        .collect()
}
