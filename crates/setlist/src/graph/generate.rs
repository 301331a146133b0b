//! Caller-facing setlist generation: name resolution, ranking, search, and
//! validation before anything is surfaced.

use crate::error::{ConfigError, TeamRole};

use super::ranking::Ranking;
use super::search::{PathSearch, SearchStats, SlotError, Slots};
use super::types::{CompatibilityGraph, TeamId};

/// A full ordering of team names with no shared member between neighbours.
pub type Setlist = Vec<String>;

/// Generation options.
///
/// `pins` use 0-based positions. `start`/`end` are shorthands for pins at the
/// first and last position.
#[derive(Clone, Debug, Default)]
pub struct GenerateCfg {
    pub limit: Option<usize>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub pins: Vec<(String, usize)>,
    /// Log dropped candidates at `warn` instead of `debug`.
    pub report_rejections: bool,
}

impl GenerateCfg {
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start(mut self, team: impl Into<String>) -> Self {
        self.start = Some(team.into());
        self
    }

    pub fn end(mut self, team: impl Into<String>) -> Self {
        self.end = Some(team.into());
        self
    }

    pub fn pin(mut self, team: impl Into<String>, position: usize) -> Self {
        self.pins.push((team.into(), position));
        self
    }

    pub fn report_rejections(mut self, on: bool) -> Self {
        self.report_rejections = on;
        self
    }
}

impl CompatibilityGraph {
    /// Lazily enumerate valid setlists.
    ///
    /// Fails before searching if a start, end, or pinned team is unknown, a pin
    /// is out of range, or two different teams claim one position. A fresh
    /// call with the same `cfg` yields the same sequence.
    pub fn generate(&self, cfg: &GenerateCfg) -> Result<Setlists<'_>, ConfigError> {
        let n = self.len();
        let start = cfg
            .start
            .as_deref()
            .map(|s| self.require(s, TeamRole::Start))
            .transpose()?;
        let end = cfg
            .end
            .as_deref()
            .map(|s| self.require(s, TeamRole::End))
            .transpose()?;
        let mut claims: Vec<(TeamId, usize)> = Vec::new();
        claims.extend(start.map(|id| (id, 0)));
        claims.extend(end.map(|id| (id, n - 1)));
        for (name, position) in &cfg.pins {
            let id = self.require(name, TeamRole::Pinned)?;
            if *position >= n {
                return Err(ConfigError::PinOutOfRange {
                    name: name.clone(),
                    position: *position,
                    len: n,
                });
            }
            claims.push((id, *position));
        }

        let ranking = Ranking::by_degree(self);
        let mut slots = Slots::open(n);
        for (id, position) in claims {
            let rank = ranking.rank_of[id.0];
            match slots.pin(position, rank) {
                Ok(()) => {}
                Err(SlotError::Taken { occupant, .. }) => {
                    return Err(ConfigError::ConflictingPins {
                        position,
                        first: ranking.names[occupant].to_string(),
                        second: self.team(id).name.clone(),
                    });
                }
                Err(SlotError::OutOfRange { .. }) => {
                    return Err(ConfigError::PinOutOfRange {
                        name: self.team(id).name.clone(),
                        position,
                        len: n,
                    });
                }
            }
        }

        tracing::debug!(
            teams = n,
            limit = ?cfg.limit,
            start = ?cfg.start,
            end = ?cfg.end,
            pins = cfg.pins.len(),
            "starting setlist search"
        );
        let search = PathSearch::new(ranking.adjacency(self), slots);
        Ok(Setlists::new(
            self,
            ranking,
            search,
            cfg.limit,
            cfg.report_rejections,
        ))
    }

    /// Drain [`generate`](Self::generate) and count the results (respects `limit`).
    pub fn count_setlists(&self, cfg: &GenerateCfg) -> Result<usize, ConfigError> {
        Ok(self.generate(cfg)?.count())
    }
}

/// Lazy sequence of validated setlists. Dropping it mid-stream is always safe.
#[derive(Debug)]
pub struct Setlists<'g> {
    graph: &'g CompatibilityGraph,
    ranking: Ranking<'g>,
    search: PathSearch,
    limit: Option<usize>,
    produced: usize,
    rejected: u64,
    report_rejections: bool,
}

impl<'g> Setlists<'g> {
    /// `search` must run over `ranking.adjacency(graph)` (rank space); its
    /// paths are translated through `ranking` and validated against `graph`.
    pub(crate) fn new(
        graph: &'g CompatibilityGraph,
        ranking: Ranking<'g>,
        search: PathSearch,
        limit: Option<usize>,
        report_rejections: bool,
    ) -> Self {
        Self {
            graph,
            ranking,
            search,
            limit,
            produced: 0,
            rejected: 0,
            report_rejections,
        }
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            rejected: self.rejected,
            ..self.search.stats()
        }
    }

    /// Results surfaced so far.
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl Iterator for Setlists<'_> {
    type Item = Setlist;

    fn next(&mut self) -> Option<Setlist> {
        loop {
            if self.limit.is_some_and(|k| self.produced >= k) {
                return None;
            }
            let path = self.search.next()?;
            let ids: Vec<TeamId> = self.ranking.to_input(&path).into_iter().map(TeamId).collect();
            if let Err(mismatch) = self.graph.validate_ids(&ids) {
                self.rejected += 1;
                if self.report_rejections {
                    tracing::warn!(%mismatch, "skip invalid setlist");
                } else {
                    tracing::debug!(%mismatch, "skip invalid setlist");
                }
                continue;
            }
            self.produced += 1;
            let setlist: Setlist = path
                .iter()
                .map(|&r| self.ranking.names[r].to_string())
                .collect();
            tracing::trace!(n = self.produced, ?setlist, "setlist");
            return Some(setlist);
        }
    }
}
