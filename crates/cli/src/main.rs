use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use setlist::{CompatibilityGraph, GenerateCfg, SearchStats, Setlist};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod roster;

#[derive(Parser)]
#[command(name = "setlist")]
#[command(about = "Order teams so that no two consecutive teams share a member")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate valid setlists
    Generate {
        /// Roster JSON: {"team": ["member", ...], ...}
        #[arg(long)]
        input: PathBuf,
        /// Stop after this many setlists
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        /// Fix a team at a 1-based position, e.g. `--pin xoxz=9` (repeatable)
        #[arg(long = "pin", value_parser = parse_pin)]
        pins: Vec<(String, usize)>,
        /// Also write results as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Log every dropped candidate at warn level
        #[arg(long)]
        report_rejections: bool,
    },
    /// Show what two teams share
    Explain {
        #[arg(long)]
        input: PathBuf,
        first: String,
        second: String,
    },
    /// Print each team's degree and compatible neighbours
    Graph {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            input,
            limit,
            start,
            end,
            pins,
            out,
            report_rejections,
        } => {
            let cfg = GenerateCfg {
                limit,
                start,
                end,
                pins,
                report_rejections,
            };
            generate(&input, &cfg, out.as_deref())
        }
        Action::Explain {
            input,
            first,
            second,
        } => explain(&input, &first, &second),
        Action::Graph { input } => graph(&input),
        Action::Report => report(),
    }
}

/// `TEAM=POS` with a 1-based position; stored 0-based.
fn parse_pin(s: &str) -> Result<(String, usize), String> {
    let (team, pos) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected TEAM=POS, got '{s}'"))?;
    let pos: usize = pos
        .trim()
        .parse()
        .map_err(|e| format!("bad position in '{s}': {e}"))?;
    if pos == 0 {
        return Err(format!("positions are 1-based, got 0 in '{s}'"));
    }
    Ok((team.trim().to_string(), pos - 1))
}

fn load_graph(input: &Path) -> Result<CompatibilityGraph> {
    let roster = roster::load_roster(input)?;
    let graph = CompatibilityGraph::new(roster)
        .with_context(|| format!("building graph from {}", input.display()))?;
    tracing::info!(
        teams = graph.len(),
        edges = graph.edge_count(),
        input = %input.display(),
        "roster loaded"
    );
    Ok(graph)
}

#[derive(Serialize)]
struct StatsOut {
    expanded: u64,
    dead_ends: u64,
    emitted: u64,
    rejected: u64,
}

impl From<SearchStats> for StatsOut {
    fn from(s: SearchStats) -> Self {
        Self {
            expanded: s.expanded,
            dead_ends: s.dead_ends,
            emitted: s.emitted,
            rejected: s.rejected,
        }
    }
}

#[derive(Serialize)]
struct RunOutput<'a> {
    teams: usize,
    setlists: &'a [Setlist],
    stats: StatsOut,
}

fn generate(input: &Path, cfg: &GenerateCfg, out: Option<&Path>) -> Result<()> {
    let graph = load_graph(input)?;
    let mut setlists = graph.generate(cfg)?;
    let mut found: Vec<Setlist> = Vec::new();
    for setlist in setlists.by_ref() {
        println!("{}: {:?}", found.len() + 1, setlist);
        found.push(setlist);
    }
    let stats = setlists.stats();
    tracing::info!(
        found = found.len(),
        expanded = stats.expanded,
        dead_ends = stats.dead_ends,
        rejected = stats.rejected,
        "search finished"
    );
    if found.is_empty() {
        println!("No valid setlists found that satisfy all specified conditions.");
    }

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        let doc = RunOutput {
            teams: graph.len(),
            setlists: &found,
            stats: stats.into(),
        };
        std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let run = provenance::RunRecord {
            input,
            params: serde_json::json!({
                "limit": cfg.limit,
                "start": cfg.start,
                "end": cfg.end,
                "pins": cfg.pins.iter().map(|(t, p)| (t, p + 1)).collect::<Vec<_>>(),
            }),
            setlists: found.len(),
        };
        let prov = provenance::write_sidecar(out, &run)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "results written");
    }
    Ok(())
}

fn explain(input: &Path, first: &str, second: &str) -> Result<()> {
    let graph = load_graph(input)?;
    println!("{}", graph.explain(first, second)?);
    Ok(())
}

fn graph(input: &Path) -> Result<()> {
    let graph = load_graph(input)?;
    for team in graph.teams() {
        println!(
            "{} (degree {}): {}",
            team.name,
            graph.degree(&team.name)?,
            graph.compatible_with(&team.name)?.join(", ")
        );
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "setlist_version": setlist::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
