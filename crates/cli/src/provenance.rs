use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a `generate --out` run was asked to do and what it produced.
pub struct RunRecord<'a> {
    pub input: &'a Path,
    pub params: Value,
    pub setlists: usize,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    setlist_version: &'static str,
    input: String,
    params: &'a Value,
    setlists: usize,
    output: String,
}

/// Write `<stem>.provenance.json` next to `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, run: &RunRecord<'_>) -> Result<PathBuf> {
    let path = artifact.with_extension("provenance.json");
    let doc = Sidecar {
        code_rev: current_git_rev(),
        setlist_version: setlist::VERSION,
        input: run.input.display().to_string(),
        params: &run.params,
        setlists: run.setlists,
        output: artifact.display().to_string(),
    };
    std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `GIT_COMMIT` if set, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_results_file() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("showcase.json");
        let run = RunRecord {
            input: Path::new("roster.json"),
            params: json!({"limit": 3, "start": "go"}),
            setlists: 3,
        };
        let path = write_sidecar(&artifact, &run).unwrap();
        assert_eq!(path, dir.path().join("showcase.provenance.json"));

        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["output"], artifact.display().to_string());
        assert_eq!(parsed["input"], "roster.json");
        assert_eq!(parsed["params"]["start"], "go");
        assert_eq!(parsed["setlists"], 3);
        assert_eq!(parsed["setlist_version"], setlist::VERSION);
    }
}
