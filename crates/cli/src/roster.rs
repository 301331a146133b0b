use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Team name and raw member identifiers, in file order.
pub type Roster = Vec<(String, Vec<String>)>;

/// Read a `{ "team": [member, ...], ... }` JSON file.
///
/// Object order is preserved (it is the ranking tie-break). Scalar members are
/// coerced to strings; nested values are rejected. Trimming is left to the
/// library so the file is taken as written.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading roster {}", path.display()))?;
    let doc: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing roster {}", path.display()))?;
    parse_roster(doc).with_context(|| format!("in roster {}", path.display()))
}

pub fn parse_roster(doc: Value) -> Result<Roster> {
    let Value::Object(map) = doc else {
        bail!("roster must be a JSON object mapping team names to member lists");
    };
    map.into_iter()
        .map(|(team, members)| {
            let Value::Array(items) = members else {
                bail!("members of team '{team}' must be a list");
            };
            let members = items
                .into_iter()
                .map(|m| match m {
                    Value::String(s) => Ok(s),
                    Value::Number(n) => Ok(n.to_string()),
                    Value::Bool(b) => Ok(b.to_string()),
                    other => bail!("team '{team}' has a non-scalar member: {other}"),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok((team, members))
        })
        .collect()
}
