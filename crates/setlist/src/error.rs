//! Error types surfaced by graph construction, generation, and validation.

use std::fmt;

/// Which argument named a team that the graph does not know.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamRole {
    Start,
    End,
    Pinned,
    Query,
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TeamRole::Start => "start",
            TeamRole::End => "end",
            TeamRole::Pinned => "pinned",
            TeamRole::Query => "queried",
        };
        f.write_str(s)
    }
}

/// Caller input that cannot be searched. Not retried; fix the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Construct was given no teams.
    EmptyRoster,
    /// A start/end/pinned/queried name is not a team of the graph.
    UnknownTeam { role: TeamRole, name: String },
    /// A pin refers to a slot past the end of the setlist.
    PinOutOfRange {
        name: String,
        position: usize,
        len: usize,
    },
    /// Two different teams claim the same slot.
    ConflictingPins {
        position: usize,
        first: String,
        second: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyRoster => write!(f, "team roster cannot be empty"),
            ConfigError::UnknownTeam { role, name } => {
                write!(f, "{role} team '{name}' not found")
            }
            ConfigError::PinOutOfRange {
                name,
                position,
                len,
            } => write!(
                f,
                "team '{name}' pinned at position {position}, but setlists have only {len} slots"
            ),
            ConfigError::ConflictingPins {
                position,
                first,
                second,
            } => write!(
                f,
                "position {position} is claimed by both '{first}' and '{second}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A sequence that fails the consecutive-disjointness check.
///
/// Inside generation this is a non-fatal signal: the candidate is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationMismatch {
    /// `first` is immediately followed by `second` and they share `shared` (sorted).
    Overlap {
        first: String,
        second: String,
        shared: Vec<String>,
    },
    /// The sequence names a team the graph does not know.
    UnknownTeam { name: String },
}

impl fmt::Display for ValidationMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMismatch::Overlap {
                first,
                second,
                shared,
            } => write!(f, "{first} -> {second} shares members: {shared:?}"),
            ValidationMismatch::UnknownTeam { name } => {
                write!(f, "sequence names unknown team '{name}'")
            }
        }
    }
}

impl std::error::Error for ValidationMismatch {}
