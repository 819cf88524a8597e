use std::fmt;
use thiserror::Error;

/// Kind of record a query could not resolve.
///
/// Only team references surface here. A stat row whose game is missing is
/// dropped by the season and side filters instead of failing the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntityKind::Team => write!(f, "team"),
        }
    }
}

/// Failures a single query can report.
///
/// None of these invalidate the tracker; the next query runs against the
/// same records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("Empty dataset: no rows to aggregate")]
    EmptyDataset,

    #[error("Empty season selection: no game rows for season {season}")]
    EmptySeasonSelection { season: String },

    #[error("Zero denominator while ranking {group}")]
    ZeroDenominator { group: String },

    #[error("Unresolved reference: {entity} {id} has no matching record")]
    UnresolvedReference { entity: EntityKind, id: u64 },
}

impl StatError {
    pub fn empty_season(season: &str) -> Self {
        StatError::EmptySeasonSelection {
            season: season.to_string(),
        }
    }

    pub fn unresolved_team(team_id: u32) -> Self {
        StatError::UnresolvedReference {
            entity: EntityKind::Team,
            id: u64::from(team_id),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatError>;
