//! # stat_core - League Statistics over Games, Teams and Game Lines
//!
//! Read-only analytics over three fully loaded record sets:
//! games, teams, and one per-team line for each game.
//!
//! ## Layout
//! - `models` - record types
//! - `tracker` - `StatTracker`, the frozen record store
//! - `index` - id → record join index
//! - `aggregate` - every query, as `impl StatTracker` blocks
//! - `error` - `StatError` and `Result`
//!
//! Construction is the only mutation. Queries take `&self`, so a tracker can
//! be shared read-only across threads.

pub mod aggregate;
pub mod error;
pub mod index;
pub mod models;
pub mod tracker;

#[cfg(test)]
pub(crate) mod fixture;

pub use aggregate::{round2, Extremum};
pub use error::{EntityKind, Result, StatError};
pub use models::{Game, GameResult, Outcome, Team, TeamGameStat};
pub use tracker::StatTracker;
