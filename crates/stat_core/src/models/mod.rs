//! # Record Types
//!
//! Immutable rows of the three source tables. Values arrive already coerced;
//! the loader is the only place text becomes numbers.
//!
//! - `game` - one fixture with its final score
//! - `team` - one club
//! - `game_team` - one club's line in one fixture

pub mod game;
pub mod game_team;
pub mod team;

pub use game::{Game, Outcome};
pub use game_team::{GameResult, ParseGameResultError, TeamGameStat};
pub use team::Team;
