//! # Aggregation Engine
//!
//! Pure queries over a [`StatTracker`](crate::StatTracker). Each one runs
//! filter → group → reduce → pick-extremum → resolve and keeps no state.
//!
//! - `group` - insertion-ordered group-by and extremum selection
//! - `game_stats` - score extremes, outcome shares, per-season goal averages
//! - `season_stats` - coach and team rankings for one season
//! - `league_stats` - team scoring rankings across all seasons
//!
//! ## Rounding
//!
//! Shares and averages are rounded to 2 decimals half away from zero
//! (`f64::round` on the value scaled by 100), not banker's rounding.

pub mod game_stats;
pub mod group;
pub mod league_stats;
pub mod season_stats;
mod team_rank;

pub use group::{Extremum, Groups, Ratio};

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
