//! League rankings across every season, by goals per game.
//!
//! Visitor / home variants keep only the rows where the team played that
//! side of its game; the side comes from the game record, so rows whose
//! game does not resolve are left out of those two.

use super::group::Extremum;
use super::team_rank::TeamMetric;
use crate::error::{Result, StatError};
use crate::models::TeamGameStat;
use crate::StatTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Home,
    Away,
}

impl StatTracker {
    pub fn count_of_teams(&self) -> usize {
        self.teams().len()
    }

    /// Team with the most goals per game over all seasons.
    pub fn best_offense(&self) -> Result<&str> {
        self.rank_offense(None, Extremum::Max)
    }

    pub fn worst_offense(&self) -> Result<&str> {
        self.rank_offense(None, Extremum::Min)
    }

    /// Team with the most goals per away game.
    pub fn highest_scoring_visitor(&self) -> Result<&str> {
        self.rank_offense(Some(Side::Away), Extremum::Max)
    }

    pub fn highest_scoring_home_team(&self) -> Result<&str> {
        self.rank_offense(Some(Side::Home), Extremum::Max)
    }

    pub fn lowest_scoring_visitor(&self) -> Result<&str> {
        self.rank_offense(Some(Side::Away), Extremum::Min)
    }

    pub fn lowest_scoring_home_team(&self) -> Result<&str> {
        self.rank_offense(Some(Side::Home), Extremum::Min)
    }

    fn rank_offense(&self, side: Option<Side>, direction: Extremum) -> Result<&str> {
        let rows = self
            .game_teams()
            .iter()
            .filter(|row| side.map_or(true, |side| self.played_on(row, side)));
        self.rank_teams(rows, TeamMetric::GoalsPerGame, direction, || {
            StatError::EmptyDataset
        })
    }

    fn played_on(&self, row: &TeamGameStat, side: Side) -> bool {
        self.game_by_id(row.game_id).is_some_and(|game| match side {
            Side::Home => game.is_home(row.team_id),
            Side::Away => game.is_away(row.team_id),
        })
    }
}
