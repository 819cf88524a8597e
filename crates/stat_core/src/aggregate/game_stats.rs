//! Game statistics over every loaded game, no season filter.
//!
//! Every query here reports `EmptyDataset` when no games are loaded,
//! including the per-season mappings.

use super::group::group_by;
use super::round2;
use crate::error::{Result, StatError};
use crate::models::{Game, Outcome};
use crate::StatTracker;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default)]
struct SeasonTally {
    goals: u64,
    games: u64,
}

impl StatTracker {
    fn loaded_games(&self) -> Result<&[Game]> {
        if self.games().is_empty() {
            return Err(StatError::EmptyDataset);
        }
        Ok(self.games())
    }

    /// Largest combined score of a single game.
    pub fn highest_total_score(&self) -> Result<u64> {
        self.loaded_games()?
            .iter()
            .map(Game::total_goals)
            .max()
            .ok_or(StatError::EmptyDataset)
    }

    /// Smallest combined score of a single game.
    pub fn lowest_total_score(&self) -> Result<u64> {
        self.loaded_games()?
            .iter()
            .map(Game::total_goals)
            .min()
            .ok_or(StatError::EmptyDataset)
    }

    pub fn percentage_home_wins(&self) -> Result<f64> {
        self.outcome_share(Outcome::HomeWin)
    }

    pub fn percentage_visitor_wins(&self) -> Result<f64> {
        self.outcome_share(Outcome::VisitorWin)
    }

    pub fn percentage_ties(&self) -> Result<f64> {
        self.outcome_share(Outcome::Tie)
    }

    /// Fraction of games ending in `outcome`, rounded to 2 decimals.
    fn outcome_share(&self, outcome: Outcome) -> Result<f64> {
        let games = self.loaded_games()?;
        let hits = games.iter().filter(|g| g.outcome() == outcome).count();
        Ok(round2(hits as f64 / games.len() as f64))
    }

    /// Number of games per season token.
    pub fn count_of_games_by_season(&self) -> Result<BTreeMap<String, u64>> {
        let games = self.loaded_games()?;
        let mut counts = BTreeMap::new();
        for game in games {
            *counts.entry(game.season.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    pub fn average_goals_per_game(&self) -> Result<f64> {
        let games = self.loaded_games()?;
        let goals: u64 = games.iter().map(Game::total_goals).sum();
        Ok(round2(goals as f64 / games.len() as f64))
    }

    /// Per season: total goals / games, each rounded to 2 decimals.
    pub fn average_goals_by_season(&self) -> Result<BTreeMap<String, f64>> {
        let games = self.loaded_games()?;
        let tallies = group_by(
            games,
            |g| g.season.clone(),
            SeasonTally::default,
            |tally, g| {
                tally.goals += g.total_goals();
                tally.games += 1;
            },
        );

        Ok(tallies
            .into_entries()
            .into_iter()
            .map(|(season, t)| (season, round2(t.goals as f64 / t.games as f64)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;
    use crate::models::Team;

    #[test]
    fn test_total_score_extremes() {
        let tracker = fixture::tracker();
        assert_eq!(tracker.highest_total_score(), Ok(7));
        assert_eq!(tracker.lowest_total_score(), Ok(1));
    }

    #[test]
    fn test_outcome_percentages() {
        let tracker = fixture::tracker();
        assert_eq!(tracker.percentage_home_wins(), Ok(0.6));
        assert_eq!(tracker.percentage_visitor_wins(), Ok(0.2));
        assert_eq!(tracker.percentage_ties(), Ok(0.2));
    }

    #[test]
    fn test_count_of_games_by_season() {
        let tracker = fixture::tracker();
        let expected = BTreeMap::from([
            ("20122013".to_string(), 4),
            ("20132014".to_string(), 1),
        ]);
        assert_eq!(tracker.count_of_games_by_season(), Ok(expected));
    }

    #[test]
    fn test_average_goals() {
        let tracker = fixture::tracker();
        assert_eq!(tracker.average_goals_per_game(), Ok(4.0));

        let by_season = tracker.average_goals_by_season().unwrap();
        assert_eq!(by_season.len(), 2);
        assert_eq!(by_season["20122013"], 4.0);
        assert_eq!(by_season["20132014"], 4.0);
    }

    #[test]
    fn test_shares_round_to_two_places() {
        // 1 home win out of 3 → 0.333.. → 0.33
        let mut games = fixture::games();
        games.truncate(3);
        games[1].away_goals = 2;
        let tracker = StatTracker::new(games, Vec::new(), Vec::new());
        assert_eq!(tracker.percentage_home_wins(), Ok(0.33));
        assert_eq!(tracker.percentage_visitor_wins(), Ok(0.67));
    }

    #[test]
    fn test_empty_dataset_is_an_error_everywhere() {
        let tracker = StatTracker::new(Vec::new(), Vec::<Team>::new(), Vec::new());
        assert_eq!(tracker.highest_total_score(), Err(StatError::EmptyDataset));
        assert_eq!(tracker.lowest_total_score(), Err(StatError::EmptyDataset));
        assert_eq!(tracker.percentage_home_wins(), Err(StatError::EmptyDataset));
        assert_eq!(tracker.percentage_visitor_wins(), Err(StatError::EmptyDataset));
        assert_eq!(tracker.percentage_ties(), Err(StatError::EmptyDataset));
        assert_eq!(tracker.count_of_games_by_season(), Err(StatError::EmptyDataset));
        assert_eq!(tracker.average_goals_per_game(), Err(StatError::EmptyDataset));
        assert_eq!(tracker.average_goals_by_season(), Err(StatError::EmptyDataset));
    }
}
