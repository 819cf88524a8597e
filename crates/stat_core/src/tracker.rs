//! Record Store facade.
//!
//! `StatTracker` owns the three record vectors and the join index built over
//! them. Every query lives in `crate::aggregate` as an `impl StatTracker`
//! block and only takes `&self`.

use crate::error::{Result, StatError};
use crate::index::JoinIndex;
use crate::models::{Game, Team, TeamGameStat};

#[derive(Debug, Clone)]
pub struct StatTracker {
    games: Vec<Game>,
    teams: Vec<Team>,
    game_teams: Vec<TeamGameStat>,
    index: JoinIndex,
}

impl StatTracker {
    /// Freeze the three record sets and build the join index.
    pub fn new(games: Vec<Game>, teams: Vec<Team>, game_teams: Vec<TeamGameStat>) -> Self {
        let index = JoinIndex::build(&games, &teams);
        let tracker = Self {
            games,
            teams,
            game_teams,
            index,
        };
        tracker.report_dangling_rows();
        tracker
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn game_teams(&self) -> &[TeamGameStat] {
        &self.game_teams
    }

    pub fn game_by_id(&self, game_id: u64) -> Option<&Game> {
        self.index.game_slot(game_id).map(|slot| &self.games[slot])
    }

    pub fn team_by_id(&self, team_id: u32) -> Option<&Team> {
        self.index.team_slot(team_id).map(|slot| &self.teams[slot])
    }

    /// Stat rows whose game belongs to `season`, in input order.
    ///
    /// Rows whose game does not resolve are left out. An unknown season
    /// yields an empty vector, not an error.
    pub fn stats_for_season(&self, season: &str) -> Vec<&TeamGameStat> {
        self.game_teams
            .iter()
            .filter(|row| {
                self.game_by_id(row.game_id)
                    .is_some_and(|game| game.season == season)
            })
            .collect()
    }

    /// Display name for a team id.
    pub fn team_name(&self, team_id: u32) -> Result<&str> {
        self.team_by_id(team_id)
            .map(|team| team.team_name.as_str())
            .ok_or_else(|| StatError::unresolved_team(team_id))
    }

    // Load-time diagnostics only; queries skip these rows quietly.
    fn report_dangling_rows(&self) {
        let missing_games = self
            .game_teams
            .iter()
            .filter(|row| self.game_by_id(row.game_id).is_none())
            .count();
        let missing_teams = self
            .game_teams
            .iter()
            .filter(|row| self.team_by_id(row.team_id).is_none())
            .count();

        if missing_games > 0 {
            log::warn!("{} game_team rows reference unknown games", missing_games);
        }
        if missing_teams > 0 {
            log::warn!("{} game_team rows reference unknown teams", missing_teams);
        }
    }
}
