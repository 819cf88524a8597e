use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Final outcome of a game from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HomeWin,
    VisitorWin,
    Tie,
}

/// One fixture row (`games.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: u64,
    /// Opaque season token, e.g. "20122013". Compared by exact equality.
    pub season: String,
    pub game_type: String,
    pub date_time: String,
    pub away_team_id: u32,
    pub home_team_id: u32,
    pub away_goals: u32,
    pub home_goals: u32,
    pub venue: String,
    pub venue_link: String,
}

impl Game {
    /// Combined score, widened so two `u32::MAX` counts still add.
    pub fn total_goals(&self) -> u64 {
        u64::from(self.home_goals) + u64::from(self.away_goals)
    }

    pub fn outcome(&self) -> Outcome {
        match self.home_goals.cmp(&self.away_goals) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::VisitorWin,
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// Whether `team_id` played this game as the visiting side.
    pub fn is_away(&self, team_id: u32) -> bool {
        self.away_team_id == team_id
    }

    pub fn is_home(&self, team_id: u32) -> bool {
        self.home_team_id == team_id
    }
}
