use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of one team in one game, as recorded in `game_teams.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameResult {
    Win,
    Loss,
    Tie,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Win => "WIN",
            GameResult::Loss => "LOSS",
            GameResult::Tie => "TIE",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGameResultError(pub String);

impl fmt::Display for ParseGameResultError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown game result '{}'", self.0)
    }
}

impl std::error::Error for ParseGameResultError {}

impl FromStr for GameResult {
    type Err = ParseGameResultError;

    /// Exact, case-sensitive match on the three source tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WIN" => Ok(GameResult::Win),
            "LOSS" => Ok(GameResult::Loss),
            "TIE" => Ok(GameResult::Tie),
            other => Err(ParseGameResultError(other.to_string())),
        }
    }
}

/// One team's line for one game (`game_teams.csv`).
///
/// Season is not stored here; it is reached through `game_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameStat {
    pub game_id: u64,
    pub team_id: u32,
    /// "home" / "away" marker as written in the source.
    pub hoa: String,
    pub result: GameResult,
    pub settled_in: String,
    pub head_coach: String,
    pub goals: u32,
    pub shots: u32,
    pub tackles: u32,

    // Auxiliary counters, carried but not ranked on
    pub pim: u32,
    pub power_play_opportunities: u32,
    pub power_play_goals: u32,
    pub face_off_win_percentage: f64,
    pub giveaways: u32,
    pub takeaways: u32,
}

impl TeamGameStat {
    pub fn is_win(&self) -> bool {
        self.result == GameResult::Win
    }
}
