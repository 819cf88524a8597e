//! Where the three CSV tables live and how strictly they are read.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Env var overriding the games table path.
pub const GAMES_PATH_ENV: &str = "STAT_TRACKER_GAMES";
pub const TEAMS_PATH_ENV: &str = "STAT_TRACKER_TEAMS";
pub const GAME_TEAMS_PATH_ENV: &str = "STAT_TRACKER_GAME_TEAMS";

pub const DEFAULT_GAMES_PATH: &str = "data/games.csv";
pub const DEFAULT_TEAMS_PATH: &str = "data/teams.csv";
pub const DEFAULT_GAME_TEAMS_PATH: &str = "data/game_teams.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataLocations {
    pub games: PathBuf,
    pub teams: PathBuf,
    pub game_teams: PathBuf,
}

impl Default for DataLocations {
    fn default() -> Self {
        Self {
            games: PathBuf::from(DEFAULT_GAMES_PATH),
            teams: PathBuf::from(DEFAULT_TEAMS_PATH),
            game_teams: PathBuf::from(DEFAULT_GAME_TEAMS_PATH),
        }
    }
}

/// Explicit per-table paths, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct LocationOverrides {
    pub games: Option<PathBuf>,
    pub teams: Option<PathBuf>,
    pub game_teams: Option<PathBuf>,
}

impl DataLocations {
    /// Resolve each path: override → environment → default.
    pub fn resolve(overrides: LocationOverrides) -> Self {
        Self::resolve_with(overrides, |name| env::var(name).ok())
    }

    /// [`DataLocations::resolve`] with an injectable variable lookup.
    ///
    /// Blank variable values are ignored.
    pub fn resolve_with(
        overrides: LocationOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let pick = |explicit: Option<PathBuf>, var: &str, default: &str| {
            explicit
                .or_else(|| {
                    lookup(var)
                        .map(|value| value.trim().to_string())
                        .filter(|value| !value.is_empty())
                        .map(PathBuf::from)
                })
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            games: pick(overrides.games, GAMES_PATH_ENV, DEFAULT_GAMES_PATH),
            teams: pick(overrides.teams, TEAMS_PATH_ENV, DEFAULT_TEAMS_PATH),
            game_teams: pick(
                overrides.game_teams,
                GAME_TEAMS_PATH_ENV,
                DEFAULT_GAME_TEAMS_PATH,
            ),
        }
    }
}

/// How numeric cells that fail to parse are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionMode {
    /// Unparseable numbers keep their leading integer, else become 0, and
    /// are counted. The default.
    #[default]
    Lenient,
    /// Unparseable numbers fail the load.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub coercion: CoercionMode,
}
