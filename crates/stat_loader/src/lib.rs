//! Stat Loader Library
//!
//! games.csv / teams.csv / game_teams.csv → typed records → `StatTracker`

pub mod config;
pub mod rows;

use anyhow::{Context, Result};
use stat_core::{Game, StatTracker, Team, TeamGameStat};
use std::path::Path;

pub use config::{CoercionMode, DataLocations, LoadOptions, LocationOverrides};
pub use rows::{HeaderMap, LoadError, ParseStats, RecordDecoder, RowReader};

/// Parsing statistics for all three tables of one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub games: ParseStats,
    pub teams: ParseStats,
    pub game_teams: ParseStats,
}

impl LoadReport {
    pub fn coerced(&self) -> u32 {
        self.games.coerced + self.teams.coerced + self.game_teams.coerced
    }
}

/// Read one CSV table into records.
///
/// # Arguments
///
/// * `csv_path` - table with a header row
/// * `mode` - what to do with numeric cells that do not parse
///
/// # Returns
///
/// Decoded rows in file order, plus parsing statistics
pub fn read_table<R: RecordDecoder>(
    csv_path: &Path,
    mode: CoercionMode,
) -> Result<(Vec<R>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row: {}", csv_path.display()))?;
    let columns = R::columns(&HeaderMap::new(headers.iter()))
        .with_context(|| format!("Unexpected header in {}", csv_path.display()))?;

    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for result in reader.records() {
        stats.total_rows += 1;
        // header is line 1
        let line = u64::from(stats.total_rows) + 1;

        let record = result.with_context(|| {
            format!("Failed to read line {} of {}", line, csv_path.display())
        })?;
        let mut row = RowReader {
            record: &record,
            line,
            mode,
            stats: &mut stats,
        };
        let decoded = R::decode(&columns, &mut row)
            .with_context(|| format!("Failed to decode {}", csv_path.display()))?;

        records.push(decoded);
        stats.parsed += 1;
    }

    log::debug!(
        "Read {} rows from {} ({} cells coerced)",
        stats.parsed,
        csv_path.display(),
        stats.coerced
    );
    Ok((records, stats))
}

/// Load all three tables with lenient coercion.
pub fn from_csv(locations: &DataLocations) -> Result<StatTracker> {
    from_csv_with(locations, LoadOptions::default()).map(|(tracker, _)| tracker)
}

/// Load all three tables and build the tracker.
///
/// # Returns
///
/// The tracker and per-table parsing statistics
pub fn from_csv_with(
    locations: &DataLocations,
    options: LoadOptions,
) -> Result<(StatTracker, LoadReport)> {
    let (games, games_stats) = read_table::<Game>(&locations.games, options.coercion)?;
    let (teams, teams_stats) = read_table::<Team>(&locations.teams, options.coercion)?;
    let (game_teams, game_teams_stats) =
        read_table::<TeamGameStat>(&locations.game_teams, options.coercion)?;

    let report = LoadReport {
        games: games_stats,
        teams: teams_stats,
        game_teams: game_teams_stats,
    };

    log::info!(
        "Loaded {} games, {} teams, {} game_team rows",
        games.len(),
        teams.len(),
        game_teams.len()
    );
    if report.coerced() > 0 {
        log::warn!("{} numeric cells were coerced", report.coerced());
    }

    Ok((StatTracker::new(games, teams, game_teams), report))
}
