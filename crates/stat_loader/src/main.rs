//! Stat Tracker CLI
//!
//! Loads the three CSV tables and prints game, league or season reports.
//! A query that fails prints its error in place of a value; the rest of the
//! report still runs.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use serde::Serialize;
#[cfg(feature = "cli")]
use stat_core::StatTracker;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "stat_tracker")]
#[command(about = "League statistics over games, teams and game_teams CSV files", long_about = None)]
struct Cli {
    /// games.csv path (default: $STAT_TRACKER_GAMES or data/games.csv)
    #[arg(long, global = true)]
    games: Option<PathBuf>,

    /// teams.csv path (default: $STAT_TRACKER_TEAMS or data/teams.csv)
    #[arg(long, global = true)]
    teams: Option<PathBuf>,

    /// game_teams.csv path (default: $STAT_TRACKER_GAME_TEAMS or data/game_teams.csv)
    #[arg(long, global = true)]
    game_teams: Option<PathBuf>,

    /// Fail on non-numeric numeric cells instead of reading them as 0
    #[arg(long, global = true, default_value = "false")]
    strict: bool,

    /// Print the report as JSON
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Score extremes, outcome shares and goal averages over all games
    Games,

    /// Team count and scoring rankings across all seasons
    League,

    /// Coach, accuracy and tackle rankings for one season
    Season {
        /// Season token, e.g. 20122013
        season: String,
    },
}

/// Ordered list of (label, value-or-error) lines.
#[cfg(feature = "cli")]
#[derive(Default)]
struct Report {
    entries: Vec<(&'static str, serde_json::Value)>,
}

#[cfg(feature = "cli")]
impl Report {
    fn add<T: Serialize>(&mut self, label: &'static str, value: stat_core::Result<T>) {
        let value = match value {
            Ok(v) => serde_json::to_value(v)
                .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() })),
            Err(e) => {
                log::warn!("{} failed: {}", label, e);
                serde_json::json!({ "error": e.to_string() })
            }
        };
        self.entries.push((label, value));
    }

    fn print(self, json: bool) -> Result<()> {
        if json {
            let map: serde_json::Map<String, serde_json::Value> = self
                .entries
                .into_iter()
                .map(|(label, value)| (label.to_string(), value))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
            return Ok(());
        }

        for (label, value) in self.entries {
            match value {
                serde_json::Value::String(s) => println!("   {:<28} {}", label, s),
                serde_json::Value::Object(ref obj) if obj.contains_key("error") => {
                    println!("   {:<28} ❌ {}", label, obj["error"].as_str().unwrap_or(""))
                }
                other => println!("   {:<28} {}", label, other),
            }
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
fn games_report(tracker: &StatTracker) -> Report {
    let mut report = Report::default();
    report.add("highest_total_score", tracker.highest_total_score());
    report.add("lowest_total_score", tracker.lowest_total_score());
    report.add("percentage_home_wins", tracker.percentage_home_wins());
    report.add("percentage_visitor_wins", tracker.percentage_visitor_wins());
    report.add("percentage_ties", tracker.percentage_ties());
    report.add("count_of_games_by_season", tracker.count_of_games_by_season());
    report.add("average_goals_per_game", tracker.average_goals_per_game());
    report.add("average_goals_by_season", tracker.average_goals_by_season());
    report
}

#[cfg(feature = "cli")]
fn league_report(tracker: &StatTracker) -> Report {
    let mut report = Report::default();
    report.add("count_of_teams", Ok(tracker.count_of_teams()));
    report.add("best_offense", tracker.best_offense());
    report.add("worst_offense", tracker.worst_offense());
    report.add("highest_scoring_visitor", tracker.highest_scoring_visitor());
    report.add("highest_scoring_home_team", tracker.highest_scoring_home_team());
    report.add("lowest_scoring_visitor", tracker.lowest_scoring_visitor());
    report.add("lowest_scoring_home_team", tracker.lowest_scoring_home_team());
    report
}

#[cfg(feature = "cli")]
fn season_report(tracker: &StatTracker, season: &str) -> Report {
    let mut report = Report::default();
    report.add("winningest_coach", tracker.winningest_coach(season));
    report.add("worst_coach", tracker.worst_coach(season));
    report.add("most_accurate_team", tracker.most_accurate_team(season));
    report.add("least_accurate_team", tracker.least_accurate_team(season));
    report.add("most_tackles", tracker.most_tackles(season));
    report.add("fewest_tackles", tracker.fewest_tackles(season));
    report
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let locations = stat_loader::DataLocations::resolve(stat_loader::LocationOverrides {
        games: cli.games,
        teams: cli.teams,
        game_teams: cli.game_teams,
    });
    let options = stat_loader::LoadOptions {
        coercion: if cli.strict {
            stat_loader::CoercionMode::Strict
        } else {
            stat_loader::CoercionMode::Lenient
        },
    };

    if !cli.json {
        println!("📂 Loading tables...");
        println!("   Games:      {}", locations.games.display());
        println!("   Teams:      {}", locations.teams.display());
        println!("   Game teams: {}", locations.game_teams.display());
    }

    let (tracker, load_report) = stat_loader::from_csv_with(&locations, options)?;

    if !cli.json && load_report.coerced() > 0 {
        println!("   ⚠️  {} numeric cells coerced", load_report.coerced());
    }

    let report = match &cli.command {
        Commands::Games => {
            if !cli.json {
                println!("\n📊 Game statistics");
            }
            games_report(&tracker)
        }
        Commands::League => {
            if !cli.json {
                println!("\n🏆 League statistics");
            }
            league_report(&tracker)
        }
        Commands::Season { season } => {
            if !cli.json {
                println!("\n📅 Season {}", season);
            }
            season_report(&tracker, season)
        }
    };

    report.print(cli.json)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("stat_tracker CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
