//! Five-game league used across unit tests.
//!
//! Season 20122013: four games, totals 7, 1, 4, 4 (three home wins, one
//! visitor win). Season 20132014: one 2-2 tie.
//!
//! League answers: Team Three scores most overall and as visitor, Team Two
//! least overall and as visitor, Team Six most at home, Team Four least.

use crate::models::{Game, GameResult, Team, TeamGameStat};
use crate::StatTracker;

const TEAM_NAMES: [&str; 6] = [
    "Team One",
    "Team Two",
    "Team Three",
    "Team Four",
    "Team Five",
    "Team Six",
];

pub(crate) fn teams() -> Vec<Team> {
    TEAM_NAMES
        .iter()
        .zip(1u32..)
        .map(|(name, id)| Team {
            team_id: id,
            franchise_id: id + 22,
            team_name: name.to_string(),
            abbreviation: format!("T{id}"),
            stadium: format!("Stadium {id}"),
            link: format!("/api/v1/teams/{id}"),
        })
        .collect()
}

fn game(game_id: u64, season: &str, away: (u32, u32), home: (u32, u32)) -> Game {
    Game {
        game_id,
        season: season.to_string(),
        game_type: "Postseason".to_string(),
        date_time: "5/16/13".to_string(),
        away_team_id: away.0,
        home_team_id: home.0,
        away_goals: away.1,
        home_goals: home.1,
        venue: "Toyota Stadium".to_string(),
        venue_link: "/api/v1/venues/null".to_string(),
    }
}

/// (team_id, goals) per side.
pub(crate) fn games() -> Vec<Game> {
    vec![
        game(2012030221, "20122013", (3, 6), (4, 1)),
        game(2012030222, "20122013", (2, 0), (1, 1)),
        game(2012030223, "20122013", (5, 1), (6, 3)),
        game(2012030224, "20122013", (2, 0), (1, 4)),
        game(2013020001, "20132014", (3, 2), (4, 2)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn line(
    game_id: u64,
    team_id: u32,
    hoa: &str,
    result: GameResult,
    coach: &str,
    goals: u32,
    shots: u32,
    tackles: u32,
) -> TeamGameStat {
    TeamGameStat {
        game_id,
        team_id,
        hoa: hoa.to_string(),
        result,
        settled_in: "REG".to_string(),
        head_coach: coach.to_string(),
        goals,
        shots,
        tackles,
        pim: 8,
        power_play_opportunities: 3,
        power_play_goals: 0,
        face_off_win_percentage: 44.8,
        giveaways: 17,
        takeaways: 7,
    }
}

pub(crate) fn game_teams() -> Vec<TeamGameStat> {
    use GameResult::*;
    vec![
        line(2012030221, 3, "away", Win, "Coach B", 6, 22, 9),
        line(2012030221, 4, "home", Loss, "Coach C", 1, 16, 9),
        line(2012030222, 2, "away", Loss, "Coach A", 0, 5, 2),
        line(2012030222, 1, "home", Win, "Coach B", 1, 14, 6),
        line(2012030223, 5, "away", Loss, "Coach A", 1, 12, 6),
        line(2012030223, 6, "home", Win, "Coach C", 3, 14, 8),
        line(2012030224, 2, "away", Loss, "Coach A", 0, 6, 3),
        line(2012030224, 1, "home", Win, "Coach B", 4, 14, 7),
        line(2013020001, 3, "away", Tie, "Coach B", 2, 10, 5),
        line(2013020001, 4, "home", Tie, "Coach A", 2, 9, 6),
    ]
}

pub(crate) fn tracker() -> StatTracker {
    StatTracker::new(games(), teams(), game_teams())
}
