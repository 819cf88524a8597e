//! One pipeline for every team-keyed ranking: group rows by team, fold a
//! tally, pick the extremum, resolve the winner's name.

use super::group::{group_by, Extremum, Ratio};
use crate::error::{Result, StatError};
use crate::models::TeamGameStat;
use crate::StatTracker;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TeamTally {
    pub goals: u64,
    pub shots: u64,
    pub tackles: u64,
    pub games: u64,
}

impl TeamTally {
    fn absorb(&mut self, row: &TeamGameStat) {
        self.goals += u64::from(row.goals);
        self.shots += u64::from(row.shots);
        self.tackles += u64::from(row.tackles);
        self.games += 1;
    }
}

/// What a team ranking compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TeamMetric {
    /// goals / shots
    Accuracy,
    /// summed tackles
    Tackles,
    /// goals / games played
    GoalsPerGame,
}

impl TeamMetric {
    fn rank(self, tally: &TeamTally) -> Ratio {
        match self {
            TeamMetric::Accuracy => Ratio::of(tally.goals, tally.shots),
            TeamMetric::Tackles => Ratio::count(tally.tackles),
            TeamMetric::GoalsPerGame => Ratio::of(tally.goals, tally.games),
        }
    }

    fn label(self) -> &'static str {
        match self {
            TeamMetric::Accuracy => "accuracy",
            TeamMetric::Tackles => "tackles",
            TeamMetric::GoalsPerGame => "goals per game",
        }
    }
}

impl StatTracker {
    /// Name of the team at the `direction` end of `metric` over `rows`.
    ///
    /// `on_empty` is returned when `rows` is empty. A selected group with a
    /// zero denominator is a `ZeroDenominator` error.
    pub(crate) fn rank_teams<'r>(
        &self,
        rows: impl IntoIterator<Item = &'r TeamGameStat>,
        metric: TeamMetric,
        direction: Extremum,
        on_empty: impl FnOnce() -> StatError,
    ) -> Result<&str> {
        let tallies = group_by(rows, |row| row.team_id, TeamTally::default, |t, row| t.absorb(row));
        log::debug!("Ranking {} teams by {}", tallies.len(), metric.label());

        let (&team_id, tally) = tallies
            .select(direction, |t| metric.rank(t))
            .ok_or_else(on_empty)?;
        metric
            .rank(tally)
            .value(|| format!("{} of team {}", metric.label(), team_id))?;

        self.team_name(team_id)
    }
}
