//! Season-scoped rankings: coaches by win ratio, teams by shot accuracy and
//! by tackles.
//!
//! Every query restricts to [`StatTracker::stats_for_season`] first and
//! reports `EmptySeasonSelection` when that leaves no rows. Ties go to the
//! coach or team seen first in input row order.

use super::group::{group_by, Extremum, Ratio};
use super::team_rank::TeamMetric;
use crate::error::{Result, StatError};
use crate::models::TeamGameStat;
use crate::StatTracker;

#[derive(Debug, Clone, Copy, Default)]
struct CoachRecord {
    wins: u64,
    games: u64,
}

impl StatTracker {
    fn season_rows(&self, season: &str) -> Result<Vec<&TeamGameStat>> {
        let rows = self.stats_for_season(season);
        if rows.is_empty() {
            return Err(StatError::empty_season(season));
        }
        Ok(rows)
    }

    /// Coach with the best win ratio in `season`.
    pub fn winningest_coach(&self, season: &str) -> Result<&str> {
        self.rank_coaches(season, Extremum::Max)
    }

    /// Coach with the worst win ratio in `season`.
    pub fn worst_coach(&self, season: &str) -> Result<&str> {
        self.rank_coaches(season, Extremum::Min)
    }

    fn rank_coaches(&self, season: &str, direction: Extremum) -> Result<&str> {
        let rows = self.season_rows(season)?;
        let records = group_by(
            rows,
            |row| row.head_coach.as_str(),
            CoachRecord::default,
            |record, row| {
                record.games += 1;
                if row.is_win() {
                    record.wins += 1;
                }
            },
        );

        let (&coach, record) = records
            .select(direction, |r| Ratio::of(r.wins, r.games))
            .ok_or_else(|| StatError::empty_season(season))?;
        Ratio::of(record.wins, record.games).value(|| format!("win ratio of coach {coach}"))?;
        Ok(coach)
    }

    /// Team with the highest goals / shots ratio in `season`.
    pub fn most_accurate_team(&self, season: &str) -> Result<&str> {
        let rows = self.season_rows(season)?;
        self.rank_teams(rows, TeamMetric::Accuracy, Extremum::Max, || {
            StatError::empty_season(season)
        })
    }

    /// Team with the lowest goals / shots ratio in `season`.
    pub fn least_accurate_team(&self, season: &str) -> Result<&str> {
        let rows = self.season_rows(season)?;
        self.rank_teams(rows, TeamMetric::Accuracy, Extremum::Min, || {
            StatError::empty_season(season)
        })
    }

    pub fn most_tackles(&self, season: &str) -> Result<&str> {
        let rows = self.season_rows(season)?;
        self.rank_teams(rows, TeamMetric::Tackles, Extremum::Max, || {
            StatError::empty_season(season)
        })
    }

    pub fn fewest_tackles(&self, season: &str) -> Result<&str> {
        let rows = self.season_rows(season)?;
        self.rank_teams(rows, TeamMetric::Tackles, Extremum::Min, || {
            StatError::empty_season(season)
        })
    }
}
