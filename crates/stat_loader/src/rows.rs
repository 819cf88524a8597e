//! CSV row → record decoding.
//!
//! Headers are matched case-insensitively with `_`, spaces and other
//! punctuation ignored, so `teamName`, `team_name` and `TEAM NAME` all hit
//! the same column. Key columns must be present; auxiliary ones default.
//!
//! Numeric cells go through [`RowReader::number`], the single place where
//! the lenient "leading integer, else 0" rule lives.

use crate::config::CoercionMode;
use rustc_hash::FxHashMap;
use stat_core::{Game, GameResult, Team, TeamGameStat};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("Line {line}: invalid {field} value '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: unknown result '{value}'")]
    InvalidResult { line: u64, value: String },
}

/// Per-table parsing statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    /// Cells that did not parse whole and were truncated to their leading
    /// integer or replaced with a default.
    pub coerced: u32,
}

/// Leading `[+-]?digits` run of `raw`, if there is one.
fn integer_prefix(raw: &str) -> Option<&str> {
    let unsigned = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    let sign = raw.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0).then(|| &raw[..sign + digits])
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('\u{feff}') // Strip BOM
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalized header name → column position.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    columns: FxHashMap<String, usize>,
}

impl HeaderMap {
    pub fn new<'h>(headers: impl IntoIterator<Item = &'h str>) -> Self {
        let mut columns = FxHashMap::default();
        for (position, header) in headers.into_iter().enumerate() {
            columns.entry(normalize_header(header)).or_insert(position);
        }
        Self { columns }
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.columns.get(&normalize_header(name)).copied()
    }

    pub fn require(&self, name: &'static str) -> Result<usize, LoadError> {
        self.find(name)
            .ok_or(LoadError::MissingColumn { column: name })
    }
}

/// Field access for one record, with coercion bookkeeping.
pub struct RowReader<'a> {
    pub(crate) record: &'a csv::StringRecord,
    pub(crate) line: u64,
    pub(crate) mode: CoercionMode,
    pub(crate) stats: &'a mut ParseStats,
}

impl<'a> RowReader<'a> {
    fn cell(&self, column: Option<usize>) -> &'a str {
        let record: &'a csv::StringRecord = self.record;
        column
            .and_then(|position| record.get(position))
            .map(str::trim)
            .unwrap_or("")
    }

    pub fn text(&self, column: Option<usize>) -> String {
        self.cell(column).to_string()
    }

    /// Parse a numeric cell.
    ///
    /// Lenient mode reads a cell that does not parse whole by its leading
    /// integer (`"4.0"` → 4, `"12abc"` → 12) and falls back to the type's
    /// default only when there is none, which covers empty and absent cells.
    /// Either way the cell counts in `ParseStats::coerced`.
    pub fn number<T>(&mut self, column: Option<usize>, field: &'static str) -> Result<T, LoadError>
    where
        T: FromStr + Default,
    {
        let raw = self.cell(column);
        if let Ok(value) = raw.parse::<T>() {
            return Ok(value);
        }
        if self.mode == CoercionMode::Strict {
            return Err(LoadError::InvalidNumber {
                line: self.line,
                field,
                value: raw.to_string(),
            });
        }

        self.stats.coerced += 1;
        let truncated = integer_prefix(raw)
            .and_then(|prefix| prefix.parse::<T>().ok().map(|value| (prefix, value)));
        match truncated {
            Some((prefix, value)) => {
                log::warn!(
                    "Line {} - Invalid {} value '{}', keeping leading '{}'",
                    self.line,
                    field,
                    raw,
                    prefix
                );
                Ok(value)
            }
            None => {
                log::warn!(
                    "Line {} - Invalid {} value '{}', using default",
                    self.line,
                    field,
                    raw
                );
                Ok(T::default())
            }
        }
    }

    /// Parse a WIN / LOSS / TIE cell.
    ///
    /// Lenient mode reads an unknown token as `Loss`; it is not a win, which
    /// is all the rankings look at.
    pub fn result(&mut self, column: Option<usize>) -> Result<GameResult, LoadError> {
        let raw = self.cell(column);
        match raw.parse::<GameResult>() {
            Ok(result) => Ok(result),
            Err(_) => match self.mode {
                CoercionMode::Strict => Err(LoadError::InvalidResult {
                    line: self.line,
                    value: raw.to_string(),
                }),
                CoercionMode::Lenient => {
                    log::warn!("Line {} - Unknown result '{}', reading as LOSS", self.line, raw);
                    self.stats.coerced += 1;
                    Ok(GameResult::Loss)
                }
            },
        }
    }
}

/// Decodes one table's rows into one record type.
pub trait RecordDecoder: Sized {
    /// Resolve column positions once per file.
    type Columns;

    fn columns(headers: &HeaderMap) -> Result<Self::Columns, LoadError>;

    fn decode(columns: &Self::Columns, row: &mut RowReader<'_>) -> Result<Self, LoadError>;
}

pub struct GameColumns {
    game_id: usize,
    season: usize,
    game_type: Option<usize>,
    date_time: Option<usize>,
    away_team_id: usize,
    home_team_id: usize,
    away_goals: usize,
    home_goals: usize,
    venue: Option<usize>,
    venue_link: Option<usize>,
}

impl RecordDecoder for Game {
    type Columns = GameColumns;

    fn columns(headers: &HeaderMap) -> Result<GameColumns, LoadError> {
        Ok(GameColumns {
            game_id: headers.require("game_id")?,
            season: headers.require("season")?,
            game_type: headers.find("type"),
            date_time: headers.find("date_time"),
            away_team_id: headers.require("away_team_id")?,
            home_team_id: headers.require("home_team_id")?,
            away_goals: headers.require("away_goals")?,
            home_goals: headers.require("home_goals")?,
            venue: headers.find("venue"),
            venue_link: headers.find("venue_link"),
        })
    }

    fn decode(c: &GameColumns, row: &mut RowReader<'_>) -> Result<Game, LoadError> {
        Ok(Game {
            game_id: row.number(Some(c.game_id), "game_id")?,
            season: row.text(Some(c.season)),
            game_type: row.text(c.game_type),
            date_time: row.text(c.date_time),
            away_team_id: row.number(Some(c.away_team_id), "away_team_id")?,
            home_team_id: row.number(Some(c.home_team_id), "home_team_id")?,
            away_goals: row.number(Some(c.away_goals), "away_goals")?,
            home_goals: row.number(Some(c.home_goals), "home_goals")?,
            venue: row.text(c.venue),
            venue_link: row.text(c.venue_link),
        })
    }
}

pub struct TeamColumns {
    team_id: usize,
    franchise_id: Option<usize>,
    team_name: usize,
    abbreviation: Option<usize>,
    stadium: Option<usize>,
    link: Option<usize>,
}

impl RecordDecoder for Team {
    type Columns = TeamColumns;

    fn columns(headers: &HeaderMap) -> Result<TeamColumns, LoadError> {
        Ok(TeamColumns {
            team_id: headers.require("team_id")?,
            franchise_id: headers.find("franchise_id"),
            team_name: headers.require("team_name")?,
            abbreviation: headers.find("abbreviation"),
            stadium: headers.find("stadium"),
            link: headers.find("link"),
        })
    }

    fn decode(c: &TeamColumns, row: &mut RowReader<'_>) -> Result<Team, LoadError> {
        Ok(Team {
            team_id: row.number(Some(c.team_id), "team_id")?,
            franchise_id: optional_number(row, c.franchise_id, "franchise_id")?,
            team_name: row.text(Some(c.team_name)),
            abbreviation: row.text(c.abbreviation),
            stadium: row.text(c.stadium),
            link: row.text(c.link),
        })
    }
}

pub struct GameTeamColumns {
    game_id: usize,
    team_id: usize,
    hoa: Option<usize>,
    result: usize,
    settled_in: Option<usize>,
    head_coach: usize,
    goals: usize,
    shots: usize,
    tackles: usize,
    pim: Option<usize>,
    power_play_opportunities: Option<usize>,
    power_play_goals: Option<usize>,
    face_off_win_percentage: Option<usize>,
    giveaways: Option<usize>,
    takeaways: Option<usize>,
}

impl RecordDecoder for TeamGameStat {
    type Columns = GameTeamColumns;

    fn columns(headers: &HeaderMap) -> Result<GameTeamColumns, LoadError> {
        Ok(GameTeamColumns {
            game_id: headers.require("game_id")?,
            team_id: headers.require("team_id")?,
            hoa: headers.find("hoa"),
            result: headers.require("result")?,
            settled_in: headers.find("settled_in"),
            head_coach: headers.require("head_coach")?,
            goals: headers.require("goals")?,
            shots: headers.require("shots")?,
            tackles: headers.require("tackles")?,
            pim: headers.find("pim"),
            power_play_opportunities: headers.find("power_play_opportunities"),
            power_play_goals: headers.find("power_play_goals"),
            face_off_win_percentage: headers.find("face_off_win_percentage"),
            giveaways: headers.find("giveaways"),
            takeaways: headers.find("takeaways"),
        })
    }

    fn decode(c: &GameTeamColumns, row: &mut RowReader<'_>) -> Result<TeamGameStat, LoadError> {
        Ok(TeamGameStat {
            game_id: row.number(Some(c.game_id), "game_id")?,
            team_id: row.number(Some(c.team_id), "team_id")?,
            hoa: row.text(c.hoa),
            result: row.result(Some(c.result))?,
            settled_in: row.text(c.settled_in),
            head_coach: row.text(Some(c.head_coach)),
            goals: row.number(Some(c.goals), "goals")?,
            shots: row.number(Some(c.shots), "shots")?,
            tackles: row.number(Some(c.tackles), "tackles")?,
            pim: optional_number(row, c.pim, "pim")?,
            power_play_opportunities: optional_number(
                row,
                c.power_play_opportunities,
                "power_play_opportunities",
            )?,
            power_play_goals: optional_number(row, c.power_play_goals, "power_play_goals")?,
            face_off_win_percentage: optional_number(
                row,
                c.face_off_win_percentage,
                "face_off_win_percentage",
            )?,
            giveaways: optional_number(row, c.giveaways, "giveaways")?,
            takeaways: optional_number(row, c.takeaways, "takeaways")?,
        })
    }
}

/// Auxiliary column: absent from the header means default, silently.
fn optional_number<T>(
    row: &mut RowReader<'_>,
    column: Option<usize>,
    field: &'static str,
) -> Result<T, LoadError>
where
    T: FromStr + Default,
{
    match column {
        Some(_) => row.number(column, field),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader<'a>(
        record: &'a csv::StringRecord,
        mode: CoercionMode,
        stats: &'a mut ParseStats,
    ) -> RowReader<'a> {
        RowReader {
            record,
            line: 2,
            mode,
            stats,
        }
    }

    #[test]
    fn test_header_matching_ignores_case_and_separators() {
        let headers = HeaderMap::new(["\u{feff}game_id", "teamName", "HoA", "faceOffWinPercentage"]);
        assert_eq!(headers.find("GAME_ID"), Some(0));
        assert_eq!(headers.find("team_name"), Some(1));
        assert_eq!(headers.find("hoa"), Some(2));
        assert_eq!(headers.find("face_off_win_percentage"), Some(3));
        assert_eq!(headers.find("venue"), None);
        assert_eq!(
            headers.require("venue").unwrap_err(),
            LoadError::MissingColumn { column: "venue" }
        );
    }

    #[test]
    fn test_lenient_number_coerces_to_zero() {
        let record = csv::StringRecord::from(vec!["abc", " 7 ", ""]);
        let mut stats = ParseStats::default();
        let mut row = reader(&record, CoercionMode::Lenient, &mut stats);

        assert_eq!(row.number::<u32>(Some(0), "goals"), Ok(0));
        assert_eq!(row.number::<u32>(Some(1), "goals"), Ok(7));
        assert_eq!(row.number::<u32>(Some(2), "shots"), Ok(0));
        assert_eq!(row.number::<f64>(Some(9), "pim"), Ok(0.0));
        assert_eq!(stats.coerced, 3);
    }

    #[test]
    fn test_lenient_number_keeps_leading_integer() {
        let record = csv::StringRecord::from(vec!["4.0", "12abc", "abc", "+3", "-2", "44.8"]);
        let mut stats = ParseStats::default();
        let mut row = reader(&record, CoercionMode::Lenient, &mut stats);

        assert_eq!(row.number::<u32>(Some(0), "goals"), Ok(4));
        assert_eq!(row.number::<u32>(Some(1), "goals"), Ok(12));
        assert_eq!(row.number::<u32>(Some(2), "goals"), Ok(0));
        assert_eq!(row.number::<u32>(Some(3), "goals"), Ok(3));
        // a sign the type cannot hold leaves no usable prefix
        assert_eq!(row.number::<u32>(Some(4), "goals"), Ok(0));
        assert_eq!(row.number::<f64>(Some(5), "face_off_win_percentage"), Ok(44.8));
        assert_eq!(stats.coerced, 4);
    }

    #[test]
    fn test_strict_number_rejects_text() {
        let record = csv::StringRecord::from(vec!["abc", "4.0"]);
        let mut stats = ParseStats::default();
        let mut row = reader(&record, CoercionMode::Strict, &mut stats);

        assert_eq!(
            row.number::<u32>(Some(0), "goals"),
            Err(LoadError::InvalidNumber {
                line: 2,
                field: "goals",
                value: "abc".to_string()
            })
        );
        assert!(matches!(
            row.number::<u32>(Some(1), "goals"),
            Err(LoadError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_result_tokens() {
        let record = csv::StringRecord::from(vec!["WIN", "draw"]);
        let mut stats = ParseStats::default();
        let mut row = reader(&record, CoercionMode::Lenient, &mut stats);
        assert_eq!(row.result(Some(0)), Ok(GameResult::Win));
        assert_eq!(row.result(Some(1)), Ok(GameResult::Loss));

        let mut strict_stats = ParseStats::default();
        let mut row = reader(&record, CoercionMode::Strict, &mut strict_stats);
        assert!(matches!(
            row.result(Some(1)),
            Err(LoadError::InvalidResult { .. })
        ));
    }

    #[test]
    fn test_decode_game_team_without_auxiliary_columns() {
        let headers = HeaderMap::new([
            "game_id", "team_id", "result", "head_coach", "goals", "shots", "tackles",
        ]);
        let columns = TeamGameStat::columns(&headers).unwrap();
        let record =
            csv::StringRecord::from(vec!["2012030221", "3", "LOSS", "John Tortorella", "2", "8", "44"]);
        let mut stats = ParseStats::default();
        let mut row = reader(&record, CoercionMode::Strict, &mut stats);

        let stat = TeamGameStat::decode(&columns, &mut row).unwrap();
        assert_eq!(stat.game_id, 2012030221);
        assert_eq!(stat.head_coach, "John Tortorella");
        assert_eq!(stat.tackles, 44);
        assert_eq!(stat.pim, 0);
        assert_eq!(stat.face_off_win_percentage, 0.0);
    }
}
