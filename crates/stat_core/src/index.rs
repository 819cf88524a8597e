//! Join Index - id → record slot lookups over the frozen record vectors.
//!
//! Built once when the tracker is constructed. Slots are positions in the
//! tracker's vectors, so the index never borrows the records it points at.

use crate::models::{Game, Team};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct JoinIndex {
    games: FxHashMap<u64, usize>,
    teams: FxHashMap<u32, usize>,
}

impl JoinIndex {
    /// Index games and teams by identifier.
    ///
    /// A repeated identifier keeps its first row; later duplicates are
    /// reported and left unreachable by id.
    pub fn build(games: &[Game], teams: &[Team]) -> Self {
        let mut index = Self {
            games: FxHashMap::default(),
            teams: FxHashMap::default(),
        };

        for (slot, game) in games.iter().enumerate() {
            if index.games.contains_key(&game.game_id) {
                log::warn!("Duplicate game_id {} at row {}, keeping first", game.game_id, slot + 1);
                continue;
            }
            index.games.insert(game.game_id, slot);
        }

        for (slot, team) in teams.iter().enumerate() {
            if index.teams.contains_key(&team.team_id) {
                log::warn!("Duplicate team_id {} at row {}, keeping first", team.team_id, slot + 1);
                continue;
            }
            index.teams.insert(team.team_id, slot);
        }

        log::debug!(
            "Join index built: {} games, {} teams",
            index.games.len(),
            index.teams.len()
        );
        index
    }

    pub fn game_slot(&self, game_id: u64) -> Option<usize> {
        self.games.get(&game_id).copied()
    }

    pub fn team_slot(&self, team_id: u32) -> Option<usize> {
        self.teams.get(&team_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn test_slots_resolve_to_rows() {
        let games = fixture::games();
        let teams = fixture::teams();
        let index = JoinIndex::build(&games, &teams);

        let slot = index.game_slot(2012030223).unwrap();
        assert_eq!(games[slot].home_team_id, 6);
        let slot = index.team_slot(3).unwrap();
        assert_eq!(teams[slot].team_name, "Team Three");
        assert_eq!(index.game_slot(1), None);
        assert_eq!(index.team_slot(99), None);
    }

    #[test]
    fn test_duplicate_id_keeps_first_row() {
        let mut teams = fixture::teams();
        let mut shadow = teams[0].clone();
        shadow.team_name = "Shadow".to_string();
        teams.push(shadow);

        let index = JoinIndex::build(&[], &teams);
        assert_eq!(index.team_slot(1), Some(0));
    }
}
