use serde::{Deserialize, Serialize};

/// One club row (`teams.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: u32,
    pub franchise_id: u32,
    /// Display name returned by every team-ranking query.
    pub team_name: String,
    pub abbreviation: String,
    pub stadium: String,
    pub link: String,
}
