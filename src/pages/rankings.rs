//! Global rankings page: full leaderboard with search over name and country.

use crate::models::RankedPlayer;
use crate::pages::leaderboard::{Leaderboard, LeaderboardView};

#[derive(Clone, Debug)]
pub struct Rankings {
    pub leaderboard: Leaderboard,
}

impl Rankings {
    pub fn new(players: &[RankedPlayer]) -> Self {
        Self {
            leaderboard: Leaderboard::new(players.to_vec()),
        }
    }

    /// Board filtered by `query`; `shown`/`total` feed "Showing X of Y players".
    pub fn view(&self, query: &str) -> LeaderboardView {
        self.leaderboard.view(query)
    }
}
