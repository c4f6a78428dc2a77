//! Online users listed on the start-playing screen.

use crate::models::record::{HasStatus, Record, RecordId};
use crate::models::schedule::GameType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    LookingForGame,
    InGame,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            UserStatus::LookingForGame => "Looking for game",
            UserStatus::InGame => "In game",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OnlineUser {
    pub id: RecordId,
    pub name: String,
    pub rating: u32,
    pub status: UserStatus,
    pub game_type: GameType,
}

impl OnlineUser {
    /// Only users waiting for a game can be challenged.
    pub fn challengeable(&self) -> bool {
        self.status == UserStatus::LookingForGame
    }
}

impl Record for OnlineUser {
    type Draft = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn draft(&self) {}

    fn apply(&mut self, _draft: ()) {}
}

impl HasStatus for OnlineUser {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }
}
