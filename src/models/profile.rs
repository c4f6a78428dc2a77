//! The signed-in player's profile, statistics, recent games and achievements.

use crate::models::record::{initials, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Profile of the local player. There is exactly one, with id 1.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub rating: u32,
    pub title: String,
    pub country: String,
    pub join_date: String,
    pub bio: String,
}

impl Profile {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Editable profile fields: header (name, bio) and settings tab (email, country).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub bio: String,
    pub email: String,
    pub country: String,
}

impl Record for Profile {
    type Draft = ProfileDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            bio: self.bio.clone(),
            email: self.email.clone(),
            country: self.country.clone(),
        }
    }

    fn apply(&mut self, draft: ProfileDraft) {
        self.name = draft.name;
        self.bio = draft.bio;
        self.email = draft.email;
        self.country = draft.country;
    }
}

/// Lifetime game statistics.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub current_streak: u32,
}

impl ProfileStats {
    /// Wins as a percentage of all games, rounded to one decimal. 0 with no games.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        let pct = f64::from(self.wins) * 100.0 / f64::from(self.total_games);
        (pct * 10.0).round() / 10.0
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    pub fn letter(self) -> char {
        match self {
            GameResult::Win => 'W',
            GameResult::Draw => 'D',
            GameResult::Loss => 'L',
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecentGame {
    pub id: RecordId,
    pub opponent: String,
    pub result: GameResult,
    /// Opponent's rating at the time of the game.
    pub rating: u32,
    pub date: String,
    pub time_control: String,
}

impl Record for RecentGame {
    type Draft = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn draft(&self) {}

    fn apply(&mut self, _draft: ()) {}
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub earned: String,
    pub icon: String,
}

impl Record for Achievement {
    type Draft = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn draft(&self) {}

    fn apply(&mut self, _draft: ()) {}
}
