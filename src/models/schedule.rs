//! Scheduled matches, game types and time controls.

use crate::models::record::{HasStatus, Record, RecordId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Speed category of a game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Bullet,
    Blitz,
    Rapid,
    Classical,
}

impl GameType {
    pub const ALL: [GameType; 4] = [
        GameType::Bullet,
        GameType::Blitz,
        GameType::Rapid,
        GameType::Classical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GameType::Bullet => "Bullet",
            GameType::Blitz => "Blitz",
            GameType::Rapid => "Rapid",
            GameType::Classical => "Classical",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Bullet => "bullet",
            GameType::Blitz => "blitz",
            GameType::Rapid => "rapid",
            GameType::Classical => "classical",
        }
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown game type: {s}"))
    }
}

/// A time control option on the scheduler ("minutes+increment").
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TimeControl {
    pub value: &'static str,
    pub category: GameType,
}

impl TimeControl {
    pub fn label(&self) -> String {
        format!("{} ({})", self.value, self.category.label())
    }
}

/// Time controls offered by the scheduler.
pub const SCHEDULE_TIME_CONTROLS: [TimeControl; 11] = [
    TimeControl { value: "1+0", category: GameType::Bullet },
    TimeControl { value: "1+1", category: GameType::Bullet },
    TimeControl { value: "3+0", category: GameType::Blitz },
    TimeControl { value: "3+2", category: GameType::Blitz },
    TimeControl { value: "5+0", category: GameType::Blitz },
    TimeControl { value: "5+3", category: GameType::Blitz },
    TimeControl { value: "10+0", category: GameType::Rapid },
    TimeControl { value: "15+10", category: GameType::Rapid },
    TimeControl { value: "30+0", category: GameType::Rapid },
    TimeControl { value: "60+0", category: GameType::Classical },
    TimeControl { value: "90+30", category: GameType::Classical },
];

pub fn is_schedule_time_control(value: &str) -> bool {
    SCHEDULE_TIME_CONTROLS.iter().any(|tc| tc.value == value)
}

/// Confirmation state of a scheduled match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// A match arranged with an opponent for a future date.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub id: RecordId,
    pub opponent: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub time_control: String,
    pub game_type: GameType,
    pub status: MatchStatus,
    #[serde(default)]
    pub notes: String,
}

impl Record for ScheduledMatch {
    type Draft = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn draft(&self) {}

    fn apply(&mut self, _draft: ()) {}
}

impl HasStatus for ScheduledMatch {
    type Status = MatchStatus;

    fn status(&self) -> MatchStatus {
        self.status
    }
}
