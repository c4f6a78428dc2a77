//! Ranked player and its inline-edit draft.

use crate::models::record::{initials, Record, RecordId, Searchable};
use serde::{Deserialize, Serialize};

/// Points change per click of the +/- buttons.
pub const POINTS_STEP: f64 = 0.5;

/// Direction of a points button.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsStep {
    Up,
    Down,
}

impl PointsStep {
    pub fn delta(self) -> f64 {
        match self {
            PointsStep::Up => POINTS_STEP,
            PointsStep::Down => -POINTS_STEP,
        }
    }
}

/// A player on a leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub id: RecordId,
    pub name: String,
    pub rating: u32,
    pub rank: u32,
    pub points: f64,
    /// Empty on the dashboard leaderboard, which has no country column.
    #[serde(default)]
    pub country: String,
}

impl RankedPlayer {
    /// Add `delta` to the points, never going below zero.
    pub fn adjust_points(&mut self, delta: f64) {
        self.points = (self.points + delta).max(0.0);
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Editable fields of a ranked player: name and rating.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub rating: u32,
}

impl PlayerDraft {
    /// Set the rating from raw input; anything that is not a non-negative integer becomes 0.
    pub fn set_rating_input(&mut self, raw: &str) {
        self.rating = parse_rating(raw);
    }
}

/// Parse a rating typed by the user. Invalid input coerces to 0.
pub fn parse_rating(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

impl Record for RankedPlayer {
    type Draft = PlayerDraft;

    fn id(&self) -> RecordId {
        self.id
    }

    fn draft(&self) -> PlayerDraft {
        PlayerDraft {
            name: self.name.clone(),
            rating: self.rating,
        }
    }

    fn apply(&mut self, draft: PlayerDraft) {
        self.name = draft.name;
        self.rating = draft.rating;
    }
}

impl Searchable for RankedPlayer {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.country]
    }
}
