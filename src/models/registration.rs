//! Tournament registration submitted from the join page.

use crate::models::record::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Self-declared experience band.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner (0-1200)",
            ExperienceLevel::Intermediate => "Intermediate (1200-1800)",
            ExperienceLevel::Advanced => "Advanced (1800-2200)",
            ExperienceLevel::Expert => "Expert (2200+)",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            "expert" => Ok(ExperienceLevel::Expert),
            other => Err(format!("unknown experience level: {other}")),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RecordId,
    /// Slug of the tournament offer registered for.
    pub tournament: String,
    pub full_name: String,
    pub email: String,
    pub rating: u32,
    pub experience: Option<ExperienceLevel>,
    pub motivation: String,
}

impl Record for Registration {
    type Draft = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn draft(&self) {}

    fn apply(&mut self, _draft: ()) {}
}
