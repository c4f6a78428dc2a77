//! Competitions (browser and dashboard) and tournament offers (join page).

use crate::models::record::{HasStatus, Record, RecordId, Searchable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a competition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionStatus {
    Live,
    Upcoming,
    Registration,
    Completed,
}

impl CompetitionStatus {
    /// Badge text shown next to the competition name.
    pub fn badge(self) -> &'static str {
        match self {
            CompetitionStatus::Live => "● LIVE",
            CompetitionStatus::Upcoming => "UPCOMING",
            CompetitionStatus::Registration => "OPEN REGISTRATION",
            CompetitionStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for CompetitionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(CompetitionStatus::Live),
            "upcoming" => Ok(CompetitionStatus::Upcoming),
            "registration" => Ok(CompetitionStatus::Registration),
            "completed" => Ok(CompetitionStatus::Completed),
            other => Err(format!("unknown competition status: {other}")),
        }
    }
}

/// Button offered on a competition card.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallToAction {
    JoinLive,
    RegisterNow,
    ViewResults,
}

impl CallToAction {
    pub fn label(self) -> &'static str {
        match self {
            CallToAction::JoinLive => "Join Live",
            CallToAction::RegisterNow => "Register Now",
            CallToAction::ViewResults => "View Results",
        }
    }

    /// Results of completed competitions are not browsable yet, so the button is disabled.
    pub fn enabled(self) -> bool {
        self != CallToAction::ViewResults
    }
}

/// A chess competition.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Competition {
    pub id: RecordId,
    pub name: String,
    pub participants: u32,
    pub prize: String,
    pub status: CompetitionStatus,
    pub days_left: u32,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl Competition {
    /// "Ends in N days" while live, "Starts in N days" before; nothing once completed.
    pub fn countdown(&self) -> Option<String> {
        match self.status {
            CompetitionStatus::Completed => None,
            CompetitionStatus::Live => Some(format!("Ends in {} days", self.days_left)),
            _ => Some(format!("Starts in {} days", self.days_left)),
        }
    }

    pub fn call_to_action(&self) -> CallToAction {
        match self.status {
            CompetitionStatus::Live => CallToAction::JoinLive,
            CompetitionStatus::Completed => CallToAction::ViewResults,
            _ => CallToAction::RegisterNow,
        }
    }
}

impl Record for Competition {
    type Draft = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn draft(&self) {}

    fn apply(&mut self, _draft: ()) {}
}

impl Searchable for Competition {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

impl HasStatus for Competition {
    type Status = CompetitionStatus;

    fn status(&self) -> CompetitionStatus {
        self.status
    }
}

/// A tournament open for registration on the join page. Keyed by a short slug.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentOffer {
    pub slug: String,
    pub name: String,
    pub participants: u32,
    pub prize: String,
    pub status: CompetitionStatus,
    pub days_left: u32,
    pub requirements: String,
    pub entry_fee: String,
}

impl TournamentOffer {
    /// Upcoming offers say so; everything else is shown as open.
    pub fn badge(&self) -> &'static str {
        if self.status == CompetitionStatus::Upcoming {
            "UPCOMING"
        } else {
            "OPEN"
        }
    }
}
