//! Competitions browser: search plus status filter over the seeded competitions.

use crate::logic::{filter, EntityList, StatusFilter};
use crate::models::{Competition, CompetitionStatus, PageError};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct CompetitionEntry {
    #[serde(flatten)]
    pub competition: Competition,
    pub badge: &'static str,
    pub countdown: Option<String>,
    pub action: &'static str,
    pub action_enabled: bool,
}

impl From<&Competition> for CompetitionEntry {
    fn from(c: &Competition) -> Self {
        let cta = c.call_to_action();
        Self {
            badge: c.status.badge(),
            countdown: c.countdown(),
            action: cta.label(),
            action_enabled: cta.enabled(),
            competition: c.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CompetitionsView {
    pub query: String,
    pub status: StatusFilter<CompetitionStatus>,
    pub competitions: Vec<CompetitionEntry>,
    /// Drives the "No competitions found" message.
    pub empty: bool,
}

#[derive(Clone, Debug)]
pub struct Competitions {
    competitions: EntityList<Competition>,
}

impl Competitions {
    pub fn new(competitions: &[Competition]) -> Self {
        Self {
            competitions: EntityList::seeded(competitions.to_vec()),
        }
    }

    pub fn all(&self) -> &[Competition] {
        self.competitions.get()
    }

    /// Filter by free text and a raw status (`"all"` or a status name).
    pub fn view(&self, query: &str, status: &str) -> Result<CompetitionsView, PageError> {
        let status = StatusFilter::parse(status).map_err(|_| PageError::UnknownOption {
            field: "status",
            value: status.to_string(),
        })?;
        Ok(self.view_filtered(query, status))
    }

    pub fn view_filtered(&self, query: &str, status: StatusFilter<CompetitionStatus>) -> CompetitionsView {
        let competitions: Vec<CompetitionEntry> = filter(self.competitions.get(), query, &status)
            .into_iter()
            .map(CompetitionEntry::from)
            .collect();
        CompetitionsView {
            query: query.to_string(),
            status,
            empty: competitions.is_empty(),
            competitions,
        }
    }
}
