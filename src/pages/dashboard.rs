//! Home dashboard: headline figures, top-five leaderboard, active competitions.

use crate::models::{Competition, CompetitionStatus, PageError, RankedPlayer};
use crate::pages::leaderboard::{Leaderboard, LeaderboardView};
use serde::Serialize;

/// Players shown on the dashboard board.
pub const DASHBOARD_PLAYERS: usize = 5;
/// Competitions shown in the "active" panel.
pub const DASHBOARD_COMPETITIONS: usize = 3;

pub const DASHBOARD_TABS: [&str; 2] = ["leaderboard", "competitions"];

/// Platform-wide headline figures.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlatformStats {
    pub active_tournaments: u32,
    pub registered_players: &'static str,
    pub live_matches: u32,
}

pub const PLATFORM_STATS: PlatformStats = PlatformStats {
    active_tournaments: 156,
    registered_players: "12.4K",
    live_matches: 8,
};

#[derive(Clone, Debug, Serialize)]
pub struct CompetitionCard {
    #[serde(flatten)]
    pub competition: Competition,
    pub badge: &'static str,
    pub countdown: Option<String>,
    pub action: &'static str,
}

impl CompetitionCard {
    fn dashboard(competition: &Competition) -> Self {
        let live = competition.status == CompetitionStatus::Live;
        Self {
            badge: if live { "● LIVE" } else { "UPCOMING" },
            countdown: competition.countdown(),
            action: if live { "Join Live" } else { "Register" },
            competition: competition.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct DashboardView {
    pub stats: PlatformStats,
    pub active_tab: &'static str,
    pub leaderboard: LeaderboardView,
    pub competitions: Vec<CompetitionCard>,
}

#[derive(Clone, Debug)]
pub struct Dashboard {
    pub leaderboard: Leaderboard,
    competitions: Vec<Competition>,
    active_tab: &'static str,
}

impl Dashboard {
    pub fn new(players: &[RankedPlayer], competitions: &[Competition]) -> Self {
        Self {
            leaderboard: Leaderboard::new(players.iter().take(DASHBOARD_PLAYERS).cloned().collect()),
            competitions: competitions
                .iter()
                .take(DASHBOARD_COMPETITIONS)
                .cloned()
                .collect(),
            active_tab: DASHBOARD_TABS[0],
        }
    }

    pub fn active_tab(&self) -> &'static str {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: &str) -> Result<(), PageError> {
        self.active_tab = DASHBOARD_TABS
            .into_iter()
            .find(|t| *t == tab)
            .ok_or_else(|| PageError::UnknownOption {
                field: "tab",
                value: tab.to_string(),
            })?;
        Ok(())
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            stats: PLATFORM_STATS,
            active_tab: self.active_tab,
            leaderboard: self.leaderboard.view(""),
            competitions: self.competitions.iter().map(CompetitionCard::dashboard).collect(),
        }
    }
}
