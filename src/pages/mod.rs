//! Page states and the client-side route table.
//!
//! Each page owns its state; nothing is shared between pages. A [`Workspace`] bundles one
//! instance of every page for a browser session.

mod competitions;
mod dashboard;
mod join;
mod leaderboard;
mod play;
mod profile;
mod rankings;
mod schedule;

pub use competitions::{CompetitionEntry, Competitions, CompetitionsView};
pub use dashboard::{
    CompetitionCard, Dashboard, DashboardView, PlatformStats, DASHBOARD_COMPETITIONS,
    DASHBOARD_PLAYERS, DASHBOARD_TABS, PLATFORM_STATS,
};
pub use join::{JoinTournament, JoinView, OfferCard, RegistrationFields, REGISTRATION_FORM};
pub use leaderboard::{Leaderboard, LeaderboardRow, LeaderboardView, PlayerDraftPatch};
pub use play::{
    game_type_description, play_time_controls, OnlineUserView, PlayView, SearchDurations,
    StartPlaying, DEFAULT_RATING_RANGE, RATING_MAX, RATING_MIN, RATING_STEP,
};
pub use profile::{ProfileDraftPatch, ProfilePage, ProfileView, PROFILE_TABS};
pub use rankings::Rankings;
pub use schedule::{ScheduleMatch, ScheduleView, SCHEDULE_FORM};

use crate::seed::Seed;
use serde::Serialize;

/// Pages reachable by path. Anything else is [`Route::NotFound`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Rankings,
    Competitions,
    JoinTournament,
    Profile,
    StartPlaying,
    ScheduleMatch,
    NotFound,
}

impl Route {
    pub const PAGES: [Route; 7] = [
        Route::Home,
        Route::Rankings,
        Route::Competitions,
        Route::JoinTournament,
        Route::Profile,
        Route::StartPlaying,
        Route::ScheduleMatch,
    ];

    /// Resolve a request path. A single trailing slash is ignored; query strings are not part of `path`.
    pub fn from_path(path: &str) -> Route {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Route::PAGES
            .into_iter()
            .find(|r| r.path() == trimmed)
            .unwrap_or(Route::NotFound)
    }

    /// Canonical path. `NotFound` has none and reports `"*"`.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Rankings => "/rankings",
            Route::Competitions => "/competitions",
            Route::JoinTournament => "/join-tournament",
            Route::Profile => "/profile",
            Route::StartPlaying => "/start-playing",
            Route::ScheduleMatch => "/schedule-match",
            Route::NotFound => "*",
        }
    }
}

/// Every page's state for one session.
#[derive(Debug)]
pub struct Workspace {
    pub dashboard: Dashboard,
    pub rankings: Rankings,
    pub competitions: Competitions,
    pub join: JoinTournament,
    pub profile: ProfilePage,
    pub schedule: ScheduleMatch,
    pub play: StartPlaying,
}

impl Workspace {
    /// Fresh pages from the fixtures.
    pub fn new(seed: &Seed, durations: SearchDurations) -> Self {
        Self {
            dashboard: Dashboard::new(&seed.players, &seed.competitions),
            rankings: Rankings::new(&seed.players),
            competitions: Competitions::new(&seed.competitions),
            join: JoinTournament::new(&seed.offers),
            profile: ProfilePage::new(
                seed.profile.clone(),
                seed.profile_stats.clone(),
                &seed.recent_games,
                &seed.achievements,
            ),
            schedule: ScheduleMatch::new(&seed.scheduled_matches),
            play: StartPlaying::new(&seed.online_users, durations),
        }
    }
}
