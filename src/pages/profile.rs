//! Profile page: inline-editable profile, statistics, recent games, achievements.

use crate::logic::{EditController, EditSession, EntityList};
use crate::models::{
    Achievement, PageError, Profile, ProfileDraft, ProfileStats, RecentGame, RecordId,
};
use serde::{Deserialize, Serialize};

pub const PROFILE_TABS: [&str; 4] = ["stats", "games", "achievements", "settings"];

/// Partial update of the open profile draft.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProfileDraftPatch {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StatsView {
    #[serde(flatten)]
    pub stats: ProfileStats,
    pub win_rate: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct RecentGameView {
    #[serde(flatten)]
    pub game: RecentGame,
    pub letter: char,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProfileView {
    pub profile: Profile,
    pub initials: String,
    pub edit: EditSession<ProfileDraft>,
    pub active_tab: &'static str,
    pub stats: StatsView,
    pub recent_games: Vec<RecentGameView>,
    pub achievements: Vec<Achievement>,
}

#[derive(Clone, Debug)]
pub struct ProfilePage {
    profile: Profile,
    edit: EditController<Profile>,
    stats: ProfileStats,
    recent_games: EntityList<RecentGame>,
    achievements: EntityList<Achievement>,
    active_tab: &'static str,
}

impl ProfilePage {
    pub fn new(
        profile: Profile,
        stats: ProfileStats,
        recent_games: &[RecentGame],
        achievements: &[Achievement],
    ) -> Self {
        Self {
            profile,
            edit: EditController::new(),
            stats,
            recent_games: EntityList::seeded(recent_games.to_vec()),
            achievements: EntityList::seeded(achievements.to_vec()),
            active_tab: PROFILE_TABS[0],
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    pub fn select_tab(&mut self, tab: &str) -> Result<(), PageError> {
        self.active_tab = PROFILE_TABS
            .into_iter()
            .find(|t| *t == tab)
            .ok_or_else(|| PageError::UnknownOption {
                field: "tab",
                value: tab.to_string(),
            })?;
        Ok(())
    }

    /// Open the editor with a draft of the current profile. Restarting discards the old draft.
    pub fn begin_edit(&mut self) {
        self.edit.begin_record(&self.profile);
    }

    pub fn update_draft(&mut self, patch: ProfileDraftPatch) -> Result<(), PageError> {
        let draft = self.edit.draft_mut().ok_or(PageError::NotEditing)?;
        if let Some(name) = patch.name {
            draft.name = name;
        }
        if let Some(bio) = patch.bio {
            draft.bio = bio;
        }
        if let Some(email) = patch.email {
            draft.email = email;
        }
        if let Some(country) = patch.country {
            draft.country = country;
        }
        Ok(())
    }

    pub fn commit_edit(&mut self) -> Result<RecordId, PageError> {
        if !self.edit.commit_record(&mut self.profile) {
            return Err(PageError::NotEditing);
        }
        log::debug!("Profile edit committed");
        Ok(self.profile.id)
    }

    /// Drop the draft; the profile keeps its pre-edit values.
    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    pub fn view(&self) -> ProfileView {
        ProfileView {
            profile: self.profile.clone(),
            initials: self.profile.initials(),
            edit: self.edit.session().clone(),
            active_tab: self.active_tab,
            stats: StatsView {
                stats: self.stats.clone(),
                win_rate: self.stats.win_rate(),
            },
            recent_games: self
                .recent_games
                .get()
                .iter()
                .map(|g| RecentGameView {
                    letter: g.result.letter(),
                    game: g.clone(),
                })
                .collect(),
            achievements: self.achievements.get().to_vec(),
        }
    }
}
