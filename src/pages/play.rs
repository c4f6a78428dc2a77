//! Start-playing screen: game setup, opponent search timer, online users to challenge.

use crate::logic::{with_status, EntityList, SearchTimer};
use crate::models::{GameType, OnlineUser, PageError, RecordId, UserStatus};
use serde::Serialize;
use std::time::Duration;

pub const RATING_MIN: u32 = 800;
pub const RATING_MAX: u32 = 3000;
pub const RATING_STEP: u32 = 50;
pub const DEFAULT_RATING_RANGE: (u32, u32) = (2000, 2200);

/// Time controls offered for quick play, per game type.
pub fn play_time_controls(game_type: GameType) -> &'static [&'static str] {
    match game_type {
        GameType::Bullet => &["1+0", "1+1", "2+1"],
        GameType::Blitz => &["3+0", "3+2", "5+0", "5+3"],
        GameType::Rapid => &["10+0", "10+5", "15+10", "30+0"],
        GameType::Classical => &["60+0", "90+30", "120+0"],
    }
}

pub fn game_type_description(game_type: GameType) -> &'static str {
    match game_type {
        GameType::Bullet => "1-2 minute games",
        GameType::Blitz => "3-5 minute games",
        GameType::Rapid => "10-15 minute games",
        GameType::Classical => "30+ minute games",
    }
}

/// Clamp to the slider bounds and snap to the nearest step.
fn snap_rating(value: u32) -> u32 {
    let clamped = value.clamp(RATING_MIN, RATING_MAX);
    let snapped = (clamped + RATING_STEP / 2) / RATING_STEP * RATING_STEP;
    snapped.clamp(RATING_MIN, RATING_MAX)
}

/// How long the two kinds of search last.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchDurations {
    pub search: Duration,
    pub quick_match: Duration,
}

impl Default for SearchDurations {
    fn default() -> Self {
        Self {
            search: Duration::from_secs(3),
            quick_match: Duration::from_secs(2),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GameTypeOption {
    pub id: GameType,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct OnlineUserView {
    #[serde(flatten)]
    pub user: OnlineUser,
    pub status_label: &'static str,
    pub challengeable: bool,
    pub challenged: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlayView {
    pub game_types: Vec<GameTypeOption>,
    pub game_type: Option<GameType>,
    /// Options for the selected game type; empty until one is chosen.
    pub time_controls: Vec<&'static str>,
    pub time_control: Option<&'static str>,
    pub rating_range: (u32, u32),
    pub searching: bool,
    pub can_search: bool,
    pub online_users: Vec<OnlineUserView>,
    pub looking_for_game: usize,
}

#[derive(Debug)]
pub struct StartPlaying {
    game_type: Option<GameType>,
    time_control: Option<&'static str>,
    rating_range: (u32, u32),
    search: SearchTimer,
    durations: SearchDurations,
    online_users: EntityList<OnlineUser>,
    challenges: Vec<RecordId>,
}

impl StartPlaying {
    pub fn new(online_users: &[OnlineUser], durations: SearchDurations) -> Self {
        Self {
            game_type: None,
            time_control: None,
            rating_range: DEFAULT_RATING_RANGE,
            search: SearchTimer::new(),
            durations,
            online_users: EntityList::seeded(online_users.to_vec()),
            challenges: Vec::new(),
        }
    }

    pub fn game_type(&self) -> Option<GameType> {
        self.game_type
    }

    pub fn time_control(&self) -> Option<&'static str> {
        self.time_control
    }

    pub fn rating_range(&self) -> (u32, u32) {
        self.rating_range
    }

    pub fn challenges(&self) -> &[RecordId] {
        &self.challenges
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_searching()
    }

    /// Choose a game type. A time control that does not belong to it is cleared.
    pub fn select_game_type(&mut self, raw: &str) -> Result<(), PageError> {
        let game_type: GameType = raw.parse().map_err(|_| PageError::UnknownOption {
            field: "game_type",
            value: raw.to_string(),
        })?;
        self.game_type = Some(game_type);
        if let Some(tc) = self.time_control {
            if !play_time_controls(game_type).contains(&tc) {
                self.time_control = None;
            }
        }
        Ok(())
    }

    /// Choose a time control offered for the selected game type.
    pub fn select_time_control(&mut self, raw: &str) -> Result<(), PageError> {
        let unknown = || PageError::UnknownOption {
            field: "time_control",
            value: raw.to_string(),
        };
        let game_type = self.game_type.ok_or_else(unknown)?;
        let tc = play_time_controls(game_type)
            .iter()
            .copied()
            .find(|tc| *tc == raw)
            .ok_or_else(unknown)?;
        self.time_control = Some(tc);
        Ok(())
    }

    /// Set the slider. Values are clamped, snapped to the step and put in order.
    pub fn set_rating_range(&mut self, low: u32, high: u32) -> (u32, u32) {
        let (a, b) = (snap_rating(low), snap_rating(high));
        self.rating_range = (a.min(b), a.max(b));
        self.rating_range
    }

    pub fn can_search(&self) -> bool {
        self.game_type.is_some() && self.time_control.is_some() && !self.is_searching()
    }

    /// Search with the chosen settings. Needs a game type and time control.
    pub fn start_search(&mut self) -> Result<(), PageError> {
        if self.is_searching() {
            return Err(PageError::AlreadySearching);
        }
        if self.game_type.is_none() || self.time_control.is_none() {
            return Err(PageError::SearchNotReady);
        }
        self.search.start(self.durations.search);
        log::debug!(
            "Searching for {:?} {:?} opponent rated {}-{}",
            self.game_type,
            self.time_control,
            self.rating_range.0,
            self.rating_range.1
        );
        Ok(())
    }

    /// Search with any settings. Restarts a search already running.
    pub fn quick_match(&mut self) {
        self.search.start(self.durations.quick_match);
        log::debug!("Quick match search started");
    }

    pub fn cancel_search(&mut self) {
        self.search.cancel();
    }

    /// Record a challenge to a user who is looking for a game.
    pub fn challenge(&mut self, id: RecordId) -> Result<(), PageError> {
        let user = self
            .online_users
            .find(id)
            .ok_or(PageError::RecordNotFound(id))?;
        if !user.challengeable() {
            return Err(PageError::NotChallengeable(id));
        }
        log::info!("Challenge sent to {}", user.name);
        if !self.challenges.contains(&id) {
            self.challenges.push(id);
        }
        Ok(())
    }

    pub fn looking_for_game(&self) -> usize {
        with_status(self.online_users.get(), UserStatus::LookingForGame).len()
    }

    pub fn view(&self) -> PlayView {
        PlayView {
            game_types: GameType::ALL
                .into_iter()
                .map(|t| GameTypeOption {
                    id: t,
                    name: t.label(),
                    description: game_type_description(t),
                })
                .collect(),
            game_type: self.game_type,
            time_controls: self
                .game_type
                .map(|t| play_time_controls(t).to_vec())
                .unwrap_or_default(),
            time_control: self.time_control,
            rating_range: self.rating_range,
            searching: self.is_searching(),
            can_search: self.can_search(),
            online_users: self
                .online_users
                .get()
                .iter()
                .map(|u| OnlineUserView {
                    status_label: u.status.label(),
                    challengeable: u.challengeable(),
                    challenged: self.challenges.contains(&u.id),
                    user: u.clone(),
                })
                .collect(),
            looking_for_game: self.looking_for_game(),
        }
    }
}
