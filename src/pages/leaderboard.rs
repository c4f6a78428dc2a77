//! Leaderboard with inline edit and points buttons (dashboard and rankings page).

use crate::logic::{search, EditController, EditSession, EntityList};
use crate::models::{PageError, PlayerDraft, PointsStep, RankedPlayer, RecordId};
use serde::{Deserialize, Serialize};

/// Partial update of the open player draft. Rating arrives as typed text.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PlayerDraftPatch {
    pub name: Option<String>,
    pub rating: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LeaderboardRow {
    #[serde(flatten)]
    pub player: RankedPlayer,
    pub initials: String,
    pub editing: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct LeaderboardView {
    pub rows: Vec<LeaderboardRow>,
    /// Rows matching the search.
    pub shown: usize,
    /// All players on the board.
    pub total: usize,
    pub edit: EditSession<PlayerDraft>,
}

#[derive(Clone, Debug)]
pub struct Leaderboard {
    players: EntityList<RankedPlayer>,
    edit: EditController<RankedPlayer>,
}

impl Leaderboard {
    pub fn new(players: Vec<RankedPlayer>) -> Self {
        Self {
            players: EntityList::seeded(players),
            edit: EditController::new(),
        }
    }

    pub fn players(&self) -> &[RankedPlayer] {
        self.players.get()
    }

    pub fn edit_session(&self) -> &EditSession<PlayerDraft> {
        self.edit.session()
    }

    /// Open the inline editor on a player, replacing any other open draft.
    pub fn begin_edit(&mut self, id: RecordId) -> Result<(), PageError> {
        if !self.edit.begin(&self.players, id) {
            return Err(PageError::RecordNotFound(id));
        }
        log::debug!("Leaderboard edit started on player {}", id);
        Ok(())
    }

    pub fn update_draft(&mut self, patch: PlayerDraftPatch) -> Result<(), PageError> {
        let draft = self.edit.draft_mut().ok_or(PageError::NotEditing)?;
        if let Some(name) = patch.name {
            draft.name = name;
        }
        if let Some(rating) = patch.rating {
            draft.set_rating_input(&rating);
        }
        Ok(())
    }

    /// Save the open draft into its player.
    pub fn commit_edit(&mut self) -> Result<RecordId, PageError> {
        let id = self.edit.editing_id().ok_or(PageError::NotEditing)?;
        let written = self.edit.commit(&mut self.players);
        log::debug!("Leaderboard edit of player {} committed", id);
        written.ok_or(PageError::RecordNotFound(id))
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    /// Move a player's points by one step, clamped at zero. Returns the new total.
    pub fn change_points(&mut self, id: RecordId, step: PointsStep) -> Result<f64, PageError> {
        let mut points = 0.0;
        let found = self.players.update(id, |p| {
            p.adjust_points(step.delta());
            points = p.points;
        });
        if !found {
            return Err(PageError::RecordNotFound(id));
        }
        Ok(points)
    }

    /// Rows matching `query` (name or country), in board order.
    pub fn view(&self, query: &str) -> LeaderboardView {
        let editing = self.edit.editing_id();
        let rows: Vec<LeaderboardRow> = search(self.players.get(), query)
            .into_iter()
            .map(|p| LeaderboardRow {
                initials: p.initials(),
                editing: editing == Some(p.id),
                player: p.clone(),
            })
            .collect();
        LeaderboardView {
            shown: rows.len(),
            total: self.players.len(),
            rows,
            edit: self.edit.session().clone(),
        }
    }
}
