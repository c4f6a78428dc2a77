//! Data structures for the ChessArena pages: players, competitions, matches, profile.

mod competition;
mod error;
mod lobby;
mod player;
mod profile;
mod record;
mod registration;
mod schedule;

pub use competition::{CallToAction, Competition, CompetitionStatus, TournamentOffer};
pub use error::{FieldViolation, PageError, ViolationKind};
pub use lobby::{OnlineUser, UserStatus};
pub use player::{parse_rating, PlayerDraft, PointsStep, RankedPlayer, POINTS_STEP};
pub use profile::{
    Achievement, GameResult, Profile, ProfileDraft, ProfileStats, RecentGame,
};
pub use record::{initials, HasStatus, Record, RecordId, Searchable};
pub use registration::{ExperienceLevel, Registration};
pub use schedule::{
    is_schedule_time_control, GameType, MatchStatus, ScheduledMatch, TimeControl,
    SCHEDULE_TIME_CONTROLS,
};
