//! ChessArena web app: library with models, page state and list/edit/filter/form logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod pages;
pub mod seed;

pub use config::ServerConfig;
pub use logic::{
    filter, search, EditController, EditSession, EntityList, FormCollector, FormSchema,
    SearchTimer, StatusFilter,
};
pub use models::{
    Competition, CompetitionStatus, FieldViolation, GameType, PageError, PlayerDraft, PointsStep,
    Profile, RankedPlayer, Record, RecordId, ScheduledMatch, ViolationKind,
};
pub use pages::{Route, SearchDurations, Workspace};
pub use seed::{Seed, SeedError};
