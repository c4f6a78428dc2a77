//! Fixed fixtures every new workspace starts from. Compiled in from `seed/*.csv`.

use crate::models::{
    Achievement, Competition, OnlineUser, Profile, ProfileStats, RankedPlayer, RecentGame,
    ScheduledMatch, TournamentOffer,
};
use serde::de::DeserializeOwned;

const PLAYERS_CSV: &str = include_str!("../seed/players.csv");
const COMPETITIONS_CSV: &str = include_str!("../seed/competitions.csv");
const OFFERS_CSV: &str = include_str!("../seed/offers.csv");
const SCHEDULED_MATCHES_CSV: &str = include_str!("../seed/scheduled_matches.csv");
const PROFILE_CSV: &str = include_str!("../seed/profile.csv");
const PROFILE_STATS_CSV: &str = include_str!("../seed/profile_stats.csv");
const RECENT_GAMES_CSV: &str = include_str!("../seed/recent_games.csv");
const ACHIEVEMENTS_CSV: &str = include_str!("../seed/achievements.csv");
const ONLINE_USERS_CSV: &str = include_str!("../seed/online_users.csv");

/// Errors loading the fixtures.
#[derive(Debug)]
pub enum SeedError {
    Csv { file: &'static str, source: csv::Error },
    /// A fixture that must hold exactly one row does not.
    ExpectedOneRow { file: &'static str, rows: usize },
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Csv { file, source } => write!(f, "Bad seed file {}: {}", file, source),
            SeedError::ExpectedOneRow { file, rows } => {
                write!(f, "Seed file {} must hold one row (found {})", file, rows)
            }
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Csv { source, .. } => Some(source),
            SeedError::ExpectedOneRow { .. } => None,
        }
    }
}

/// All fixture data, parsed once at startup and cloned into each workspace.
#[derive(Clone, Debug)]
pub struct Seed {
    pub players: Vec<RankedPlayer>,
    pub competitions: Vec<Competition>,
    pub offers: Vec<TournamentOffer>,
    pub scheduled_matches: Vec<ScheduledMatch>,
    pub profile: Profile,
    pub profile_stats: ProfileStats,
    pub recent_games: Vec<RecentGame>,
    pub achievements: Vec<Achievement>,
    pub online_users: Vec<OnlineUser>,
}

impl Seed {
    pub fn load() -> Result<Self, SeedError> {
        Ok(Self {
            players: rows("players.csv", PLAYERS_CSV)?,
            competitions: rows("competitions.csv", COMPETITIONS_CSV)?,
            offers: rows("offers.csv", OFFERS_CSV)?,
            scheduled_matches: rows("scheduled_matches.csv", SCHEDULED_MATCHES_CSV)?,
            profile: single_row("profile.csv", PROFILE_CSV)?,
            profile_stats: single_row("profile_stats.csv", PROFILE_STATS_CSV)?,
            recent_games: rows("recent_games.csv", RECENT_GAMES_CSV)?,
            achievements: rows("achievements.csv", ACHIEVEMENTS_CSV)?,
            online_users: rows("online_users.csv", ONLINE_USERS_CSV)?,
        })
    }
}

fn rows<T: DeserializeOwned>(file: &'static str, data: &str) -> Result<Vec<T>, SeedError> {
    csv::Reader::from_reader(data.as_bytes())
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| SeedError::Csv { file, source })
}

fn single_row<T: DeserializeOwned>(file: &'static str, data: &str) -> Result<T, SeedError> {
    let mut all: Vec<T> = rows(file, data)?;
    if all.len() != 1 {
        return Err(SeedError::ExpectedOneRow { file, rows: all.len() });
    }
    Ok(all.remove(0))
}
