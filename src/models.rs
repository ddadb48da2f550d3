use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::cmp::Ordering;
use std::collections::HashSet;
use thiserror::Error;

/// Highest score the match form accepts for one team
pub const MAX_SCORE: i32 = 10;

/// Points awarded per result in the standings
pub const POINTS_WIN: u32 = 3;
pub const POINTS_DRAW: u32 = 1;

/// Player from database
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Form data for creating a new player
#[derive(Debug, Deserialize)]
pub struct NewPlayer {
    pub name: String,
}

impl NewPlayer {
    /// Trimmed, non-empty player name
    pub fn validated_name(&self) -> Result<&str, PlayerError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PlayerError::EmptyName);
        }
        Ok(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Player name cannot be empty")]
    EmptyName,
}

/// Which team a player lined up with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

/// A player's result in a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn from_goals(goals_for: i32, goals_against: i32) -> Self {
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Draw,
        }
    }

    /// League points for this result
    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => POINTS_WIN,
            Outcome::Draw => POINTS_DRAW,
            Outcome::Loss => 0,
        }
    }
}

/// Match from database
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Match {
    pub id: i32,
    pub team1: Vec<i32>,
    pub team2: Vec<i32>,
    pub score1: i32,
    pub score2: i32,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// All player slots in lineup order: team1 first, then team2
    pub fn participants(&self) -> impl Iterator<Item = i32> + '_ {
        self.team1.iter().chain(self.team2.iter()).copied()
    }

    /// Side of a player. Team1 wins when an id was entered on both teams.
    pub fn side_of(&self, player_id: i32) -> Option<Side> {
        if self.team1.contains(&player_id) {
            Some(Side::Team1)
        } else if self.team2.contains(&player_id) {
            Some(Side::Team2)
        } else {
            None
        }
    }

    /// (goals for, goals against) from one side's point of view
    pub fn goals(&self, side: Side) -> (i32, i32) {
        match side {
            Side::Team1 => (self.score1, self.score2),
            Side::Team2 => (self.score2, self.score1),
        }
    }

    pub fn outcome_for(&self, side: Side) -> Outcome {
        let (goals_for, goals_against) = self.goals(side);
        Outcome::from_goals(goals_for, goals_against)
    }

    pub fn team(&self, side: Side) -> &[i32] {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    pub fn opposing_team(&self, side: Side) -> &[i32] {
        match side {
            Side::Team1 => &self.team2,
            Side::Team2 => &self.team1,
        }
    }

    /// Winning side, or None for a draw
    pub fn winner(&self) -> Option<Side> {
        match self.outcome_for(Side::Team1) {
            Outcome::Win => Some(Side::Team1),
            Outcome::Loss => Some(Side::Team2),
            Outcome::Draw => None,
        }
    }
}

/// A match about to be recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub team1: [i32; 2],
    pub team2: [i32; 2],
    pub score1: i32,
    pub score2: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Please select 2 players for each team")]
    IncompleteLineup,
    #[error("Player {0} was selected more than once")]
    DuplicatePlayer(i32),
    #[error("Player {0} does not exist")]
    UnknownPlayer(i32),
    #[error("Scores must be between 0 and {}", MAX_SCORE)]
    ScoreOutOfRange,
}

impl NewMatch {
    /// Check lineup and scores against the current roster
    pub fn validate(&self, players: &[Player]) -> Result<(), MatchError> {
        let known: HashSet<i32> = players.iter().map(|p| p.id).collect();
        let mut seen = HashSet::new();

        for id in self.team1.iter().chain(self.team2.iter()) {
            if !seen.insert(*id) {
                return Err(MatchError::DuplicatePlayer(*id));
            }
            if !known.contains(id) {
                return Err(MatchError::UnknownPlayer(*id));
            }
        }

        let valid_score = |s: i32| (0..=MAX_SCORE).contains(&s);
        if !valid_score(self.score1) || !valid_score(self.score2) {
            return Err(MatchError::ScoreOutOfRange);
        }

        Ok(())
    }
}
