// Draft session state machine: turn order, board, drafted set, pick cursor.
//
// All mutation is synchronous and single-threaded; every operation either
// succeeds atomically or fails without touching state.

use std::collections::HashSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::board::DraftBoard;
use super::pick::{snake_slot, DraftPick, Slot};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("invalid draft configuration: {0}")]
    InvalidConfig(String),

    #[error("draft has not been started")]
    NotStarted,

    #[error("draft is already complete")]
    DraftComplete,

    #[error("player already drafted: {0}")]
    AlreadyDrafted(String),

    #[error("player name must not be blank")]
    EmptyName,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings for one draft session. Immutable once the draft starts; changing
/// them means calling `start` again, which rebuilds everything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Number of teams. Must be positive and even: the snake direction flip
    /// is only meaningful with paired rounds.
    pub num_teams: usize,
    /// Number of rounds. Must be positive.
    pub rounds: usize,
    /// Team display names. Missing entries pad with "Team N"; extras are
    /// dropped.
    pub team_names: Vec<String>,
}

impl DraftConfig {
    fn validate(&self) -> Result<(), DraftError> {
        if self.num_teams == 0 {
            return Err(DraftError::InvalidConfig(
                "num_teams must be greater than 0".into(),
            ));
        }
        if self.num_teams % 2 != 0 {
            return Err(DraftError::InvalidConfig(format!(
                "num_teams must be even, got {}",
                self.num_teams
            )));
        }
        if self.rounds == 0 {
            return Err(DraftError::InvalidConfig(
                "rounds must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Resolve the final team name list: trimmed input names where given and
    /// non-blank, "Team N" defaults elsewhere.
    fn resolved_team_names(&self) -> Vec<String> {
        (0..self.num_teams)
            .map(|i| {
                match self.team_names.get(i).map(|n| n.trim()) {
                    Some(name) if !name.is_empty() => name.to_string(),
                    _ => format!("Team {}", i + 1),
                }
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

/// Lifecycle phase of a draft session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    Complete,
}

/// The outcome of a successful `commit_pick`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedPick {
    /// The board slot that was filled.
    pub slot: Slot,
    /// Display name of the team that made the pick.
    pub team_name: String,
    /// Sequential pick number (1-indexed).
    pub pick_number: u32,
    /// Whether this pick completed the draft.
    pub draft_complete: bool,
}

/// A single draft session. Owns the board, the drafted set, the pick cursor,
/// and the team list. Explicitly constructed and passed by handle; there is
/// no process-wide singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSession {
    phase: Phase,
    board: DraftBoard,
    team_names: Vec<String>,
    num_teams: usize,
    rounds: usize,
    drafted: HashSet<String>,
    picks: Vec<DraftPick>,
    pick_index: usize,
}

impl DraftSession {
    /// A fresh, not-yet-started session.
    pub fn new() -> Self {
        DraftSession {
            phase: Phase::NotStarted,
            board: DraftBoard::new(0, 0),
            team_names: Vec::new(),
            num_teams: 0,
            rounds: 0,
            drafted: HashSet::new(),
            picks: Vec::new(),
            pick_index: 0,
        }
    }

    /// Start (or restart) the draft. Always rebuilds the board and session
    /// state from scratch; a start is also a reset, from any phase.
    pub fn start(&mut self, config: DraftConfig) -> Result<(), DraftError> {
        config.validate()?;

        self.team_names = config.resolved_team_names();
        self.num_teams = config.num_teams;
        self.rounds = config.rounds;
        self.board = DraftBoard::new(config.rounds, config.num_teams);
        self.drafted.clear();
        self.picks.clear();
        self.pick_index = 0;
        self.phase = Phase::InProgress;

        info!(
            "draft started: {} teams, {} rounds ({} total picks)",
            self.num_teams,
            self.rounds,
            self.total_picks()
        );
        Ok(())
    }

    /// The slot the next pick will fill. Pure function of the pick cursor.
    pub fn current_slot(&self) -> Result<Slot, DraftError> {
        match self.phase {
            Phase::NotStarted => Err(DraftError::NotStarted),
            Phase::Complete => Err(DraftError::DraftComplete),
            Phase::InProgress => Ok(snake_slot(self.pick_index, self.num_teams)),
        }
    }

    /// Commit a pick for the team currently on the clock.
    ///
    /// Fills the current slot (guaranteed empty by the monotonic cursor),
    /// records the pick, advances the cursor by exactly one, and flips to
    /// `Complete` the instant the final slot is filled.
    pub fn commit_pick(&mut self, player_name: &str) -> Result<CommittedPick, DraftError> {
        match self.phase {
            Phase::NotStarted => return Err(DraftError::NotStarted),
            Phase::Complete => return Err(DraftError::DraftComplete),
            Phase::InProgress => {}
        }

        let name = player_name.trim();
        if self.drafted.contains(name) {
            return Err(DraftError::AlreadyDrafted(name.to_string()));
        }
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }

        let slot = snake_slot(self.pick_index, self.num_teams);
        let team_name = self.team_names[slot.team].clone();
        let pick_number = (self.pick_index + 1) as u32;

        self.board.fill(slot, name);
        self.drafted.insert(name.to_string());
        self.picks.push(DraftPick {
            pick_number,
            slot,
            team_name: team_name.clone(),
            player_name: name.to_string(),
            picked_at: Utc::now(),
        });
        self.pick_index += 1;

        let draft_complete = self.pick_index >= self.total_picks();
        if draft_complete {
            self.phase = Phase::Complete;
            info!("draft complete after {} picks", self.pick_index);
        } else {
            debug!(
                "pick {}: {} -> {} ({})",
                pick_number, name, team_name, slot
            );
        }

        Ok(CommittedPick {
            slot,
            team_name,
            pick_number,
            draft_complete,
        })
    }

    // -- Accessors --

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Board snapshot for rendering.
    pub fn board(&self) -> &DraftBoard {
        &self.board
    }

    /// Names of players drafted so far in this session.
    pub fn drafted(&self) -> &HashSet<String> {
        &self.drafted
    }

    /// All committed picks, in pick order.
    pub fn picks(&self) -> &[DraftPick] {
        &self.picks
    }

    pub fn team_names(&self) -> &[String] {
        &self.team_names
    }

    /// The current pick cursor, in `[0, num_teams * rounds]`.
    pub fn pick_index(&self) -> usize {
        self.pick_index
    }

    /// Total picks in the draft (`num_teams * rounds`; 0 before start).
    pub fn total_picks(&self) -> usize {
        self.num_teams * self.rounds
    }

    /// One team's picks across rounds, in round order.
    pub fn team_roster(&self, team_idx: usize) -> Vec<&str> {
        self.board.team_column(team_idx)
    }
}

impl Default for DraftSession {
    fn default() -> Self {
        DraftSession::new()
    }
}
