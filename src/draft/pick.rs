// Slot arithmetic and individual pick records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A board position: zero-indexed round and team column. Display is 1-based;
/// that conversion belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub round: usize,
    pub team: usize,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}, team {}", self.round + 1, self.team + 1)
    }
}

/// Map a global pick index to its snake-order board slot.
///
/// Let `r = pick_index / n_teams` and `i = pick_index % n_teams`. Even
/// rounds run left-to-right (`team = i`); odd rounds reverse
/// (`team = n_teams - 1 - i`). The caller guarantees `n_teams > 0`.
pub fn snake_slot(pick_index: usize, n_teams: usize) -> Slot {
    let round = pick_index / n_teams;
    let in_round = pick_index % n_teams;
    let team = if round % 2 == 0 {
        in_round
    } else {
        n_teams - 1 - in_round
    };
    Slot { round, team }
}

/// A single committed draft pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPick {
    /// Sequential pick number (1-indexed, as spoken aloud at a draft).
    pub pick_number: u32,
    /// The board slot this pick filled.
    pub slot: Slot,
    /// Display name of the team on the clock.
    pub team_name: String,
    /// Name of the drafted player.
    pub player_name: String,
    /// When the pick was committed.
    pub picked_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn snake_round_zero_left_to_right() {
        for i in 0..4 {
            assert_eq!(snake_slot(i, 4), Slot { round: 0, team: i });
        }
    }

    #[test]
    fn snake_round_one_reversed() {
        // Pick indices 4..8 with 4 teams map to teams [3,2,1,0].
        assert_eq!(snake_slot(4, 4), Slot { round: 1, team: 3 });
        assert_eq!(snake_slot(5, 4), Slot { round: 1, team: 2 });
        assert_eq!(snake_slot(6, 4), Slot { round: 1, team: 1 });
        assert_eq!(snake_slot(7, 4), Slot { round: 1, team: 0 });
    }

    #[test]
    fn snake_direction_alternates_every_round() {
        // Team picking last in round N picks first in round N+1.
        let n = 6;
        for round in 0..10 {
            let last_of_round = snake_slot(round * n + n - 1, n);
            let first_of_next = snake_slot((round + 1) * n, n);
            assert_eq!(last_of_round.team, first_of_next.team);
        }
    }

    #[test]
    fn snake_bijection_over_full_draft() {
        // Every (round, team) pair appears exactly once across the draft.
        for n_teams in [2usize, 4, 8, 12, 20] {
            for rounds in [1usize, 3, 15] {
                let mut seen = HashSet::new();
                for idx in 0..n_teams * rounds {
                    let slot = snake_slot(idx, n_teams);
                    assert!(slot.round < rounds);
                    assert!(slot.team < n_teams);
                    assert!(
                        seen.insert(slot),
                        "duplicate slot {:?} for {} teams / {} rounds",
                        slot,
                        n_teams,
                        rounds
                    );
                }
                assert_eq!(seen.len(), n_teams * rounds);
            }
        }
    }

    #[test]
    fn snake_two_teams() {
        assert_eq!(snake_slot(0, 2), Slot { round: 0, team: 0 });
        assert_eq!(snake_slot(1, 2), Slot { round: 0, team: 1 });
        assert_eq!(snake_slot(2, 2), Slot { round: 1, team: 1 });
        assert_eq!(snake_slot(3, 2), Slot { round: 1, team: 0 });
    }

    #[test]
    fn slot_display_is_one_based() {
        let slot = Slot { round: 0, team: 2 };
        assert_eq!(slot.to_string(), "round 1, team 3");
    }
}
