// The Round x Team draft board grid.

use serde::{Deserialize, Serialize};

use super::pick::Slot;

/// The draft board: a grid of cells, each empty or holding a drafted
/// player's name. Dimensions are fixed at draft start; a filled cell is
/// never overwritten because the pick cursor only ever advances to the
/// next empty slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftBoard {
    cells: Vec<Vec<String>>,
}

impl DraftBoard {
    /// An empty `rounds` x `n_teams` board.
    pub fn new(rounds: usize, n_teams: usize) -> Self {
        DraftBoard {
            cells: vec![vec![String::new(); n_teams]; rounds],
        }
    }

    pub fn rounds(&self) -> usize {
        self.cells.len()
    }

    pub fn n_teams(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    /// The cell at a slot. Empty string means no pick yet.
    pub fn cell(&self, slot: Slot) -> Option<&str> {
        self.cells
            .get(slot.round)
            .and_then(|row| row.get(slot.team))
            .map(String::as_str)
    }

    /// Write a player name into a slot. The caller (the session state
    /// machine) guarantees the slot is in range and currently empty.
    pub(crate) fn fill(&mut self, slot: Slot, player_name: &str) {
        self.cells[slot.round][slot.team] = player_name.to_string();
    }

    /// Row-major snapshot of the grid, for front ends to render directly.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// The picks of a single team across rounds, in round order. Unfilled
    /// rounds are omitted.
    pub fn team_column(&self, team_idx: usize) -> Vec<&str> {
        self.cells
            .iter()
            .filter_map(|row| row.get(team_idx))
            .filter(|cell| !cell.is_empty())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = DraftBoard::new(3, 4);
        assert_eq!(board.rounds(), 3);
        assert_eq!(board.n_teams(), 4);
        for row in board.rows() {
            assert!(row.iter().all(String::is_empty));
        }
    }

    #[test]
    fn fill_and_read_cell() {
        let mut board = DraftBoard::new(2, 2);
        let slot = Slot { round: 1, team: 0 };
        board.fill(slot, "Jahmyr Gibbs");
        assert_eq!(board.cell(slot), Some("Jahmyr Gibbs"));
        assert_eq!(board.cell(Slot { round: 0, team: 0 }), Some(""));
    }

    #[test]
    fn cell_out_of_range_is_none() {
        let board = DraftBoard::new(2, 2);
        assert_eq!(board.cell(Slot { round: 2, team: 0 }), None);
        assert_eq!(board.cell(Slot { round: 0, team: 5 }), None);
    }

    #[test]
    fn team_column_in_round_order() {
        let mut board = DraftBoard::new(3, 2);
        board.fill(Slot { round: 0, team: 1 }, "First");
        board.fill(Slot { round: 2, team: 1 }, "Third");
        assert_eq!(board.team_column(1), vec!["First", "Third"]);
        assert!(board.team_column(0).is_empty());
    }
}
