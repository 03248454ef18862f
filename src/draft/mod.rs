// Draft domain: snake-order slot arithmetic, the board grid, and the
// session state machine.

pub mod board;
pub mod pick;
pub mod state;
