//! Four-in-a-row detection by exhaustive line scan.
//!
//! Every cell owned by the player is treated as the start of a line and walked
//! along four forward directions. The backward directions are not needed: any
//! line of four is found from whichever of its two ends comes first in one of
//! the forward scans.

use super::{Board, Cell, GameOutcome, Player, COLS, ROWS};

/// Number of same-player pieces in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// (row delta, column delta): right, down, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Check whether `player` has four in a row anywhere on the board.
pub fn check_win(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    (0..ROWS).any(|row| {
        (0..COLS).any(|col| {
            board.get(row, col) == target
                && DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| run_length(board, target, row, col, dr, dc) >= WIN_LENGTH)
        })
    })
}

/// Count consecutive `target` cells starting at (row, col), stopping at WIN_LENGTH.
fn run_length(board: &Board, target: Cell, row: usize, col: usize, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row as isize, col as isize);
    while count < WIN_LENGTH
        && (0..ROWS as isize).contains(&r)
        && (0..COLS as isize).contains(&c)
        && board.get(r as usize, c as usize) == target
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Outcome after `player` has just moved. The win check runs first since a
/// board can be full and won by the same move.
pub fn evaluate(board: &Board, player: Player) -> GameOutcome {
    if check_win(board, player) {
        GameOutcome::Win(player)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
