/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;
/// Cells per row.
pub const BOARD_WIDTH: usize = 3;

/// Three cell indices that win when uniformly marked.
pub type Line = [usize; 3];

pub const NUM_LINES: usize = 8;
/// Winning lines in search order: rows, columns, diagonals.
pub const WIN_LINES: [Line; NUM_LINES] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Names used when a player leaves the name field blank.
pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";
