/// Errors returned by board access, move application, and game sessions.
///
/// None of these are fatal: a rejected call leaves the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: i32, col: i32 },

    #[error("game is already over")]
    GameOver,
}
