use crate::game::Label;
use thiserror::Error;

/// Reasons a board could not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("grid size {0} is below the minimum of 2")]
    GridTooSmall(usize),
    #[error("board needs {required} distinct labels but the alphabet has {available}")]
    InsufficientAlphabet { required: usize, available: usize },
    #[error("label {0} appears more than once in the alphabet")]
    DuplicateLabel(Label),
    #[error("{total_cards} tiles leave no matchable pairs at {copies} copies per label")]
    NoPairs { total_cards: usize, copies: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("a label needs at least 2 copies, got {0}")]
    CopiesPerLabel(usize),
    #[error("decoy fraction {numerator}/{denominator} is outside [0, 1)")]
    DecoyFraction { numerator: u32, denominator: u32 },
}

/// Rejected user-facing settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {size} is outside {min}..={max}")]
    GridSize { size: usize, min: usize, max: usize },
    #[error("grid size {0:?} is not a number")]
    GridSizeNotNumber(String),
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}
