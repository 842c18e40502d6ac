use crate::error::ConfigError;
use crate::game::DifficultyProfile;
use std::fmt;
use std::str::FromStr;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

pub const SOUND_DIR: &str = "assets/sounds";

/// Side length of the square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize(usize);

impl GridSize {
    pub const MIN: usize = 2;
    pub const MAX: usize = 12;

    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(ConfigError::GridSize {
                size,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(GridSize(size))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = GridSize> {
        (Self::MIN..=Self::MAX).map(GridSize)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize(4)
    }
}

impl FromStr for GridSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::GridSizeNotNumber(s.to_string()))?;
        GridSize::new(size)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile::EASY,
            Difficulty::Medium => DifficultyProfile::MEDIUM,
            Difficulty::Hard => DifficultyProfile::HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// What the player picks before a board is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub grid_size: GridSize,
    pub difficulty: Difficulty,
}

/// Pauses, in milliseconds, that let the view show both faces of a turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delays {
    pub observe: f64,
    pub flip_back: f64,
}

impl Default for Delays {
    fn default() -> Self {
        Delays {
            observe: 400.,
            flip_back: 500.,
        }
    }
}

/// Tile edge in pixels for a board of the given side length.
pub fn tile_size(grid_size: usize) -> u32 {
    match grid_size {
        0..=4 => 80,
        5..=8 => 60,
        _ => 44,
    }
}
