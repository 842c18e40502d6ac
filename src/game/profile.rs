use crate::error::ProfileError;

/// Share of a board's tiles that carry unmatched labels, kept as an exact
/// ratio so rounding only ever happens once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoyFraction {
    numerator: u32,
    denominator: u32,
}

impl DecoyFraction {
    pub const NONE: DecoyFraction = DecoyFraction {
        numerator: 0,
        denominator: 1,
    };

    pub fn new(numerator: u32, denominator: u32) -> Result<Self, ProfileError> {
        if denominator == 0 || numerator >= denominator {
            return Err(ProfileError::DecoyFraction {
                numerator,
                denominator,
            });
        }
        Ok(DecoyFraction {
            numerator,
            denominator,
        })
    }

    /// `floor(total * self)`.
    pub fn of(&self, total: usize) -> usize {
        (total as u64 * self.numerator as u64 / self.denominator as u64) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyProfile {
    copies_per_label: usize,
    decoy_fraction: DecoyFraction,
}

impl DifficultyProfile {
    pub const EASY: DifficultyProfile = DifficultyProfile {
        copies_per_label: 4,
        decoy_fraction: DecoyFraction::NONE,
    };
    pub const MEDIUM: DifficultyProfile = DifficultyProfile {
        copies_per_label: 2,
        decoy_fraction: DecoyFraction::NONE,
    };
    pub const HARD: DifficultyProfile = DifficultyProfile {
        copies_per_label: 2,
        decoy_fraction: DecoyFraction {
            numerator: 1,
            denominator: 4,
        },
    };

    pub fn new(
        copies_per_label: usize,
        decoy_fraction: DecoyFraction,
    ) -> Result<Self, ProfileError> {
        if copies_per_label < 2 {
            return Err(ProfileError::CopiesPerLabel(copies_per_label));
        }
        Ok(DifficultyProfile {
            copies_per_label,
            decoy_fraction,
        })
    }

    pub fn copies_per_label(&self) -> usize {
        self.copies_per_label
    }

    pub fn decoy_fraction(&self) -> DecoyFraction {
        self.decoy_fraction
    }
}
