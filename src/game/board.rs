use super::{DifficultyProfile, Label};
use crate::error::GenerateError;
use rand::prelude::*;
use std::collections::HashSet;
use std::iter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    Hidden,
    Revealed,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub label: Label,
    pub state: TileState,
}

/// How the tiles of a board divide between matchable label groups and decoys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    pub total_cards: usize,
    pub paired_count: usize,
    pub decoy_count: usize,
    pub copies_per_label: usize,
}

impl Split {
    pub fn compute(total_cards: usize, profile: &DifficultyProfile) -> Split {
        let copies_per_label = profile.copies_per_label();
        let raw_decoys = profile.decoy_fraction().of(total_cards);
        let paired_count = total_cards - raw_decoys;

        // Whatever does not fill a whole label group is absorbed into the decoys.
        let paired_count = paired_count - paired_count % copies_per_label;

        Split {
            total_cards,
            paired_count,
            decoy_count: total_cards - paired_count,
            copies_per_label,
        }
    }

    pub fn paired_labels(&self) -> usize {
        self.paired_count / self.copies_per_label
    }

    pub fn labels_needed(&self) -> usize {
        self.paired_labels() + self.decoy_count
    }

    pub fn total_pairs(&self) -> usize {
        self.paired_count / 2
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    grid_size: usize,
    paired_count: usize,
}

impl Board {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Tiles whose label belongs to a matchable group.
    pub fn paired_count(&self) -> usize {
        self.paired_count
    }

    pub fn decoy_count(&self) -> usize {
        self.tiles.len() - self.paired_count
    }

    pub fn total_pairs(&self) -> usize {
        self.paired_count / 2
    }

    pub(super) fn set_state(&mut self, index: usize, state: TileState) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.state = state;
        }
    }
}

/// Builds a shuffled `grid_size × grid_size` board.
///
/// Paired labels and decoy labels are drawn without overlap from one
/// permutation of `alphabet`, so a decoy can never complete a match.
pub fn generate<R: Rng + ?Sized>(
    grid_size: usize,
    profile: &DifficultyProfile,
    alphabet: &[Label],
    rng: &mut R,
) -> Result<Board, GenerateError> {
    if grid_size < 2 {
        return Err(GenerateError::GridTooSmall(grid_size));
    }

    let mut seen = HashSet::new();
    if let Some(&label) = alphabet.iter().find(|&&label| !seen.insert(label)) {
        return Err(GenerateError::DuplicateLabel(label));
    }

    let split = Split::compute(grid_size * grid_size, profile);
    if split.paired_count == 0 {
        return Err(GenerateError::NoPairs {
            total_cards: split.total_cards,
            copies: split.copies_per_label,
        });
    }
    if split.labels_needed() > alphabet.len() {
        return Err(GenerateError::InsufficientAlphabet {
            required: split.labels_needed(),
            available: alphabet.len(),
        });
    }

    let mut symbols = alphabet.to_vec();
    symbols.shuffle(rng);
    let (paired, rest) = symbols.split_at(split.paired_labels());
    let decoys = &rest[..split.decoy_count];

    let mut labels = paired
        .iter()
        .flat_map(|&label| iter::repeat(label).take(split.copies_per_label))
        .chain(decoys.iter().copied())
        .collect::<Vec<_>>();
    labels.shuffle(rng);

    let tiles = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| Tile {
            index,
            label,
            state: TileState::Hidden,
        })
        .collect();

    Ok(Board {
        tiles,
        grid_size,
        paired_count: split.paired_count,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::{DecoyFraction, EMOJIS};
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn label_counts(board: &Board) -> HashMap<Label, usize> {
        let mut counts = HashMap::new();
        for tile in board.tiles() {
            *counts.entry(tile.label).or_insert(0) += 1;
        }
        counts
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_split() {
        let cases = [
            (16, DifficultyProfile::EASY, 16, 0),
            (16, DifficultyProfile::MEDIUM, 16, 0),
            (16, DifficultyProfile::HARD, 12, 4),
            (9, DifficultyProfile::EASY, 8, 1),
            (9, DifficultyProfile::MEDIUM, 8, 1),
            (9, DifficultyProfile::HARD, 6, 3),
            (25, DifficultyProfile::EASY, 24, 1),
        ];
        for (total, profile, paired, decoys) in cases {
            let split = Split::compute(total, &profile);
            assert_eq!(
                (split.paired_count, split.decoy_count),
                (paired, decoys),
                "{total} cards"
            );
        }
    }

    #[test]
    fn test_easy_four_by_four() {
        let board = generate(4, &DifficultyProfile::EASY, &EMOJIS, &mut seeded(1)).unwrap();
        assert_eq!(board.len(), 16);
        assert_eq!(board.total_pairs(), 8);
        assert_eq!(board.decoy_count(), 0);

        let counts = label_counts(&board);
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&count| count == 4));
    }

    #[test]
    fn test_hard_four_by_four() {
        let board = generate(4, &DifficultyProfile::HARD, &EMOJIS, &mut seeded(2)).unwrap();
        assert_eq!(board.len(), 16);
        assert_eq!(board.paired_count(), 12);
        assert_eq!(board.total_pairs(), 6);
        assert_eq!(board.decoy_count(), 4);

        let counts = label_counts(&board);
        assert_eq!(counts.values().filter(|&&count| count == 1).count(), 4);
        assert_eq!(counts.values().filter(|&&count| count == 2).count(), 6);
    }

    #[test]
    fn test_indices_follow_positions() {
        let board = generate(5, &DifficultyProfile::MEDIUM, &EMOJIS, &mut seeded(3)).unwrap();
        assert_eq!(board.grid_size(), 5);
        for (position, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.index, position);
            assert_eq!(tile.state, TileState::Hidden);
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let first = generate(6, &DifficultyProfile::HARD, &EMOJIS, &mut seeded(7)).unwrap();
        let second = generate(6, &DifficultyProfile::HARD, &EMOJIS, &mut seeded(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_insufficient_alphabet() {
        let alphabet = ["a", "b", "c"];
        let result = generate(4, &DifficultyProfile::MEDIUM, &alphabet, &mut seeded(0));
        assert_eq!(
            result,
            Err(GenerateError::InsufficientAlphabet {
                required: 8,
                available: 3
            })
        );

        let result = generate(2, &DifficultyProfile::MEDIUM, &alphabet, &mut seeded(0));
        assert!(result.is_ok());
    }

    #[test]
    fn test_rejections() {
        let mut rng = seeded(0);
        assert_eq!(
            generate(1, &DifficultyProfile::MEDIUM, &EMOJIS, &mut rng),
            Err(GenerateError::GridTooSmall(1))
        );
        assert_eq!(
            generate(2, &DifficultyProfile::MEDIUM, &["a", "b", "a"], &mut rng),
            Err(GenerateError::DuplicateLabel("a"))
        );
        let profile = DifficultyProfile::new(5, DecoyFraction::NONE).unwrap();
        assert_eq!(
            generate(2, &profile, &EMOJIS, &mut rng),
            Err(GenerateError::NoPairs {
                total_cards: 4,
                copies: 5
            })
        );
    }

    #[test]
    fn test_largest_presets_fit_the_emoji_pool() {
        for profile in [
            DifficultyProfile::EASY,
            DifficultyProfile::MEDIUM,
            DifficultyProfile::HARD,
        ] {
            assert!(generate(12, &profile, &EMOJIS, &mut seeded(4)).is_ok());
        }
    }

    proptest! {
        #[test]
        fn prop_generated_boards_hold_invariants(
            grid_size in 2usize..=12,
            copies in 2usize..=6,
            numerator in 0u32..4,
            seed in any::<u64>(),
        ) {
            let fraction = DecoyFraction::new(numerator, 4).unwrap();
            let profile = DifficultyProfile::new(copies, fraction).unwrap();
            let total = grid_size * grid_size;

            match generate(grid_size, &profile, &EMOJIS, &mut seeded(seed)) {
                Ok(board) => {
                    prop_assert_eq!(board.len(), total);
                    prop_assert_eq!(board.paired_count() % copies, 0);
                    prop_assert_eq!(board.paired_count() + board.decoy_count(), total);
                    prop_assert!(board.total_pairs() * 2 <= total);

                    let counts = label_counts(&board);
                    let singles = counts.values().filter(|&&count| count == 1).count();
                    let groups = counts.values().filter(|&&count| count == copies).count();
                    prop_assert_eq!(singles + groups, counts.len());
                    prop_assert_eq!(singles, board.decoy_count());
                    prop_assert_eq!(groups * copies, board.paired_count());
                }
                Err(GenerateError::InsufficientAlphabet { required, available }) => {
                    prop_assert!(required > available);
                }
                Err(GenerateError::NoPairs { .. }) => {
                    prop_assert!(total - fraction.of(total) < copies);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }
}
