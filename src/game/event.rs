use super::TileState;
use crate::config::SOUND_DIR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Reveal,
    Match,
    Mismatch,
    FlipBack,
}

impl Sound {
    pub const ALL: [Sound; 4] = [Sound::Reveal, Sound::Match, Sound::Mismatch, Sound::FlipBack];

    pub fn file(self) -> &'static str {
        match self {
            Sound::Reveal => "flip-card.mp3",
            Sound::Match => "matched.mp3",
            Sound::Mismatch => "not-matched.mp3",
            Sound::FlipBack => "flip-card-back.mp3",
        }
    }

    pub fn src(self) -> String {
        format!("{}/{}", SOUND_DIR, self.file())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub score: usize,
    pub flip_count: usize,
    pub matched_pairs: usize,
    pub elapsed_seconds: u64,
}

/// Final numbers shown once every pair is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub elapsed_seconds: u64,
    pub flip_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    TileChanged { index: usize, state: TileState },
    CountersChanged(Counters),
    Sound(Sound),
    Completed(Summary),
}

/// `m:ss`, minutes unpadded.
pub fn format_time(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
