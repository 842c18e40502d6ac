use super::{Board, Counters, GameEvent, Sound, Summary, TileState};
use crate::config::Delays;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Comparing,
    FlippingBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OneRevealed { first: usize },
    Resolving { first: usize, second: usize, stage: Stage },
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Resolve,
    FlipBack,
}

/// A delayed transition, valid only for the board generation that issued it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scheduled {
    pub generation: u64,
    pub transition: Transition,
    pub due_at: f64,
}

/// Turn state machine for one board. Timestamps are milliseconds.
#[derive(Clone, Debug)]
pub struct Session {
    generation: u64,
    board: Board,
    phase: Phase,
    counters: Counters,
    started_at: Option<f64>,
    scheduled: Option<Scheduled>,
    delays: Delays,
    events: Vec<GameEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(0, Board::default(), Delays::default())
    }
}

impl Session {
    pub fn new(generation: u64, board: Board, delays: Delays) -> Self {
        Session {
            generation,
            board,
            phase: Phase::Idle,
            counters: Counters::default(),
            started_at: None,
            scheduled: None,
            delays,
            events: Vec::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn scheduled(&self) -> Option<Scheduled> {
        self.scheduled
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Resolving { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn summary(&self) -> Summary {
        Summary {
            score: self.counters.score,
            elapsed_seconds: self.counters.elapsed_seconds,
            flip_count: self.counters.flip_count,
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reveals a hidden tile. Returns `false` and changes nothing when input
    /// is locked, the game is over, or the tile is not hidden.
    pub fn select_tile(&mut self, index: usize, now: f64) -> bool {
        let first = match self.phase {
            Phase::Idle => None,
            Phase::OneRevealed { first } => Some(first),
            Phase::Resolving { .. } | Phase::Complete => return false,
        };
        match self.board.tile(index) {
            Some(tile) if tile.state == TileState::Hidden => {}
            _ => return false,
        }

        self.set_tile(index, TileState::Revealed);
        self.events.push(GameEvent::Sound(Sound::Reveal));
        self.counters.flip_count += 1;
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        self.events.push(GameEvent::CountersChanged(self.counters));

        match first {
            None => self.phase = Phase::OneRevealed { first: index },
            Some(first) => {
                self.phase = Phase::Resolving {
                    first,
                    second: index,
                    stage: Stage::Comparing,
                };
                self.schedule(Transition::Resolve, now + self.delays.observe);
            }
        }
        true
    }

    /// Runs a scheduled transition. Tokens from another generation, or that
    /// are no longer pending, are ignored.
    pub fn fire(&mut self, token: Scheduled, now: f64) -> bool {
        if token.generation != self.generation || self.scheduled != Some(token) {
            return false;
        }
        self.scheduled = None;
        match token.transition {
            Transition::Resolve => self.resolve(now),
            Transition::FlipBack => self.flip_back(),
        }
        true
    }

    /// Clock tick: refreshes the elapsed time and fires a due transition.
    pub fn advance(&mut self, now: f64) {
        self.tick_elapsed(now);
        if let Some(token) = self.scheduled {
            if now >= token.due_at {
                self.fire(token, now);
            }
        }
    }

    fn schedule(&mut self, transition: Transition, due_at: f64) {
        self.scheduled = Some(Scheduled {
            generation: self.generation,
            transition,
            due_at,
        });
    }

    fn resolve(&mut self, now: f64) {
        let Phase::Resolving {
            first,
            second,
            stage: Stage::Comparing,
        } = self.phase
        else {
            return;
        };

        let is_match = match (self.board.tile(first), self.board.tile(second)) {
            (Some(first), Some(second)) => first.label == second.label,
            _ => false,
        };

        if !is_match {
            log::debug!("tiles {} and {} do not match", first, second);
            self.events.push(GameEvent::Sound(Sound::Mismatch));
            self.phase = Phase::Resolving {
                first,
                second,
                stage: Stage::FlippingBack,
            };
            self.schedule(Transition::FlipBack, now + self.delays.flip_back);
            return;
        }

        log::debug!("tiles {} and {} match", first, second);
        self.set_tile(first, TileState::Matched);
        self.set_tile(second, TileState::Matched);
        self.events.push(GameEvent::Sound(Sound::Match));
        self.counters.score += 1;
        self.counters.matched_pairs += 1;

        if self.counters.matched_pairs == self.board.total_pairs() {
            self.tick_elapsed(now);
            self.phase = Phase::Complete;
            self.events.push(GameEvent::CountersChanged(self.counters));
            self.events.push(GameEvent::Completed(self.summary()));
            log::info!(
                "board {} complete: {} pairs, {} flips",
                self.generation,
                self.counters.score,
                self.counters.flip_count
            );
        } else {
            self.phase = Phase::Idle;
            self.events.push(GameEvent::CountersChanged(self.counters));
        }
    }

    fn flip_back(&mut self) {
        let Phase::Resolving {
            first,
            second,
            stage: Stage::FlippingBack,
        } = self.phase
        else {
            return;
        };

        self.set_tile(first, TileState::Hidden);
        self.set_tile(second, TileState::Hidden);
        self.events.push(GameEvent::Sound(Sound::FlipBack));
        self.phase = Phase::Idle;
    }

    fn tick_elapsed(&mut self, now: f64) {
        if self.phase == Phase::Complete {
            return;
        }
        let Some(started_at) = self.started_at else {
            return;
        };
        let elapsed = ((now - started_at).max(0.) / 1000.).floor() as u64;
        if elapsed > self.counters.elapsed_seconds {
            self.counters.elapsed_seconds = elapsed;
            self.events.push(GameEvent::CountersChanged(self.counters));
        }
    }

    fn set_tile(&mut self, index: usize, state: TileState) {
        self.board.set_state(index, state);
        self.events.push(GameEvent::TileChanged { index, state });
    }
}
