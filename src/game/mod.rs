mod alphabet;
mod board;
mod event;
mod profile;
mod session;

pub use alphabet::EMOJIS;
pub use board::{generate, Board, Tile, TileState};
pub use event::{format_time, Counters, GameEvent, Sound, Summary};
pub use profile::{DecoyFraction, DifficultyProfile};
pub use session::{Phase, Scheduled, Session, Stage, Transition};

use crate::config::{Delays, Settings};
use crate::error::GenerateError;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use yew::Reducible;

pub type Label = &'static str;

pub enum GameAction {
    NewGame(Settings),
    Restart,
    Select { index: usize, now: f64 },
    Tick(f64),
}

/// Owns the current session and replaces it wholesale on every new board.
#[derive(Clone)]
pub struct Game {
    pub session: Session,
    pub settings: Settings,
    pub rejected: Option<String>,
    generation: u64,
    delays: Delays,
    rng: StdRng,
    outbox: Rc<RefCell<Vec<GameEvent>>>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Game {
            session: Session::default(),
            settings: Settings::default(),
            rejected: None,
            generation: 0,
            delays: Delays::default(),
            rng: StdRng::seed_from_u64(seed),
            outbox: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn from_entropy() -> Self {
        let random = js_sys::Math::random();
        Game::new(u64::from_be_bytes(random.to_be_bytes()))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Builds a fresh board. On failure the current session is left intact.
    pub fn new_game(&mut self, settings: Settings) -> Result<(), GenerateError> {
        let board = generate(
            settings.grid_size.get(),
            &settings.difficulty.profile(),
            &EMOJIS,
            &mut self.rng,
        )?;

        self.generation += 1;
        log::info!(
            "board {}: {}x{} {}, {} pairs, {} decoys",
            self.generation,
            board.grid_size(),
            board.grid_size(),
            settings.difficulty,
            board.total_pairs(),
            board.decoy_count()
        );
        self.session = Session::new(self.generation, board, self.delays);
        self.settings = settings;
        self.rejected = None;
        Ok(())
    }

    pub fn fire(&mut self, token: Scheduled, now: f64) -> bool {
        if token.generation != self.generation {
            log::debug!(
                "dropping {:?} from board {}, current is {}",
                token.transition,
                token.generation,
                self.generation
            );
            return false;
        }
        self.session.fire(token, now)
    }

    /// Events produced since the last call.
    pub fn events(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.outbox.borrow_mut())
    }

    fn start(&mut self, settings: Settings) {
        if let Err(err) = self.new_game(settings) {
            log::warn!("rejected {:?}: {}", settings, err);
            self.rejected = Some(err.to_string());
        }
    }

    fn flush(&mut self) {
        let events = self.session.drain_events();
        if !events.is_empty() {
            self.outbox.borrow_mut().extend(events);
        }
    }
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut game = (*self).clone();

        match action {
            GameAction::NewGame(settings) => game.start(settings),
            GameAction::Restart => {
                let settings = game.settings;
                game.start(settings);
            }
            GameAction::Select { index, now } => {
                game.session.select_tile(index, now);
            }
            GameAction::Tick(now) => game.session.advance(now),
        }

        game.flush();
        game.into()
    }
}
