//! Game session
//!
//! Owns one `GameState` together with the RNG that feeds pipe spawning, the
//! best-score store, and a list of subscribers that are told whenever the
//! state changes. There is no timer here: a frame driver calls `tick`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::highscores::{ScoreStore, load_high_score};
use crate::sim::{self, GameEvent, GameState, GameStatus};

/// Handle returned by `Game::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameState)>;

/// A single-owner game session
pub struct Game<S, R = Pcg32> {
    state: GameState,
    rng: R,
    store: S,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: ScoreStore> Game<S, Pcg32> {
    /// Create a session with a seeded PCG generator
    pub fn new(store: S, seed: u64) -> Self {
        Self::with_rng(store, Pcg32::seed_from_u64(seed))
    }
}

impl<S: ScoreStore, R: Rng> Game<S, R> {
    /// Create an idle session, seeding the best score from the store
    pub fn with_rng(store: S, rng: R) -> Self {
        let high_score = load_high_score(&store);
        Self {
            state: GameState::new(high_score),
            rng,
            store,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the whole state (e.g. restoring a snapshot)
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
        self.notify();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Call `listener` after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Start or restart a run
    pub fn reset(&mut self) -> Vec<GameEvent> {
        let event = sim::reset(&mut self.state);
        self.notify();
        vec![event]
    }

    /// Flap; ignored unless playing
    pub fn flap(&mut self) -> Vec<GameEvent> {
        if !sim::flap(&mut self.state) {
            return Vec::new();
        }
        self.notify();
        vec![GameEvent::Flapped]
    }

    /// Advance one frame; ignored unless playing
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if !self.state.is_playing() {
            return Vec::new();
        }

        let events = sim::tick(&mut self.state, &mut self.rng);
        for event in &events {
            if let GameEvent::NewHighScore { score } = *event {
                self.persist_high_score(score);
            }
        }
        self.notify();
        events
    }

    /// The single player action: flap while playing, otherwise start a run
    pub fn handle_action(&mut self) -> Vec<GameEvent> {
        match self.state.status {
            GameStatus::Playing => self.flap(),
            GameStatus::Idle | GameStatus::GameOver => self.reset(),
        }
    }

    /// In-memory best score is already updated; a failed save only loses
    /// durability, never run state.
    fn persist_high_score(&mut self, score: u32) {
        log::info!("New high score: {}", score);
        if let Err(e) = self.store.save(score) {
            log::warn!("Failed to save high score {}: {}", score, e);
        }
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}
