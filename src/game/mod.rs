//! Game lifecycle and round flow.

use log::{debug, info};

use crate::deck::{CardSource, Shoe};
use crate::error::DrawError;
use crate::event::{Action, GameEvent};
use crate::options::GameOptions;

mod round;
pub mod state;

pub use round::Round;
pub use state::{Party, RoundState};

/// Receives the event produced by each [`Game::advance`] call.
pub trait EventListener {
    /// Handles one event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventListener for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}

/// A blackjack game that plays successive rounds from one card source.
///
/// The game exclusively owns the current [`Round`] and swaps in a fresh one
/// as soon as the previous round has emitted its outcome. Drivers only ever
/// call [`advance`](Game::advance) and react to the events delivered to the
/// listener.
///
/// # Example
///
/// ```
/// use bjround::{Action, EventKind, Game, GameEvent, GameOptions};
///
/// let mut events: Vec<EventKind> = Vec::new();
/// let mut game = Game::new(GameOptions::default(), 42, |event: &GameEvent| {
///     events.push(event.kind);
/// });
/// game.advance(None).unwrap();
/// game.advance(Some(Action::Stay)).unwrap();
/// drop(game);
/// assert_eq!(events, [EventKind::NewRound, EventKind::DealToPlayer]);
/// ```
pub struct Game<S, L> {
    /// Where cards come from.
    source: S,
    /// Receives every event.
    listener: L,
    /// Game options.
    options: GameOptions,
    /// The live round.
    round: Round,
    /// Rounds started so far, the live one included.
    rounds_played: u64,
}

impl<L: EventListener> Game<Shoe, L> {
    /// Creates a game dealing from a freshly shuffled shoe.
    ///
    /// The shoe holds [`GameOptions::decks`] decks and is reshuffled between
    /// rounds once [`GameOptions::penetration`] is reached.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64, listener: L) -> Self {
        let shoe = Shoe::new(options.decks, options.penetration, seed);
        Self::with_source(shoe, listener, options)
    }
}

impl<S: CardSource, L: EventListener> Game<S, L> {
    /// Creates a game dealing from the given card source.
    #[must_use]
    pub fn with_source(source: S, listener: L, options: GameOptions) -> Self {
        Self {
            source,
            listener,
            options,
            round: Round::new(&options),
            rounds_played: 1,
        }
    }

    /// Moves the game forward by exactly one event.
    ///
    /// `action` is only consulted when the current round is waiting at the
    /// player's turn. If the current round has already finished, a new round
    /// is started and its new-round event is delivered instead, so the
    /// listener sees exactly one event per successful call.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the card source runs dry. No
    /// event is delivered and the round stays where it was.
    pub fn advance(&mut self, action: Option<Action>) -> Result<(), DrawError> {
        let event = match self.round.step(action, &mut self.source)? {
            Some(event) => event,
            None => self.start_round(),
        };

        self.listener.on_event(&event);
        Ok(())
    }

    /// Replaces the finished round with a fresh one and returns its
    /// new-round event.
    fn start_round(&mut self) -> GameEvent {
        if self.source.needs_reshuffle() {
            self.source.reshuffle();
            info!("card source reshuffled before round {}", self.rounds_played + 1);
        }

        self.round = Round::new(&self.options);
        self.rounds_played += 1;
        debug!("starting round {}", self.rounds_played);
        self.round.begin()
    }

    /// Returns the live round.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the number of rounds started, the live one included.
    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the card source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the card source mutably, e.g. to refill an exhausted deck.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
