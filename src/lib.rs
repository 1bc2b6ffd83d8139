//! A deterministic single-player blackjack round engine with optional `no_std`
//! support.
//!
//! A [`Game`] plays successive [`Round`]s from one [`CardSource`]. Every call
//! to [`Game::advance`] performs exactly one step of the round (a deal, a
//! reveal, a turn prompt or the outcome) and hands a [`GameEvent`] snapshot to
//! the listener. When the listener sees [`EventKind::PlayersTurn`], the next
//! call supplies the player's [`Action`].
//!
//! # Example
//!
//! ```
//! use bjround::{Action, Card, EventKind, Game, GameEvent, GameOptions, StackedDeck, Suit};
//!
//! let deck = StackedDeck::new([
//!     Card::new(Suit::Clubs, 10), // player
//!     Card::new(Suit::Clubs, 6),  // dealer
//!     Card::new(Suit::Clubs, 9),  // player
//!     Card::new(Suit::Clubs, 10), // dealer hole
//!     Card::new(Suit::Clubs, 5),  // dealer draw
//! ]);
//!
//! let mut last = None;
//! let mut game = Game::with_source(deck, |event: &GameEvent| last = Some(event.clone()), GameOptions::default());
//! for _ in 0..6 {
//!     game.advance(None).unwrap();
//! }
//! game.advance(Some(Action::Stay)).unwrap();
//! for _ in 0..3 {
//!     game.advance(None).unwrap();
//! }
//! drop(game);
//!
//! let last = last.unwrap();
//! assert_eq!(last.kind, EventKind::DealerWins);
//! assert_eq!(last.dealer_value, 21);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod hand_value;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{CardSource, Shoe, StackedDeck};
pub use error::DrawError;
pub use event::{Action, EventKind, GameEvent, Outcome};
pub use game::{EventListener, Game, Party, Round, RoundState};
pub use hand::{Hand, Slot};
pub use hand_value::{BLACKJACK, HandValue, card_points};
pub use options::GameOptions;
