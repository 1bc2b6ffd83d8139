//! Card sources the round draws from.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Something the round can deal cards from.
///
/// The round calls [`CardSource::draw`] exactly once per dealt card, in deal
/// order. Ordering and shuffling policy are entirely up to the source.
pub trait CardSource {
    /// Takes the next card, or `None` when the source is exhausted.
    fn draw(&mut self) -> Option<Card>;

    /// Returns whether the source wants to be reshuffled before the next round.
    fn needs_reshuffle(&self) -> bool {
        false
    }

    /// Restores the source to a full, freshly ordered state.
    fn reshuffle(&mut self) {}
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> Option<Card> {
        (**self).draw()
    }

    fn needs_reshuffle(&self) -> bool {
        (**self).needs_reshuffle()
    }

    fn reshuffle(&mut self) {
        (**self).reshuffle();
    }
}

/// A shuffled shoe of one or more standard decks.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards in the shoe; the next card is at the end.
    cards: Vec<Card>,
    /// Number of decks.
    decks: u8,
    /// Fraction of the shoe played before a reshuffle is wanted.
    penetration: f64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe with the given number of decks, shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::new(2, 0.75, 42);
    /// assert_eq!(shoe.cards_remaining(), 2 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(decks: u8, penetration: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_shoe(decks, &mut rng);

        Self {
            cards,
            decks,
            penetration,
            rng,
        }
    }

    fn create_shoe(num_decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}

impl CardSource for Shoe {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns `true` once the played fraction reaches the penetration.
    /// A penetration of 0 never asks for a reshuffle.
    fn needs_reshuffle(&self) -> bool {
        if self.penetration == 0.0 {
            return false;
        }

        let total_cards = self.decks as usize * DECK_SIZE;
        if total_cards == 0 {
            return false;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.cards.len() as f64 / total_cards as f64);

        used_ratio >= self.penetration
    }

    fn reshuffle(&mut self) {
        self.cards = Self::create_shoe(self.decks, &mut self.rng);
    }
}

/// A source that deals a fixed list of cards front to back.
///
/// Useful for rigging rounds in tests and for replaying a recorded game.
///
/// ```
/// use bjround::{Card, CardSource, StackedDeck, Suit};
///
/// let mut deck = StackedDeck::new([Card::new(Suit::Clubs, 1), Card::new(Suit::Clubs, 2)]);
/// assert_eq!(deck.draw(), Some(Card::new(Suit::Clubs, 1)));
/// assert_eq!(deck.remaining(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackedDeck {
    cards: VecDeque<Card>,
}

impl StackedDeck {
    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Adds a card to the bottom of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl CardSource for StackedDeck {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }
}
