//! Game configuration options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hand_value::BLACKJACK;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_penetration(0.8)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    /// Number of decks in the shoe built by [`Game::new`](crate::Game::new).
    pub decks: u8,
    /// Deck penetration (fraction of the shoe played before reshuffle).
    /// 0 to disable reshuffling.
    pub penetration: f64,
    /// The dealer draws while below this value and stands at or above it.
    /// Soft and hard totals are treated the same. Meaningful values are
    /// 1..=21; the builder clamps anything above 21 down to 21.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            penetration: 0.75,
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the value the dealer stands on, clamped to at most 21.
    ///
    /// A threshold above 21 would make the dealer draw until bust.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(30);
    /// assert_eq!(options.dealer_stands_on, 21);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = if value > BLACKJACK { BLACKJACK } else { value };
        self
    }
}
