//! Blackjack scoring over the visible cards of a hand.

use crate::card::Card;
use crate::hand::Hand;

/// The best possible hand value.
pub const BLACKJACK: u8 = 21;

/// Returns the points a card of the given rank is worth, counting aces high.
#[must_use]
pub const fn card_points(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards<'a>(cards: impl Iterator<Item = &'a Card>) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_points(card.rank));
    }

    // Demote soft aces one at a time
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// A stateless view computing blackjack values for a hand.
///
/// Face-down cards are excluded entirely: they add no points and do not
/// count toward the two cards of a blackjack. Every query recomputes from the
/// hand as it is now, so results always reflect the latest reveal.
#[derive(Debug, Clone, Copy)]
pub struct HandValue<'a> {
    hand: &'a Hand,
}

impl<'a> HandValue<'a> {
    /// Creates a calculator over the given hand.
    #[must_use]
    pub const fn new(hand: &'a Hand) -> Self {
        Self { hand }
    }

    /// Calculates the value of the visible cards.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// An empty hand is worth 0.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(self.hand.visible_cards()).0
    }

    /// Returns whether exactly two visible cards total 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.visible_cards().count() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(self.hand.visible_cards()).1
    }
}
