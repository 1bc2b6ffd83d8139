//! Hand representation with face-down slots.

extern crate alloc;

use alloc::vec::Vec;
use core::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand_value::HandValue;

/// A single position in a hand.
///
/// A face-down slot still carries the real card so it can be revealed later,
/// but [`Slot::visible`] hides it from display and value calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slot {
    /// A card whose face is shown.
    FaceUp(Card),
    /// A concealed card (the dealer's hole card).
    FaceDown(Card),
}

impl Slot {
    /// Returns the card if its face is shown.
    #[must_use]
    pub const fn visible(&self) -> Option<&Card> {
        match self {
            Self::FaceUp(card) => Some(card),
            Self::FaceDown(_) => None,
        }
    }

    /// Returns the underlying card regardless of concealment.
    ///
    /// This is for bookkeeping; presentation code should go through
    /// [`Slot::visible`].
    #[must_use]
    pub const fn card(&self) -> &Card {
        match self {
            Self::FaceUp(card) | Self::FaceDown(card) => card,
        }
    }

    /// Returns whether the slot is face down.
    #[must_use]
    pub const fn is_face_down(&self) -> bool {
        matches!(self, Self::FaceDown(_))
    }

    /// Returns the slot turned face up.
    #[must_use]
    pub const fn revealed(self) -> Self {
        match self {
            Self::FaceUp(card) | Self::FaceDown(card) => Self::FaceUp(card),
        }
    }
}

/// An ordered collection of cards held by one party.
///
/// Insertion order is significant: the dealer's hole card is always the
/// second slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hand {
    /// Slots in the order they were dealt.
    slots: Vec<Slot>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Adds a face-up card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.slots.push(Slot::FaceUp(card));
    }

    /// Adds a face-down card to the hand.
    ///
    /// Nothing prevents a second face-down card; the round only ever
    /// conceals the dealer's second card.
    pub fn add_face_down(&mut self, card: Card) {
        self.slots.push(Slot::FaceDown(card));
    }

    /// Returns the slots in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the face-up cards, in deal order.
    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().filter_map(Slot::visible)
    }

    /// Returns whether any slot is still face down.
    #[must_use]
    pub fn has_face_down(&self) -> bool {
        self.slots.iter().any(Slot::is_face_down)
    }

    /// Returns the hand with every face-down slot turned face up.
    #[must_use]
    pub fn revealed(self) -> Self {
        Self {
            slots: self.slots.into_iter().map(Slot::revealed).collect(),
        }
    }

    /// Reveals face-down cards in place.
    ///
    /// Calling this again once nothing is concealed is a no-op.
    pub fn reveal_face_down_cards(&mut self) {
        if self.has_face_down() {
            *self = mem::take(self).revealed();
        }
    }

    /// Returns a value calculator over the hand's visible cards.
    #[must_use]
    pub const fn evaluate(&self) -> HandValue<'_> {
        HandValue::new(self)
    }

    /// Calculates the value of the visible cards.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.evaluate().value()
    }

    /// Returns whether the visible cards are a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.evaluate().is_blackjack()
    }

    /// Returns whether the visible cards are over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.evaluate().is_bust()
    }

    /// Returns the number of slots in the hand, face-down ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
