//! Events emitted by a round and the player's actions.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hand::Slot;

/// A player decision at the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

impl Action {
    /// Parses a driver-supplied action token.
    ///
    /// Only the exact token `"hit"` is [`Action::Hit`]. Every other token,
    /// including other spellings, padding, typos and the empty string, is
    /// [`Action::Stay`]: an unrecognised decision stops the player's turn
    /// rather than failing.
    ///
    /// ```
    /// use bjround::Action;
    ///
    /// assert_eq!(Action::from_token("hit"), Action::Hit);
    /// assert_eq!(Action::from_token(" HIT "), Action::Stay);
    /// assert_eq!(Action::from_token("stay"), Action::Stay);
    /// assert_eq!(Action::from_token("double"), Action::Stay);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "hit" {
            Self::Hit
        } else {
            Self::Stay
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Player had a natural and the dealer did not.
    PlayerWinsWithBlackjack,
    /// Tie, no winner.
    Push,
    /// Player went over 21.
    Bust,
    /// Dealer went over 21.
    PlayerWinsWithDealerBust,
    /// Dealer finished higher.
    DealerWins,
    /// Player finished higher.
    PlayerWins,
}

impl Outcome {
    /// Returns the terminal event kind announcing this outcome.
    #[must_use]
    pub const fn event_kind(&self) -> EventKind {
        match self {
            Self::PlayerWinsWithBlackjack => EventKind::PlayerWinsWithBlackjack,
            Self::Push => EventKind::ItsAPush,
            Self::Bust => EventKind::ItsABust,
            Self::PlayerWinsWithDealerBust => EventKind::PlayerWinsWithDealerBust,
            Self::DealerWins => EventKind::DealerWins,
            Self::PlayerWins => EventKind::PlayerWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWinsWithBlackjack => "Blackjack, you win!",
            Self::Push => "It's a push",
            Self::Bust => "It's a bust",
            Self::PlayerWinsWithDealerBust => "Dealer busted, you win!",
            Self::DealerWins => "House wins",
            Self::PlayerWins => "You win!",
        })
    }
}

/// The kind of step a round just performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// A fresh round with empty hands.
    NewRound,
    /// One card was dealt to the player.
    DealToPlayer,
    /// One card was dealt to the dealer.
    DealToDealer,
    /// The player's first two cards total 21.
    PlayerHasBlackjack,
    /// The dealer's hole card was turned face up.
    DealerRevealsHole,
    /// Waiting for the player to hit or stay.
    PlayersTurn,
    /// The player stayed; the dealer plays next.
    DealersTurn,
    /// Terminal: tie.
    ItsAPush,
    /// Terminal: the player busted.
    ItsABust,
    /// Terminal: the player's natural wins.
    PlayerWinsWithBlackjack,
    /// Terminal: the dealer busted.
    PlayerWinsWithDealerBust,
    /// Terminal: the dealer finished higher.
    DealerWins,
    /// Terminal: the player finished higher.
    PlayerWins,
}

impl EventKind {
    /// Returns whether this event ends the round.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::ItsAPush
                | Self::ItsABust
                | Self::PlayerWinsWithBlackjack
                | Self::PlayerWinsWithDealerBust
                | Self::DealerWins
                | Self::PlayerWins
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NewRound => "new round",
            Self::DealToPlayer => "deal to player",
            Self::DealToDealer => "deal to dealer",
            Self::PlayerHasBlackjack => "player has blackjack",
            Self::DealerRevealsHole => "dealer reveals hole",
            Self::PlayersTurn => "player's turn",
            Self::DealersTurn => "dealer's turn",
            Self::ItsAPush => "it's a push",
            Self::ItsABust => "it's a bust",
            Self::PlayerWinsWithBlackjack => "player wins with blackjack",
            Self::PlayerWinsWithDealerBust => "player wins with dealer bust",
            Self::DealerWins => "dealer wins",
            Self::PlayerWins => "player wins",
        })
    }
}

/// A snapshot of the table taken right after a round step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameEvent {
    /// What just happened.
    pub kind: EventKind,
    /// The player's slots in deal order.
    pub player_cards: Vec<Slot>,
    /// The player's current value.
    pub player_value: u8,
    /// The dealer's slots in deal order, hole card concealed until revealed.
    pub dealer_cards: Vec<Slot>,
    /// The value of the dealer's visible cards.
    pub dealer_value: u8,
    /// Set only on the terminal event.
    pub outcome: Option<Outcome>,
}

impl GameEvent {
    /// Returns the most recently dealt player slot.
    #[must_use]
    pub fn last_player_card(&self) -> Option<&Slot> {
        self.player_cards.last()
    }

    /// Returns the dealer's hole card slot, once dealt.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Slot> {
        self.dealer_cards.get(1)
    }
}
