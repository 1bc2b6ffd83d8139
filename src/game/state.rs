//! Round state types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::event::Outcome;

/// Where a round is suspended.
///
/// Each variant names the step that produced the most recent event; the
/// next call to [`Round::step`](super::Round::step) moves on from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundState {
    /// Constructed, nothing emitted yet.
    Created,
    /// The new-round event was emitted.
    NewRound,
    /// Part way through the initial deal.
    InitialDeal {
        /// Cards dealt so far (1..=4), alternating player then dealer.
        dealt: u8,
    },
    /// The player's natural was announced.
    PlayerHasBlackjack,
    /// The hole card was revealed after a player natural.
    BlackjackRevealed,
    /// Waiting for the player's decision.
    PlayersTurn,
    /// The player was dealt a card after hitting.
    PlayerHit,
    /// The hole card was revealed after the player busted.
    BustRevealed,
    /// The player stayed.
    DealersTurn,
    /// The hole card was revealed at the start of the dealer's play.
    DealerRevealed,
    /// The dealer drew a card.
    DealerHit,
    /// The outcome was emitted.
    Finished(Outcome),
}

impl RoundState {
    /// Returns whether the round has emitted its outcome.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    /// Returns whether the next step consumes the player's action.
    #[must_use]
    pub const fn awaits_action(&self) -> bool {
        matches!(self, Self::PlayersTurn)
    }
}

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Party {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Dealer => "dealer",
        })
    }
}
