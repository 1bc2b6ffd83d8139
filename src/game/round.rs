//! The single-hand state machine.

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::deck::CardSource;
use crate::error::DrawError;
use crate::event::{Action, EventKind, GameEvent, Outcome};
use crate::hand::Hand;
use crate::options::GameOptions;

use super::state::{Party, RoundState};

/// Cards dealt before the player acts: player, dealer, player, dealer.
const INITIAL_DEAL: u8 = 4;

/// One hand of blackjack between the player and the dealer.
///
/// A round is driven one [`step`](Round::step) at a time. Each step performs a
/// single transition and returns the event it produced; the round's position
/// is plain data in [`RoundState`], so a suspended round can be cloned,
/// inspected or serialized between steps.
///
/// # Example
///
/// ```
/// use bjround::{Card, EventKind, GameOptions, Round, RoundState, StackedDeck, Suit};
///
/// let mut deck = StackedDeck::new([
///     Card::new(Suit::Clubs, 10),
///     Card::new(Suit::Clubs, 9),
///     Card::new(Suit::Clubs, 8),
///     Card::new(Suit::Clubs, 7),
/// ]);
/// let mut round = Round::new(&GameOptions::default());
///
/// let mut kinds = Vec::new();
/// while !round.state().awaits_action() {
///     let event = round.step(None, &mut deck).unwrap().unwrap();
///     kinds.push(event.kind);
/// }
/// assert_eq!(kinds.last(), Some(&EventKind::PlayersTurn));
/// assert_eq!(round.player_hand().value(), 18);
/// assert_eq!(round.dealer_hand().value(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Round {
    /// The player's hand.
    player: Hand,
    /// The dealer's hand; its second card is dealt face down.
    dealer: Hand,
    /// Where the round is suspended.
    state: RoundState,
    /// The dealer stands at or above this value.
    dealer_stands_on: u8,
}

impl Round {
    /// Creates a round with empty hands.
    #[must_use]
    pub const fn new(options: &GameOptions) -> Self {
        Self {
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Created,
            dealer_stands_on: options.dealer_stands_on,
        }
    }

    /// Returns where the round is suspended.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the outcome once the round has finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns whether the round has emitted its outcome.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Captures the table as an event of the given kind.
    #[must_use]
    pub fn snapshot(&self, kind: EventKind) -> GameEvent {
        GameEvent {
            kind,
            player_cards: self.player.cards().to_vec(),
            player_value: self.player.value(),
            dealer_cards: self.dealer.cards().to_vec(),
            dealer_value: self.dealer.value(),
            outcome: self.outcome(),
        }
    }

    /// Advances the round by one transition.
    ///
    /// `action` is only read when the round is suspended at the player's
    /// turn; everywhere else it is ignored. At the player's turn anything but
    /// `Some(Action::Hit)`, including `None`, stays.
    ///
    /// Returns `Ok(None)` once the outcome has been emitted. A round that has
    /// not started yet always yields its new-round event without drawing.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the step needs a card and the
    /// source has none. The round is left unchanged in that case.
    pub fn step<S: CardSource + ?Sized>(
        &mut self,
        action: Option<Action>,
        source: &mut S,
    ) -> Result<Option<GameEvent>, DrawError> {
        let (next, kind) = match self.state {
            RoundState::Finished(_) => return Ok(None),
            RoundState::Created => return Ok(Some(self.begin())),
            RoundState::NewRound => {
                self.deal(Party::Player, false, source)?;
                (RoundState::InitialDeal { dealt: 1 }, EventKind::DealToPlayer)
            }
            RoundState::InitialDeal { dealt } if dealt < INITIAL_DEAL => {
                let party = if dealt % 2 == 0 {
                    Party::Player
                } else {
                    Party::Dealer
                };
                // The dealer's second card is the hole card
                let face_down = dealt == INITIAL_DEAL - 1;
                self.deal(party, face_down, source)?;
                (
                    RoundState::InitialDeal { dealt: dealt + 1 },
                    deal_event(party),
                )
            }
            RoundState::InitialDeal { .. } => {
                if self.player.is_blackjack() {
                    (RoundState::PlayerHasBlackjack, EventKind::PlayerHasBlackjack)
                } else {
                    (RoundState::PlayersTurn, EventKind::PlayersTurn)
                }
            }
            RoundState::PlayerHasBlackjack => {
                self.dealer.reveal_face_down_cards();
                (RoundState::BlackjackRevealed, EventKind::DealerRevealsHole)
            }
            RoundState::BlackjackRevealed => {
                let outcome = if self.dealer.is_blackjack() {
                    Outcome::Push
                } else {
                    Outcome::PlayerWinsWithBlackjack
                };
                (RoundState::Finished(outcome), outcome.event_kind())
            }
            RoundState::PlayersTurn => match action {
                Some(Action::Hit) => {
                    self.deal(Party::Player, false, source)?;
                    (RoundState::PlayerHit, EventKind::DealToPlayer)
                }
                // Anything that is not a hit ends the player's turn
                Some(Action::Stay) | None => (RoundState::DealersTurn, EventKind::DealersTurn),
            },
            RoundState::PlayerHit => {
                if self.player.is_bust() {
                    self.dealer.reveal_face_down_cards();
                    (RoundState::BustRevealed, EventKind::DealerRevealsHole)
                } else {
                    (RoundState::PlayersTurn, EventKind::PlayersTurn)
                }
            }
            RoundState::BustRevealed => (
                RoundState::Finished(Outcome::Bust),
                EventKind::ItsABust,
            ),
            RoundState::DealersTurn => {
                self.dealer.reveal_face_down_cards();
                (RoundState::DealerRevealed, EventKind::DealerRevealsHole)
            }
            RoundState::DealerRevealed | RoundState::DealerHit => {
                if self.dealer.value() < self.dealer_stands_on {
                    self.deal(Party::Dealer, false, source)?;
                    (RoundState::DealerHit, EventKind::DealToDealer)
                } else {
                    let outcome = self.settle();
                    (RoundState::Finished(outcome), outcome.event_kind())
                }
            }
        };

        debug!("round {:?} -> {:?}: {}", self.state, next, kind);
        self.state = next;

        Ok(Some(self.snapshot(kind)))
    }

    /// Emits the new-round event of a round that has not started yet.
    ///
    /// This step never draws, so unlike [`Round::step`] it cannot fail.
    pub(super) fn begin(&mut self) -> GameEvent {
        debug_assert_eq!(self.state, RoundState::Created);
        debug!("round {:?} -> {:?}", self.state, RoundState::NewRound);
        self.state = RoundState::NewRound;
        self.snapshot(EventKind::NewRound)
    }

    /// Draws a card and adds it to a hand.
    ///
    /// The hand is only touched after the draw succeeds.
    fn deal<S: CardSource + ?Sized>(
        &mut self,
        party: Party,
        face_down: bool,
        source: &mut S,
    ) -> Result<(), DrawError> {
        let card = source
            .draw()
            .ok_or(DrawError::DeckExhausted { needed_for: party })?;
        trace!("dealt {card:?} to {party} (face down: {face_down})");

        let hand = match party {
            Party::Player => &mut self.player,
            Party::Dealer => &mut self.dealer,
        };
        if face_down {
            hand.add_face_down(card);
        } else {
            hand.add_card(card);
        }

        Ok(())
    }

    /// Compares the finished hands once the dealer stops drawing.
    fn settle(&self) -> Outcome {
        let dealer_value = self.dealer.value();
        let player_value = self.player.value();

        if self.dealer.is_bust() {
            Outcome::PlayerWinsWithDealerBust
        } else if dealer_value > player_value {
            Outcome::DealerWins
        } else if dealer_value < player_value {
            Outcome::PlayerWins
        } else {
            Outcome::Push
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(&GameOptions::default())
    }
}

const fn deal_event(party: Party) -> EventKind {
    match party {
        Party::Player => EventKind::DealToPlayer,
        Party::Dealer => EventKind::DealToDealer,
    }
}
