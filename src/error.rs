//! Error types for round operations.

use thiserror::Error;

use crate::game::Party;

/// Errors that can occur while dealing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The card source had no card left for the next deal.
    ///
    /// The round is left in the state it was in before the failed step, so
    /// advancing again after refilling the source resumes normally.
    #[error("card source exhausted while dealing to the {needed_for}")]
    DeckExhausted {
        /// Who the card was going to.
        needed_for: Party,
    },
}
