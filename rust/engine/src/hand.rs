use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::score::{score_hand, Score};

/// Number of card slots in a hand.
pub const HAND_SIZE: usize = 5;

/// A five-slot hand bound to the deck it draws replacements from. Between a
/// completed deal and a completed draw every slot is occupied; a discarded
/// slot is empty until the next draw refills it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: [Option<Card>; HAND_SIZE],
    deck: Deck,
}

impl Hand {
    /// Deals a fresh hand by drawing five cards from the deck. The deck
    /// must hold at least five cards.
    pub fn deal(mut deck: Deck) -> Result<Self, GameError> {
        let mut cards = [None; HAND_SIZE];
        for slot in &mut cards {
            *slot = Some(deck.draw()?);
        }
        Ok(Self { cards, deck })
    }

    /// Restores a hand from explicit slots and the deck it draws from.
    pub fn from_parts(cards: [Option<Card>; HAND_SIZE], deck: Deck) -> Self {
        Self { cards, deck }
    }

    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied().flatten()
    }

    /// Marks the slot empty; idempotent, out-of-range indices are ignored.
    pub fn discard_at(&mut self, index: usize) {
        if let Some(slot) = self.cards.get_mut(index) {
            *slot = None;
        }
    }

    /// Fills every empty slot from the deck in ascending index order.
    /// The deck is checked up front, so a failed draw leaves the hand
    /// unchanged.
    pub fn draw(&mut self) -> Result<(), GameError> {
        let empty = self.cards.iter().filter(|c| c.is_none()).count();
        if self.deck.card_count() < empty {
            return Err(GameError::EmptyDeck);
        }
        for slot in &mut self.cards {
            if slot.is_none() {
                *slot = Some(self.deck.draw()?);
            }
        }
        Ok(())
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Classifies the hand. Fails with [`GameError::InvalidHand`] if any
    /// slot is empty.
    pub fn score(&self) -> Result<Score, GameError> {
        score_hand(self)
    }
}
