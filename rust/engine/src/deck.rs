use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, ranks_descending, Card};
use crate::errors::GameError;

/// An ordered collection of cards. The top of the deck, the next card to be
/// drawn, is the last element of the sequence.
///
/// Saved games serialize the deck as a plain ordered list of cards; decoding
/// rebuilds the exact same order, so a restored deck deals identically.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full 52-card deck in a fixed order: suits clubs, diamonds, hearts,
    /// spades; ranks descending ace..two within each suit. Index 0 is the
    /// ace of clubs; the two of spades sits on top and is drawn first.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &all_suits() {
            for &rank in &ranks_descending() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Builds a deck from an explicit card list. The first card listed is
    /// the top of the deck, so dealing a fresh hand from a five-or-more
    /// card list yields the first five listed cards in listed order.
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.iter().rev().copied().collect(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Finds a card by its full name, e.g. `"five of diamonds"`.
    pub fn find_by_name(&self, name: &str) -> Option<Card> {
        self.cards.iter().find(|c| c.name() == name).copied()
    }

    /// Unbiased in-place Fisher-Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }
}
