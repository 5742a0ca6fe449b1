//! # jacks-engine: Jacks-or-Better Video Poker Core
//!
//! The rules engine for a five-card-draw Jacks-or-Better video poker game:
//! cards, deck, hand, scoring into the ten payout categories, the fixed
//! paytable, and a per-player session that sequences the
//! deal→discard→draw→score cycle with JSON persistence and JSONL
//! hand-history logging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and lookups
//! - [`deck`] - Deck construction, Fisher-Yates shuffling, drawing
//! - [`hand`] - The five-slot hand and its discard/draw cycle
//! - [`score`] - Hand classification (Category, Score, scorer)
//! - [`payout`] - The fixed Jacks-or-Better paytable
//! - [`session`] - Session state machine, credits, wager, persistence
//! - [`logger`] - JSONL hand-history records
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use jacks_engine::session::Session;
//!
//! // Seeded sessions shuffle deterministically.
//! let mut session = Session::new(Some(42));
//! assert_eq!(session.credits(), 100);
//!
//! session.shuffle_and_deal().unwrap();
//! session.discard_at(0).unwrap();
//! session.draw().unwrap();
//! session.score_hand().unwrap();
//!
//! let score = session.last_hand_score().unwrap();
//! println!("{} paid {}", score.category, session.last_hand_payout().unwrap());
//! ```
//!
//! ## Scoring
//!
//! Scripted decks make hands deterministic; the first card listed is the
//! first card dealt:
//!
//! ```rust
//! use jacks_engine::cards::{Card, Rank, Suit};
//! use jacks_engine::deck::Deck;
//! use jacks_engine::hand::Hand;
//! use jacks_engine::score::Category;
//!
//! // The wheel: the ace plays low for adjacency, high for display.
//! let deck = Deck::from_cards(&[
//!     Card::new(Rank::Three, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Hearts),
//!     Card::new(Rank::Five, Suit::Clubs),
//!     Card::new(Rank::Ace, Suit::Diamonds),
//!     Card::new(Rank::Four, Suit::Clubs),
//! ]);
//! let hand = Hand::deal(deck).unwrap();
//! let score = hand.score().unwrap();
//! assert_eq!(score.category, Category::Straight);
//! assert_eq!(score.major_rank, Some(Rank::Five));
//! assert_eq!(score.minor_rank, Some(Rank::Ace));
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod payout;
pub mod score;
pub mod session;
