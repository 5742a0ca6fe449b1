use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, Rank, Suit};
use crate::errors::GameError;
use crate::hand::{Hand, HAND_SIZE};

/// The ten mutually exclusive hand classifications, ordered from worst to
/// best. The discriminant doubles as the row index into the payout table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Category {
    Loss = 0,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

/// All categories in payout order.
pub const ALL_CATEGORIES: [Category; 10] = [
    Category::Loss,
    Category::OnePair,
    Category::TwoPair,
    Category::ThreeOfAKind,
    Category::Straight,
    Category::Flush,
    Category::FullHouse,
    Category::FourOfAKind,
    Category::StraightFlush,
    Category::RoyalFlush,
];

impl Category {
    /// Display name, e.g. `"Three of a Kind"`.
    pub fn name(self) -> &'static str {
        match self {
            Category::Loss => "Loss",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    /// Looks up a category by display name, `None` if there is no such
    /// category.
    pub fn with_name(name: &str) -> Option<Category> {
        ALL_CATEGORIES.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of classifying a hand.
///
/// The major and minor ranks identify the primary and secondary rank of the
/// category (the triple and the pair of a full house, the endpoints of a
/// straight); the suit is recorded for flushes. The scoring card indexes are
/// the hand positions that contributed to the category, in ascending order,
/// empty for a loss.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "ScoreData", try_from = "ScoreData")]
pub struct Score {
    pub category: Category,
    pub major_rank: Option<Rank>,
    pub minor_rank: Option<Rank>,
    pub suit: Option<Suit>,
    pub scoring_card_indexes: Vec<usize>,
}

/// Wire form of a score in saved games: rank and suit fields hold canonical
/// names so saves stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreData {
    name: String,
    major_rank: Option<String>,
    minor_rank: Option<String>,
    suit: Option<String>,
    scoring_card_indexes: Vec<usize>,
}

impl From<Score> for ScoreData {
    fn from(score: Score) -> ScoreData {
        ScoreData {
            name: score.category.name().to_string(),
            major_rank: score.major_rank.map(|r| r.name().to_string()),
            minor_rank: score.minor_rank.map(|r| r.name().to_string()),
            suit: score.suit.map(|s| s.name().to_string()),
            scoring_card_indexes: score.scoring_card_indexes,
        }
    }
}

impl TryFrom<ScoreData> for Score {
    type Error = String;

    fn try_from(data: ScoreData) -> Result<Score, String> {
        let category = Category::with_name(&data.name)
            .ok_or_else(|| format!("unknown score name: {}", data.name))?;
        let major_rank = data
            .major_rank
            .map(|n| Rank::with_name(&n).ok_or_else(|| format!("unknown rank name: {n}")))
            .transpose()?;
        let minor_rank = data
            .minor_rank
            .map(|n| Rank::with_name(&n).ok_or_else(|| format!("unknown rank name: {n}")))
            .transpose()?;
        let suit = data
            .suit
            .map(|n| Suit::with_name(&n).ok_or_else(|| format!("unknown suit name: {n}")))
            .transpose()?;
        Ok(Score {
            category,
            major_rank,
            minor_rank,
            suit,
            scoring_card_indexes: data.scoring_card_indexes,
        })
    }
}

/// Classifies a fully occupied five-card hand. Deterministic and pure;
/// fails with [`GameError::InvalidHand`] if any slot is empty.
pub fn score_hand(hand: &Hand) -> Result<Score, GameError> {
    let mut cards = [Card::new(Rank::Two, Suit::Clubs); HAND_SIZE];
    for (i, card) in cards.iter_mut().enumerate() {
        *card = hand.card_at(i).ok_or(GameError::InvalidHand)?;
    }

    // One pass to tabulate rank and suit frequencies; ranks are indexed by
    // value (2..=14).
    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for &c in &cards {
        rank_counts[c.rank.value() as usize] += 1;
        suit_counts[c.suit as usize] += 1;
    }

    let straight = detect_straight(&rank_counts);
    let flush = detect_flush(&suit_counts);

    if let (Some((major, minor)), Some(suit)) = (straight, flush) {
        let category = if major == Rank::Ace {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return Ok(Score {
            category,
            major_rank: Some(major),
            minor_rank: Some(minor),
            suit: Some(suit),
            scoring_card_indexes: all_indexes(),
        });
    }

    if let Some(rank) = rank_with_count(&rank_counts, 4) {
        return Ok(Score {
            category: Category::FourOfAKind,
            major_rank: Some(rank),
            minor_rank: None,
            suit: None,
            scoring_card_indexes: indexes_of_rank(&cards, rank),
        });
    }

    // The triple is found before the pair; two triples cannot coexist in a
    // five-card hand.
    if let Some(triple) = rank_with_count(&rank_counts, 3) {
        if let Some(pair) = rank_with_count(&rank_counts, 2) {
            return Ok(Score {
                category: Category::FullHouse,
                major_rank: Some(triple),
                minor_rank: Some(pair),
                suit: None,
                scoring_card_indexes: all_indexes(),
            });
        }
    }

    if let Some(suit) = flush {
        return Ok(Score {
            category: Category::Flush,
            major_rank: None,
            minor_rank: None,
            suit: Some(suit),
            scoring_card_indexes: all_indexes(),
        });
    }

    if let Some((major, minor)) = straight {
        return Ok(Score {
            category: Category::Straight,
            major_rank: Some(major),
            minor_rank: Some(minor),
            suit: None,
            scoring_card_indexes: all_indexes(),
        });
    }

    if let Some(rank) = rank_with_count(&rank_counts, 3) {
        return Ok(Score {
            category: Category::ThreeOfAKind,
            major_rank: Some(rank),
            minor_rank: None,
            suit: None,
            scoring_card_indexes: indexes_of_rank(&cards, rank),
        });
    }

    // Pairs collected high to low, so the first is the major pair.
    let pairs = pair_ranks(&rank_counts);
    if pairs.len() == 2 {
        return Ok(Score {
            category: Category::TwoPair,
            major_rank: Some(pairs[0]),
            minor_rank: Some(pairs[1]),
            suit: None,
            scoring_card_indexes: indexes_of_ranks(&cards, pairs[0], pairs[1]),
        });
    }

    // Jacks or better: a lone pair below jack pays nothing.
    if let Some(&rank) = pairs.first() {
        if rank.value() >= Rank::Jack.value() {
            return Ok(Score {
                category: Category::OnePair,
                major_rank: Some(rank),
                minor_rank: None,
                suit: None,
                scoring_card_indexes: indexes_of_rank(&cards, rank),
            });
        }
    }

    Ok(Score {
        category: Category::Loss,
        major_rank: None,
        minor_rank: None,
        suit: None,
        scoring_card_indexes: Vec::new(),
    })
}

fn all_indexes() -> Vec<usize> {
    (0..HAND_SIZE).collect()
}

/// Returns the (major, minor) endpoint ranks of a straight, scanning the
/// five-wide windows from ace-high down, then the wheel. In the wheel the
/// ace plays low for adjacency but is still reported as the minor endpoint
/// under its normal high identity.
fn detect_straight(rank_counts: &[u8; 15]) -> Option<(Rank, Rank)> {
    for high in (6..=14u8).rev() {
        if (0..5u8).all(|off| rank_counts[(high - off) as usize] > 0) {
            return Some((Rank::with_value(high)?, Rank::with_value(high - 4)?));
        }
    }
    let wheel = rank_counts[Rank::Ace.value() as usize] > 0
        && (2..=5usize).all(|value| rank_counts[value] > 0);
    if wheel {
        return Some((Rank::Five, Rank::Ace));
    }
    None
}

fn detect_flush(suit_counts: &[u8; 4]) -> Option<Suit> {
    all_suits()
        .into_iter()
        .find(|&s| suit_counts[s as usize] == HAND_SIZE as u8)
}

/// The highest rank held exactly `count` times, if any.
fn rank_with_count(rank_counts: &[u8; 15], count: u8) -> Option<Rank> {
    for value in (2..=14u8).rev() {
        if rank_counts[value as usize] == count {
            return Rank::with_value(value);
        }
    }
    None
}

/// All ranks held exactly twice, highest first.
fn pair_ranks(rank_counts: &[u8; 15]) -> Vec<Rank> {
    (2..=14u8)
        .rev()
        .filter(|&value| rank_counts[value as usize] == 2)
        .filter_map(Rank::with_value)
        .collect()
}

fn indexes_of_rank(cards: &[Card; HAND_SIZE], rank: Rank) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.rank == rank)
        .map(|(i, _)| i)
        .collect()
}

fn indexes_of_ranks(cards: &[Card; HAND_SIZE], first: Rank, second: Rank) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.rank == first || c.rank == second)
        .map(|(i, _)| i)
        .collect()
}
