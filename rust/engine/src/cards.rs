use std::fmt;

use serde::{Deserialize, Serialize};

/// Display color of a suit. Hearts and diamonds are red, clubs and spades
/// are black.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    /// Hearts and diamonds
    Red,
    /// Clubs and spades
    Black,
}

/// Represents one of the four suits in a standard 52-card deck.
/// The declaration order (clubs, diamonds, hearts, spades) is the fixed
/// display order used for enumeration; suits carry no comparison semantics.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Canonical lowercase name, e.g. `"clubs"`.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    /// Single-character abbreviation used in card codes and saved decks.
    pub fn abbrev(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Unicode symbol for display.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Looks up a suit by name, `None` if there is no such suit.
    pub fn with_name(name: &str) -> Option<Suit> {
        all_suits().into_iter().find(|s| s.name() == name)
    }

    /// Looks up a suit by abbreviation, `None` if there is no such suit.
    pub fn with_abbrev(abbrev: char) -> Option<Suit> {
        all_suits().into_iter().find(|s| s.abbrev() == abbrev)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The ace is high (value 14) everywhere except the ace-low straight, where
/// it plays low for adjacency only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Canonical lowercase name, e.g. `"queen"`.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }

    /// Single-character abbreviation: `'2'..'9'`, `'t'`, `'j'`, `'q'`,
    /// `'k'`, `'a'`.
    pub fn abbrev(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 't',
            Rank::Jack => 'j',
            Rank::Queen => 'q',
            Rank::King => 'k',
            Rank::Ace => 'a',
        }
    }

    /// Numeric value 2-14, ace high.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Looks up a rank by name, `None` if there is no such rank.
    pub fn with_name(name: &str) -> Option<Rank> {
        ranks_descending().into_iter().find(|r| r.name() == name)
    }

    /// Looks up a rank by abbreviation, `None` if there is no such rank.
    pub fn with_abbrev(abbrev: char) -> Option<Rank> {
        ranks_descending().into_iter().find(|r| r.abbrev() == abbrev)
    }

    /// Looks up a rank by numeric value, `None` if out of range.
    pub fn with_value(value: u8) -> Option<Rank> {
        ranks_descending().into_iter().find(|r| r.value() == value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

/// Ranks ordered highest to lowest (ace..two), the order every
/// best-candidate scan in the scorer uses.
pub fn ranks_descending() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ]
}

/// Wire form of a card in saved games: (rank value, suit abbreviation).
type CardData = (u8, char);

/// Represents a single playing card with a rank and suit.
/// Equality is structural; no two cards in a standard deck are equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "CardData", try_from = "CardData")]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Full display name, e.g. `"ace of spades"`.
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }

    /// Two-character code: rank abbreviation then suit abbreviation,
    /// e.g. `"ah"` for the ace of hearts.
    pub fn abbrev(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.rank.abbrev());
        s.push(self.suit.abbrev());
        s
    }

    /// Parses a full name like `"ten of diamonds"`, `None` if either part
    /// is unknown.
    pub fn from_name(name: &str) -> Option<Card> {
        let (rank_name, suit_name) = name.split_once(" of ")?;
        Some(Card::new(
            Rank::with_name(rank_name)?,
            Suit::with_name(suit_name)?,
        ))
    }

    /// Parses a two-character code like `"as"`, `None` if it is not a
    /// valid card code.
    pub fn from_abbrev(abbrev: &str) -> Option<Card> {
        let mut chars = abbrev.chars();
        let rank = Rank::with_abbrev(chars.next()?)?;
        let suit = Suit::with_abbrev(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl From<Card> for CardData {
    fn from(card: Card) -> CardData {
        (card.rank.value(), card.suit.abbrev())
    }
}

impl TryFrom<CardData> for Card {
    type Error = String;

    fn try_from((value, abbrev): CardData) -> Result<Card, String> {
        let rank = Rank::with_value(value).ok_or_else(|| format!("unknown rank value: {value}"))?;
        let suit =
            Suit::with_abbrev(abbrev).ok_or_else(|| format!("unknown suit abbrev: {abbrev}"))?;
        Ok(Card::new(rank, suit))
    }
}
