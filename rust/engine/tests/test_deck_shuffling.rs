use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use jacks_engine::cards::{Card, Color, Rank as R, Suit as S};
use jacks_engine::deck::Deck;
use jacks_engine::errors::GameError;

#[test]
fn standard_deck_has_52_unique_cards() {
    let mut deck = Deck::standard();
    assert_eq!(deck.card_count(), 52);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at draw {}", c, i);
    }
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn standard_deck_order_is_fixed() {
    let deck = Deck::standard();
    // suit-major clubs/diamonds/hearts/spades, ranks descending ace..two
    assert_eq!(deck.card_at(0).unwrap().name(), "ace of clubs");
    assert_eq!(deck.card_at(1).unwrap().name(), "king of clubs");
    assert_eq!(deck.card_at(16).unwrap().name(), "jack of diamonds");
    assert_eq!(deck.card_at(17).unwrap().name(), "ten of diamonds");
    assert_eq!(deck.card_at(32).unwrap().name(), "eight of hearts");
    assert_eq!(deck.card_at(48).unwrap().name(), "five of spades");
    assert_eq!(deck.card_at(51).unwrap().name(), "two of spades");
    assert_eq!(deck.card_at(52), None);

    // the top of the deck is the last card, drawn first
    let mut deck = deck;
    assert_eq!(deck.draw().unwrap().name(), "two of spades");
}

#[test]
fn find_by_name() {
    let deck = Deck::standard();
    let five = deck.find_by_name("five of diamonds").unwrap();
    assert_eq!(five.name(), "five of diamonds");
    assert_eq!(five.suit.color(), Color::Red);
    let jack = deck.find_by_name("jack of clubs").unwrap();
    assert_eq!(jack.suit.color(), Color::Black);
    assert_eq!(deck.find_by_name("one of clubs"), None);
}

#[test]
fn shuffle_is_a_permutation() {
    let mut deck = Deck::standard();
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    deck.shuffle(&mut rng);
    assert_eq!(deck.card_count(), 52);
    let cards: HashSet<Card> = (0..52).map(|i| deck.card_at(i).unwrap()).collect();
    assert_eq!(cards.len(), 52, "shuffle must not duplicate or drop cards");
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::standard();
    let mut d2 = Deck::standard();
    let mut r1 = ChaCha20Rng::seed_from_u64(12345);
    let mut r2 = ChaCha20Rng::seed_from_u64(12345);
    d1.shuffle(&mut r1);
    d2.shuffle(&mut r2);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::standard();
    let mut d2 = Deck::standard();
    let mut r1 = ChaCha20Rng::seed_from_u64(1);
    let mut r2 = ChaCha20Rng::seed_from_u64(2);
    d1.shuffle(&mut r1);
    d2.shuffle(&mut r2);
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_displaces_most_cards() {
    let reference = Deck::standard();
    let mut deck = Deck::standard();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    deck.shuffle(&mut rng);
    let fixed = (0..52)
        .filter(|&i| deck.card_at(i) == reference.card_at(i))
        .count();
    assert!(fixed < 13, "only {} cards moved", 52 - fixed);
}

#[test]
fn custom_deck_lists_top_card_first() {
    let cards = [
        Card::new(R::Two, S::Hearts),
        Card::new(R::Five, S::Diamonds),
        Card::new(R::Six, S::Spades),
        Card::new(R::King, S::Clubs),
        Card::new(R::Ace, S::Hearts),
    ];
    let mut deck = Deck::from_cards(&cards);
    assert_eq!(deck.card_count(), 5);
    // listed order maps top-down, so index 0 is the bottom card
    assert_eq!(deck.card_at(0).unwrap().name(), "ace of hearts");
    assert_eq!(deck.card_at(4).unwrap().name(), "two of hearts");
    assert_eq!(deck.draw().unwrap().name(), "two of hearts");
    assert_eq!(deck.draw().unwrap().name(), "five of diamonds");
}

#[test]
fn empty_custom_deck() {
    let mut deck = Deck::from_cards(&[]);
    assert_eq!(deck.card_count(), 0);
    assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
}

#[test]
fn deck_round_trips_through_json_in_order() {
    let mut deck = Deck::standard();
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    deck.shuffle(&mut rng);
    for _ in 0..7 {
        deck.draw().unwrap();
    }
    let json = serde_json::to_string(&deck).unwrap();
    let restored: Deck = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, deck);
    // restored deck must keep dealing in the same order
    let mut a = deck;
    let mut b = restored;
    for _ in 0..45 {
        assert_eq!(a.draw().unwrap(), b.draw().unwrap());
    }
}
