use std::cell::RefCell;
use std::rc::Rc;

use jacks_engine::cards::{Card, Rank as R, Suit as S};
use jacks_engine::deck::Deck;
use jacks_engine::errors::GameError;
use jacks_engine::score::Category;
use jacks_engine::session::{PlayState, Session, DEFAULT_WAGER, STARTING_CREDITS};

fn c(rank: R, suit: S) -> Card {
    Card::new(rank, suit)
}

/// Six-card scripted deck: deal 4h Ks 6h 5c 3d, then 2h replaces the
/// discarded king for a six-high straight.
fn straight_deck() -> Deck {
    Deck::from_cards(&[
        c(R::Four, S::Hearts),
        c(R::King, S::Spades),
        c(R::Six, S::Hearts),
        c(R::Five, S::Clubs),
        c(R::Three, S::Diamonds),
        c(R::Two, S::Hearts),
    ])
}

#[test]
fn new_session_defaults() {
    let session = Session::new(None);
    assert_eq!(session.play_state(), PlayState::Idle);
    assert_eq!(session.credits(), STARTING_CREDITS);
    assert_eq!(session.wager(), DEFAULT_WAGER);
    assert!(session.hand().is_none());
    assert!(session.card_at(0).is_none());
    assert!(session.last_hand_score().is_none());
    assert!(session.last_hand_payout().is_none());
}

#[test]
fn full_cycle_with_a_scripted_straight() {
    let mut session = Session::new(None);
    session.deal_with_deck(straight_deck()).unwrap();
    assert_eq!(session.play_state(), PlayState::Started);
    assert_eq!(session.credits(), 95);
    assert_eq!(session.card_at(1).unwrap().name(), "king of spades");

    session.discard_at(1).unwrap();
    assert!(session.card_at(1).is_none());

    session.draw().unwrap();
    assert_eq!(session.play_state(), PlayState::AfterDraw);
    assert_eq!(session.card_at(1).unwrap().name(), "two of hearts");

    session.score_hand().unwrap();
    assert_eq!(session.play_state(), PlayState::Ended);
    let score = session.last_hand_score().unwrap();
    assert_eq!(score.category, Category::Straight);
    assert_eq!(session.last_hand_payout(), Some(20));
    assert_eq!(session.credits(), 115);
}

#[test]
fn operations_out_of_order_are_rejected() {
    let mut session = Session::new(None);

    assert_eq!(
        session.discard_at(0).unwrap_err(),
        GameError::IllegalState {
            required: PlayState::Started,
            actual: PlayState::Idle,
        }
    );
    assert_eq!(
        session.draw().unwrap_err(),
        GameError::IllegalState {
            required: PlayState::Started,
            actual: PlayState::Idle,
        }
    );
    assert_eq!(
        session.score_hand().unwrap_err(),
        GameError::IllegalState {
            required: PlayState::AfterDraw,
            actual: PlayState::Idle,
        }
    );

    session.deal_with_deck(straight_deck()).unwrap();
    assert_eq!(
        session.score_hand().unwrap_err(),
        GameError::IllegalState {
            required: PlayState::AfterDraw,
            actual: PlayState::Started,
        }
    );

    session.draw().unwrap();
    // discards close when the draw happens
    assert_eq!(
        session.discard_at(0).unwrap_err(),
        GameError::IllegalState {
            required: PlayState::Started,
            actual: PlayState::AfterDraw,
        }
    );
}

#[test]
fn a_failed_operation_leaves_the_session_unchanged() {
    let mut session = Session::new(None);
    let before = session.credits();
    // three cards cannot fill a hand
    let short = Deck::from_cards(&[
        c(R::Four, S::Hearts),
        c(R::King, S::Spades),
        c(R::Six, S::Hearts),
    ]);
    assert_eq!(session.deal_with_deck(short).unwrap_err(), GameError::EmptyDeck);
    assert_eq!(session.credits(), before);
    assert_eq!(session.play_state(), PlayState::Idle);
    assert!(session.hand().is_none());
}

#[test]
fn a_new_deal_starts_from_the_ended_state() {
    let mut session = Session::new(None);
    session.deal_with_deck(straight_deck()).unwrap();
    session.draw().unwrap();
    session.score_hand().unwrap();
    assert_eq!(session.play_state(), PlayState::Ended);

    session.deal_with_deck(straight_deck()).unwrap();
    assert_eq!(session.play_state(), PlayState::Started);
    assert_eq!(session.credits(), 110);
    // the previous result sticks around until the next score
    assert_eq!(session.last_hand_payout(), Some(20));
}

#[test]
fn credits_have_no_floor() {
    let mut session = Session::new(None);
    for _ in 0..25 {
        session.deal_with_deck(straight_deck()).unwrap();
    }
    // 100 - 25 * 5
    assert_eq!(session.credits(), -25);
}

#[test]
fn add_credits_tops_up_in_any_state() {
    let mut session = Session::new(None);
    session.add_credits(500);
    assert_eq!(session.credits(), 600);

    session.deal_with_deck(straight_deck()).unwrap();
    session.add_credits(-100);
    assert_eq!(session.credits(), 495);
}

#[test]
fn notifications_fire_in_lifecycle_order() {
    let events: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let mut session = Session::new(None);
    let log = Rc::clone(&events);
    session.set_on_deal_complete(move || log.borrow_mut().push("deal"));
    let log = Rc::clone(&events);
    session.set_on_draw_complete(move || log.borrow_mut().push("draw"));
    let log = Rc::clone(&events);
    session.set_on_game_ended(move || log.borrow_mut().push("ended"));

    session.deal_with_deck(straight_deck()).unwrap();
    session.discard_at(1).unwrap();
    session.draw().unwrap();
    session.score_hand().unwrap();

    assert_eq!(*events.borrow(), vec!["deal", "draw", "ended"]);
}

#[test]
fn registering_a_handler_replaces_the_previous_one() {
    let events: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let mut session = Session::new(None);
    let log = Rc::clone(&events);
    session.set_on_deal_complete(move || log.borrow_mut().push("first"));
    let log = Rc::clone(&events);
    session.set_on_deal_complete(move || log.borrow_mut().push("second"));

    session.deal_with_deck(straight_deck()).unwrap();
    assert_eq!(*events.borrow(), vec!["second"]);
}

#[test]
fn seeded_sessions_deal_identically() {
    let mut a = Session::new(Some(42));
    let mut b = Session::new(Some(42));
    a.shuffle_and_deal().unwrap();
    b.shuffle_and_deal().unwrap();
    for i in 0..5 {
        assert_eq!(a.card_at(i), b.card_at(i));
    }

    let mut other = Session::new(Some(43));
    other.shuffle_and_deal().unwrap();
    let same = (0..5).all(|i| a.card_at(i) == other.card_at(i));
    assert!(!same, "a different seed should deal a different hand");
}

#[test]
fn consecutive_deals_use_fresh_decks() {
    let mut session = Session::new(Some(42));
    session.shuffle_and_deal().unwrap();
    session.draw().unwrap();
    session.score_hand().unwrap();
    let first: Vec<_> = (0..5).map(|i| session.card_at(i)).collect();

    session.shuffle_and_deal().unwrap();
    assert_eq!(session.hand().unwrap().deck().card_count(), 47);
    let second: Vec<_> = (0..5).map(|i| session.card_at(i)).collect();
    assert_ne!(first, second, "the RNG advances between deals");
}
