use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{Hand, HAND_SIZE};
use crate::logger::HandRecord;
use crate::payout::payout;
use crate::score::Score;

/// The four lifecycle states of a session. A session starts idle, and from
/// the ended state loops back to started on the next deal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayState {
    /// No hand dealt yet.
    #[serde(rename = "game idle")]
    Idle,
    /// A hand has been dealt; discards and the draw are allowed.
    #[serde(rename = "game started")]
    Started,
    /// The draw has refilled the hand; only scoring remains.
    #[serde(rename = "after draw")]
    AfterDraw,
    /// The hand has been scored and paid out.
    #[serde(rename = "game ended")]
    Ended,
}

impl PlayState {
    /// Persisted state name, e.g. `"game started"`.
    pub fn name(self) -> &'static str {
        match self {
            PlayState::Idle => "game idle",
            PlayState::Started => "game started",
            PlayState::AfterDraw => "after draw",
            PlayState::Ended => "game ended",
        }
    }

    /// Looks up a state by its persisted name, `None` if there is no such
    /// state.
    pub fn with_name(name: &str) -> Option<PlayState> {
        [
            PlayState::Idle,
            PlayState::Started,
            PlayState::AfterDraw,
            PlayState::Ended,
        ]
        .into_iter()
        .find(|s| s.name() == name)
    }
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Credits a new session starts with.
pub const STARTING_CREDITS: i64 = 100;

/// Default wager for a new session.
pub const DEFAULT_WAGER: u32 = 5;

/// Minimal contract of the external key-value store sessions are saved to.
pub trait Store {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String);
}

/// Persisted form of a [`Session`]: everything observable, nothing else.
/// Encoding then decoding reproduces an identical session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub play_state: PlayState,
    pub credits: i64,
    pub wager: u32,
    pub hand: Option<Hand>,
    pub last_hand_score: Option<Score>,
    pub last_hand_payout: Option<u32>,
}

type Callback = Box<dyn FnMut()>;

/// A single player's game session: the deal/discard/draw/score state
/// machine together with the credit balance and wager.
///
/// All operations are synchronous and complete before returning; the
/// session is not designed for concurrent access. Notification callbacks
/// fire after the state and every session field have been updated, before
/// the operation returns.
///
/// # Examples
///
/// ```
/// use jacks_engine::session::Session;
///
/// let mut session = Session::new(Some(7));
/// session.shuffle_and_deal().unwrap();
/// session.discard_at(0).unwrap();
/// session.draw().unwrap();
/// session.score_hand().unwrap();
/// assert!(session.last_hand_payout().is_some());
/// ```
pub struct Session {
    play_state: PlayState,
    credits: i64,
    wager: u32,
    hand: Option<Hand>,
    last_hand_score: Option<Score>,
    last_hand_payout: Option<u32>,
    /// Seed the session RNG was created from, kept for hand records.
    seed: Option<u64>,
    rng: ChaCha20Rng,
    on_deal_complete: Option<Callback>,
    on_draw_complete: Option<Callback>,
    on_game_ended: Option<Callback>,
}

impl Session {
    /// Creates an idle session with the default credits and wager. The
    /// seed makes `shuffle_and_deal` deterministic for replay and tests.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed.unwrap_or(0xA1A2_A3A4));
        Self {
            play_state: PlayState::Idle,
            credits: STARTING_CREDITS,
            wager: DEFAULT_WAGER,
            hand: None,
            last_hand_score: None,
            last_hand_payout: None,
            seed,
            rng,
            on_deal_complete: None,
            on_draw_complete: None,
            on_game_ended: None,
        }
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn credits(&self) -> i64 {
        self.credits
    }

    pub fn wager(&self) -> u32 {
        self.wager
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// The card at a hand slot, `None` while idle or for a discarded slot.
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.hand.as_ref().and_then(|h| h.card_at(index))
    }

    pub fn last_hand_score(&self) -> Option<&Score> {
        self.last_hand_score.as_ref()
    }

    pub fn last_hand_payout(&self) -> Option<u32> {
        self.last_hand_payout
    }

    /// Unconditional credit top-up; no state restriction and no bound.
    pub fn add_credits(&mut self, amount: i64) {
        self.credits += amount;
    }

    /// Registers the handler fired when a deal completes, replacing any
    /// previous handler.
    pub fn set_on_deal_complete(&mut self, handler: impl FnMut() + 'static) {
        self.on_deal_complete = Some(Box::new(handler));
    }

    /// Registers the handler fired when the draw completes.
    pub fn set_on_draw_complete(&mut self, handler: impl FnMut() + 'static) {
        self.on_draw_complete = Some(Box::new(handler));
    }

    /// Registers the handler fired when the hand has been scored.
    pub fn set_on_game_ended(&mut self, handler: impl FnMut() + 'static) {
        self.on_game_ended = Some(Box::new(handler));
    }

    /// Shuffles a standard deck with the session RNG and deals from it.
    pub fn shuffle_and_deal(&mut self) -> Result<(), GameError> {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        self.deal_with_deck(deck)
    }

    /// Debits the wager and deals a fresh hand from the deck. Credits may
    /// go to zero or negative; there is no floor check. The hand is dealt
    /// before any field changes, so a short deck leaves the session
    /// untouched.
    pub fn deal_with_deck(&mut self, deck: Deck) -> Result<(), GameError> {
        let hand = Hand::deal(deck)?;
        self.credits -= i64::from(self.wager);
        self.hand = Some(hand);
        self.play_state = PlayState::Started;
        if let Some(handler) = self.on_deal_complete.as_mut() {
            handler();
        }
        Ok(())
    }

    /// Marks a hand slot empty, pending the draw. Only valid while the
    /// game is started.
    pub fn discard_at(&mut self, index: usize) -> Result<(), GameError> {
        self.require_state(PlayState::Started)?;
        if let Some(hand) = self.hand.as_mut() {
            hand.discard_at(index);
        }
        Ok(())
    }

    /// Refills every discarded slot from the deck. Only valid while the
    /// game is started. A standard deck always holds enough cards here;
    /// only a scripted short deck can fail with `EmptyDeck`.
    pub fn draw(&mut self) -> Result<(), GameError> {
        self.require_state(PlayState::Started)?;
        let hand = self.hand.as_mut().ok_or(GameError::InvalidHand)?;
        hand.draw()?;
        self.play_state = PlayState::AfterDraw;
        if let Some(handler) = self.on_draw_complete.as_mut() {
            handler();
        }
        Ok(())
    }

    /// Scores the finished hand, credits the payout for the current wager,
    /// and records the result. Only valid after the draw.
    pub fn score_hand(&mut self) -> Result<(), GameError> {
        self.require_state(PlayState::AfterDraw)?;
        let hand = self.hand.as_ref().ok_or(GameError::InvalidHand)?;
        let score = hand.score()?;
        let paid = payout(score.category, self.wager);
        self.credits += i64::from(paid);
        self.last_hand_score = Some(score);
        self.last_hand_payout = Some(paid);
        self.play_state = PlayState::Ended;
        if let Some(handler) = self.on_game_ended.as_mut() {
            handler();
        }
        Ok(())
    }

    fn require_state(&self, required: PlayState) -> Result<(), GameError> {
        if self.play_state == required {
            Ok(())
        } else {
            Err(GameError::IllegalState {
                required,
                actual: self.play_state,
            })
        }
    }

    /// A hand-history record for the scored hand, `None` unless the game
    /// has ended.
    pub fn last_hand_record(&self, hand_id: String) -> Option<HandRecord> {
        if self.play_state != PlayState::Ended {
            return None;
        }
        let hand = self.hand.as_ref()?;
        let score = self.last_hand_score.clone()?;
        let payout = self.last_hand_payout?;
        let cards = (0..HAND_SIZE).filter_map(|i| hand.card_at(i)).collect();
        Some(HandRecord {
            hand_id,
            ts: None,
            seed: self.seed,
            wager: self.wager,
            cards,
            score,
            payout,
            credits: self.credits,
        })
    }

    /// Snapshot of the observable session state for persistence.
    pub fn to_data(&self) -> SessionData {
        SessionData {
            play_state: self.play_state,
            credits: self.credits,
            wager: self.wager,
            hand: self.hand.clone(),
            last_hand_score: self.last_hand_score.clone(),
            last_hand_payout: self.last_hand_payout,
        }
    }

    /// Rebuilds a session from a snapshot, validating its fields. The seed
    /// feeds the restored session's RNG, as in [`Session::new`].
    pub fn from_data(data: SessionData, seed: Option<u64>) -> Result<Session, GameError> {
        if !(1..=5).contains(&data.wager) {
            return Err(GameError::InvalidSave(format!(
                "wager {} out of range 1-5",
                data.wager
            )));
        }
        let mut session = Session::new(seed);
        session.play_state = data.play_state;
        session.credits = data.credits;
        session.wager = data.wager;
        session.hand = data.hand;
        session.last_hand_score = data.last_hand_score;
        session.last_hand_payout = data.last_hand_payout;
        Ok(session)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_data())
    }

    pub fn from_json(json: &str, seed: Option<u64>) -> Result<Session, GameError> {
        let data: SessionData =
            serde_json::from_str(json).map_err(|e| GameError::InvalidSave(e.to_string()))?;
        Session::from_data(data, seed)
    }

    /// Saves the session under a key in the external store.
    pub fn store_to(&self, store: &mut dyn Store, key: &str) -> serde_json::Result<()> {
        store.set_item(key, self.to_json()?);
        Ok(())
    }

    /// Restores a session saved under a key, `Ok(None)` if nothing is
    /// stored there.
    pub fn restore_from(
        store: &dyn Store,
        key: &str,
        seed: Option<u64>,
    ) -> Result<Option<Session>, GameError> {
        match store.get_item(key) {
            Some(json) => Ok(Some(Session::from_json(&json, seed)?)),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("play_state", &self.play_state)
            .field("credits", &self.credits)
            .field("wager", &self.wager)
            .field("hand", &self.hand)
            .field("last_hand_score", &self.last_hand_score)
            .field("last_hand_payout", &self.last_hand_payout)
            .finish_non_exhaustive()
    }
}
