//! Card, Suit, and Color types for a standard 52-card deck, plus the deck
//! factory and the two Klondike legality rules.
//!
//! - `Card` carries a suit, a rank in 1..=13 (with 0 reserved for the
//!   synthetic card that seeds each foundation), and a mutable face-up /
//!   face-down orientation.
//! - `can_stack` / `can_foundation` are free functions over card pairs so
//!   that every pile kind shares the same rule definitions.

use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of playable ranks per suit.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a King.
pub const KING: u8 = 13;

/// The four suits in a standard deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

/// Red or black, derived from the suit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    ///
    /// This order also fixes the layout of the four foundations.
    pub const ALL: [Suit; NUM_SUITS as usize] = [
        Suit::Clubs,
        Suit::Diamonds,
        Suit::Hearts,
        Suit::Spades,
    ];

    /// Hearts and Diamonds are red; Clubs and Spades are black.
    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Full suit name: "Clubs", "Diamonds", "Hearts", or "Spades".
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// Single-character representation: 'C', 'D', 'H', or 'S'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// A playing card.
///
/// The suit and rank are fixed at construction; only the orientation ever
/// changes. Rank 0 is reserved for the base card that seeds a foundation
/// so that "top card" queries on a foundation are always well-defined.
/// Base cards never leave their foundation and are never the moved card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Card {
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl Card {
    /// Create a new playable card, face-down.
    #[inline]
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((ACE..=KING).contains(&rank));
        Card {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create the rank-0 base card that seeds a foundation.
    #[inline]
    pub fn foundation_base(suit: Suit) -> Self {
        Card {
            suit,
            rank: 0,
            face_up: true,
        }
    }

    /// Return the suit of this card.
    #[inline]
    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Rank in 1..=13 (Ace=1, King=13), or 0 for a foundation base card.
    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Whether the card currently shows its face.
    #[inline]
    pub fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Turn the card face-up or face-down.
    #[inline]
    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Color derived from the suit.
    #[inline]
    pub fn color(self) -> Color {
        self.suit.color()
    }

    /// True if `other` is the same physical card (same suit and rank),
    /// regardless of which way it currently faces.
    #[inline]
    pub fn is_same_card(self, other: Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Human-readable name like "Ace of Spades" or "7 of Clubs".
    ///
    /// Pure function of suit and rank; any presentation layer may use it.
    pub fn display_name(self) -> String {
        format!("{} of {}", rank_name(self.rank), self.suit.name())
    }

    /// Short string like "AH", "7C", "TD", "KS".
    pub fn short_str(self) -> String {
        let r = match self.rank {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            n => char::from_digit(n as u32, 10).unwrap_or('?'),
        };
        format!("{r}{}", self.suit.short_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Spelled-out rank: "Ace", "Jack", "Queen", "King", else the numeral.
pub fn rank_name(rank: u8) -> String {
    match rank {
        1 => "Ace".to_string(),
        11 => "Jack".to_string(),
        12 => "Queen".to_string(),
        13 => "King".to_string(),
        n => n.to_string(),
    }
}

// ----- Legality rules -----

/// Tableau stacking rule: can `moving` be placed on `onto`?
///
/// Requires strict descending rank and alternating color, and an Ace
/// accepts nothing above it.
#[inline]
pub fn can_stack(moving: Card, onto: Card) -> bool {
    onto.rank() != ACE && moving.color() != onto.color() && moving.rank() + 1 == onto.rank()
}

/// Foundation rule: can `moving` be placed on `onto`?
///
/// Requires the same suit and ascending rank. The rank-0 base card means
/// an otherwise empty foundation accepts exactly the Ace.
#[inline]
pub fn can_foundation(moving: Card, onto: Card) -> bool {
    moving.suit() == onto.suit() && moving.rank() == onto.rank() + 1
}

// ----- Deck factory -----

/// Generate a standard 52-card deck in a fixed order, all face-down.
///
/// Suits follow `Suit::ALL` order and ranks run Ace..King within a suit.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(CARDS_PER_DECK as usize);
    for &suit in Suit::ALL.iter() {
        for rank in ACE..=KING {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Return a uniformly shuffled standard deck.
///
/// Each call draws fresh randomness; there is no persisted seed.
pub fn shuffled_deck() -> Vec<Card> {
    shuffled_deck_with_rng(&mut rand::thread_rng())
}

/// Shuffle a standard deck with the given RNG.
///
/// Tests and the `--seed` flag pass a seeded `StdRng` here to obtain a
/// reproducible deal.
pub fn shuffled_deck_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = standard_deck();
    deck.shuffle(rng);
    deck
}
