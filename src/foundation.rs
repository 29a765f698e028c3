//! The four foundations, one per suit.
//!
//! Each foundation is seeded at creation with a rank-0 base card of its
//! suit, so the foundation rule in `card::can_foundation` needs no empty
//! special case: a foundation holding only its base card accepts exactly
//! the Ace. A foundation is complete at 14 cards (13 ranks plus the base).

use crate::card::{Card, NUM_SUITS, Suit};
use crate::pile::Pile;

/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = NUM_SUITS as usize;

/// Cards in a finished foundation, base card included.
pub const COMPLETE_LEN: usize = 14;

/// A single suit's ascending pile.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Foundation {
    suit: Suit,
    pile: Pile,
}

impl Foundation {
    /// Create the foundation for a suit, seeded with its base card.
    pub fn new(suit: Suit) -> Self {
        Foundation {
            suit,
            pile: Pile::with_cards(
                format!("{} home pile", suit.name()),
                vec![Card::foundation_base(suit)],
            ),
        }
    }

    /// The suit this foundation collects.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The foundation's display label.
    pub fn label(&self) -> &str {
        self.pile.label()
    }

    /// The cards in this foundation, base card first.
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// Number of cards held, base card included.
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// A foundation is never without at least its base card, so unlike
    /// other piles its top is always defined.
    pub fn top(&self) -> &Card {
        self.pile
            .top()
            .expect("a foundation always holds its base card")
    }

    /// Place a card on top. Legality is the caller's concern; every engine
    /// path checks `can_foundation` first.
    pub fn push(&mut self, card: Card) {
        self.pile.push(card);
    }

    /// True once all 13 ranks of the suit have arrived.
    pub fn is_complete(&self) -> bool {
        self.pile.len() == COMPLETE_LEN
    }
}

/// The four foundations with direct suit-to-pile lookup.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Foundations {
    piles: [Foundation; NUM_FOUNDATIONS],
}

impl Foundations {
    /// Create all four foundations, each seeded with its base card.
    pub fn new() -> Self {
        Foundations {
            piles: Suit::ALL.map(Foundation::new),
        }
    }

    /// The foundation that collects `suit`.
    pub fn for_suit(&self, suit: Suit) -> &Foundation {
        &self.piles[suit as usize]
    }

    /// Mutable access to the foundation that collects `suit`.
    pub fn for_suit_mut(&mut self, suit: Suit) -> &mut Foundation {
        &mut self.piles[suit as usize]
    }

    /// Iterate the foundations in `Suit::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = &Foundation> {
        self.piles.iter()
    }

    /// True when every suit has all 13 of its cards home.
    pub fn all_complete(&self) -> bool {
        self.piles.iter().all(Foundation::is_complete)
    }

    /// Total cards held across all four piles, base cards included.
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Foundation::len).sum()
    }
}

impl Default for Foundations {
    fn default() -> Self {
        Foundations::new()
    }
}
