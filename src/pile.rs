//! The base pile type shared by every card location on the board.
//!
//! A `Pile` is a labelled, ordered sequence of cards. The last element is
//! the top of the pile for every pile kind. Cards are owned by exactly one
//! pile at a time; the operations here detach and append cards so that a
//! move is always a pure transfer, never a copy.
//!
//! The tableau columns, foundations, and stock piles are thin wrappers
//! around `Pile` that add only their own behavior.

use core::fmt;
use std::error::Error;
use std::mem;

use crate::card::{Card, can_foundation};
use crate::foundation::Foundations;

/// Why a requested transfer was rejected.
///
/// This is the single error kind of the engine. Every variant is fully
/// recoverable: the game state is left untouched and the caller simply
/// reports the rejection and prompts again.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InvalidMove {
    /// The source pile has no card to move.
    EmptySource,
    /// No card in the source can legally land on the target column.
    StackRefused,
    /// The offered card cannot go to its foundation yet.
    FoundationRefused,
    /// The request named a column that does not exist, or the same column
    /// twice.
    BadColumn,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            InvalidMove::EmptySource => "there is no card there to move",
            InvalidMove::StackRefused => "that card cannot go on that column",
            InvalidMove::FoundationRefused => "that card cannot go to a foundation yet",
            InvalidMove::BadColumn => "no such column",
        };
        f.write_str(msg)
    }
}

impl Error for InvalidMove {}

/// A labelled, ordered pile of cards. Index 0 is the bottom; the last
/// element is the top.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pile {
    label: String,
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile with a human-readable label.
    pub fn new(label: impl Into<String>) -> Self {
        Pile {
            label: label.into(),
            cards: Vec::new(),
        }
    }

    /// Create a pile already holding the given cards, bottom to top.
    pub fn with_cards(label: impl Into<String>, cards: Vec<Card>) -> Self {
        Pile {
            label: label.into(),
            cards,
        }
    }

    /// The pile's display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The cards in this pile, bottom to top. The borrow is immutable, so
    /// callers cannot disturb the pile through it.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the pile.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the pile holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Append one card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append cards on top, preserving their order.
    pub fn push_all(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Remove and return the top card.
    pub fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return up to `n` cards from the bottom of the pile,
    /// preserving their order. The stock draws from this end.
    pub fn take_front(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Remove and return every card, preserving order.
    pub fn take_all(&mut self) -> Vec<Card> {
        mem::take(&mut self.cards)
    }

    /// Detach `card` and everything above it, returning the removed run in
    /// order. If the card is not in this pile, nothing happens and the
    /// returned run is empty.
    pub fn cut_at(&mut self, card: Card) -> Vec<Card> {
        match self.cards.iter().position(|c| c.is_same_card(card)) {
            Some(idx) => self.cards.split_off(idx),
            None => Vec::new(),
        }
    }

    /// Move the top card of this pile to the foundation of its suit.
    ///
    /// Only ever considers the single top card; a run can never go to a
    /// foundation. On rejection the pile and the foundations are left
    /// unchanged.
    pub fn move_top_to_foundation(
        &mut self,
        foundations: &mut Foundations,
    ) -> Result<(), InvalidMove> {
        let Some(top) = self.top() else {
            return Err(InvalidMove::EmptySource);
        };
        let suit = top.suit();
        if !can_foundation(*top, *foundations.for_suit(suit).top()) {
            return Err(InvalidMove::FoundationRefused);
        }
        if let Some(card) = self.take_top() {
            foundations.for_suit_mut(suit).push(card);
        }
        Ok(())
    }
}
