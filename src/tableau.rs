//! The seven tableau columns.
//!
//! A column is a pile with two extra behaviors: the top card is revealed
//! whenever it becomes newly exposed, and a run of face-up cards can move
//! to another column under the stacking rule (or a King-led run to an
//! empty column).

use crate::card::{Card, KING, can_stack};
use crate::pile::{InvalidMove, Pile};

/// Number of tableau columns.
pub const NUM_COLS: usize = 7;

/// A single tableau column.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Column {
    pub pile: Pile,
}

impl Column {
    /// Create an empty column; `number` is the 1-based label shown to the
    /// player.
    pub fn new(number: usize) -> Self {
        Column {
            pile: Pile::new(format!("Column {number}")),
        }
    }

    /// The cards in this column, bottom to top.
    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    /// Number of cards in the column.
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// True when the column holds no cards.
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// The top card, if any.
    pub fn top(&self) -> Option<&Card> {
        self.pile.top()
    }

    /// Turn the column's top card face-up. No-op on an empty column.
    ///
    /// Called whenever a card becomes newly exposed.
    pub fn reveal_top(&mut self) {
        if let Some(card) = self.pile.top_mut() {
            card.set_face_up(true);
        }
    }

    /// Move the largest legal run of face-up cards from this column onto
    /// `other`.
    ///
    /// The column is scanned from the bottom: face-down cards are buried
    /// and immovable, and the first face-up card that may legally lead a
    /// transfer wins, so the longest possible suffix moves. A King-led run
    /// may go to an empty column; any other run needs `can_stack` against
    /// the target's top card. After a successful move the newly exposed
    /// top card of this column, if any, is revealed.
    pub fn move_stack_to(&mut self, other: &mut Column) -> Result<(), InvalidMove> {
        let mut chosen = None;
        for card in self.pile.cards() {
            if !card.is_face_up() {
                continue;
            }
            let legal = match other.top() {
                None => card.rank() == KING,
                Some(target) => can_stack(*card, *target),
            };
            if legal {
                chosen = Some(*card);
                break;
            }
        }

        let Some(lead) = chosen else {
            return Err(InvalidMove::StackRefused);
        };

        let run = self.pile.cut_at(lead);
        other.pile.push_all(run);
        if !self.pile.is_empty() {
            self.reveal_top();
        }
        Ok(())
    }
}
