//! The stock, discard, and waste piles and the draw-3 protocol.
//!
//! The stock holds the undealt remainder of the deck face-down. Each
//! `advance` parks the waste in the discard pile, recycles the discard
//! back into the stock when the stock runs dry, and then turns up to
//! three new cards face-up into the waste. Only the top waste card is
//! ever playable.

use log::debug;

use crate::card::{KING, can_stack};
use crate::foundation::Foundations;
use crate::pile::{InvalidMove, Pile};
use crate::tableau::Column;

/// Cards turned up per advance.
pub const DRAW_COUNT: usize = 3;

/// The three spare piles cycled by the draw protocol.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparePiles {
    pub stock: Pile,
    pub discard: Pile,
    pub waste: Pile,
}

impl SparePiles {
    /// Create the three piles, all empty.
    pub fn new() -> Self {
        SparePiles {
            stock: Pile::new("Spare cards"),
            discard: Pile::new("Discard pile"),
            waste: Pile::new("Visible pile"),
        }
    }

    /// Advance the draw cycle.
    ///
    /// 1. Every waste card is turned face-down and appended to the
    ///    discard pile, preserving order.
    /// 2. If the stock is empty, the discard pile is recycled into the
    ///    stock in its existing order (never re-shuffled).
    /// 3. Up to three cards from the front of the stock are turned
    ///    face-up and appended to the waste, preserving their order.
    ///
    /// The total card count across the three piles is invariant.
    pub fn advance(&mut self) {
        let mut parked = self.waste.take_all();
        for card in &mut parked {
            card.set_face_up(false);
        }
        self.discard.push_all(parked);

        if self.stock.is_empty() {
            debug!("stock exhausted, recycling {} discards", self.discard.len());
            let recycled = self.discard.take_all();
            self.stock.push_all(recycled);
        }

        let mut drawn = self.stock.take_front(DRAW_COUNT);
        for card in &mut drawn {
            card.set_face_up(true);
        }
        self.waste.push_all(drawn);
    }

    /// Move the top waste card onto a tableau column.
    ///
    /// An empty column accepts only a King; otherwise the stacking rule
    /// decides. On rejection nothing changes.
    pub fn move_top_to_column(&mut self, column: &mut Column) -> Result<(), InvalidMove> {
        let Some(card) = self.waste.top() else {
            return Err(InvalidMove::EmptySource);
        };
        let legal = match column.top() {
            None => card.rank() == KING,
            Some(target) => can_stack(*card, *target),
        };
        if !legal {
            return Err(InvalidMove::StackRefused);
        }
        if let Some(card) = self.waste.take_top() {
            column.pile.push(card);
        }
        Ok(())
    }

    /// Move the top waste card to the foundation of its suit.
    pub fn move_top_to_foundation(
        &mut self,
        foundations: &mut Foundations,
    ) -> Result<(), InvalidMove> {
        self.waste.move_top_to_foundation(foundations)
    }

    /// Total cards across stock, discard, and waste.
    pub fn card_count(&self) -> usize {
        self.stock.len() + self.discard.len() + self.waste.len()
    }
}

impl Default for SparePiles {
    fn default() -> Self {
        SparePiles::new()
    }
}
