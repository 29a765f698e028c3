//! Game-level state: the fixed collection of piles for one hand.
//!
//! `GameState` replaces the original console game's flat list of fourteen
//! indexed locations with named fields: seven tableau columns, the four
//! suit foundations, and the three spare piles of the draw cycle. A state
//! is produced once per hand by the dealer, mutated in place for the life
//! of the hand, and discarded on a redeal.

use log::info;
use rand::Rng;

use crate::card::{Card, shuffled_deck, shuffled_deck_with_rng};
use crate::foundation::Foundations;
use crate::stock::SparePiles;
use crate::tableau::{Column, NUM_COLS};

/// All piles of a single Klondike hand.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    pub columns: [Column; NUM_COLS],
    pub foundations: Foundations,
    pub spares: SparePiles,
}

impl GameState {
    /// Shuffle a fresh deck and deal a new hand.
    pub fn deal_new_hand() -> Self {
        Self::deal_from_deck(shuffled_deck())
    }

    /// Deal a new hand from a deck shuffled with the given RNG.
    pub fn deal_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::deal_from_deck(shuffled_deck_with_rng(rng))
    }

    /// Deal a 52-card deck into the initial layout.
    ///
    /// Column i receives i+1 cards from the front of the deck and reveals
    /// its last card; the 24 remaining cards go face-down into the stock;
    /// foundations start with only their base cards.
    pub fn deal_from_deck(mut deck: Vec<Card>) -> Self {
        let mut columns: [Column; NUM_COLS] = std::array::from_fn(|i| Column::new(i + 1));

        for (i, column) in columns.iter_mut().enumerate() {
            let cards: Vec<Card> = deck.drain(..=i).collect();
            column.pile.push_all(cards);
            column.reveal_top();
        }

        let mut spares = SparePiles::new();
        spares.stock.push_all(deck);

        let state = GameState {
            columns,
            foundations: Foundations::new(),
            spares,
        };
        info!(
            "dealt new hand: {} cards in the stock",
            state.spares.stock.len()
        );
        state
    }

    /// True once every foundation holds its full suit.
    pub fn has_won(&self) -> bool {
        self.foundations.all_complete()
    }

    /// Total cards across all fourteen piles, foundation base cards
    /// included. Always 56 for a dealt hand; moves only ever transfer.
    pub fn card_count(&self) -> usize {
        let in_columns: usize = self.columns.iter().map(Column::len).sum();
        in_columns + self.foundations.card_count() + self.spares.card_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CARDS_PER_DECK, Suit, standard_deck};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dealt() -> GameState {
        GameState::deal_with_rng(&mut StdRng::seed_from_u64(20220303))
    }

    #[test]
    fn deal_gives_each_column_its_triangular_share() {
        let state = dealt();

        for (i, column) in state.columns.iter().enumerate() {
            assert_eq!(column.len(), i + 1, "column {}", i + 1);

            // Only the last card shows its face.
            let cards = column.cards();
            let (buried, top) = cards.split_at(cards.len() - 1);
            assert!(buried.iter().all(|c| !c.is_face_up()));
            assert!(top[0].is_face_up());
        }
    }

    #[test]
    fn deal_leaves_24_face_down_cards_in_the_stock() {
        let state = dealt();

        assert_eq!(state.spares.stock.len(), 24);
        assert!(state.spares.stock.cards().iter().all(|c| !c.is_face_up()));
        assert_eq!(state.spares.discard.len(), 0);
        assert_eq!(state.spares.waste.len(), 0);
    }

    #[test]
    fn deal_seeds_each_foundation_with_its_base_card() {
        let state = dealt();

        for &suit in Suit::ALL.iter() {
            let f = state.foundations.for_suit(suit);
            assert_eq!(f.len(), 1);
            assert_eq!(f.top().rank(), 0);
        }
    }

    #[test]
    fn deal_partitions_all_56_cards_across_the_piles() {
        let state = dealt();
        assert_eq!(state.card_count(), CARDS_PER_DECK as usize + 4);
    }

    #[test]
    fn deal_is_a_permutation_of_the_standard_deck() {
        let state = dealt();

        let mut seen = vec![false; CARDS_PER_DECK as usize];
        let mut mark = |card: &Card| {
            let idx = card.suit() as usize * 13 + (card.rank() - 1) as usize;
            assert!(!seen[idx], "duplicate {}", card.display_name());
            seen[idx] = true;
        };

        for column in &state.columns {
            column.cards().iter().for_each(&mut mark);
        }
        state.spares.stock.cards().iter().for_each(&mut mark);
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn has_won_requires_all_four_complete_foundations() {
        let mut state = dealt();
        assert!(!state.has_won());

        // Drive every card home by hand.
        for &suit in Suit::ALL.iter() {
            for rank in 1..=13 {
                state
                    .foundations
                    .for_suit_mut(suit)
                    .push(Card::new(suit, rank));
            }
        }
        assert!(state.has_won());
    }

    #[test]
    fn unshuffled_deal_is_deterministic() {
        let state = GameState::deal_from_deck(standard_deck());

        // The first card of a fixed deck lands at the bottom of column 1.
        let first = state.columns[0].cards()[0];
        assert!(first.is_same_card(Card::new(Suit::Clubs, 1)));
        assert_eq!(state.spares.stock.len(), 24);
    }
}
