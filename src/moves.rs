//! Player commands and the move engine.
//!
//! `Command` is the tagged representation of the six requests a player
//! can make. `Command::parse` turns the console's raw text into a
//! command, rejecting anything malformed, so that `execute` only ever
//! sees well-formed requests and answers with either a mutated state or
//! an `InvalidMove`.
//!
//! Column addressing is 1-based in the text surface ("M35", "S4", "3")
//! and 0-based inside `Command`.

use log::debug;

use crate::game::GameState;
use crate::pile::InvalidMove;
use crate::tableau::NUM_COLS;

/// One well-formed player request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Move the largest legal run from one column to another.
    ColumnToColumn { src: usize, dst: usize },
    /// Move a column's top card to its foundation.
    ColumnToFoundation { col: usize },
    /// Advance the stock: park the waste, recycle if needed, draw three.
    AdvanceStock,
    /// Move the top waste card onto a column.
    WasteToColumn { col: usize },
    /// Move the top waste card to its foundation.
    WasteToFoundation,
    /// Abandon the hand and deal a fresh one.
    NewHand,
}

impl Command {
    /// Parse raw console text into a command.
    ///
    /// Accepted, case-insensitively and ignoring surrounding whitespace:
    ///   `M<c1><c2>`  run from column c1 to column c2
    ///   `<c>`        column c's top card to its foundation
    ///   `S`          advance the stock
    ///   `S<c>`       top waste card to column c
    ///   `SE`         top waste card to its foundation
    ///   `NEW`        redeal
    /// where every `<c>` is a digit 1-7. Anything else is `None`; the
    /// engine never sees malformed text.
    pub fn parse(input: &str) -> Option<Command> {
        let text = input.trim().to_ascii_uppercase();
        match text.as_bytes() {
            [b'S'] => Some(Command::AdvanceStock),
            [b'S', b'E'] => Some(Command::WasteToFoundation),
            [b'N', b'E', b'W'] => Some(Command::NewHand),
            [b'S', c] => column_index(*c).map(|col| Command::WasteToColumn { col }),
            [b'M', a, b] => {
                let src = column_index(*a)?;
                let dst = column_index(*b)?;
                (src != dst).then_some(Command::ColumnToColumn { src, dst })
            }
            [c] => column_index(*c).map(|col| Command::ColumnToFoundation { col }),
            _ => None,
        }
    }
}

/// Map an ASCII digit '1'..'7' to a 0-based column index.
#[inline]
fn column_index(digit: u8) -> Option<usize> {
    matches!(digit, b'1'..=b'7').then(|| (digit - b'1') as usize)
}

/// Apply a command to the game state.
///
/// Every rejected request leaves the state exactly as it was; the caller
/// reports the `InvalidMove` and prompts again.
pub fn execute(state: &mut GameState, command: Command) -> Result<(), InvalidMove> {
    debug!("executing {command:?}");
    match command {
        Command::ColumnToColumn { src, dst } => {
            if src == dst || src >= NUM_COLS || dst >= NUM_COLS {
                return Err(InvalidMove::BadColumn);
            }
            // Split the column array to borrow source and target at once.
            if src < dst {
                let (left, right) = state.columns.split_at_mut(dst);
                left[src].move_stack_to(&mut right[0])
            } else {
                let (left, right) = state.columns.split_at_mut(src);
                right[0].move_stack_to(&mut left[dst])
            }
        }

        Command::ColumnToFoundation { col } => {
            if col >= NUM_COLS {
                return Err(InvalidMove::BadColumn);
            }
            let column = &mut state.columns[col];
            column.pile.move_top_to_foundation(&mut state.foundations)?;
            if !column.is_empty() {
                column.reveal_top();
            }
            Ok(())
        }

        Command::AdvanceStock => {
            state.spares.advance();
            Ok(())
        }

        Command::WasteToColumn { col } => {
            if col >= NUM_COLS {
                return Err(InvalidMove::BadColumn);
            }
            state.spares.move_top_to_column(&mut state.columns[col])
        }

        Command::WasteToFoundation => state.spares.move_top_to_foundation(&mut state.foundations),

        Command::NewHand => {
            *state = GameState::deal_new_hand();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit, standard_deck};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_accepts_the_documented_surface() {
        assert_eq!(
            Command::parse("M35"),
            Some(Command::ColumnToColumn { src: 2, dst: 4 })
        );
        assert_eq!(
            Command::parse("m71"),
            Some(Command::ColumnToColumn { src: 6, dst: 0 })
        );
        assert_eq!(Command::parse("3"), Some(Command::ColumnToFoundation { col: 2 }));
        assert_eq!(Command::parse("7"), Some(Command::ColumnToFoundation { col: 6 }));
        assert_eq!(Command::parse("S"), Some(Command::AdvanceStock));
        assert_eq!(Command::parse(" s "), Some(Command::AdvanceStock));
        assert_eq!(Command::parse("s4"), Some(Command::WasteToColumn { col: 3 }));
        assert_eq!(Command::parse("SE"), Some(Command::WasteToFoundation));
        assert_eq!(Command::parse("new"), Some(Command::NewHand));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for bad in [
            "", "0", "8", "M33", "M08", "M3", "M345", "S0", "S8", "SX", "NEWER", "hello", "M3 5",
        ] {
            assert_eq!(Command::parse(bad), None, "input {bad:?}");
        }
    }

    fn dealt() -> GameState {
        GameState::deal_with_rng(&mut StdRng::seed_from_u64(99))
    }

    #[test]
    fn rejected_moves_leave_the_state_untouched() {
        // With an unshuffled deck the column tops after the deal are
        // AC 3C 6C TC 2D 8D 2H, and the waste is empty.
        let mut state = GameState::deal_from_deck(standard_deck());
        let before = state.clone();

        for command in [
            Command::ColumnToColumn { src: 1, dst: 0 },
            Command::WasteToFoundation,
            Command::WasteToColumn { col: 0 },
            Command::ColumnToColumn { src: 3, dst: 3 },
        ] {
            assert!(execute(&mut state, command).is_err(), "{command:?}");
            assert_eq!(state, before, "{command:?} mutated the state");
        }
    }

    #[test]
    fn column_to_foundation_sends_an_ace_home_and_reveals() {
        // With an unshuffled deck, column 1 holds exactly the Ace of Clubs.
        let mut state = GameState::deal_from_deck(standard_deck());

        execute(&mut state, Command::ColumnToFoundation { col: 0 })
            .expect("the Ace of Clubs goes home");
        assert!(state.columns[0].is_empty());
        assert_eq!(state.foundations.for_suit(Suit::Clubs).top().rank(), 1);

        // Column 2's top is the 3 of Clubs; no foundation takes it yet.
        assert_eq!(
            execute(&mut state, Command::ColumnToFoundation { col: 1 }),
            Err(InvalidMove::FoundationRefused)
        );
    }

    #[test]
    fn column_to_foundation_reveals_the_newly_exposed_card() {
        // Column 5 of an unshuffled deal ends with a face-down Ace of
        // Diamonds under the face-up 2 of Diamonds. Pretend the Ace is
        // already home so the two can follow it.
        let mut state = GameState::deal_from_deck(standard_deck());
        let mut ace = Card::new(Suit::Diamonds, 1);
        ace.set_face_up(true);
        state.foundations.for_suit_mut(Suit::Diamonds).push(ace);

        execute(&mut state, Command::ColumnToFoundation { col: 4 })
            .expect("the 2 of Diamonds follows its Ace");
        assert!(state.columns[4].top().is_some_and(|c| c.is_face_up()));
        assert_eq!(state.foundations.for_suit(Suit::Diamonds).top().rank(), 2);
    }

    #[test]
    fn advance_stock_is_always_accepted() {
        let mut state = dealt();
        let total = state.card_count();

        for _ in 0..20 {
            execute(&mut state, Command::AdvanceStock).expect("advance never fails");
            assert_eq!(state.card_count(), total);
        }
        assert!(!state.spares.waste.is_empty());
    }

    #[test]
    fn new_hand_redeals_a_full_layout() {
        let mut state = dealt();
        execute(&mut state, Command::AdvanceStock).expect("advance never fails");

        execute(&mut state, Command::NewHand).expect("redeal never fails");
        assert_eq!(state.spares.stock.len(), 24);
        assert!(state.spares.waste.is_empty());
        assert_eq!(state.card_count(), 56);
    }

    #[test]
    fn waste_to_column_plays_the_top_waste_card() {
        // Build the relevant corner by hand: waste tops out at the 4 of
        // Spades and column 3 holds a lone face-up 5 of Hearts.
        let mut state = GameState::deal_from_deck(standard_deck());
        state.columns[2].pile.take_all();

        let mut four = Card::new(Suit::Spades, 4);
        four.set_face_up(true);
        state.spares.waste.push(four);
        let mut five = Card::new(Suit::Hearts, 5);
        five.set_face_up(true);
        state.columns[2].pile.push(five);

        execute(&mut state, Command::WasteToColumn { col: 2 }).expect("black four on red five");
        assert!(state.spares.waste.is_empty());
        assert_eq!(state.columns[2].len(), 2);
    }
}
