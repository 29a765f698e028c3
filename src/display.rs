//! Human-readable rendering of the board.
//!
//! Face-down cards are shown as "XX" and face-up cards with their
//! compact rank/suit code. The foundations row uses the spelled-out card
//! names the console game prints. The intent is a stable, readable
//! representation for the prompt loop and for debugging.

use crate::card::Card;
use crate::game::GameState;
use crate::tableau::NUM_COLS;

/// Format a single card for display, honoring its orientation.
///
/// - Face-down cards are rendered as `"XX"`.
/// - Face-up cards use `Card::short_str()` such as `"AH"`, `"7C"`, `"TD"`.
pub fn format_card_visible(card: &Card) -> String {
    if card.is_face_up() {
        card.short_str()
    } else {
        "XX".to_string()
    }
}

/// Render only the foundation rows.
///
/// Each foundation shows its top card by full name, or "...empty" when
/// only the base card is there. Only the top card is shown, matching
/// typical Klondike presentations.
pub fn render_foundations(state: &GameState) -> String {
    let mut s = String::new();
    for foundation in state.foundations.iter() {
        let shown = if foundation.len() > 1 {
            foundation.top().display_name()
        } else {
            "...empty".to_string()
        };
        s.push_str(&format!("{} home - {}\n", foundation.suit().name(), shown));
    }
    s.trim_end().to_string()
}

/// Render the three spare piles on a single line.
///
/// Stock and discard show only their counts; the waste lists its face-up
/// cards bottom to top, the last being the playable one.
pub fn render_spares(state: &GameState) -> String {
    let spares = &state.spares;
    let mut s = format!(
        "Spares pile: {} cards    Discard pile: {} cards    Visible: ",
        spares.stock.len(),
        spares.discard.len()
    );

    if spares.waste.is_empty() {
        s.push_str("[empty]");
    } else {
        let shown: Vec<String> = spares.waste.cards().iter().map(|c| c.short_str()).collect();
        s.push_str(&format!("[{}]", shown.join(" ")));
    }

    s
}

/// Render all tableau columns as a multi-line string.
///
/// Columns are arranged in 7 vertical stacks of three-character cells.
/// Row 0 holds each column's bottom card, so the lowest non-empty row of
/// a column is its playable edge.
pub fn render_columns(state: &GameState) -> String {
    let mut s = String::new();

    s.push_str("Columns:\n");
    s.push_str("      ");
    for col_idx in 0..NUM_COLS {
        s.push_str(&format!(" C{} ", col_idx + 1));
    }
    s.push('\n');

    let max_height = state.columns.iter().map(|c| c.len()).max().unwrap_or(0);

    for row in 0..max_height {
        s.push_str("      ");
        for column in &state.columns {
            match column.cards().get(row) {
                Some(card) => s.push_str(&format!("{:>3} ", format_card_visible(card))),
                None => s.push_str("    "),
            }
        }
        s.push('\n');
    }

    s
}

/// Render the full board: foundations, spare piles, and columns.
pub fn render_board(state: &GameState) -> String {
    let mut s = String::new();
    s.push_str(&render_foundations(state));
    s.push('\n');
    s.push_str(&render_spares(state));
    s.push_str("\n\n");
    s.push_str(&render_columns(state));
    s
}

/// Print the board to stdout using `render_board`.
pub fn print_board(state: &GameState) {
    println!("{}", render_board(state));
}
