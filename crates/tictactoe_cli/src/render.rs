//! Board rendering with row labels A-C and column labels 1-3.

use crate::config::GridStyle;
use tictactoe_core::{Board, Coordinate, SIZE};

struct Glyphs {
    top: [char; 4],
    middle: [char; 4],
    bottom: [char; 4],
    outer: char,
    inner: char,
}

const BOX: Glyphs = Glyphs {
    top: ['╔', '═', '╦', '╗'],
    middle: ['╟', '─', '╫', '╢'],
    bottom: ['╚', '═', '╩', '╝'],
    outer: '║',
    inner: '║',
};

const PLAIN: Glyphs = Glyphs {
    top: ['+', '-', '+', '+'],
    middle: ['+', '-', '+', '+'],
    bottom: ['+', '-', '+', '+'],
    outer: '|',
    inner: '|',
};

/// `[left, fill, junction, right]` -> e.g. `  ╔═══╦═══╦═══╗`
fn border([left, fill, junction, right]: [char; 4]) -> String {
    let segment: String = std::iter::repeat_n(fill, 3).collect();
    let inner = vec![segment; SIZE].join(&junction.to_string());
    format!("  {left}{inner}{right}")
}

/// Draws the board as lines of text, header first.
pub fn render_board(board: &Board, style: GridStyle) -> Vec<String> {
    let glyphs = match style {
        GridStyle::Box => &BOX,
        GridStyle::Plain => &PLAIN,
    };

    let mut lines = Vec::with_capacity(2 * SIZE + 2);
    lines.push("    1   2   3".to_string());
    lines.push(border(glyphs.top));

    for (r, row) in board.rows().iter().enumerate() {
        let label = Coordinate::new(r, 0).map_or('?', |c| c.row_label());
        let cells = row
            .iter()
            .map(|cell| format!(" {} ", cell.symbol()))
            .collect::<Vec<_>>()
            .join(&glyphs.inner.to_string());
        lines.push(format!("{label} {}{cells}{}", glyphs.outer, glyphs.outer));

        if r + 1 < SIZE {
            lines.push(border(glyphs.middle));
        }
    }

    lines.push(border(glyphs.bottom));
    lines
}
