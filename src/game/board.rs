use ratatui::style::Color;

use crate::constants::{COLUMNS, MEMORY_ROWS};

/// A single occupied cell. Blocks belonging to the most recently spawned
/// figure are the only movable ones; the figure id ties them together.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Block {
    pub figure_id: u32,
    pub color: Color,
}

impl Block {
    pub fn new(figure_id: u32, color: Color) -> Self {
        Self { figure_id, color }
    }
}

// Row 0 is the floor; the top BUFFER_ROWS rows are hidden spawn space.
pub type Board = [[Option<Block>; COLUMNS]; MEMORY_ROWS];

pub fn empty_board() -> Board {
    [[None; COLUMNS]; MEMORY_ROWS]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_blocks() {
        let board = empty_board();
        assert!(board.iter().flatten().all(|cell| cell.is_none()));
    }
}
