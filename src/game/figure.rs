use ratatui::style::Color;

/// The five figure shapes. Each spawns as four blocks at fixed cells
/// near the top of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FigureKind {
    Triade,
    Square,
    Rectangle,
    El,
    Zig,
}

impl FigureKind {
    pub const ALL: [FigureKind; 5] = [
        FigureKind::Triade,
        FigureKind::Square,
        FigureKind::Rectangle,
        FigureKind::El,
        FigureKind::Zig,
    ];

    /// Absolute (x, y) spawn cells, y counted up from the floor.
    pub fn spawn_cells(&self) -> [(usize, usize); 4] {
        match self {
            FigureKind::Triade => [(5, 15), (5, 14), (4, 14), (6, 14)],
            FigureKind::Square => [(5, 15), (6, 15), (5, 14), (6, 14)],
            FigureKind::Rectangle => [(3, 15), (4, 15), (5, 15), (6, 15)],
            FigureKind::El => [(5, 15), (5, 14), (5, 13), (6, 13)],
            FigureKind::Zig => [(5, 15), (6, 15), (6, 14), (7, 14)],
        }
    }

    pub fn color(&self) -> Color {
        match self {
            FigureKind::Triade => Color::Yellow,
            FigureKind::Square => Color::Red,
            FigureKind::Rectangle => Color::Blue,
            FigureKind::El => Color::Green,
            FigureKind::Zig => Color::Magenta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COLUMNS, MEMORY_ROWS};

    #[test]
    fn every_kind_spawns_four_cells_in_bounds() {
        for kind in FigureKind::ALL {
            let cells = kind.spawn_cells();
            assert_eq!(cells.len(), 4);
            for (x, y) in cells {
                assert!(x < COLUMNS, "{:?} spawns outside columns", kind);
                assert!(y < MEMORY_ROWS, "{:?} spawns outside rows", kind);
            }
        }
    }

    #[test]
    fn spawn_cells_are_distinct() {
        for kind in FigureKind::ALL {
            let cells = kind.spawn_cells();
            for i in 0..cells.len() {
                for j in i + 1..cells.len() {
                    assert_ne!(cells[i], cells[j], "{:?} repeats a spawn cell", kind);
                }
            }
        }
    }
}
