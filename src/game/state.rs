use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::constants::{COLUMNS, MEMORY_ROWS, TICK_MS};
use crate::game::board::{empty_board, Block, Board};
use crate::game::figure::FigureKind;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameState {
    Ready,
    Playing,
    Finished,
}

pub struct Game {
    pub board: Board,
    pub game_state: GameState,
    figure_counter: u32,
    figure_bag: Vec<FigureKind>,
    drop_timer: Instant,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            game_state: GameState::Ready,
            figure_counter: 0,
            figure_bag: Vec::new(),
            drop_timer: Instant::now(),
        }
    }

    fn fill_bag(&mut self) {
        self.figure_bag = FigureKind::ALL.to_vec();

        // Fisher-Yates shuffle
        let mut rng = rand::thread_rng();
        for i in (1..self.figure_bag.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.figure_bag.swap(i, j);
        }
    }

    fn next_figure_kind(&mut self) -> FigureKind {
        if self.figure_bag.is_empty() {
            self.fill_bag();
        }
        self.figure_bag.pop().unwrap()
    }

    pub fn start_game(&mut self) {
        if self.game_state != GameState::Ready {
            return;
        }
        self.game_state = GameState::Playing;
        self.drop_timer = Instant::now();
        self.spawn_figure();
        info!("game started");
    }

    /// Draws the next figure from the bag and writes its blocks at the
    /// fixed spawn cells. Fails without touching the board when a spawn
    /// cell is already taken, which ends the game.
    fn spawn_figure(&mut self) -> bool {
        let kind = self.next_figure_kind();
        self.spawn(kind)
    }

    fn spawn(&mut self, kind: FigureKind) -> bool {
        self.figure_counter += 1;

        let mut next = self.board;
        for (x, y) in kind.spawn_cells() {
            if next[y][x].is_some() {
                return false;
            }
            next[y][x] = Some(Block::new(self.figure_counter, kind.color()));
        }
        self.board = next;
        debug!("spawned {:?} as figure {}", kind, self.figure_counter);
        true
    }

    /// Blocks of the most recently spawned figure, as (x, y, block).
    fn active_blocks(&self) -> Vec<(usize, usize, Block)> {
        let mut blocks = Vec::new();
        for y in 0..MEMORY_ROWS {
            for x in 0..COLUMNS {
                if let Some(block) = self.board[y][x] {
                    if block.figure_id == self.figure_counter {
                        blocks.push((x, y, block));
                    }
                }
            }
        }
        blocks
    }

    /// Shifts the active figure by (dx, dy), dy = -1 meaning down.
    /// Rejects the whole move when any block would leave the grid or land
    /// on a foreign block; returns whether the move committed.
    pub fn move_figure(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }

        let mut blocks = self.active_blocks();
        if blocks.is_empty() {
            return false;
        }

        // Walk blocks in the direction of travel so the figure never
        // collides with its own cells mid-move.
        blocks.sort_by(|a, b| {
            if dx > 0 {
                b.0.cmp(&a.0)
            } else if dx < 0 {
                a.0.cmp(&b.0)
            } else if dy > 0 {
                b.1.cmp(&a.1)
            } else {
                a.1.cmp(&b.1)
            }
        });

        let mut next = self.board;
        for (x, y, block) in blocks {
            next[y][x] = None;

            let new_x = x as i32 + dx;
            let new_y = y as i32 + dy;
            if new_x < 0 || new_x >= COLUMNS as i32 || new_y < 0 || new_y >= MEMORY_ROWS as i32 {
                return false;
            }
            if next[new_y as usize][new_x as usize].is_some() {
                return false;
            }
            next[new_y as usize][new_x as usize] = Some(block);
        }

        self.board = next;
        true
    }

    /// Turns the active figure 90 degrees inside its bounding box by
    /// transposing the local occupancy matrix and reversing its rows.
    /// There are no wall kicks: rotated blocks overwrite whatever they
    /// land on, and only a rotation that would leave the grid is a no-op.
    pub fn rotate_figure(&mut self) -> bool {
        if self.game_state != GameState::Playing {
            return false;
        }

        let blocks = self.active_blocks();
        if blocks.is_empty() {
            return false;
        }

        let min_x = blocks.iter().map(|&(x, _, _)| x).min().unwrap();
        let min_y = blocks.iter().map(|&(_, y, _)| y).min().unwrap();
        let size = blocks
            .iter()
            .map(|&(x, y, _)| (x - min_x).max(y - min_y))
            .max()
            .unwrap()
            + 1;

        // Local occupancy matrix indexed [x][y] from the bounding box origin
        let mut local = vec![vec![None; size]; size];
        for &(x, y, block) in &blocks {
            local[x - min_x][y - min_y] = Some(block);
        }

        let mut rotated = vec![vec![None; size]; size];
        for i in 0..size {
            for j in 0..size {
                rotated[j][size - 1 - i] = local[i][j];
            }
        }

        for (i, column) in rotated.iter().enumerate() {
            for (j, cell) in column.iter().enumerate() {
                if cell.is_some() && (min_x + i >= COLUMNS || min_y + j >= MEMORY_ROWS) {
                    return false;
                }
            }
        }

        let mut next = self.board;
        for &(x, y, _) in &blocks {
            next[y][x] = None;
        }
        for (i, column) in rotated.iter().enumerate() {
            for (j, cell) in column.iter().enumerate() {
                if let Some(block) = *cell {
                    next[min_y + j][min_x + i] = Some(block);
                }
            }
        }

        self.board = next;
        true
    }

    /// Removes every full row, compacting the stack toward the floor and
    /// leaving fresh empty rows on top. Returns the number of rows removed.
    fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut write_row = 0;

        for read_row in 0..MEMORY_ROWS {
            if self.board[read_row].iter().all(|cell| cell.is_some()) {
                cleared += 1;
            } else {
                if read_row != write_row {
                    self.board[write_row] = self.board[read_row];
                }
                write_row += 1;
            }
        }

        for row in write_row..MEMORY_ROWS {
            self.board[row] = [None; COLUMNS];
        }

        cleared
    }

    pub fn update(&mut self) {
        if self.game_state != GameState::Playing {
            return;
        }
        if self.drop_timer.elapsed() >= Duration::from_millis(TICK_MS) {
            self.drop_timer = Instant::now();
            self.step_down();
        }
    }

    fn step_down(&mut self) {
        if self.move_figure(0, -1) {
            return;
        }

        // Landed: the blocks stay where they lie and the next figure takes over
        if !self.spawn_figure() {
            self.game_state = GameState::Finished;
            info!("spawn blocked after {} figures, game over", self.figure_counter);
            return;
        }

        let cleared = self.clear_full_rows();
        if cleared > 0 {
            debug!("cleared {} row(s)", cleared);
        }
    }

    pub fn reset(&mut self) {
        self.board = empty_board();
        self.game_state = GameState::Ready;
        self.figure_counter = 0;
        self.figure_bag.clear();
        self.drop_timer = Instant::now();
    }
}
