pub const COLUMNS: usize = 10;
pub const VISIBLE_ROWS: usize = 14;
pub const BUFFER_ROWS: usize = 2; // Hidden spawn rows above the visible area
pub const MEMORY_ROWS: usize = VISIBLE_ROWS + BUFFER_ROWS;

// Timing (in milliseconds)
pub const TICK_MS: u64 = 500; // Gravity interval
pub const POLL_MS: u64 = 16;  // Input poll interval
