use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io::stdout, time::Duration};

mod constants;
mod game;
mod input;
mod ui;

use constants::POLL_MS;
use game::Game;
use input::handle_input;
use ui::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();

    // Game loop
    loop {
        // Render
        terminal.draw(|f| ui(f, &game))?;

        // Handle input
        if event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        if kind == KeyEventKind::Press {
                            game.reset();
                        }
                    }
                    _ => {
                        handle_input(&mut game, code, kind);
                    }
                }
            }
        }

        // Advance the drop timer
        game.update();
    }

    // Cleanup
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
