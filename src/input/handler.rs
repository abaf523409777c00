use crossterm::event::{KeyCode, KeyEventKind};

use crate::game::{Game, GameState};

/// Maps a key event onto the game. Arrow keys steer the active figure,
/// Space starts a game from the ready screen. Held arrows arrive as
/// Repeat events, which act like fresh presses.
pub fn handle_input(game: &mut Game, code: KeyCode, kind: KeyEventKind) {
    if kind == KeyEventKind::Release {
        return;
    }

    match code {
        KeyCode::Left => {
            game.move_figure(-1, 0);
        }
        KeyCode::Right => {
            game.move_figure(1, 0);
        }
        KeyCode::Down => {
            game.move_figure(0, -1);
        }
        KeyCode::Up => {
            game.rotate_figure();
        }
        KeyCode::Char(' ') => {
            if game.game_state == GameState::Ready {
                game.start_game();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_starts_a_ready_game() {
        let mut game = Game::new();
        handle_input(&mut game, KeyCode::Char(' '), KeyEventKind::Press);
        assert_eq!(game.game_state, GameState::Playing);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut game = Game::new();
        handle_input(&mut game, KeyCode::Char(' '), KeyEventKind::Release);
        assert_eq!(game.game_state, GameState::Ready);
    }

    #[test]
    fn arrows_steer_the_active_figure() {
        let mut game = Game::new();
        game.start_game();
        let before = game.board;

        handle_input(&mut game, KeyCode::Left, KeyEventKind::Press);
        assert_ne!(game.board, before);

        handle_input(&mut game, KeyCode::Right, KeyEventKind::Press);
        assert_eq!(game.board, before);
    }
}
