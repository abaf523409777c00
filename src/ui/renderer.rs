use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{COLUMNS, VISIBLE_ROWS};
use crate::game::{Game, GameState};

pub fn ui(f: &mut Frame, game: &Game) {
    let size = f.size();

    let board_height = VISIBLE_ROWS as u16 + 2; // rows + borders
    let board_width = COLUMNS as u16 * 2 + 2;   // 2 chars per cell + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];

    render_board(f, game, board_area);

    match game.game_state {
        GameState::Ready => render_ready_overlay(f, board_area),
        GameState::Finished => render_finished_overlay(f, board_area),
        GameState::Playing => {}
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let mut board_lines = Vec::new();

    // Top visible row first; the buffer rows above stay hidden
    for y in (0..VISIBLE_ROWS).rev() {
        let mut line_spans = Vec::new();
        for x in 0..COLUMNS {
            match game.board[y][x] {
                Some(block) => {
                    line_spans.push(Span::styled("██", Style::default().fg(block.color)));
                }
                None => {
                    if (x + y) % 2 == 0 {
                        line_spans.push(Span::styled("░░", Style::default().fg(Color::DarkGray)));
                    } else {
                        line_spans.push(Span::raw("  "));
                    }
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

    f.render_widget(board_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_ready_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 40, area);
    f.render_widget(Clear, popup_area);

    let ready_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("BLOCKFALL", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press SPACE to start")]),
        Line::from(vec![Span::raw("Arrows move, Up rotates")]),
        Line::from(vec![Span::raw("")]),
    ];

    let ready_widget = Paragraph::new(ready_text)
        .block(Block::default().borders(Borders::ALL).title("Ready"))
        .alignment(Alignment::Center);

    f.render_widget(ready_widget, popup_area);
}

fn render_finished_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 40, area);
    f.render_widget(Clear, popup_area);

    let finished_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled("GAME OVER", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press R to restart")]),
        Line::from(vec![Span::raw("Press Q to quit")]),
        Line::from(vec![Span::raw("")]),
    ];

    let finished_widget = Paragraph::new(finished_text)
        .block(Block::default().borders(Borders::ALL).title("Finished"))
        .alignment(Alignment::Center);

    f.render_widget(finished_widget, popup_area);
}
