//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use tictactoe_history::{Board, Player, Position, Square, winning_line};

use super::app::{App, InputMode};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Players
            Constraint::Min(13), // Board + log
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(20)])
        .split(chunks[2]);

    let board = app.game().board();
    draw_board(frame, body[0], &board, app.cursor());
    draw_log(frame, body[1], app);

    if app.game().is_over() {
        draw_game_over(frame, body[0], app);
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        "arrows/hjkl move · enter/1-9 place · x/o rename · r restart · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.game().active_player();
    let in_progress = !app.game().is_over();

    let mut spans = Vec::new();
    for player in [Player::X, Player::O] {
        let name = match app.mode() {
            InputMode::EditingName {
                player: editing,
                buffer,
            } if *editing == player => format!("{buffer}_"),
            _ => app.game().players().name(player).to_string(),
        };

        let style = if in_progress && player == active {
            Style::default()
                .fg(symbol_color(player))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(symbol_color(player))
        };

        spans.push(Span::styled(format!(" {name} ({player}) "), style));
        spans.push(Span::raw("   "));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 40, 11);
    let highlight = winning_line(board).map(|(line, _)| line);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, highlight, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    highlight: Option<[Position; 3]>,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_coords(row, col) {
            let winning = highlight.is_some_and(|line| line.contains(&pos));
            draw_cell(frame, cols[col * 2], board.get(pos), pos == cursor, winning);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, is_cursor: bool, winning: bool) {
    let (symbol, mut style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => (
            if player == Player::X { " X " } else { " O " },
            Style::default()
                .fg(symbol_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if winning {
        style = style.fg(Color::Green);
    }
    if is_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .game()
        .history()
        .iter()
        .map(|turn| {
            ListItem::new(turn.to_string())
                .style(Style::default().fg(symbol_color(turn.player())))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(list, area);
}

fn draw_game_over(frame: &mut Frame, area: Rect, app: &App) {
    let popup = center_rect(area, 30, 5);
    let outcome = app.game().outcome();
    let color = match outcome.winner() {
        Some(_) => Color::Green,
        None if outcome.is_draw() => Color::Yellow,
        None => Color::Magenta,
    };
    let text = vec![
        Line::from(Span::styled(
            outcome.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from("Press 'r' for a rematch"),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Game Over!")
                .style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn symbol_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
