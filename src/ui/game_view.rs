use crate::game::{Board, Cell, GameState, Player, TurnState, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    message: &Option<String>,
    asking_play_again: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header + move counters
            Constraint::Min(10),  // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, asking_play_again, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::PlayerOne => Color::Red,
        Player::PlayerTwo => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let mode = game_state.mode().label();
    let (status, color) = match game_state.turn_state() {
        TurnState::AwaitingInput(player) => (
            format!("{}'s turn ({})  |  {}", player.name(), player.symbol(), mode),
            player_color(player),
        ),
        TurnState::BotThinking => (format!("Bot's turn...  |  {}", mode), Color::Yellow),
        TurnState::Won(_) | TurnState::Draw | TurnState::Quit => {
            (format!("Game Over  |  {}", mode), Color::White)
        }
    };

    let counts = game_state.move_counts();
    let counters = format!(
        "Moves - P1 (X): {} | P2 (O): {}",
        counts.player_one, counts.player_two
    );

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            status,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(counters),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Connect Four"),
    );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let board: &Board = game_state.board();
    let selected_column = game_state.cursor();
    let show_selector = matches!(game_state.turn_state(), TurnState::AwaitingInput(_));
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if show_selector && col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::PlayerOne => (" X ", player_color(Player::PlayerOne)),
                Cell::PlayerTwo => (" O ", player_color(Player::PlayerTwo)),
            };
            row_spans.push(Span::styled(
                symbol,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if show_selector && col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, asking_play_again: bool, area: Rect) {
    let line = if asking_play_again {
        Line::from("Play again?  Y: Yes  |  N: No")
    } else {
        Line::from("A/←  D/→: Move  |  Enter: Drop  |  Q: Quit")
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
