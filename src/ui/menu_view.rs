//! Full-screen text panels shown outside a game.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn render_panel(frame: &mut Frame, title: &str, lines: Vec<Line<'static>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(lines.len() as u16 + 2),
            Constraint::Min(1),
        ])
        .split(frame.area());

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(panel, chunks[1]);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

pub fn render_welcome(frame: &mut Frame) {
    render_panel(
        frame,
        "Connect Four",
        vec![
            heading("Welcome to Connect Four!"),
            Line::from(""),
            Line::from("Press any key to continue..."),
        ],
    );
}

pub fn render_mode_select(frame: &mut Frame) {
    render_panel(
        frame,
        "Mode",
        vec![
            heading("Choose your mode:"),
            Line::from(""),
            Line::from("1. Player vs Player"),
            Line::from("2. Player vs Bot"),
            Line::from(""),
            Line::from("Press 1 or 2 to start, Q to exit."),
        ],
    );
}

pub fn render_farewell(frame: &mut Frame) {
    render_panel(
        frame,
        "Connect Four",
        vec![
            heading("Thanks for playing!"),
            Line::from(""),
            Line::from("Press any key to quit."),
        ],
    );
}
