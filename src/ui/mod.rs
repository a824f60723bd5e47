pub mod layout;
mod learn;
mod quiz;

pub use layout::{calculate_app_chunks, calculate_learn_chunks, calculate_quiz_chunks};
pub use learn::draw_learn;
pub use quiz::{draw_quit_confirmation, draw_quiz};

use crate::models::{AppState, LearnState, QuizSession};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub const APP_TITLE: &str = "Edumate🎲 Probability Learning & Quiz";

fn key_hint(key: &str, action: &str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", action)),
    ]
}

fn draw_tabs(f: &mut Frame, area: Rect, app_state: AppState) {
    let selected = match app_state {
        AppState::Learn | AppState::LearnQuitConfirm => 0,
        AppState::Quiz | AppState::QuizQuitConfirm => 1,
    };
    let tabs = Tabs::new(vec!["📚 Learn Probability", "🎯 Probability Quiz"])
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(APP_TITLE));
    f.render_widget(tabs, area);
}

fn draw_help(f: &mut Frame, area: Rect, app_state: AppState, model_name: &str) {
    let mut keys = Vec::new();
    match app_state {
        AppState::Quiz | AppState::QuizQuitConfirm => {
            keys.extend(key_hint("Ctrl+G", "Generate a Question"));
            keys.extend(key_hint("Enter", "Submit Answer"));
            keys.extend(key_hint("Ctrl+L", "Clear Answer"));
            keys.extend(key_hint("↑/↓", "Difficulty"));
        }
        AppState::Learn | AppState::LearnQuitConfirm => {
            keys.extend(key_hint("↑/↓", "Topic"));
            keys.extend(key_hint("PgUp/PgDn", "Scroll"));
        }
    }
    keys.extend(key_hint("Tab", "Switch Tab"));
    keys.extend(key_hint("Esc", "Quit"));

    let mut status = Vec::from(key_hint("Ctrl+C", "Exit App"));
    status.push(Span::styled(
        format!("Model: {}", model_name),
        Style::default().fg(Color::DarkGray),
    ));

    let help = Paragraph::new(vec![Line::from(keys), Line::from(status)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

/// Draw the whole screen for the current state.
pub fn draw_app(
    f: &mut Frame,
    app_state: AppState,
    learn: &mut LearnState,
    session: &mut QuizSession,
    model_name: &str,
) {
    if matches!(
        app_state,
        AppState::LearnQuitConfirm | AppState::QuizQuitConfirm
    ) {
        draw_quit_confirmation(f);
        return;
    }

    let layout = calculate_app_chunks(f.area());
    draw_tabs(f, layout.tabs_area, app_state);
    match app_state {
        AppState::Learn => draw_learn(f, layout.body_area, learn),
        _ => draw_quiz(f, layout.body_area, session),
    }
    draw_help(f, layout.help_area, app_state, model_name);
}
