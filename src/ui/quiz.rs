use crate::content::Difficulty;
use crate::models::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::calculate_wrapped_cursor_position;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn difficulty_line(selected: Difficulty) -> Line<'static> {
    let mut spans = vec![Span::from("Select Difficulty Level:  ")];
    for tier in Difficulty::ALL {
        if tier == selected {
            spans.push(Span::styled(
                format!("(•) {}  ", tier),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::from(format!("( ) {}  ", tier)));
        }
    }
    Line::from(spans)
}

fn feedback_text(session: &QuizSession) -> Text<'static> {
    if session.judge_in_progress {
        Text::from(Line::styled(
            "Judging your answer...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(hint) = session.hint {
        Text::from(Line::styled(hint, Style::default().fg(Color::Yellow)))
    } else if let Some(error) = &session.last_ai_error {
        Text::from(Line::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(verdict) = &session.feedback {
        let color = if verdict.is_correct {
            Color::Green
        } else {
            Color::Red
        };
        Text::from(Line::styled(
            verdict.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    } else {
        Text::default()
    }
}

pub fn draw_quiz(f: &mut Frame, area: Rect, session: &mut QuizSession) {
    let layout = calculate_quiz_chunks(area);

    let difficulty = Paragraph::new(difficulty_line(session.difficulty))
        .block(Block::default().borders(Borders::ALL).title("🎯 Probability Quiz"));
    f.render_widget(difficulty, layout.difficulty_area);

    let question_text = match &session.current_question {
        Some(question) => Text::from(question.as_str()),
        None => Text::from(Line::styled(
            "Press Ctrl+G to generate a question.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };
    let question = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("📌 Question"));
    f.render_widget(question, layout.question_area);

    let answer_title = if session.validated {
        "Enter your answer: ✔ validated"
    } else {
        "Enter your answer:"
    };
    let answer_content = if session.user_answer.is_empty() {
        Text::from(Line::styled(
            "[Type your answer here...]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(session.user_answer.as_str())
    };

    // Keep the cursor row visible
    let visible_height = layout.answer_area.height.saturating_sub(2) as usize;
    let text_width = layout.answer_area.width.saturating_sub(2) as usize;
    let (cursor_line, cursor_col) = calculate_wrapped_cursor_position(
        &session.user_answer,
        session.cursor_position,
        text_width,
    );
    let mut scroll = session.input_scroll_y as usize;
    if cursor_line < scroll {
        scroll = cursor_line;
    } else if visible_height > 0 && cursor_line >= scroll + visible_height {
        scroll = cursor_line + 1 - visible_height;
    }
    session.input_scroll_y = scroll as u16;

    let answer = Paragraph::new(answer_content)
        .wrap(Wrap { trim: true })
        .scroll((session.input_scroll_y, 0))
        .block(Block::default().borders(Borders::ALL).title(answer_title));
    f.render_widget(answer, layout.answer_area);

    if session.current_question.is_some() {
        let cursor_x = layout.answer_area.x + 1 + cursor_col as u16;
        let cursor_y = layout.answer_area.y + 1 + (cursor_line as u16).saturating_sub(session.input_scroll_y);
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let feedback = Paragraph::new(feedback_text(session))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(feedback, layout.feedback_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit Edumate")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Exit the application? Your quiz progress is not saved.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Go Back)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
