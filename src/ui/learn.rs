use crate::content::{concept_markdown, topic_names};
use crate::models::LearnState;
use crate::ui::layout::calculate_learn_chunks;
use crate::utils::{calculate_max_scroll, estimate_text_height, render_markdown};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_learn(f: &mut Frame, area: Rect, learn: &mut LearnState) {
    let layout = calculate_learn_chunks(area);

    let topic_items: Vec<ListItem> = topic_names()
        .enumerate()
        .map(|(i, name)| {
            if i == learn.selected_topic {
                ListItem::new(format!("> {}", name)).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {}", name))
            }
        })
        .collect();

    let topics = List::new(topic_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Select a topic to learn"),
    );
    f.render_widget(topics, layout.topics_area);

    let detail_text = match learn.selected_concept() {
        Ok(concept) => Text::from(render_markdown(&concept_markdown(concept))),
        Err(e) => Text::from(Line::styled(e.to_string(), Style::default().fg(Color::Red))),
    };

    let visible_height = layout.detail_area.height.saturating_sub(2) as usize;
    let text_width = layout.detail_area.width.saturating_sub(2) as usize;
    let content_height = estimate_text_height(&detail_text, text_width);
    learn.scroll_y = learn
        .scroll_y
        .min(calculate_max_scroll(content_height, visible_height));

    let detail = Paragraph::new(detail_text)
        .wrap(Wrap { trim: true })
        .scroll((learn.scroll_y, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("📖 Learn Probability Concepts"),
        );
    f.render_widget(detail, layout.detail_area);
}
