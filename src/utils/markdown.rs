use lazy_static::lazy_static;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

lazy_static! {
    static ref INLINE_RE: Regex =
        Regex::new(r"\*\*(.+?)\*\*|\*(.+?)\*|`([^`]+)`").expect("inline markdown regex");
}

/// Render lesson markdown to lines for ratatui.
/// Supports: `#`/`##`/`###` headings, `-`/`*` bullets, **bold**, *italic* and `code`.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    content
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            let heading = trimmed
                .strip_prefix("### ")
                .or_else(|| trimmed.strip_prefix("## "))
                .or_else(|| trimmed.strip_prefix("# "));

            if let Some(heading) = heading {
                Line::from(Span::styled(
                    heading.to_string(),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ))
            } else if let Some(item) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                let mut spans = vec![Span::from("  • ")];
                spans.extend(parse_inline(item));
                Line::from(spans)
            } else if trimmed.is_empty() {
                Line::from("")
            } else {
                Line::from(parse_inline(line))
            }
        })
        .collect()
}

fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Span::from(text[last..whole.start()].to_string()));
        }

        let (inner, modifier) = if let Some(bold) = caps.get(1) {
            (bold, Modifier::BOLD)
        } else if let Some(italic) = caps.get(2) {
            (italic, Modifier::ITALIC)
        } else if let Some(code) = caps.get(3) {
            (code, Modifier::DIM)
        } else {
            continue;
        };
        spans.push(Span::styled(
            inner.as_str().to_string(),
            Style::default().add_modifier(modifier),
        ));
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::from(text[last..].to_string()));
    }
    if spans.is_empty() {
        spans.push(Span::from(text.to_string()));
    }

    spans
}
