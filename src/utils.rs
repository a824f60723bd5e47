pub mod markdown;

pub use markdown::render_markdown;

use ratatui::text::Text;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One visual row as char indices. `start..end` is the row's span and
/// `content_start` skips leading whitespace the wrap trims away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WrappedRow {
    start: usize,
    content_start: usize,
    end: usize,
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Visual rows of `text` wrapped at `max_width` columns the way `Paragraph` with
/// `Wrap { trim: true }` lays them out: breaks fall between words, a word wider
/// than the row is split by character, and leading whitespace is dropped.
fn wrap_rows(text: &str, max_width: usize) -> Vec<WrappedRow> {
    let max_width = max_width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut rows = Vec::new();
    let mut line_start = 0;

    loop {
        let line_end = chars[line_start..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(chars.len(), |i| line_start + i);
        wrap_line(&chars, line_start, line_end, max_width, &mut rows);
        if line_end == chars.len() {
            break;
        }
        line_start = line_end + 1;
    }
    rows
}

fn wrap_line(
    chars: &[char],
    start: usize,
    end: usize,
    max_width: usize,
    rows: &mut Vec<WrappedRow>,
) {
    let mut row = WrappedRow {
        start,
        content_start: start,
        end,
    };
    let mut width = 0;
    // Whitespace since the last word; only counted once another word lands on the row.
    let mut pending = 0;
    let mut pos = start;

    while pos < end {
        let ch = chars[pos];
        if ch.is_whitespace() {
            if width == 0 {
                row.content_start = pos + 1;
            } else {
                pending += char_width(ch);
            }
            pos += 1;
            continue;
        }

        let word_end = (pos..end)
            .find(|&i| chars[i].is_whitespace())
            .unwrap_or(end);
        let word_width: usize = chars[pos..word_end].iter().map(|&c| char_width(c)).sum();

        if width > 0 && width + pending + word_width > max_width {
            rows.push(WrappedRow { end: pos, ..row });
            row = WrappedRow {
                start: pos,
                content_start: pos,
                end,
            };
            width = 0;
        } else {
            width += pending;
        }
        pending = 0;

        for (offset, &c) in chars[pos..word_end].iter().enumerate() {
            let i = pos + offset;
            let w = char_width(c);
            if width > 0 && width + w > max_width {
                rows.push(WrappedRow { end: i, ..row });
                row = WrappedRow {
                    start: i,
                    content_start: i,
                    end,
                };
                width = 0;
            }
            width += w;
        }
        pos = word_end;
    }
    rows.push(row);
}

/// (row, column) of a cursor given in chars, inside text wrapped at `max_width`.
///
/// A cursor sitting on a soft break belongs to the row below, next to the
/// character it would insert before.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    let max_width = max_width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor_index.min(chars.len());
    let rows = wrap_rows(text, max_width);

    let row_index = rows
        .iter()
        .enumerate()
        .position(|(i, row)| {
            let soft_break_after = rows.get(i + 1).is_some_and(|next| next.start == row.end);
            cursor >= row.start && (cursor < row.end || (cursor == row.end && !soft_break_after))
        })
        .unwrap_or(rows.len() - 1);

    let row = rows[row_index];
    let column: usize = chars[row.content_start.min(cursor)..cursor]
        .iter()
        .map(|&c| char_width(c))
        .sum();
    (row_index, column.min(max_width))
}

/// Number of wrapped rows the rendered text occupies at `width`.
pub fn estimate_text_height(text: &Text, width: usize) -> usize {
    let width = width.max(1);
    text.lines
        .iter()
        .map(|line| {
            let line_width: usize = line.spans.iter().map(|s| s.content.width()).sum();
            line_width.div_ceil(width).max(1)
        })
        .sum()
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height.saturating_sub(visible_height).min(u16::MAX as usize) as u16
}
