use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

pub struct LearnLayout {
    pub topics_area: Rect,
    pub detail_area: Rect,
}

pub struct QuizLayout {
    pub difficulty_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub feedback_area: Rect,
}

pub fn calculate_app_chunks(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    AppLayout {
        tabs_area: chunks[0],
        body_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_learn_chunks(area: Rect) -> LearnLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    LearnLayout {
        topics_area: chunks[0],
        detail_area: chunks[1],
    }
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(5),
        ])
        .split(area);

    QuizLayout {
        difficulty_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        feedback_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout() {
        let layout = calculate_app_chunks(Rect::new(0, 0, 100, 40));

        // margin 1 leaves 38 rows: 3 tabs + 4 help
        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.help_area.height, 4);
        assert_eq!(layout.body_area.height, 31);
        assert_eq!(layout.body_area.width, 98);
    }

    #[test]
    fn test_quiz_layout() {
        let layout = calculate_quiz_chunks(Rect::new(0, 0, 98, 31));

        assert_eq!(layout.difficulty_area.height, 3);
        assert_eq!(layout.question_area.height, 5);
        assert_eq!(layout.feedback_area.height, 5);
        assert_eq!(layout.answer_area.height, 31 - 13);
    }

    #[test]
    fn test_learn_layout_splits_width() {
        let layout = calculate_learn_chunks(Rect::new(0, 0, 98, 31));

        assert_eq!(layout.topics_area.width + layout.detail_area.width, 98);
        assert!(layout.topics_area.width < layout.detail_area.width);
        assert_eq!(layout.topics_area.height, 31);
    }
}
