use crate::content::{self, Concept, PROBABILITY_CONCEPTS};
use crate::error::ContentError;
use crate::models::{AppState, LearnState};
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_learn_input(learn: &mut LearnState, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => *app_state = AppState::LearnQuitConfirm,
        KeyCode::Tab | KeyCode::BackTab => *app_state = AppState::Quiz,
        KeyCode::Up => {
            learn.selected_topic = learn.selected_topic.saturating_sub(1);
            learn.scroll_y = 0;
        }
        KeyCode::Down => {
            if learn.selected_topic < PROBABILITY_CONCEPTS.len().saturating_sub(1) {
                learn.selected_topic += 1;
                learn.scroll_y = 0;
            }
        }
        KeyCode::PageDown => learn.scroll_y = learn.scroll_y.saturating_add(1),
        KeyCode::PageUp => learn.scroll_y = learn.scroll_y.saturating_sub(1),
        _ => {}
    }
}

impl LearnState {
    /// The concept under the cursor, looked up by its topic name.
    pub fn selected_concept(&self) -> Result<&'static Concept, ContentError> {
        let name = content::topic_names()
            .nth(self.selected_topic)
            .ok_or_else(|| ContentError::TopicNotFound(format!("#{}", self.selected_topic)))?;
        content::lookup_concept(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_topic_navigation_stays_in_bounds() {
        let mut learn = LearnState::default();
        let mut app_state = AppState::Learn;

        handle_learn_input(&mut learn, key(KeyCode::Up), &mut app_state);
        assert_eq!(learn.selected_topic, 0);

        for _ in 0..10 {
            handle_learn_input(&mut learn, key(KeyCode::Down), &mut app_state);
        }
        assert_eq!(learn.selected_topic, PROBABILITY_CONCEPTS.len() - 1);
        assert_eq!(learn.selected_concept().unwrap().name, "Bayes' Theorem");
    }

    #[test]
    fn test_every_selection_resolves_to_stored_text() {
        for (i, concept) in PROBABILITY_CONCEPTS.iter().enumerate() {
            let learn = LearnState {
                selected_topic: i,
                scroll_y: 0,
            };
            assert_eq!(learn.selected_concept().unwrap(), concept);
        }
    }

    #[test]
    fn test_out_of_range_selection_is_not_found() {
        let learn = LearnState {
            selected_topic: 99,
            scroll_y: 0,
        };
        assert!(matches!(
            learn.selected_concept(),
            Err(ContentError::TopicNotFound(_))
        ));
    }

    #[test]
    fn test_tab_and_escape() {
        let mut learn = LearnState::default();
        let mut app_state = AppState::Learn;
        handle_learn_input(&mut learn, key(KeyCode::Tab), &mut app_state);
        assert_eq!(app_state, AppState::Quiz);

        let mut app_state = AppState::Learn;
        handle_learn_input(&mut learn, key(KeyCode::Esc), &mut app_state);
        assert_eq!(app_state, AppState::LearnQuitConfirm);
        assert_eq!(app_state.resume(), AppState::Learn);
    }
}
