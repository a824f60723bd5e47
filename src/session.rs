use crate::content::Difficulty;
use crate::logger;
use crate::models::{AiRequest, AiResponse, AppState, QuizSession};
use crate::selector;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

pub const BLANK_ANSWER_HINT: &str = "Type an answer before submitting.";

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => *app_state = AppState::QuizQuitConfirm,
        KeyCode::Tab | KeyCode::BackTab => *app_state = AppState::Learn,
        KeyCode::Up => session.select_difficulty(session.difficulty.prev()),
        KeyCode::Down => session.select_difficulty(session.difficulty.next()),
        KeyCode::Char('g') if ctrl => session.generate_question(&mut rand::thread_rng()),
        KeyCode::Char('l') if ctrl => session.clear_answer(),
        KeyCode::Enter => {
            session.submit_answer();
        }
        KeyCode::Left => {
            session.cursor_position = session
                .cursor_position
                .min(answer_len(session))
                .saturating_sub(1);
        }
        KeyCode::Right => {
            if session.cursor_position < answer_len(session) {
                session.cursor_position += 1;
            }
        }
        KeyCode::Home => session.cursor_position = 0,
        KeyCode::End => session.cursor_position = answer_len(session),
        KeyCode::Backspace => session.delete_before_cursor(),
        KeyCode::Char(c) if !ctrl && session.current_question.is_some() => {
            session.insert_at_cursor(c)
        }
        _ => {}
    }
}

fn answer_len(session: &QuizSession) -> usize {
    session.user_answer.chars().count()
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

impl QuizSession {
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn generate_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let question = selector::select(self.difficulty, rng);
        logger::log(&format!("Generated {} question: {}", self.difficulty, question));

        self.current_question = Some(question.to_string());
        self.validated = false;
        self.user_answer.clear();
        self.cursor_position = 0;
        self.input_scroll_y = 0;
        self.reset_judgement();
    }

    /// Replace the answer text. Leaves validation untouched.
    pub fn edit_answer(&mut self, text: &str) {
        self.hint = None;
        self.user_answer = text.to_string();
        self.cursor_position = answer_len(self);
    }

    pub fn insert_at_cursor(&mut self, c: char) {
        let pos = self.cursor_position.min(answer_len(self));
        let idx = byte_index(&self.user_answer, pos);
        self.hint = None;
        self.user_answer.insert(idx, c);
        self.cursor_position = pos + 1;
    }

    pub fn delete_before_cursor(&mut self) {
        let pos = self.cursor_position.min(answer_len(self));
        if pos > 0 {
            let idx = byte_index(&self.user_answer, pos - 1);
            self.user_answer.remove(idx);
            self.cursor_position = pos - 1;
        }
    }

    /// Queue the current question and answer for judging.
    ///
    /// Returns `false` when nothing was sent: no question yet, a judgement
    /// already pending, or no worker to send to. A blank answer is refused
    /// with a hint.
    pub fn submit_answer(&mut self) -> bool {
        let Some(question) = self.current_question.clone() else {
            return false;
        };
        if self.judge_in_progress {
            return false;
        }
        if self.user_answer.trim().is_empty() {
            self.hint = Some(BLANK_ANSWER_HINT);
            return false;
        }
        self.hint = None;

        self.submission_id += 1;
        self.feedback = None;
        self.last_ai_error = None;

        let Some(ai_tx) = self.ai_tx.as_ref() else {
            self.validated = false;
            self.last_ai_error = Some("Model unavailable: judge worker not running".to_string());
            return false;
        };

        let request = AiRequest::Judge {
            submission_id: self.submission_id,
            question,
            user_answer: self.user_answer.clone(),
        };
        if ai_tx.try_send(request).is_err() {
            self.validated = false;
            self.last_ai_error = Some("Model unavailable: judge worker is busy or stopped".to_string());
            return false;
        }

        logger::log(&format!("Sent judge request {}", self.submission_id));
        self.judge_in_progress = true;
        true
    }

    pub fn clear_answer(&mut self) {
        self.user_answer.clear();
        self.cursor_position = 0;
        self.input_scroll_y = 0;
        self.validated = false;
        self.reset_judgement();
    }

    pub fn process_ai_response(&mut self, response: AiResponse) {
        match response {
            AiResponse::Verdict {
                submission_id,
                verdict,
            } => {
                if submission_id != self.submission_id {
                    logger::log(&format!("Dropping stale verdict {}", submission_id));
                    return;
                }
                self.validated = verdict.is_correct;
                self.feedback = Some(verdict);
                self.last_ai_error = None;
            }
            AiResponse::Error {
                submission_id,
                error,
            } => {
                if submission_id != self.submission_id {
                    logger::log(&format!("Dropping stale error {}", submission_id));
                    return;
                }
                self.validated = false;
                self.feedback = None;
                self.last_ai_error = Some(error);
            }
        }
        self.judge_in_progress = false;
    }

    fn reset_judgement(&mut self) {
        self.hint = None;
        self.submission_id += 1;
        self.judge_in_progress = false;
        self.feedback = None;
        self.last_ai_error = None;
    }
}
