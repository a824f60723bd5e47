use crate::ai::Verdict;
use crate::content::Difficulty;
use tokio::sync::mpsc;

/// Per-user quiz state. Lives only as long as the process.
#[derive(Debug, Default)]
pub struct QuizSession {
    pub difficulty: Difficulty,
    pub current_question: Option<String>,
    pub user_answer: String,
    pub cursor_position: usize,
    /// True only when the latest judgement of the current question and answer was correct.
    pub validated: bool,
    pub feedback: Option<Verdict>,
    pub judge_in_progress: bool,
    pub last_ai_error: Option<String>,
    /// Shown in the Result panel when a submit was refused.
    pub hint: Option<&'static str>,
    /// Bumped on every submit, new question and clear; verdicts carrying an older id are dropped.
    pub submission_id: u64,
    pub ai_tx: Option<mpsc::Sender<AiRequest>>,
    pub input_scroll_y: u16,
}

impl QuizSession {
    pub fn new(ai_tx: Option<mpsc::Sender<AiRequest>>) -> Self {
        Self {
            ai_tx,
            ..Self::default()
        }
    }
}

/// Selection in the Learn tab.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LearnState {
    pub selected_topic: usize,
    pub scroll_y: u16,
}

#[derive(Debug)]
pub enum AiRequest {
    Judge {
        submission_id: u64,
        question: String,
        user_answer: String,
    },
}

#[derive(Debug)]
pub enum AiResponse {
    Verdict {
        submission_id: u64,
        verdict: Verdict,
    },
    Error {
        submission_id: u64,
        error: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Learn,
    Quiz,
    LearnQuitConfirm,
    QuizQuitConfirm,
}

impl AppState {
    /// Tab to return to when a quit confirmation is declined.
    pub fn resume(self) -> Self {
        match self {
            AppState::LearnQuitConfirm => AppState::Learn,
            AppState::QuizQuitConfirm => AppState::Quiz,
            other => other,
        }
    }
}
