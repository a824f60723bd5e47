pub mod ai;
pub mod ai_worker;
pub mod config;
pub mod content;
pub mod error;
pub mod learn;
pub mod logger;
pub mod models;
pub mod selector;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use ai::{AnswerJudge, GenerationParams, ModelHandle, OpenRouterGenerator, TextGenerator, Verdict};
pub use ai_worker::spawn_ai_worker;
pub use config::Config;
pub use content::{Concept, Difficulty, PROBABILITY_CONCEPTS};
pub use error::{ConfigError, ContentError, JudgeError};
pub use learn::handle_learn_input;
pub use models::{AiRequest, AiResponse, AppState, LearnState, QuizSession};
pub use session::handle_quiz_input;
pub use ui::draw_app;
