pub mod client;
pub mod judge;
pub mod model;

// Public API exports
pub use client::OpenRouterGenerator;
pub use judge::{
    build_verification_prompt, classify_response, AnswerJudge, Verdict, FAILURE_MESSAGE,
    SUCCESS_MESSAGE,
};
pub use model::{GeneratedSequence, GenerationParams, ModelHandle, ModelLoader, TextGenerator};
