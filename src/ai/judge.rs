use crate::ai::model::{GenerationParams, ModelHandle};
use crate::error::JudgeError;
use crate::logger;
use std::sync::Arc;

pub const SUCCESS_MESSAGE: &str = "✅ Correct Answer!";
pub const FAILURE_MESSAGE: &str = "❌ Incorrect. Try again!";

/// Outcome of judging one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_correct: bool,
    pub message: String,
    pub raw_response: String,
}

pub fn build_verification_prompt(question: &str, answer: &str) -> String {
    format!(
        "Question: {}\nAnswer: {}\nIs this correct? Provide a Yes or No response.",
        question, answer
    )
}

/// Any continuation containing "yes" (case-insensitive) counts as correct; everything else is incorrect.
pub fn classify_response(continuation: &str) -> bool {
    continuation.trim().to_lowercase().contains("yes")
}

/// Asks the model whether an answer is correct.
#[derive(Debug, Clone)]
pub struct AnswerJudge {
    model: Arc<ModelHandle>,
    params: GenerationParams,
}

impl AnswerJudge {
    pub fn new(model: Arc<ModelHandle>, params: GenerationParams) -> Self {
        Self { model, params }
    }

    pub async fn judge(&self, question: &str, answer: &str) -> Result<Verdict, JudgeError> {
        let model = self.model.get().await?;
        let prompt = build_verification_prompt(question, answer);

        logger::log(&format!(
            "Judging with {} params={}",
            model.model_name(),
            serde_json::to_string(&self.params).unwrap_or_default()
        ));

        let sequences = model.generate(&prompt, &self.params).await?;
        let raw_response = sequences
            .into_iter()
            .next()
            .map(|s| s.generated_text)
            .ok_or(JudgeError::EmptyResponse)?;

        logger::log(&format!("Raw model response: {:?}", raw_response));

        if raw_response.trim().is_empty() {
            return Err(JudgeError::EmptyResponse);
        }

        let is_correct = classify_response(&raw_response);
        let message = if is_correct {
            SUCCESS_MESSAGE
        } else {
            FAILURE_MESSAGE
        };

        Ok(Verdict {
            is_correct,
            message: message.to_string(),
            raw_response,
        })
    }
}
