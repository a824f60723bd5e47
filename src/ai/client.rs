use crate::ai::model::{GeneratedSequence, GenerationParams, TextGenerator};
use crate::error::JudgeError;
use async_trait::async_trait;
use openrouter_api::{
    models::provider_preferences::ProviderPreferences,
    models::provider_preferences::ProviderSort,
    types::chat::{ChatCompletionRequest, Message},
};

const SYSTEM_PROMPT: &str =
    "You are a probability tutor checking student answers. Reply starting with Yes or No.";

/// Text generator backed by an OpenRouter chat model. Reads `OPENROUTER_API_KEY`.
#[derive(Debug)]
pub struct OpenRouterGenerator {
    client: openrouter_api::OpenRouterClient<openrouter_api::Ready>,
    model: String,
}

impl OpenRouterGenerator {
    pub fn new(model: impl Into<String>) -> Result<Self, JudgeError> {
        let client = openrouter_api::OpenRouterClient::quick().map_err(|e| {
            JudgeError::ModelUnavailable(format!("failed to create OpenRouter client: {}", e))
        })?;

        Ok(Self {
            client,
            model: model.into(),
        })
    }

    fn build_request(&self, prompt: &str, params: &GenerationParams) -> ChatCompletionRequest {
        let messages = vec![
            Message::text("system", SYSTEM_PROMPT),
            Message::text("user", prompt),
        ];

        let provider = ProviderPreferences::new().with_sort(ProviderSort::Throughput);

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            provider: Some(provider),
            stream: None,
            response_format: None,
            tools: None,
            tool_choice: None,
            models: None,
            transforms: None,
            route: None,
            user: None,
            max_tokens: Some(params.max_new_tokens),
            temperature: Some(params.temperature),
            top_p: Some(params.top_p),
            top_k: Some(params.top_k),
            frequency_penalty: None,
            presence_penalty: None,
            repetition_penalty: None,
            min_p: None,
            top_a: None,
            seed: None,
            stop: None,
            logit_bias: None,
            logprobs: None,
            top_logprobs: None,
            prediction: None,
            parallel_tool_calls: None,
            verbosity: None,
        }
    }

    async fn complete_once(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GeneratedSequence, JudgeError> {
        let request = self.build_request(prompt, params);

        let response = self
            .client
            .chat()
            .map_err(|e| JudgeError::ModelUnavailable(e.to_string()))?
            .chat_completion(request)
            .await
            .map_err(|e| JudgeError::ModelUnavailable(format!("OpenRouter API error: {}", e)))?;

        let choice = response.choices.first().ok_or(JudgeError::EmptyResponse)?;
        let text = match &choice.message.content {
            openrouter_api::MessageContent::Text(text) => text.clone(),
            openrouter_api::MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|p| {
                    if let openrouter_api::ContentPart::Text(tc) = p {
                        Some(tc.text.clone())
                    } else {
                        None
                    }
                })
                .collect::<Vec<String>>()
                .join("\n"),
        };

        Ok(GeneratedSequence::new(text))
    }
}

#[async_trait]
impl TextGenerator for OpenRouterGenerator {
    /// Chat completions return one choice per call, so each requested sequence is its own request.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<GeneratedSequence>, JudgeError> {
        let mut sequences = Vec::with_capacity(params.num_return_sequences as usize);
        for _ in 0..params.num_return_sequences.max(1) {
            sequences.push(self.complete_once(prompt, params).await?);
        }
        Ok(sequences)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
