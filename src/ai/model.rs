use crate::error::JudgeError;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub const DEFAULT_MAX_NEW_TOKENS: u32 = 20;
pub const DEFAULT_NUM_RETURN_SEQUENCES: u32 = 1;
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_TOP_P: f32 = 0.9;
pub const DEFAULT_TOP_K: u32 = 20;

/// Sampling settings passed to the text generator on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub num_return_sequences: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            num_return_sequences: DEFAULT_NUM_RETURN_SEQUENCES,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// One continuation produced by the model. Does not include the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSequence {
    pub generated_text: String,
}

impl GeneratedSequence {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            generated_text: text.into(),
        }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<GeneratedSequence>, JudgeError>;

    fn model_name(&self) -> &str;
}

pub type ModelLoader = Box<dyn Fn() -> Result<Arc<dyn TextGenerator>, JudgeError> + Send + Sync>;

/// Lazily loaded model shared by every judgement.
///
/// The loader runs on first use. A successful load is kept for the life of the
/// handle; a failed load is not cached, so the next call tries again.
pub struct ModelHandle {
    cell: OnceCell<Arc<dyn TextGenerator>>,
    loader: ModelLoader,
}

impl ModelHandle {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn TextGenerator>, JudgeError> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            loader: Box::new(loader),
        }
    }

    /// Handle around an already constructed model.
    pub fn preloaded(model: Arc<dyn TextGenerator>) -> Self {
        let mut handle = Self::new(|| {
            Err(JudgeError::ModelUnavailable(
                "preloaded model handle has no loader".to_string(),
            ))
        });
        handle.cell = OnceCell::new_with(Some(model));
        handle
    }

    pub async fn get(&self) -> Result<Arc<dyn TextGenerator>, JudgeError> {
        let model = self
            .cell
            .get_or_try_init(|| async {
                crate::logger::log("Loading text generation model");
                (self.loader)()
            })
            .await?;
        Ok(Arc::clone(model))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted text generator for tests. Replies cycle through the configured list.
#[cfg(test)]
pub struct MockGenerator {
    replies: Vec<Result<Vec<GeneratedSequence>, JudgeError>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockGenerator {
    /// Always answers with a single continuation.
    pub fn replying(text: &str) -> Self {
        Self::with_replies(vec![Ok(vec![GeneratedSequence::new(text)])])
    }

    pub fn failing(error: JudgeError) -> Self {
        Self::with_replies(vec![Err(error)])
    }

    pub fn with_replies(replies: Vec<Result<Vec<GeneratedSequence>, JudgeError>>) -> Self {
        Self {
            replies,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<Vec<GeneratedSequence>, JudgeError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies[index % self.replies.len()].clone()
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
