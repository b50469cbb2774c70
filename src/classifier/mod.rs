//! Early-career classification of job titles through a hosted chat model.

use tracing::debug;

pub mod openai;

pub use openai::OpenAiChat;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(thiserror::Error, Debug)]
pub enum ClassifyError {
    #[error("No API key configured for the language model provider")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Model returned no reply")]
    EmptyReply,
}

/// Everything the classifier needs to reach the provider. The library never
/// reads the environment; the binary builds this from its arguments.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

impl ClassifierConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            temperature: 0.0,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// A single-turn chat completion.
pub trait ChatModel {
    fn complete(&self, prompt: &str, temperature: f32) -> Result<String, ClassifyError>;

    fn model_name(&self) -> &str;
}

pub fn early_career_prompt(title: &str) -> String {
    format!(
        "Is the job title '{title}' an early-career role that requires less than 3 years of experience and is not a senior or manager-level role? Answer only 'Yes' or 'No'."
    )
}

pub struct EarlyCareerClassifier<M> {
    model: M,
    temperature: f32,
}

impl EarlyCareerClassifier<OpenAiChat> {
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ClassifyError> {
        Ok(Self {
            model: OpenAiChat::new(config)?,
            temperature: config.temperature,
        })
    }
}

impl<M: ChatModel> EarlyCareerClassifier<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            temperature: 0.0,
        }
    }

    /// `true` iff the reply contains the literal `Yes` anywhere.
    pub fn classify_job_title(&self, title: &str) -> Result<bool, ClassifyError> {
        let prompt = early_career_prompt(title);
        let reply = self.model.complete(&prompt, self.temperature)?;
        debug!(model = self.model.model_name(), "Reply for '{}': {}", title, reply);
        Ok(reply.contains("Yes"))
    }
}
