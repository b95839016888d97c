use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::http_provider::{HttpInference, HttpInferenceConfig};
use super::lexicon_provider::{LexiconInference, LexiconInferenceConfig};
use crate::models::Sentiment;

/// Configuration options for each inference provider.
#[derive(Deserialize, Serialize, JsonSchema, Debug)]
#[serde(tag = "type")]
pub enum InferenceConfig {
    #[serde(rename = "lexicon")]
    Lexicon(LexiconInferenceConfig),
    #[serde(rename = "http")]
    Http(HttpInferenceConfig),
}

/// An inference provider must return a sentiment label and a confidence
/// in [0, 1], or an error.
#[async_trait::async_trait]
pub trait Inference: Send + Sync {
    fn get_name(&self) -> &str;
    fn get_type(&self) -> &str;
    async fn predict(&self, text: &str) -> Result<(Sentiment, f64), String>;
}

/// Create an inference provider from a given config.
pub fn create_inference_provider(config: &InferenceConfig) -> Box<dyn Inference> {
    match config {
        InferenceConfig::Lexicon(cfg) => Box::new(LexiconInference::new(cfg)),
        InferenceConfig::Http(cfg) => Box::new(HttpInference::new(cfg)),
    }
}
