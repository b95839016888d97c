use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

use crate::inference::Inference;
use crate::models::Sentiment;

const BUILTIN_POSITIVE: &[&str] = &[
    "love", "great", "good", "awesome", "excellent", "fantastic", "amazing", "wonderful", "happy",
    "best", "nice", "enjoy", "enjoyed", "like", "liked", "perfect", "brilliant",
];

const BUILTIN_NEGATIVE: &[&str] = &[
    "hate", "bad", "terrible", "awful", "horrible", "worst", "poor", "disappointing", "sad",
    "angry", "broken", "useless", "boring", "dislike", "disliked", "annoying", "ugly",
];

/// Config for the built-in word-list sentiment scorer.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct LexiconInferenceConfig {
    /// A friendly name for logs.
    pub name: String,
    /// Extra positive words merged into the built-in list.
    #[serde(default)]
    pub positive_words: Vec<String>,
    /// Extra negative words merged into the built-in list.
    #[serde(default)]
    pub negative_words: Vec<String>,
}

/// A deterministic word-list scorer, useful as a self-contained default
/// when no model backend is deployed.
pub struct LexiconInference {
    name: String,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl LexiconInference {
    /// Create a new `LexiconInference` from the config struct.
    pub fn new(config: &LexiconInferenceConfig) -> Self {
        info!("Creating lexicon inference provider, name='{}'", config.name);
        let mut positive: HashSet<String> =
            BUILTIN_POSITIVE.iter().map(|w| w.to_string()).collect();
        positive.extend(config.positive_words.iter().map(|w| w.to_lowercase()));
        let mut negative: HashSet<String> =
            BUILTIN_NEGATIVE.iter().map(|w| w.to_string()).collect();
        negative.extend(config.negative_words.iter().map(|w| w.to_lowercase()));
        Self {
            name: config.name.clone(),
            positive,
            negative,
        }
    }
}

#[async_trait::async_trait]
impl Inference for LexiconInference {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_type(&self) -> &str {
        "lexicon"
    }

    /// Counts lexicon hits per polarity. Equal or zero hits give NEUTRAL
    /// at confidence 0.5; otherwise the majority polarity wins with
    /// confidence 0.5 + 0.5 * |pos - neg| / (pos + neg).
    async fn predict(&self, text: &str) -> Result<(Sentiment, f64), String> {
        let mut pos = 0u32;
        let mut neg = 0u32;
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            if self.positive.contains(&word) {
                pos += 1;
            } else if self.negative.contains(&word) {
                neg += 1;
            }
        }

        if pos == neg {
            return Ok((Sentiment::Neutral, 0.5));
        }

        let total = f64::from(pos + neg);
        let confidence = 0.5 + 0.5 * f64::from(pos.abs_diff(neg)) / total;
        let label = if pos > neg {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        Ok((label, confidence))
    }
}
