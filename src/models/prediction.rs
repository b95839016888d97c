use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentiment label reported by an inference provider.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Maps a provider label string to a sentiment. Anything that is not
    /// POSITIVE or NEGATIVE is treated as NEUTRAL.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "POSITIVE" => Sentiment::Positive,
            "NEGATIVE" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// Display tag shown next to the label.
    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "\u{1F60A}",
            Sentiment::Negative => "\u{1F621}",
            Sentiment::Neutral => "\u{1F610}",
        }
    }
}

/// The most recent prediction shown to a session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Sentiment,
    pub confidence: f64,
    pub emoji: String,
}

impl Prediction {
    pub fn new(label: Sentiment, confidence: f64) -> Self {
        Prediction {
            label,
            confidence,
            emoji: label.emoji().to_string(),
        }
    }
}

/// User-supplied judgment on whether a shown prediction was correct.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
}
