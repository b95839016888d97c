use cached::Return;
#[allow(unused_imports)]
use cached::proc_macro::cached;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::inference::Inference;
use crate::models::Sentiment;

/// The config needed for a remote HTTP model backend.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct HttpInferenceConfig {
    /// A friendly name for logs.
    pub name: String,
    /// Endpoint accepting POST {"text": ...} and returning
    /// {"label": ..., "score": ...}.
    pub uri: String,
}

/// A provider that calls a remote sentiment endpoint.
pub struct HttpInference {
    pub config: HttpInferenceConfig,
}

impl HttpInference {
    pub fn new(config: &HttpInferenceConfig) -> Self {
        info!(
            "Creating HTTP inference provider, name='{}', uri='{}'",
            config.name, config.uri
        );
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait::async_trait]
impl Inference for HttpInference {
    fn get_name(&self) -> &str {
        &self.config.name
    }

    fn get_type(&self) -> &str {
        "http"
    }

    async fn predict(&self, text: &str) -> Result<(Sentiment, f64), String> {
        let cached_result = query(self.config.uri.clone(), text.to_string()).await?;
        if cached_result.was_cached {
            debug!("Sentiment prediction served from cache");
        }
        let (label, score) = (*cached_result).clone();
        Ok((Sentiment::from_label(&label), score.clamp(0.0, 1.0)))
    }
}

/// Queries the sentiment endpoint, returning the raw label and score.
#[cfg_attr(
    not(test),
    cached(
        time = 60,
        result = true,
        with_cached_flag = true,
        sync_writes = true
    )
)]
async fn query(uri: String, text: String) -> Result<Return<(String, f64)>, String> {
    let client = reqwest::Client::new();

    debug!("Sending sentiment request to: {}", uri);
    let response = match client.post(&uri).json(&json!({ "text": text })).send().await {
        Ok(r) => r,
        Err(e) => return Err(format!("Error sending request: {}", e)),
    };

    if response.status().is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| format!("Error reading response body: {}", e))?;
        let prediction: Value =
            serde_json::from_str(&body).map_err(|e| format!("Error parsing JSON: {}", e))?;

        let label = prediction["label"].as_str().unwrap_or_default().to_string();
        let score = prediction["score"]
            .as_f64()
            .ok_or_else(|| "Missing 'score' in inference response".to_string())?;
        Ok(Return::new((label, score)))
    } else {
        Err(format!("Unexpected status code: {}", response.status()))
    }
}
