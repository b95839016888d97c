//! Session-scoped prediction and feedback state.

use chrono::Utc;
use tracing::debug;

use crate::inference::Inference;
use crate::metrics::MetricsRecorder;
use crate::models::{Prediction, Verdict};

/// Accumulates prediction requests, confidence observations, and user
/// feedback for one session.
///
/// Invariants:
/// - `yes_count + no_count == accuracy_history.len()` after every operation.
/// - `accuracy_history` is append-only; entries are never reordered or
///   mutated in place.
/// - A prediction accepts at most one feedback entry; further feedback is
///   ignored until the next prediction resets the guard.
/// - Running accuracy is recomputed over the full history on every read,
///   never kept as a separately-mutated total.
#[derive(Debug, Default)]
pub struct FeedbackAccumulator {
    request_count: u64,
    confidence_observations: Vec<f64>,
    accuracy_history: Vec<(f64, u8)>,
    yes_count: u64,
    no_count: u64,
    current_prediction: Option<Prediction>,
    feedback_given: Option<Verdict>,
}

impl FeedbackAccumulator {
    pub fn new() -> Self {
        FeedbackAccumulator::default()
    }

    /// Runs one prediction request through the inference collaborator.
    ///
    /// The request count is bumped (locally and on the metrics sink)
    /// before inference runs, so failed predictions still count as
    /// requests. On success the confidence is recorded and observed, the
    /// returned prediction becomes the current one, and the feedback
    /// guard resets.
    ///
    /// # Errors
    ///
    /// Inference collaborator failures propagate unmodified.
    pub async fn submit_prediction<M: MetricsRecorder>(
        &mut self,
        text: &str,
        inference: &dyn Inference,
        metrics: &M,
    ) -> Result<Prediction, String> {
        self.request_count += 1;
        metrics.record_request();

        let (label, confidence) = inference.predict(text).await?;

        self.confidence_observations.push(confidence);
        metrics.record_confidence(confidence);

        let prediction = Prediction::new(label, confidence);
        self.current_prediction = Some(prediction.clone());
        self.feedback_given = None;

        Ok(prediction)
    }

    /// Records a yes/no verdict for the current prediction.
    ///
    /// Returns `false` without changing any state when there is no
    /// current prediction or it already received feedback. Otherwise
    /// appends to the history, bumps the matching counter, and pushes
    /// the recomputed running accuracy to the metrics sink.
    pub fn submit_feedback<M: MetricsRecorder>(&mut self, verdict: Verdict, metrics: &M) -> bool {
        if self.current_prediction.is_none() || self.feedback_given.is_some() {
            debug!("Ignoring feedback: no prediction awaiting a verdict");
            return false;
        }

        let correct = match verdict {
            Verdict::Yes => 1u8,
            Verdict::No => 0u8,
        };
        let now = Utc::now().timestamp_millis() as f64 / 1000.0;
        self.accuracy_history.push((now, correct));
        match verdict {
            Verdict::Yes => self.yes_count += 1,
            Verdict::No => self.no_count += 1,
        }
        self.feedback_given = Some(verdict);

        if let Some(accuracy) = self.running_accuracy() {
            metrics.record_accuracy(accuracy);
        }
        true
    }

    /// Fraction of all feedback entries marked correct, or `None` when
    /// no feedback has been given yet.
    pub fn running_accuracy(&self) -> Option<f64> {
        if self.accuracy_history.is_empty() {
            return None;
        }
        let correct: u64 = self.accuracy_history.iter().map(|(_, c)| u64::from(*c)).sum();
        Some(correct as f64 / self.accuracy_history.len() as f64)
    }

    pub fn request_count(&self) -> u64 {
        self.request_count
    }

    pub fn yes_count(&self) -> u64 {
        self.yes_count
    }

    pub fn no_count(&self) -> u64 {
        self.no_count
    }

    /// Timestamped correctness judgments, oldest first.
    pub fn accuracy_history(&self) -> &[(f64, u8)] {
        &self.accuracy_history
    }

    pub fn confidence_observations(&self) -> &[f64] {
        &self.confidence_observations
    }

    pub fn current_prediction(&self) -> Option<&Prediction> {
        self.current_prediction.as_ref()
    }

    pub fn feedback_given(&self) -> Option<Verdict> {
        self.feedback_given
    }
}
