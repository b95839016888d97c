//! Sentiment inference collaborators.
//!
//! The service only depends on the [`Inference`] trait; concrete
//! providers are chosen through the tagged config enum.

pub mod base;
pub mod http_provider;
pub mod lexicon_provider;

pub use base::{create_inference_provider, Inference, InferenceConfig};
