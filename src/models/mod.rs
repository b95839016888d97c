pub mod prediction;

pub use prediction::{Prediction, Sentiment, Verdict};
