//! Response Model Definition

use kazoeru::TextStats;
use serde::{Deserialize, Serialize};

/// Text Analysis Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
  /// Input text, echoed back without modification
  pub original_text: String,
  /// Number of whitespace-delimited words
  pub word_count: usize,
  /// Number of Unicode scalar values
  pub character_count: usize,
}

impl AnalyzeResponse {
  /// Builds the response for `text`, computing its statistics
  #[must_use]
  pub fn new(original_text: String) -> Self {
    let TextStats { word_count, character_count } = TextStats::of(&original_text);
    Self { original_text, word_count, character_count }
  }
}
