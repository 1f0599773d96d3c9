//! Text Analysis Service

use crate::errors::Result;
use crate::models::{AnalyzeRequest, AnalyzeResponse};

/// Common interface for the text analysis service
///
/// This trait allows swapping production implementation (`TextAnalysisService`) with
/// test stubs/mocks.
pub trait AnalysisService: Send + Sync {
  /// Counts the words and characters of the request text
  ///
  /// # Errors
  /// - Internal error (stub / alternative implementations only)
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;
}

/// Text Analysis Service
///
/// Holds no state; every call is an independent computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalysisService;

impl TextAnalysisService {
  /// Creates the service
  #[must_use]
  pub fn new() -> Self {
    Self
  }

  /// Counts words and characters
  ///
  /// # Arguments
  /// * `request` - Analysis request
  ///
  /// # Errors
  /// None in this implementation; the computation is total
  pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    Ok(AnalyzeResponse::new(request.into_text()))
  }
}

/// Production implementation of trait `AnalysisService`
impl AnalysisService for TextAnalysisService {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    TextAnalysisService::analyze(self, request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn analyze(request: AnalyzeRequest) -> AnalyzeResponse {
    TextAnalysisService::new().analyze(request).unwrap()
  }

  #[test]
  fn missing_text_is_empty() {
    let response = analyze(AnalyzeRequest::default());
    assert_eq!(response, AnalyzeResponse::new(String::new()));
    assert_eq!(response.word_count, 0);
    assert_eq!(response.character_count, 0);
  }

  #[test]
  fn whitespace_only_text() {
    let response = analyze(AnalyzeRequest::new("   "));
    assert_eq!(response.original_text, "   ");
    assert_eq!(response.word_count, 0);
    assert_eq!(response.character_count, 3);
  }

  #[test]
  fn hello_world() {
    let response = analyze(AnalyzeRequest::new("hello world"));
    assert_eq!(response.word_count, 2);
    assert_eq!(response.character_count, 11);
  }

  #[test]
  fn non_string_text_is_empty() {
    for json in [r#"{"text": 3.5}"#, r#"{"text": true}"#, r#"{"text": [1]}"#, r#"{"text": {}}"#] {
      let response = analyze(AnalyzeRequest::from_slice(json.as_bytes()).unwrap());
      assert_eq!(response.original_text, "", "{json}");
      assert_eq!(response.word_count, 0, "{json}");
      assert_eq!(response.character_count, 0, "{json}");
    }
  }

  #[test]
  fn usable_through_trait_object() {
    let service: &dyn AnalysisService = &TextAnalysisService;
    let response = service.analyze(AnalyzeRequest::new("東京 タワー")).unwrap();
    assert_eq!(response.word_count, 2);
    assert_eq!(response.character_count, 6);
  }
}
