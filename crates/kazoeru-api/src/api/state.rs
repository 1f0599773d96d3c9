//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::{AnalysisService, TextAnalysisService};

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service. Both are read-only after construction.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Text Analysis Service
  ///
  /// - Production: `Arc::new(TextAnalysisService)`
  /// - Test: `Arc::new(StubAnalysisService)`
  pub service: Arc<dyn AnalysisService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn AnalysisService>) -> Self {
    Self { config, service }
  }

  /// Creates an AppState backed by the production service
  #[must_use]
  pub fn with_default_service(config: Config) -> Self {
    Self::new(config, Arc::new(TextAnalysisService::new()))
  }
}
