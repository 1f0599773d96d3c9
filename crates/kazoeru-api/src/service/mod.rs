//! service module
mod analysis_service;

pub use analysis_service::{AnalysisService, TextAnalysisService};
