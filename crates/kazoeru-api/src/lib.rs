//! kazoeru-api crate
//!
//! Web server providing word and character counting as HTTP API.
//!
//! ## Endpoints
//! - `POST /analyze` - Word / Character Count
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "hello world"}'
//! # {"original_text":"hello world","word_count":2,"character_count":11}
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse};
pub use service::TextAnalysisService;
