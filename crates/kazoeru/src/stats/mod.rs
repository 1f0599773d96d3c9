//! stats モジュール
pub mod text_stats;

/// 再エクスポート
pub use text_stats::{TextStats, character_count, word_count};
