//! kazoeru テキスト計数ライブラリー
//!
//! テキストの単語数・文字数を数える。
//!
//! - 単語: 空白 (Unicode `White_Space`) で区切られた空でない連続部分
//! - 文字: Unicode スカラー値 (バイト数ではない)

/// 計数モジュール - TextStats, word_count, character_count を定義
pub mod stats;

/// 再エクスポート
pub use stats::{TextStats, character_count, word_count};
