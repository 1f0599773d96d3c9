//! リクエストモデル定義

use serde::Deserialize;
use serde_json::Value;

use crate::errors::Result;

/// テキスト計数リクエスト
///
/// `text` は任意。文字列以外の値は [`AnalyzeRequest::into_text`] で空文字列になる。
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
  /// 計数対象のテキスト
  #[serde(default)]
  pub text: Option<Value>,
}

impl AnalyzeRequest {
  /// 文字列を指定してリクエストを作成
  #[must_use]
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: Some(Value::String(text.into())) }
  }

  /// リクエストボディ (JSON) を解釈する
  ///
  /// Content-Type は見ない。
  ///
  /// # Errors
  /// JSON として不正、またはオブジェクトでない場合は `invalid_json`
  pub fn from_slice(body: &[u8]) -> Result<Self> {
    Ok(serde_json::from_slice(body)?)
  }

  /// 計数対象の文字列を取り出す
  ///
  /// 文字列はそのまま、それ以外 (欠落・null・数値・真偽値・配列・オブジェクト) は空文字列。
  #[must_use]
  pub fn into_text(self) -> String {
    match self.text {
      Some(Value::String(text)) => text,
      _ => String::new(),
    }
  }
}
