//! HTTPハンドラー定義

use axum::{Json, body::Bytes, extract::State};
use tracing::{debug, error, info, warn};

use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse};

use super::state::AppState;

/// POST /analyze エンドポイント
///
/// テキストの単語数と文字数を数える。
///
/// # Request Body
/// ```json
/// { "text": "hello world" }
/// ```
/// `text` は省略可能。文字列以外の値は空文字列として扱う。
/// Content-Type は検査せず、ボディを JSON として解釈する。
///
/// # Response
/// - 200 OK: `{"original_text": "...", "word_count": 2, "character_count": 11}`
/// - 400 Bad Request: ボディが JSON オブジェクトとして解釈できない
/// - 500 Internal Server Error: 内部エラー
pub async fn post_analyze(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  debug!(body_bytes = body.len(), "計数リクエストを受信");

  // 入力サイズに上限がないため、大きなテキストでも非同期ランタイムをブロックしないよう分離
  let service = state.service.clone();

  let response = tokio::task::spawn_blocking(move || {
    let request = AnalyzeRequest::from_slice(&body).inspect_err(|e| {
      warn!(error = %e, "リクエストボディを解釈できません");
    })?;
    service.analyze(request)
  })
  .await
  .map_err(|e| {
    error!(error = %e, "spawn_blocking エラー");
    ApiError::internal("処理の実行に失敗しました")
  })??;

  info!(
    text_bytes = response.original_text.len(),
    word_count = response.word_count,
    character_count = response.character_count,
    "計数完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
