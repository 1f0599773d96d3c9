//! ルーター定義

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_analyze};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// リクエストボディのサイズ制限 (axum デフォルト 2MB) は無効化する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/analyze", post(post_analyze))
    .route("/health", get(health_check))
    .layer(DefaultBodyLimit::disable())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// Ctrl+C / SIGTERM を受けると処理中のリクエストを完了してから終了する。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {addr}: {e}")))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  tracing::info!("サーバーを停止しました");
  Ok(())
}

/// 終了シグナルを待つ
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "Ctrl+C ハンドラーの登録に失敗しました");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "SIGTERM ハンドラーの登録に失敗しました");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }

  tracing::info!("終了シグナルを受信しました");
}
