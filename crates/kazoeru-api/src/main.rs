//! kazoeru-api サーバーエントリーポイント

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kazoeru_api::ApiError;
use kazoeru_api::api::AppState;
use kazoeru_api::api::run_server;
use kazoeru_api::config::{Config, DEFAULT_LOG_FILTER};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化 (RUST_LOG 未設定時は info)
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(bind_addr = %config.bind_addr, "設定を読み込みました");

  // アプリケーション状態の作成
  let state = AppState::with_default_service(config);

  // サーバー起動
  run_server(state).await
}
