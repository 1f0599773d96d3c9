//! API設定の定数定義

/// デフォルトのバインドアドレス
///
/// 開発環境での利用を想定した localhost のポート 8000。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// バインドアドレスを上書きする環境変数名
pub const BIND_ADDR_ENV: &str = "KAZOERU_BIND_ADDR";

/// `RUST_LOG` 未設定時のログフィルター
pub const DEFAULT_LOG_FILTER: &str = "info";
