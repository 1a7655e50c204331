//! Webhookエンドポイント設定
//!
//! デプロイ時はビルド環境変数 FACE_CHECK_WEBHOOK_URL で差し替える。
//! 未指定なら開発用の既定URLを使う。

/// 開発用の既定エンドポイント
const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/face-check";

/// ビルド時設定からエンドポイントURLを解決する
pub fn webhook_url() -> &'static str {
    option_env!("FACE_CHECK_WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL)
}
