//! CLI設定テスト
//!
//! 設定ファイルの保存・読み込みとエンドポイント解決を検証

use face_check_rust::config::Config;
use face_check_rust::error::FaceCheckError;
use tempfile::tempdir;

/// ファイルが無ければ既定値
#[test]
fn test_load_from_missing_file_returns_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert!(config.webhook_url.is_none());
    assert_eq!(config.timeout_seconds, 60);
}

/// 保存と再読み込み
#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        webhook_url: Some("https://hooks.example.com/face-check".to_string()),
        timeout_seconds: 30,
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(
        loaded.webhook_url.as_deref(),
        Some("https://hooks.example.com/face-check")
    );
    assert_eq!(loaded.timeout_seconds, 30);
}

/// フラグが最優先
#[test]
fn test_resolve_webhook_url_flag_wins() {
    let config = Config {
        webhook_url: Some("https://config.example.com".to_string()),
        timeout_seconds: 60,
    };

    let url = config
        .resolve_webhook_url(Some("https://flag.example.com".to_string()))
        .expect("解決失敗");
    assert_eq!(url, "https://flag.example.com");
}

/// フラグが無ければ設定ファイルの値
#[test]
fn test_resolve_webhook_url_falls_back_to_config() {
    std::env::remove_var("FACE_CHECK_WEBHOOK_URL");
    let config = Config {
        webhook_url: Some("https://config.example.com".to_string()),
        timeout_seconds: 60,
    };

    let url = config.resolve_webhook_url(None).expect("解決失敗");
    assert_eq!(url, "https://config.example.com");
}

/// どこにも無ければ専用エラー
#[test]
fn test_resolve_webhook_url_missing_everywhere() {
    std::env::remove_var("FACE_CHECK_WEBHOOK_URL");
    let config = Config::default();

    let result = config.resolve_webhook_url(None);
    assert!(matches!(result, Err(FaceCheckError::MissingWebhookUrl)));
}
