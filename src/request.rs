//! 申請ファイルの読み込みと正規化

use crate::error::Result;
use chrono::Local;
use face_check_common::{ComposeForm, SubmissionRequest};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// datetime-local形式（YYYY-MM-DDTHH:MM）の現在時刻
pub fn default_captured_at() -> String {
    Local::now().format("%Y-%m-%dT%H:%M").to_string()
}

/// 現在時刻のUNIXミリ秒
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// 申請ファイルを読み込む
///
/// ファイルはWebフォームと同じ形（`ComposeForm`のシリアライズ形式）。
pub fn load_form(path: &Path) -> Result<ComposeForm> {
    let content = std::fs::read_to_string(path)?;
    let form: ComposeForm = serde_json::from_str(&content)?;
    Ok(form)
}

/// 撮影日時が空の行を指定時刻で補完する
pub fn fill_captured_at(form: &mut ComposeForm, captured_at: &str) {
    for detection in &mut form.detections {
        if detection.captured_at.trim().is_empty() {
            detection.captured_at = captured_at.to_string();
        }
    }
}

/// フォームを検証して送信ペイロードを組み立てる
pub fn build_request(form: &ComposeForm) -> Result<SubmissionRequest> {
    Ok(form.build_request(now_millis())?)
}
