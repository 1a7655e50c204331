//! Webhook送信クライアント

use crate::error::Result;
use face_check_common::{parse_results, DetectionResult, Error, SubmissionRequest};
use std::time::Duration;

/// 申請を送信して判定配列を受け取る
///
/// 非2xxは `RequestFailed`、通信と応答解析の失敗は `Transport` として
/// 返す（Webフロントと同じ分類）。
pub async fn submit(
    endpoint: &str,
    request: &SubmissionRequest,
    timeout_seconds: u64,
) -> Result<Vec<DetectionResult>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?;

    let resp = client
        .post(endpoint)
        .json(request)
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::RequestFailed(status.as_u16()).into());
    }

    let body = resp
        .text()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    Ok(parse_results(&body)?)
}
