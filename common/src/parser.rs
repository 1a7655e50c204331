//! Webhook応答のパース

use crate::error::{Error, Result};
use crate::types::DetectionResult;

/// 応答ボディを判定の配列としてパースする
///
/// 解析失敗は通信エラーと同じ分類にする（再送信で回復できる）。
///
/// # Arguments
/// * `body` - 応答ボディのJSON文字列
///
/// # Returns
/// * `Ok(Vec<DetectionResult>)` - パース成功
/// * `Err(Error::Transport)` - 配列として解析できない場合
pub fn parse_results(body: &str) -> Result<Vec<DetectionResult>> {
    serde_json::from_str(body.trim())
        .map_err(|e| Error::Transport(format!("応答の解析に失敗しました: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results_array() {
        let body = r#"[
            {"Detection_id": "d1", "Face_detection_violation": true, "Status": "multiple faces"},
            {"Detection_id": "d2", "Face_detection_violation": false, "Status": "ok"}
        ]"#;

        let results = parse_results(body).expect("パース失敗");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].detection_id, "d1");
        assert!(results[0].face_detection_violation);
        assert_eq!(results[1].status, "ok");
    }

    #[test]
    fn test_parse_results_empty_array() {
        let results = parse_results("[]").expect("パース失敗");
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_results_ignores_unknown_keys() {
        let body = r#"[{"Detection_id": "d1", "Face_detection_violation": false, "Status": "ok", "Score": 0.9}]"#;
        let results = parse_results(body).expect("パース失敗");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_parse_results_trims_whitespace() {
        let body = "  \n[]\n  ";
        assert!(parse_results(body).is_ok());
    }

    #[test]
    fn test_parse_results_invalid_json() {
        let err = parse_results("not json").unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.to_string().contains("応答の解析に失敗しました"));
    }

    #[test]
    fn test_parse_results_object_is_error() {
        // 単一オブジェクトは旧形式。現行契約は配列のみ
        let err = parse_results(r#"{"Detection_id": "d1"}"#).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
