//! 申請/応答ペイロードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Detection: 検出画像1件（フォームの編集行と送信アイテムを兼ねる）
//! - SubmissionRequest: Webhookへ送る申請ペイロード
//! - DetectionResult: Webhookが返す判定1件

use serde::{Deserialize, Serialize};

/// 検出画像1件
///
/// フォームの編集行と送信ペイロードの要素を同じ形で扱う。
/// `image_url` が空白のみの行は送信前に除外される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Detection {
    pub detection_id: String,
    pub captured_at: String,
    pub image_url: String,
}

impl Detection {
    /// 既定タイムスタンプ付きの空行を作る
    pub fn with_captured_at(captured_at: impl Into<String>) -> Self {
        Self {
            captured_at: captured_at.into(),
            ..Self::default()
        }
    }
}

/// ソース画像（照合基準）のラッパ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceImage {
    pub image_url: String,
}

/// Webhookへ送る申請ペイロード
///
/// ワイヤ上のキーはフィールド名そのまま（snake_case）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub candidate_name: String,
    pub email: String,
    pub source_image: SourceImage,
    pub detections: Vec<Detection>,
}

/// Webhookが返す判定1件
///
/// ワイヤ上のキーは先頭大文字（Detection_id等）。内部名との対応は
/// serdeのrenameで吸収する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(rename = "Detection_id")]
    pub detection_id: String,

    #[serde(rename = "Face_detection_violation")]
    pub face_detection_violation: bool,

    #[serde(rename = "Status")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_with_captured_at() {
        let detection = Detection::with_captured_at("2026-08-06T10:30");
        assert_eq!(detection.detection_id, "");
        assert_eq!(detection.captured_at, "2026-08-06T10:30");
        assert_eq!(detection.image_url, "");
    }

    #[test]
    fn test_submission_request_serialize() {
        let request = SubmissionRequest {
            candidate_name: "山田太郎".to_string(),
            email: "taro@example.com".to_string(),
            source_image: SourceImage {
                image_url: "https://example.com/source.jpg".to_string(),
            },
            detections: vec![Detection {
                detection_id: "d1".to_string(),
                captured_at: "2026-08-06T10:30".to_string(),
                image_url: "https://example.com/detection-1.jpg".to_string(),
            }],
        };

        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert!(json.contains("\"candidate_name\":\"山田太郎\""));
        assert!(json.contains("\"email\":\"taro@example.com\""));
        assert!(json.contains("\"source_image\":{\"image_url\":\"https://example.com/source.jpg\"}"));
        assert!(json.contains("\"detection_id\":\"d1\""));
        assert!(json.contains("\"captured_at\":\"2026-08-06T10:30\""));
    }

    #[test]
    fn test_detection_deserialize_missing_fields() {
        // 入力ファイルでは image_url 以外は省略できる
        let json = r#"{"image_url": "https://example.com/a.jpg"}"#;
        let detection: Detection = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(detection.detection_id, "");
        assert_eq!(detection.captured_at, "");
        assert_eq!(detection.image_url, "https://example.com/a.jpg");
    }

    #[test]
    fn test_detection_result_deserialize_capitalized_keys() {
        let json = r#"{
            "Detection_id": "image-123",
            "Face_detection_violation": true,
            "Status": "multiple faces detected"
        }"#;

        let result: DetectionResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.detection_id, "image-123");
        assert!(result.face_detection_violation);
        assert_eq!(result.status, "multiple faces detected");
    }

    #[test]
    fn test_detection_result_serialize_capitalized_keys() {
        let result = DetectionResult {
            detection_id: "d2".to_string(),
            face_detection_violation: false,
            status: "ok".to_string(),
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"Detection_id\":\"d2\""));
        assert!(json.contains("\"Face_detection_violation\":false"));
        assert!(json.contains("\"Status\":\"ok\""));
    }
}
