//! 申請フォームの状態と操作
//!
//! ワークフローはCompose（入力中）とResult（判定表示）の2状態。
//! ここではCompose側の状態機械と、Resultへ渡す単回ハンドオフを持つ。
//! ビュー層（WASM/CLI）はこの型を直接使う。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Detection, DetectionResult, SourceImage, SubmissionRequest};

/// 検出行の編集対象フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionField {
    DetectionId,
    CapturedAt,
    ImageUrl,
}

/// 入力中フォームの状態
///
/// serdeはCLIの申請ファイル読み込みに使う。`submitting` と `error` は
/// 実行時専用のためシリアライズ対象外。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeForm {
    pub candidate_name: String,
    pub email: String,
    pub source_image: String,
    pub detections: Vec<Detection>,

    #[serde(skip)]
    pub submitting: bool,

    #[serde(skip)]
    pub error: Option<String>,
}

impl ComposeForm {
    /// 空行1件から始まるフォームを作る
    pub fn new(captured_at: impl Into<String>) -> Self {
        Self {
            detections: vec![Detection::with_captured_at(captured_at)],
            ..Self::default()
        }
    }

    /// 検出行を末尾に追加する（件数上限なし）
    pub fn add_detection(&mut self, captured_at: impl Into<String>) {
        self.detections.push(Detection::with_captured_at(captured_at));
    }

    /// `index` の行を削除する
    ///
    /// 行が1件しか無いときは削除せず `false` を返す（常に1行は残す）。
    pub fn remove_detection(&mut self, index: usize) -> bool {
        if self.detections.len() <= 1 || index >= self.detections.len() {
            return false;
        }
        self.detections.remove(index);
        true
    }

    /// `index` の行の1フィールドだけを置き換える
    ///
    /// 他の行には触れず、順序も変えない。範囲外の `index` は無視する。
    pub fn update_detection(&mut self, index: usize, field: DetectionField, value: String) {
        if let Some(detection) = self.detections.get_mut(index) {
            match field {
                DetectionField::DetectionId => detection.detection_id = value,
                DetectionField::CapturedAt => detection.captured_at = value,
                DetectionField::ImageUrl => detection.image_url = value,
            }
        }
    }

    /// `image_url` が空白のみでない行だけを返す
    fn valid_detections(&self) -> Vec<Detection> {
        self.detections
            .iter()
            .filter(|d| !d.image_url.trim().is_empty())
            .cloned()
            .collect()
    }

    /// 送信前検証
    ///
    /// 最初に失敗した規則のメッセージだけを返す。部分的な送信はしない。
    pub fn validate(&self) -> Result<()> {
        if self.candidate_name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(Error::Validation(
                "候補者名とメールアドレスを入力してください".to_string(),
            ));
        }

        if self.source_image.trim().is_empty() {
            return Err(Error::Validation(
                "ソース画像のURLを入力してください".to_string(),
            ));
        }

        if self.valid_detections().is_empty() {
            return Err(Error::Validation(
                "検出画像のURLを1件以上入力してください".to_string(),
            ));
        }

        Ok(())
    }

    /// 検証して送信ペイロードを組み立てる
    ///
    /// 空の `detection_id` は `image-<now_millis>` に補完する。
    /// 行の順序は入力順のまま保つ。時刻は呼び出し側が注入する。
    pub fn build_request(&self, now_millis: u64) -> Result<SubmissionRequest> {
        self.validate()?;

        let detections = self
            .valid_detections()
            .into_iter()
            .map(|mut d| {
                if d.detection_id.trim().is_empty() {
                    d.detection_id = format!("image-{}", now_millis);
                }
                d
            })
            .collect();

        Ok(SubmissionRequest {
            candidate_name: self.candidate_name.clone(),
            email: self.email.clone(),
            source_image: SourceImage {
                image_url: self.source_image.clone(),
            },
            detections,
        })
    }
}

/// Resultビューへの単回ハンドオフ
///
/// 送信成功時にだけ作られる不変スナップショット。再取得も再検証も
/// しない。これが無い状態でResultビューに入った場合は入力へ戻す。
#[derive(Debug, Clone, PartialEq)]
pub struct ResultState {
    pub candidate_name: String,
    pub email: String,
    pub source_image: String,
    pub detections: Vec<Detection>,
    pub results: Vec<DetectionResult>,
}

impl ResultState {
    /// 送信済みペイロードと応答からスナップショットを作る
    pub fn from_submission(request: &SubmissionRequest, results: Vec<DetectionResult>) -> Self {
        Self {
            candidate_name: request.candidate_name.clone(),
            email: request.email.clone(),
            source_image: request.source_image.image_url.clone(),
            detections: request.detections.clone(),
            results,
        }
    }
}
