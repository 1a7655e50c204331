//! 判定結果の集計

use crate::types::DetectionResult;

/// 判定結果の集計値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub total: usize,
    pub violations: usize,
    pub clean: usize,
}

impl ResultSummary {
    /// 判定配列から集計する
    pub fn from_results(results: &[DetectionResult]) -> Self {
        let total = results.len();
        let violations = results
            .iter()
            .filter(|r| r.face_detection_violation)
            .count();

        Self {
            total,
            violations,
            clean: total - violations,
        }
    }
}
