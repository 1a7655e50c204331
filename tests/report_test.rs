//! 判定レポート整形テスト

use face_check_common::{DetectionResult, ResultSummary};
use face_check_rust::report::{render_report, result_line, summary_line};

fn sample_results() -> Vec<DetectionResult> {
    vec![
        DetectionResult {
            detection_id: "d1".to_string(),
            face_detection_violation: true,
            status: "multiple faces".to_string(),
        },
        DetectionResult {
            detection_id: "d2".to_string(),
            face_detection_violation: false,
            status: "ok".to_string(),
        },
    ]
}

/// 集計行に各件数が入る
#[test]
fn test_summary_line() {
    let summary = ResultSummary::from_results(&sample_results());
    let line = summary_line(&summary);

    assert!(line.contains("検出 2件"));
    assert!(line.contains("違反 1件"));
    assert!(line.contains("クリーン 1件"));
}

/// 違反行とクリーン行の整形
#[test]
fn test_result_line() {
    let results = sample_results();

    let violation = result_line(0, &results[0]);
    assert!(violation.contains("⚠"));
    assert!(violation.contains("#1"));
    assert!(violation.contains("d1"));
    assert!(violation.contains("違反"));
    assert!(violation.contains("multiple faces"));

    let clean = result_line(1, &results[1]);
    assert!(clean.contains("✔"));
    assert!(clean.contains("クリーン"));
    assert!(clean.contains("ok"));
}

/// レポートは集計1行+判定N行
#[test]
fn test_render_report_line_count() {
    let report = render_report(&sample_results());
    assert_eq!(report.lines().count(), 3);
}

/// 判定が空でも集計行は出る
#[test]
fn test_render_report_empty() {
    let report = render_report(&[]);
    assert_eq!(report.lines().count(), 1);
    assert!(report.contains("検出 0件"));
}
