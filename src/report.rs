//! 判定結果の整形出力

use face_check_common::{DetectionResult, ResultSummary};

/// 集計行を整形する
pub fn summary_line(summary: &ResultSummary) -> String {
    format!(
        "検出 {}件 / 違反 {}件 / クリーン {}件",
        summary.total, summary.violations, summary.clean
    )
}

/// 判定1件を1行に整形する
pub fn result_line(index: usize, result: &DetectionResult) -> String {
    let (mark, verdict) = if result.face_detection_violation {
        ("⚠", "違反")
    } else {
        ("✔", "クリーン")
    };

    format!(
        "{} #{} {} [{}] {}",
        mark,
        index + 1,
        result.detection_id,
        verdict,
        result.status
    )
}

/// 判定一覧をまとめて整形する
pub fn render_report(results: &[DetectionResult]) -> String {
    let summary = ResultSummary::from_results(results);
    let mut lines = vec![summary_line(&summary)];

    for (index, result) in results.iter().enumerate() {
        lines.push(result_line(index, result));
    }

    lines.join("\n")
}
