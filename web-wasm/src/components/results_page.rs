//! 判定結果ビュー（Resultビュー）
//!
//! ハンドオフ済みスナップショットの描画専用。状態が無ければ何も
//! 描画せず入力ビューへ無条件リダイレクトする。

use leptos::prelude::*;

use face_check_common::{DetectionResult, ResultState, ResultSummary};

use crate::app::{route_for_results, Route};

#[component]
pub fn ResultsPage(
    result_state: ReadSignal<Option<ResultState>>,
    set_result_state: WriteSignal<Option<ResultState>>,
    set_route: WriteSignal<Route>,
) -> impl IntoView {
    // 直接遷移やリロード相当でハンドオフが無い場合は入力へ戻す
    Effect::new(move |_| {
        if route_for_results(result_state.with(Option::is_some)) == Route::Compose {
            set_route.set(Route::Compose);
        }
    });

    // ハンドオフを破棄して入力へ戻る（入力値は復元しない）
    let on_back = move |_: ()| {
        set_result_state.set(None);
        set_route.set(Route::Compose);
    };

    view! {
        {move || {
            result_state
                .get()
                .map(|state| view! { <ResultsContent state=state on_back=on_back /> })
        }}
    }
}

#[component]
fn ResultsContent<F>(state: ResultState, on_back: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let summary = ResultSummary::from_results(&state.results);
    let cards = state
        .results
        .iter()
        .enumerate()
        .map(|(index, result)| result_card(index, result))
        .collect_view();

    let violations_class = if summary.violations > 0 {
        "summary-value violations"
    } else {
        "summary-value clean"
    };

    let on_back_header = on_back.clone();
    let on_back_footer = on_back;

    view! {
        <div class="results">
            <header class="header results-header">
                <div>
                    <h1>"判定結果"</h1>
                    <p class="subtitle">"顔照合チェックが完了しました"</p>
                </div>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| on_back_header(())
                >
                    "新しい申請"
                </button>
            </header>

            <section class="candidate-info">
                <div class="candidate-text">
                    <p class="candidate-name">{state.candidate_name.clone()}</p>
                    <p class="candidate-email">{state.email.clone()}</p>
                </div>
                <img class="source-thumb" src=state.source_image.clone() alt="ソース画像" />
            </section>

            <section class="summary-grid">
                <div class="summary-cell">
                    <p class="summary-label">"検出数"</p>
                    <p class="summary-value">{summary.total}</p>
                </div>
                <div class="summary-cell">
                    <p class="summary-label">"違反"</p>
                    <p class=violations_class>{summary.violations}</p>
                </div>
                <div class="summary-cell">
                    <p class="summary-label">"クリーン"</p>
                    <p class="summary-value clean">{summary.clean}</p>
                </div>
            </section>

            <section class="result-list">
                <h2>"詳細"</h2>
                {cards}
            </section>

            <footer class="results-footer">
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| on_back_footer(())
                >
                    "もう一度申請する"
                </button>
            </footer>
        </div>
    }
}

/// 判定1件分のカード
fn result_card(index: usize, result: &DetectionResult) -> impl IntoView {
    let violation = result.face_detection_violation;
    let card_class = if violation {
        "result-card violation"
    } else {
        "result-card clean"
    };
    let badge = if violation { "違反" } else { "クリーン" };
    let flag = if violation { "あり" } else { "なし" };

    view! {
        <div class=card_class>
            <div class="result-card-header">
                <h3>{format!("検出 #{}", index + 1)}</h3>
                <span class="badge">{badge}</span>
            </div>
            <dl class="result-fields">
                <div>
                    <dt>"検出ID"</dt>
                    <dd class="mono">{result.detection_id.clone()}</dd>
                </div>
                <div>
                    <dt>"顔検出違反"</dt>
                    <dd>{flag}</dd>
                </div>
                <div class="wide">
                    <dt>"ステータス"</dt>
                    <dd class="mono status">{result.status.clone()}</dd>
                </div>
            </dl>
        </div>
    }
}
