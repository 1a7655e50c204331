//! メインアプリケーションコンポーネント
//!
//! Compose（入力）とResult（判定表示）の2ビューを、送信成功時にだけ
//! 書き込まれるメモリ内ハンドオフで切り替える。判定ビューはURLや
//! リロードからは到達できない。

use leptos::prelude::*;

use face_check_common::ResultState;

use crate::components::{form_page::FormPage, results_page::ResultsPage};
use crate::config;

/// 表示中のビュー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Compose,
    Results,
}

/// ハンドオフの有無からResultビューの可否を決める
///
/// ハンドオフが無ければ無条件で入力ビューへ戻す。
pub fn route_for_results(has_state: bool) -> Route {
    if has_state {
        Route::Results
    } else {
        Route::Compose
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::Compose);
    // 送信成功時にだけ書き込まれる単回ハンドオフ
    let (result_state, set_result_state) = signal(None::<ResultState>);

    view! {
        <div class="container">
            <Show
                when=move || route.get() == Route::Results
                fallback=move || view! {
                    <FormPage
                        endpoint=config::webhook_url()
                        set_route=set_route
                        set_result_state=set_result_state
                    />
                }
            >
                <ResultsPage
                    result_state=result_state
                    set_result_state=set_result_state
                    set_route=set_route
                />
            </Show>
        </div>
    }
}
