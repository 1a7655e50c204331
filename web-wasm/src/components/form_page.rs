//! 申請フォームビュー（Composeビュー）
//!
//! 入力の収集と検証、Webhook送信、成功時のResultビューへの
//! ハンドオフまでを担当する。

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use face_check_common::{ComposeForm, DetectionField, ResultState};
use gloo::console;

use crate::api::webhook;
use crate::app::Route;
use crate::components::{
    detection_list::DetectionList, error_banner::ErrorBanner, header::Header,
};

/// datetime-local形式（YYYY-MM-DDTHH:MM）の現在時刻
fn default_captured_at() -> String {
    let mut iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.truncate(16);
    iso
}

#[component]
pub fn FormPage(
    endpoint: &'static str,
    set_route: WriteSignal<Route>,
    set_result_state: WriteSignal<Option<ResultState>>,
) -> impl IntoView {
    let (form, set_form) = signal(ComposeForm::new(default_captured_at()));

    let on_add = move |_: ()| {
        set_form.update(|f| f.add_detection(default_captured_at()));
    };
    let on_remove = move |index: usize| {
        set_form.update(|f| {
            f.remove_detection(index);
        });
    };
    let on_update = move |index: usize, field: DetectionField, value: String| {
        set_form.update(|f| f.update_detection(index, field, value));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // 前回のエラーをクリアしてから検証する
        set_form.update(|f| f.error = None);

        let request = match form.with(|f| f.build_request(js_sys::Date::now() as u64)) {
            Ok(request) => request,
            Err(e) => {
                set_form.update(|f| f.error = Some(e.to_string()));
                return;
            }
        };

        set_form.update(|f| f.submitting = true);

        spawn_local(async move {
            match webhook::submit(endpoint, &request).await {
                Ok(results) => {
                    // 成功時はビューごと置き換えるので submitting は戻さない
                    set_result_state.set(Some(ResultState::from_submission(&request, results)));
                    set_route.set(Route::Results);
                }
                Err(e) => {
                    console::error!(format!("送信失敗: {}", e));
                    set_form.update(|f| {
                        f.error = Some(e.to_string());
                        f.submitting = false;
                    });
                }
            }
        });
    };

    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="form-page">
            <Header />

            <form class="submission-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="candidate-name">"候補者名"</label>
                    <input
                        type="text"
                        id="candidate-name"
                        placeholder="山田太郎"
                        prop:value=move || form.with(|f| f.candidate_name.clone())
                        disabled=submitting
                        on:input=move |ev| {
                            set_form.update(|f| f.candidate_name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="email">"メールアドレス"</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="taro@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        disabled=submitting
                        on:input=move |ev| {
                            set_form.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="source-image">"ソース画像URL"</label>
                    <input
                        type="url"
                        id="source-image"
                        placeholder="https://example.com/source.jpg"
                        prop:value=move || form.with(|f| f.source_image.clone())
                        disabled=submitting
                        on:input=move |ev| {
                            set_form.update(|f| f.source_image = event_target_value(&ev));
                        }
                    />
                    <Show when=move || form.with(|f| !f.source_image.trim().is_empty())>
                        <div class="source-preview">
                            <img
                                src=move || form.with(|f| f.source_image.clone())
                                alt="ソース画像プレビュー"
                            />
                        </div>
                    </Show>
                </div>

                <DetectionList
                    form=form
                    on_add=on_add
                    on_remove=on_remove
                    on_update=on_update
                />

                {move || {
                    form.with(|f| f.error.clone())
                        .map(|message| view! { <ErrorBanner message=message /> })
                }}

                <button
                    type="submit"
                    class="btn btn-primary btn-submit"
                    disabled=submitting
                >
                    {move || if submitting() { "送信中..." } else { "解析を依頼する" }}
                </button>
            </form>
        </div>
    }
}
