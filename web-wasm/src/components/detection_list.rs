//! 検出画像リストコンポーネント
//!
//! 行の追加・削除・編集はすべてコールバック経由でフォーム状態に
//! 反映する。送信中は全操作を無効化する。

use leptos::prelude::*;

use face_check_common::{ComposeForm, DetectionField};

#[component]
pub fn DetectionList<FA, FR, FU>(
    form: ReadSignal<ComposeForm>,
    on_add: FA,
    on_remove: FR,
    on_update: FU,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(usize) + 'static + Clone + Send + Sync,
    FU: Fn(usize, DetectionField, String) + 'static + Clone + Send + Sync,
{
    let row_count = move || form.with(|f| f.detections.len());
    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="detection-section">
            <div class="detection-section-header">
                <label>"検出画像"</label>
                <button
                    type="button"
                    class="btn btn-secondary btn-small"
                    disabled=submitting
                    on:click={
                        let on_add = on_add.clone();
                        move |_| on_add(())
                    }
                >
                    "+ 検出画像を追加"
                </button>
            </div>

            // 行は添字で同定する（行自体は安定IDを持たない）。各行の
            // 内容は添字経由でフォームから読むため、削除で詰めても
            // 表示はずれない。
            <For
                each={move || (0..row_count()).collect::<Vec<_>>()}
                key=|index| *index
                children=move |index| {
                    let on_remove = on_remove.clone();
                    let on_update = on_update.clone();
                    view! {
                        <DetectionRow
                            form=form
                            index=index
                            on_remove=on_remove
                            on_update=on_update
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn DetectionRow<FR, FU>(
    form: ReadSignal<ComposeForm>,
    index: usize,
    on_remove: FR,
    on_update: FU,
) -> impl IntoView
where
    FR: Fn(usize) + 'static + Clone + Send + Sync,
    FU: Fn(usize, DetectionField, String) + 'static + Clone + Send + Sync,
{
    let entry = move || form.with(|f| f.detections.get(index).cloned().unwrap_or_default());
    let submitting = move || form.with(|f| f.submitting);
    // 最後の1行は削除できない
    let removable = move || form.with(|f| f.detections.len() > 1);

    let on_update_id = on_update.clone();
    let on_update_at = on_update.clone();
    let on_update_url = on_update;

    view! {
        <div class="detection-row">
            <div class="detection-row-header">
                <h4>{move || format!("検出 #{}", index + 1)}</h4>
                <Show when=removable>
                    <button
                        type="button"
                        class="btn btn-remove"
                        disabled=submitting
                        on:click={
                            let on_remove = on_remove.clone();
                            move |_| on_remove(index)
                        }
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <div class="detection-grid">
                <input
                    type="text"
                    placeholder="検出ID（空なら自動採番）"
                    prop:value=move || entry().detection_id
                    disabled=submitting
                    on:input=move |ev| {
                        on_update_id(index, DetectionField::DetectionId, event_target_value(&ev));
                    }
                />
                <input
                    type="text"
                    placeholder="撮影日時"
                    prop:value=move || entry().captured_at
                    disabled=submitting
                    on:input=move |ev| {
                        on_update_at(index, DetectionField::CapturedAt, event_target_value(&ev));
                    }
                />
                <input
                    type="url"
                    placeholder="https://example.com/detection.jpg"
                    prop:value=move || entry().image_url
                    disabled=submitting
                    on:input=move |ev| {
                        on_update_url(index, DetectionField::ImageUrl, event_target_value(&ev));
                    }
                />
            </div>
        </div>
    }
}
