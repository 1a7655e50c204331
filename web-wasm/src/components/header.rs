//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Face Check - 顔照合チェック"</h1>
            <p class="subtitle">"ソース画像と検出画像を送信して本人照合を確認します"</p>
        </header>
    }
}
