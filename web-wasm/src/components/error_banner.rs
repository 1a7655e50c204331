//! エラーバナーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner">
            <span class="error-icon">"⚠"</span>
            <p>{message}</p>
        </div>
    }
}
