//! Error Banner Component

use leptos::prelude::*;

/// Red banner shown while `message` is set
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class="error-banner" role="alert">{text}</div>
        })}
    }
}
