//! Language Selector Component

use leptos::prelude::*;

use crate::i18n::use_i18n;

/// Flag button toggling between Portuguese and English
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            class="corner-btn language-btn"
            title=move || i18n.t("language.switch")
            aria-label=move || i18n.t("language.select")
            on:click=move |_| i18n.toggle()
        >
            {move || i18n.language().flag()}
        </button>
    }
}
