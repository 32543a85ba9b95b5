//! Theme Toggle Component

use leptos::prelude::*;

use crate::i18n::use_i18n;
use crate::theme::use_theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let i18n = use_i18n();
    let theme = use_theme();

    view! {
        <button
            class="corner-btn theme-btn"
            title=move || i18n.t(theme.theme().toggle_title_key())
            on:click=move |_| theme.toggle()
        >
            {move || theme.theme().toggle_icon()}
        </button>
    }
}
