//! Filter Cards Component
//!
//! Total/safe/unsafe counters that double as the list filter.

use leptos::prelude::*;

use crate::filter::EntryFilter;
use crate::i18n::use_i18n;
use crate::store::{store_entry_counts, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterCards() -> impl IntoView {
    let i18n = use_i18n();
    let store = use_app_store();
    let counts = Memo::new(move |_| store_entry_counts(&store));

    view! {
        <div class="filter-cards">
            {EntryFilter::ALL.into_iter().map(|filter| {
                let is_active = move || store.filter().get() == filter;
                let card_class = move || {
                    if is_active() {
                        format!("filter-card {} active", filter.css_modifier())
                    } else {
                        format!("filter-card {}", filter.css_modifier())
                    }
                };
                view! {
                    <div
                        class=card_class
                        role="button"
                        on:click=move |_| store.filter().set(filter)
                    >
                        <div class="filter-card-icon">{filter.icon()}</div>
                        <h3>{move || i18n.t(filter.label_key())}</h3>
                        <p class="filter-card-count">{move || counts.get().for_filter(filter)}</p>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
