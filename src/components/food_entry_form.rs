//! Food Entry Form Component
//!
//! Create/edit form for a single entry. Validates locally and hands the
//! request body to the parent; the parent talks to the API.

use leptos::prelude::*;

use crate::components::ErrorBanner;
use crate::format::today_iso;
use crate::i18n::use_i18n;
use crate::models::{FoodEntry, FoodEntryInput};
use crate::validation::{parse_quantity, validate_food_entry};

#[component]
pub fn FoodEntryForm(
    /// Entry being edited; `None` for a new entry
    #[prop(optional)]
    initial: Option<FoodEntry>,
    #[prop(into)] on_submit: Callback<FoodEntryInput>,
    #[prop(into)] on_cancel: Callback<()>,
    /// Request in flight
    #[prop(into)]
    busy: Signal<bool>,
    /// Error reported by the server
    #[prop(into)]
    server_error: Signal<Option<String>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let is_editing = initial.is_some();

    let start = match &initial {
        Some(entry) => FoodEntryInput::from_entry(entry, &today_iso()),
        None => FoodEntryInput::blank(&today_iso()),
    };
    let user = start.user.clone();
    let (food, set_food) = signal(start.food);
    let (quantity, set_quantity) = signal(start.quantity);
    let (date, set_date) = signal(start.date);
    let (is_safe, set_is_safe) = signal(start.is_safe);
    let (local_error, set_local_error) = signal::<Option<String>>(None);

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = FoodEntryInput {
            user: user.clone(),
            food: food.get_untracked().trim().to_string(),
            quantity: quantity.get_untracked(),
            is_safe: is_safe.get_untracked(),
            date: date.get_untracked(),
        };
        match validate_food_entry(&input) {
            Ok(()) => {
                set_local_error.set(None);
                on_submit.run(input);
            }
            Err(e) => set_local_error.set(Some(e.message(|k| i18n.t(k), |k, p| i18n.t_with(k, p)))),
        }
    };

    let error = Signal::derive(move || local_error.get().or_else(|| server_error.get()));

    let title = move || {
        if is_editing {
            i18n.t("forms.foodEntry.update")
        } else {
            i18n.t("forms.foodEntry.create")
        }
    };
    let submit_label = move || match (busy.get(), is_editing) {
        (true, true) => i18n.t("forms.foodEntry.updating"),
        (true, false) => i18n.t("forms.foodEntry.creating"),
        (false, true) => i18n.t("forms.foodEntry.update"),
        (false, false) => i18n.t("forms.foodEntry.create"),
    };

    view! {
        <div class="card food-entry-form">
            <h3>{title}</h3>
            <ErrorBanner message=error />
            <form on:submit=on_form_submit>
                <label class="field">
                    <span>{move || i18n.t("forms.foodEntry.food")}</span>
                    <input
                        type="text"
                        required
                        placeholder=move || i18n.t("forms.foodEntry.foodPlaceholder")
                        prop:value=move || food.get()
                        on:input=move |ev| set_food.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>{move || i18n.t("forms.foodEntry.quantity")}</span>
                    <input
                        type="number"
                        min="1"
                        required
                        prop:value=move || quantity.get().to_string()
                        on:input=move |ev| set_quantity.set(parse_quantity(&event_target_value(&ev)))
                    />
                </label>
                <label class="field">
                    <span>{move || i18n.t("forms.foodEntry.date")}</span>
                    <input
                        type="date"
                        required
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="field checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_safe.get()
                        on:change=move |ev| set_is_safe.set(event_target_checked(&ev))
                    />
                    <span>{move || i18n.t("forms.foodEntry.isSafe")}</span>
                </label>
                <div class="form-actions">
                    <button type="submit" class="btn primary" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                    <button type="button" class="btn secondary" on:click=move |_| on_cancel.run(())>
                        {move || i18n.t("common.cancel")}
                    </button>
                </div>
            </form>
        </div>
    }
}
