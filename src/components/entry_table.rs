//! Entry Table Component
//!
//! Lists the filtered entries with per-row actions. Admins can flip the
//! safety flag; owners and admins can edit or delete.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::format::entry_date_label;
use crate::i18n::use_i18n;
use crate::models::FoodEntry;
use crate::session::use_session;

/// Whether `username` may edit/delete `entry`
pub fn can_modify(entry: &FoodEntry, username: Option<&str>, is_admin: bool) -> bool {
    is_admin || username.is_some_and(|name| name == entry.user)
}

#[component]
pub fn EntryTable(
    #[prop(into)] entries: Signal<Vec<FoodEntry>>,
    #[prop(into)] on_edit: Callback<FoodEntry>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_toggle_safety: Callback<(u32, bool)>,
) -> impl IntoView {
    let i18n = use_i18n();
    let session = use_session();

    view! {
        <div class="card entry-list">
            <div class="card-header">
                <span class="card-header-icon">"🍽️"</span>
                <h2>{move || i18n.t("dashboard.foodEntries")}</h2>
            </div>
            <Show
                when=move || !entries.get().is_empty()
                fallback=move || view! {
                    <div class="empty-state">
                        <div class="empty-state-icon">"🍽️"</div>
                        <h3>{move || i18n.t("dashboard.noEntries")}</h3>
                    </div>
                }
            >
                <div class="table-scroll">
                    <table class="entry-table">
                        <thead>
                            <tr>
                                <th>{move || i18n.t("dashboard.user")}</th>
                                <th>{move || i18n.t("dashboard.food")}</th>
                                <th>{move || i18n.t("dashboard.quantity")}</th>
                                <th>{move || i18n.t("dashboard.date")}</th>
                                <th>{move || i18n.t("dashboard.safe")}</th>
                                <th>{move || i18n.t("dashboard.actions")}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || entries.get()
                                key=|entry| entry.clone()
                                children=move |entry| {
                                    let id = entry.id;
                                    let is_safe = entry.is_safe;
                                    let user = entry.user.clone();
                                    let food = entry.food.clone();
                                    let quantity = entry.quantity;
                                    let date = entry.date.clone();
                                    let editable = entry.clone();
                                    let allowed = move || {
                                        can_modify(&entry, session.username().as_deref(), session.is_admin())
                                    };
                                    let safety_label = move || {
                                        if is_safe { i18n.t("dashboard.safe") } else { i18n.t("dashboard.unsafe") }
                                    };
                                    let safety_class = if is_safe { "badge safe" } else { "badge unsafe" };

                                    view! {
                                        <tr>
                                            <td>{user}</td>
                                            <td>{food}</td>
                                            <td>{quantity}</td>
                                            <td>
                                                {move || entry_date_label(date.as_deref(), i18n.language(), |k| i18n.t(k))}
                                            </td>
                                            <td>
                                                {move || if session.is_admin() {
                                                    view! {
                                                        <button
                                                            class=format!("{} toggle", safety_class)
                                                            on:click=move |_| on_toggle_safety.run((id, !is_safe))
                                                        >
                                                            {safety_label}
                                                        </button>
                                                    }.into_any()
                                                } else {
                                                    view! { <span class=safety_class>{safety_label}</span> }.into_any()
                                                }}
                                            </td>
                                            <td class="row-actions">
                                                <Show when=allowed>
                                                    <button
                                                        class="btn small edit-btn"
                                                        on:click={
                                                            let editable = editable.clone();
                                                            move |_| on_edit.run(editable.clone())
                                                        }
                                                    >
                                                        {move || i18n.t("common.edit")}
                                                    </button>
                                                    <DeleteConfirmButton
                                                        button_class="btn small danger"
                                                        on_confirm=Callback::new(move |_| on_delete.run(id))
                                                    />
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_of(user: &str) -> FoodEntry {
        FoodEntry {
            id: 1,
            user: user.to_string(),
            food: "Oats".to_string(),
            quantity: 1,
            is_safe: true,
            date: None,
        }
    }

    #[test]
    fn test_can_modify() {
        let entry = entry_of("ana");
        assert!(can_modify(&entry, Some("ana"), false));
        assert!(!can_modify(&entry, Some("bob"), false));
        assert!(can_modify(&entry, Some("bob"), true));
        assert!(!can_modify(&entry, None, false));
    }
}
