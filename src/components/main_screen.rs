//! Main Screen
//!
//! Dashboard: header, filter cards, entry form and entry table. Every
//! mutation is followed by a full reload of the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error};

use crate::api;
use crate::components::{ChangePasswordForm, EntryTable, FilterCards, FoodEntryForm};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::i18n::use_i18n;
use crate::models::{FoodEntry, FoodEntryInput};
use crate::navigation::Screen;
use crate::session::use_session;
use crate::store::{
    store_filtered_entries, store_reset, store_set_entries, use_app_store, AppStateStoreFields,
};

/// Which form, if any, is open
#[derive(Clone, Debug, PartialEq)]
enum FormMode {
    Closed,
    Create,
    Edit(FoodEntry),
}

#[component]
pub fn MainScreen() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let session = use_session();
    let store = use_app_store();

    let (form_mode, set_form_mode) = signal(FormMode::Closed);
    let saving = RwSignal::new(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    // Expired token: drop the session, the route guard sends us to login
    let handle_error = move |context: &str, e: &ApiError| {
        error!("{}: {}", context, e);
        if e.is_unauthorized() {
            session.logout();
        }
    };

    // Load entries when trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let is_admin = session.is_admin();
        debug!(trigger, is_admin, "loading food entries");
        spawn_local(async move {
            let result = if is_admin {
                api::list_all_food_entries().await
            } else {
                api::list_food_entries().await
            };
            match result {
                Ok(entries) => {
                    debug!("loaded {} entries", entries.len());
                    store_set_entries(&store, entries);
                }
                Err(e) => {
                    handle_error("failed to load entries", &e);
                    store.entries_loading().set(false);
                }
            }
        });
    });

    let open_form = move |mode: FormMode| {
        set_form_error.set(None);
        set_form_mode.set(mode);
    };

    let on_submit = Callback::new(move |input: FoodEntryInput| {
        let mode = form_mode.get_untracked();
        saving.set(true);
        spawn_local(async move {
            let (result, error_key) = match &mode {
                FormMode::Edit(entry) => (
                    api::update_food_entry(entry.id, &input).await,
                    "forms.foodEntry.updateError",
                ),
                _ => (api::create_food_entry(&input).await, "forms.foodEntry.error"),
            };
            match result {
                Ok(()) => {
                    set_form_mode.set(FormMode::Closed);
                    ctx.reload();
                }
                Err(e) => {
                    handle_error("failed to save entry", &e);
                    let message = e.detail().map(str::to_string).unwrap_or_else(|| i18n.t(error_key));
                    set_form_error.set(Some(message));
                }
            }
            saving.set(false);
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        let is_admin = session.is_admin();
        spawn_local(async move {
            let result = if is_admin {
                api::admin_delete_food_entry(id).await
            } else {
                api::delete_food_entry(id).await
            };
            match result {
                Ok(()) => ctx.reload(),
                Err(e) => handle_error("failed to delete entry", &e),
            }
        });
    });

    let on_toggle_safety = Callback::new(move |(id, is_safe): (u32, bool)| {
        if !session.is_admin() {
            return;
        }
        spawn_local(async move {
            match api::set_food_entry_safety(id, is_safe).await {
                Ok(()) => ctx.reload(),
                Err(e) => handle_error("failed to update safety", &e),
            }
        });
    });

    let on_logout = move |_| {
        session.logout();
        store_reset(&store);
        ctx.navigate(Screen::Login);
    };

    let filtered = Signal::derive(move || store_filtered_entries(&store));

    view! {
        <Show
            when=move || !store.entries_loading().get()
            fallback=move || view! { <div class="loading">{move || i18n.t("common.loading")}</div> }
        >
            <div class="main-screen">
                <header class="main-header">
                    <div class="main-title">
                        <span class="main-title-icon">"🍽️"</span>
                        <h1>{move || i18n.t("dashboard.title")}</h1>
                    </div>
                    <p class="welcome">
                        {move || i18n.t_with("dashboard.welcomeMessage", &[("name", session.display_name().as_str())])}
                    </p>
                    <div class="header-actions">
                        <button class="btn success" on:click=move |_| open_form(FormMode::Create)>
                            <span>"+"</span>
                            {move || i18n.t("dashboard.addEntry")}
                        </button>
                        <Show when=move || session.is_admin()>
                            <button class="btn primary" on:click=move |_| ctx.navigate(Screen::AdminUsers)>
                                <span>"👥"</span>
                                {move || i18n.t("admin.userManagement")}
                            </button>
                        </Show>
                        <ChangePasswordForm />
                        <button class="btn danger" on:click=on_logout>
                            {move || i18n.t("auth.logout")}
                        </button>
                    </div>
                </header>

                <section class="main-content">
                    {move || match form_mode.get() {
                        FormMode::Closed => None,
                        FormMode::Create => Some(view! {
                            <FoodEntryForm
                                on_submit=on_submit
                                on_cancel=Callback::new(move |_| set_form_mode.set(FormMode::Closed))
                                busy=saving
                                server_error=form_error
                            />
                        }.into_any()),
                        FormMode::Edit(entry) => Some(view! {
                            <FoodEntryForm
                                initial=entry
                                on_submit=on_submit
                                on_cancel=Callback::new(move |_| set_form_mode.set(FormMode::Closed))
                                busy=saving
                                server_error=form_error
                            />
                        }.into_any()),
                    }}

                    <FilterCards />

                    <EntryTable
                        entries=filtered
                        on_edit=Callback::new(move |entry: FoodEntry| open_form(FormMode::Edit(entry)))
                        on_delete=on_delete
                        on_toggle_safety=on_toggle_safety
                    />
                </section>
            </div>
        </Show>
    }
}
