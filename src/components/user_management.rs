//! User Management
//!
//! Admin-only screen listing every account with inline role changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error, info};

use crate::api;
use crate::components::ErrorBanner;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::i18n::{translate, use_i18n, Language};
use crate::models::{Role, User};
use crate::navigation::Screen;
use crate::session::use_session;
use crate::store::{store_set_users, use_app_store, AppStateStoreFields};

/// Totals shown above the user table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub admins: usize,
    pub active: usize,
}

impl UserStats {
    pub fn of(users: &[User]) -> Self {
        Self {
            total: users.len(),
            admins: users.iter().filter(|u| u.is_admin()).count(),
            active: users.iter().filter(|u| u.is_active).count(),
        }
    }
}

/// Header keys of the user table, in column order
pub const USER_COLUMNS: [&str; 5] = [
    "auth.fullName",
    "auth.username",
    "auth.role",
    "admin.status",
    "dashboard.actions",
];

/// Banner text after a failed role change. Server details only go to the log.
pub fn role_update_message(lang: Language) -> String {
    translate(lang, "admin.roleUpdateError", &[])
}

#[component]
pub fn UserManagement() -> impl IntoView {
    let session = use_session();
    let i18n = use_i18n();

    view! {
        <Show
            when=move || session.is_admin()
            fallback=move || view! {
                <div class="access-denied">
                    <h2>{move || i18n.t("admin.accessDenied")}</h2>
                </div>
            }
        >
            <UserManagementPanel />
        </Show>
    }
}

#[component]
fn UserManagementPanel() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let session = use_session();
    let store = use_app_store();

    let (error, set_error) = signal::<Option<String>>(None);
    // (user id, requested role) awaiting confirmation
    let (pending, set_pending) = signal::<Option<(u32, Role)>>(None);

    let handle_error = move |context: &str, e: &ApiError| {
        error!("{}: {}", context, e);
        if e.is_unauthorized() {
            session.logout();
        }
    };

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        debug!(trigger, "loading users");
        spawn_local(async move {
            match api::list_users().await {
                Ok(users) => {
                    set_error.set(None);
                    store_set_users(&store, users);
                }
                Err(e) => {
                    handle_error("failed to load users", &e);
                    set_error.set(Some(i18n.t("admin.loadUsersError")));
                    store.users_loading().set(false);
                }
            }
        });
    });

    let confirm_role = move |_| {
        let Some((user_id, role)) = pending.get_untracked() else { return };
        set_pending.set(None);
        spawn_local(async move {
            match api::update_user_role(user_id, role).await {
                Ok(()) => {
                    info!(user_id, role = role.as_str(), "role updated");
                    ctx.reload();
                }
                Err(e) => {
                    handle_error("failed to update role", &e);
                    set_error.set(Some(role_update_message(i18n.language())));
                }
            }
        });
    };

    let stats = Memo::new(move |_| store.users().with(|users| UserStats::of(users)));

    view! {
        <div class="admin-screen">
            <header class="main-header">
                <div class="main-title">
                    <span class="main-title-icon">"👥"</span>
                    <div>
                        <h1>{move || i18n.t("admin.userManagement")}</h1>
                        <p class="welcome">{move || i18n.t("admin.userManagementSubtitle")}</p>
                    </div>
                </div>
                <div class="header-actions">
                    <button class="btn secondary" on:click=move |_| ctx.navigate(Screen::Main)>
                        <span>"←"</span>
                        {move || i18n.t("admin.backToDashboard")}
                    </button>
                </div>
            </header>

            <ErrorBanner message=error />

            <div class="filter-cards">
                <div class="filter-card">
                    <span class="filter-card-label">{move || i18n.t("admin.totalUsers")}</span>
                    <span class="filter-card-count">{move || stats.get().total}</span>
                </div>
                <div class="filter-card safe">
                    <span class="filter-card-label">{move || i18n.t("admin.admins")}</span>
                    <span class="filter-card-count">{move || stats.get().admins}</span>
                </div>
                <div class="filter-card">
                    <span class="filter-card-label">{move || i18n.t("admin.activeUsers")}</span>
                    <span class="filter-card-count">{move || stats.get().active}</span>
                </div>
            </div>

            <section class="card">
                <h2>{move || i18n.t("admin.userList")}</h2>
                <Show
                    when=move || !store.users_loading().get()
                    fallback=move || view! { <div class="loading">{move || i18n.t("admin.loadingUsers")}</div> }
                >
                    <Show
                        when=move || store.users().with(|u| !u.is_empty())
                        fallback=move || view! { <p class="empty">{move || i18n.t("admin.noUsers")}</p> }
                    >
                        <table class="data-table">
                            <thead>
                                <tr>
                                    {USER_COLUMNS.into_iter().map(|key| view! {
                                        <th>{move || i18n.t(key)}</th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || store.users().get()
                                    key=|user| user.clone()
                                    children=move |user| {
                                        let user_id = user.id;
                                        let current_role = user.role;
                                        let full_name = user.full_name.clone().unwrap_or_else(|| "-".to_string());
                                        let username = user.username.clone();
                                        let is_active = user.is_active;
                                        let is_pending = move || pending.with(|p| p.is_some_and(|(id, _)| id == user_id));
                                        view! {
                                            <tr>
                                                <td>{full_name}</td>
                                                <td>{username}</td>
                                                <td>
                                                    <span class=move || {
                                                        if current_role == Role::Admin { "badge admin" } else { "badge user" }
                                                    }>
                                                        {move || i18n.t(current_role.label_key())}
                                                    </span>
                                                </td>
                                                <td>
                                                    <span class=if is_active { "badge active" } else { "badge inactive" }>
                                                        {move || if is_active { i18n.t("admin.active") } else { i18n.t("admin.inactive") }}
                                                    </span>
                                                </td>
                                                <td>
                                                    <Show
                                                        when=is_pending
                                                        fallback=move || view! {
                                                            <select
                                                                class="role-select"
                                                                title=move || i18n.t("admin.changeRole")
                                                                on:change=move |ev| {
                                                                    let role = Role::parse(&event_target_value(&ev));
                                                                    if role != current_role {
                                                                        set_pending.set(Some((user_id, role)));
                                                                    }
                                                                }
                                                            >
                                                                {Role::ALL.into_iter().map(|role| view! {
                                                                    <option value=role.as_str() selected=role == current_role>
                                                                        {move || i18n.t(role.label_key())}
                                                                    </option>
                                                                }).collect_view()}
                                                            </select>
                                                        }
                                                    >
                                                        <span class="role-confirm">
                                                            {move || {
                                                                let role = pending.get().map(|(_, r)| r).unwrap_or_default();
                                                                let label = i18n.t(role.label_key());
                                                                i18n.t_with("admin.confirmRoleChange", &[("role", label.as_str())])
                                                            }}
                                                            <button class="btn-icon confirm" title=move || i18n.t("common.confirm") on:click=confirm_role>
                                                                "✓"
                                                            </button>
                                                            <button class="btn-icon cancel" title=move || i18n.t("common.cancel") on:click=move |_| set_pending.set(None)>
                                                                "✗"
                                                            </button>
                                                        </span>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: u32, role: Role, is_active: bool) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: String::new(),
            full_name: None,
            role,
            is_active,
        }
    }

    #[test]
    fn test_user_stats() {
        let users = vec![
            make_user(1, Role::Admin, true),
            make_user(2, Role::User, true),
            make_user(3, Role::User, false),
        ];
        assert_eq!(
            UserStats::of(&users),
            UserStats {
                total: 3,
                admins: 1,
                active: 2
            }
        );
        assert_eq!(UserStats::of(&[]), UserStats::default());
    }

    #[test]
    fn test_role_and_actions_have_own_columns() {
        let role = USER_COLUMNS.iter().position(|k| *k == "auth.role");
        let actions = USER_COLUMNS.iter().position(|k| *k == "dashboard.actions");
        assert!(role.is_some() && actions.is_some());
        assert_ne!(role, actions);
        for lang in [Language::Pt, Language::En] {
            for key in USER_COLUMNS {
                assert!(crate::i18n::lookup(lang, key).is_some(), "{} missing in {}", key, lang.code());
            }
        }
    }

    #[test]
    fn test_role_update_message_is_translated() {
        assert_eq!(role_update_message(Language::En), "Error updating role");
        assert_eq!(
            role_update_message(Language::Pt),
            crate::i18n::lookup(Language::Pt, "admin.roleUpdateError").unwrap()
        );
    }
}
