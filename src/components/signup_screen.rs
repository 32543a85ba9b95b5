//! Signup Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorBanner;
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::models::{Role, SignupData};
use crate::navigation::Screen;
use crate::session::use_session;
use crate::validation::validate_signup;

#[component]
pub fn SignupScreen() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let session = use_session();

    let (full_name, set_full_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (role, set_role) = signal(Role::User);
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name = full_name.get_untracked().trim().to_string();
        let data = SignupData {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            full_name: (!name.is_empty()).then_some(name),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        if let Err(e) = validate_signup(&data, &confirm_password.get_untracked()) {
            set_error.set(Some(e.message(|k| i18n.t(k), |k, p| i18n.t_with(k, p))));
            return;
        }

        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match session.signup(data).await {
                Ok(()) => ctx.navigate(Screen::Login),
                Err(e) => {
                    let message = e
                        .detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| i18n.t("auth.signupError"));
                    set_error.set(Some(message));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="card auth-card">
                <div class="auth-header">
                    <h2>{move || i18n.t("auth.signupTitle")}</h2>
                    <p>{move || i18n.t("auth.signupSubtitle")}</p>
                </div>
                <ErrorBanner message=error />
                <form on:submit=on_submit>
                    <label class="field">
                        <span>{move || i18n.t("auth.fullName")}</span>
                        <input
                            type="text"
                            autocomplete="name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>{move || i18n.t("auth.username")}</span>
                        <input
                            type="text"
                            required
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>{move || i18n.t("auth.email")}</span>
                        <input
                            type="email"
                            required
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>{move || i18n.t("auth.password")}</span>
                        <input
                            type="password"
                            required
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>{move || i18n.t("auth.confirmPassword")}</span>
                        <input
                            type="password"
                            required
                            autocomplete="new-password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>{move || i18n.t("auth.role")}</span>
                        <select
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| set_role.set(Role::parse(&event_target_value(&ev)))
                        >
                            {Role::ALL.into_iter().map(|r| view! {
                                <option value=r.as_str()>{move || i18n.t(r.label_key())}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <button type="submit" class="btn primary wide" disabled=move || busy.get()>
                        {move || if busy.get() { i18n.t("common.loading") } else { i18n.t("auth.signup") }}
                    </button>
                </form>
                <p class="auth-switch">
                    {move || i18n.t("auth.alreadyHaveAccount")}
                    " "
                    <a href=Screen::Login.hash() on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Screen::Login);
                    }>
                        {move || i18n.t("auth.loginHere")}
                    </a>
                </p>
            </div>
        </div>
    }
}
