//! Login Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorBanner;
use crate::context::use_app_context;
use crate::i18n::use_i18n;
use crate::models::LoginCredentials;
use crate::navigation::Screen;
use crate::session::use_session;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = use_app_context();
    let i18n = use_i18n();
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = LoginCredentials {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match session.login(credentials).await {
                Ok(()) => ctx.navigate(Screen::Main),
                Err(e) => {
                    let message = e
                        .detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| i18n.t("auth.loginError"));
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
                    <h2>{move || i18n.t("auth.loginTitle")}</h2>
                    <p>{move || i18n.t("auth.loginSubtitle")}</p>
                </div>
                <ErrorBanner message=error />
                <form on:submit=on_submit>
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
                        <span>{move || i18n.t("auth.password")}</span>
                        <input
                            type="password"
                            required
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn primary wide" disabled=move || busy.get()>
                        {move || if busy.get() { i18n.t("common.loading") } else { i18n.t("auth.login") }}
                    </button>
                </form>
                <p class="auth-switch">
                    {move || i18n.t("auth.dontHaveAccount")}
                    " "
                    <a href=Screen::Signup.hash() on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Screen::Signup);
                    }>
                        {move || i18n.t("auth.signupHere")}
                    </a>
                </p>
            </div>
        </div>
    }
}
