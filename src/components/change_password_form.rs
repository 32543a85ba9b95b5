//! Change Password Form Component
//!
//! Collapsible form in the main screen header.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorBanner;
use crate::i18n::use_i18n;
use crate::session::use_session;
use crate::validation::validate_password;

#[component]
pub fn ChangePasswordForm() -> impl IntoView {
    let i18n = use_i18n();
    let session = use_session();

    let (open, set_open) = signal(false);
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal(false);
    let (busy, set_busy) = signal(false);

    let reset = move || {
        set_password.set(String::new());
        set_confirm.set(String::new());
        set_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_password = password.get_untracked();
        if let Err(e) = validate_password(&new_password, &confirm.get_untracked()) {
            set_error.set(Some(e.message(|k| i18n.t(k), |k, p| i18n.t_with(k, p))));
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match session.change_password(new_password).await {
                Ok(()) => {
                    reset();
                    set_success.set(true);
                    set_open.set(false);
                }
                Err(e) => {
                    let message = e
                        .detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| i18n.t("auth.passwordChangeError"));
                    set_error.set(Some(message));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="change-password">
            <button
                class="btn secondary"
                on:click=move |_| {
                    set_success.set(false);
                    reset();
                    set_open.update(|v| *v = !*v);
                }
            >
                {move || i18n.t("auth.changePassword")}
            </button>
            <Show when=move || success.get()>
                <span class="success-text">{move || i18n.t("auth.passwordChanged")}</span>
            </Show>
            <Show when=move || open.get()>
                <form class="card change-password-form" on:submit=on_submit>
                    <ErrorBanner message=error />
                    <label class="field">
                        <span>{move || i18n.t("auth.newPassword")}</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>{move || i18n.t("auth.confirmPassword")}</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form-actions">
                        <button type="submit" class="btn primary" disabled=move || busy.get()>
                            {move || i18n.t("common.save")}
                        </button>
                        <button type="button" class="btn secondary" on:click=move |_| set_open.set(false)>
                            {move || i18n.t("common.cancel")}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
