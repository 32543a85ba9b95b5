//! Food Diary App
//!
//! Root component: provides the shared contexts, restores the session and
//! switches between screens.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::debug;

use crate::components::{
    LanguageSelector, LogPanel, LoginScreen, MainScreen, SignupScreen, ThemeToggle, UserManagement,
};
use crate::context::{current_hash, replace_hash, AppContext};
use crate::i18n::I18n;
use crate::navigation::{resolve, Screen};
use crate::session::Session;
use crate::store::{store_reset, AppState};
use crate::theme::ThemeState;

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (requested_screen, set_requested_screen) = signal(Screen::from_hash(&current_hash()));

    let i18n = I18n::from_storage();
    let session = Session::new();
    let ctx = AppContext::new(
        (reload_trigger, set_reload_trigger),
        (requested_screen, set_requested_screen),
    );
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(i18n);
    provide_context(ThemeState::from_storage());
    provide_context(session);
    provide_context(ctx);
    provide_context(store);

    spawn_local(session.restore());

    // Back/forward and manual hash edits
    let _ = window_event_listener(ev::hashchange, move |_| {
        ctx.sync_screen(Screen::from_hash(&current_hash()));
    });

    let screen = Memo::new(move |_| {
        let requested = ctx.requested_screen.get();
        let loading = session.loading();
        session.with_user(|user| resolve(requested, user, loading))
    });

    // Redirects rewrite the hash in place
    Effect::new(move |_| {
        let Some(resolved) = screen.get() else { return };
        if ctx.requested_screen.get_untracked() != Some(resolved) {
            debug!(?resolved, "redirect");
            replace_hash(resolved);
            ctx.sync_screen(Some(resolved));
        }
    });

    // Session ended (logout or expired token): forget its data
    Effect::new(move |_| {
        if !session.loading() && !session.is_authenticated() {
            store_reset(&store);
        }
    });

    view! {
        <div class="app-layout">
            <div class="corner-controls">
                <LanguageSelector />
                <ThemeToggle />
                <LogPanel />
            </div>
            {move || match screen.get() {
                None => view! {
                    <div class="loading">{move || i18n.t("common.loading")}</div>
                }.into_any(),
                Some(Screen::Login) => view! { <LoginScreen /> }.into_any(),
                Some(Screen::Signup) => view! { <SignupScreen /> }.into_any(),
                Some(Screen::Main) => view! { <MainScreen /> }.into_any(),
                Some(Screen::AdminUsers) => view! { <UserManagement /> }.into_any(),
            }}
        </div>
    }
}
