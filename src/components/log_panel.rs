//! Log Panel Component
//!
//! Corner toggle plus a panel listing the most recent log lines kept by the
//! console logger, newest first.

use console_logger::LoggerHandle;
use leptos::prelude::*;

use crate::i18n::use_i18n;

/// CSS class for a formatted line, picked from its level prefix
pub fn line_class(line: &str) -> &'static str {
    let line = line.trim_start();
    if line.starts_with("ERROR") {
        "log-line error"
    } else if line.starts_with("WARN") {
        "log-line warning"
    } else {
        "log-line info"
    }
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let i18n = use_i18n();
    // Absent when the logger failed to install
    let handle = use_context::<LoggerHandle>();

    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = {
        let handle = handle.clone();
        move || {
            if let Some(handle) = &handle {
                let mut recent = handle.recent_lines();
                recent.reverse();
                set_lines.set(recent);
            }
        }
    };

    let toggle = move |_| {
        if !open.get_untracked() {
            refresh();
        }
        set_open.update(|v| *v = !*v);
    };

    let clear = move |_| {
        if let Some(handle) = &handle {
            handle.clear();
        }
        set_lines.set(Vec::new());
    };

    view! {
        <button class="corner-btn log-btn" title=move || i18n.t("logs.title") on:click=toggle>
            "📋"
        </button>
        <Show when=move || open.get()>
            <div class="log-panel">
                <div class="log-panel-header">
                    <span>{move || i18n.t("logs.title")}</span>
                    <div class="log-panel-actions">
                        <button class="btn small secondary" on:click=clear.clone()>
                            {move || i18n.t("logs.clear")}
                        </button>
                        <button class="btn small secondary" on:click=move |_| set_open.set(false)>
                            {move || i18n.t("common.close")}
                        </button>
                    </div>
                </div>
                <div class="log-panel-lines">
                    <Show
                        when=move || !lines.get().is_empty()
                        fallback=move || view! { <p class="empty">{move || i18n.t("logs.empty")}</p> }
                    >
                        {move || lines.get().into_iter().map(|line| {
                            let class = line_class(&line);
                            view! { <div class=class>{line}</div> }
                        }).collect_view()}
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_class_by_level() {
        assert_eq!(line_class("ERROR food_diary_ui::session: login failed"), "log-line error");
        assert_eq!(line_class(" WARN food_diary_ui::i18n: translation key not found"), "log-line warning");
        assert_eq!(line_class(" INFO food_diary_ui::session: logged in"), "log-line info");
        assert_eq!(line_class("DEBUG food_diary_ui::api: api request"), "log-line info");
    }
}
