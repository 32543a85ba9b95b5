//! Light/dark theme, persisted and applied as `data-theme` on `<html>`

use leptos::prelude::*;

use crate::storage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Self {
        if code == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the theme the toggle switches to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn toggle_title_key(&self) -> &'static str {
        match self {
            Theme::Light => "theme.dark",
            Theme::Dark => "theme.light",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn from_storage() -> Self {
        let theme = storage::get(storage::THEME_KEY)
            .map(|code| Theme::from_code(&code))
            .unwrap_or_default();
        apply(theme);
        Self {
            theme: RwSignal::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        storage::set(storage::THEME_KEY, next.code());
        apply(next);
    }
}

fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.code());
    }
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_codes() {
        assert_eq!(Theme::from_code("dark"), Theme::Dark);
        assert_eq!(Theme::from_code("purple"), Theme::Light);
        assert_eq!(Theme::Light.toggled().code(), "dark");
        assert_eq!(Theme::Dark.toggle_title_key(), "theme.light");
    }
}
