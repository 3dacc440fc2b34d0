//! Theme state.
//!
//! The current theme lives in one signal provided at the app root. Consumers
//! read it through [`use_theme`] (read-only); the single component that owns
//! theme switching (the nav) receives the toggle as an explicit prop. The
//! provider is also the only place that touches the document root class and
//! `localStorage`.

use leptos::prelude::*;

const STORAGE_KEY: &str = "tidemark-theme";

/// Color scheme of the site. Dark is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
        }
    }

    fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Read-only handle to the current theme.
#[derive(Clone, Copy)]
pub struct ThemeContext(ReadSignal<Theme>);

impl ThemeContext {
    /// Current theme, reactively.
    pub fn get(self) -> Theme {
        self.0.get()
    }
}

/// The theme context installed by [`provide_theme`]. Panics if called outside
/// the app tree.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Install the theme at the app root and return the toggle for the nav.
///
/// Restores the persisted choice, keeps the document root class and
/// `localStorage` in sync with the signal.
pub fn provide_theme() -> Callback<()> {
    let (theme, set_theme) = signal(stored_theme().unwrap_or_default());
    provide_context(ThemeContext(theme));

    Effect::new(move || apply_theme(theme.get()));

    Callback::new(move |_| set_theme.update(|t| *t = t.flipped()))
}

fn stored_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let name = storage.get_item(STORAGE_KEY).ok()??;
    Theme::from_name(&name)
}

fn apply_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let classes = root.class_list();
            let _ = classes.remove_2(Theme::Dark.class(), Theme::Light.class());
            let _ = classes.add_1(theme.class());
        }
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Theme::from_name(Theme::Dark.name()), Some(Theme::Dark));
        assert_eq!(Theme::from_name(Theme::Light.name()), Some(Theme::Light));
        assert_eq!(Theme::from_name("solarized"), None);
    }

    #[test]
    fn flipping_alternates() {
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
    }
}
