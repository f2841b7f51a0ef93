use rocket::serde::{Deserialize, Serialize};
use rocket::FromFormField;

/// The two colour presets selectable from the sidebar.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, FromFormField,
)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Theme {
    #[default]
    #[field(value = "light")]
    Light,
    #[field(value = "dark")]
    Dark,
}

/// Colours applied to the page. Passed explicitly to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub theme: Theme,
    pub label: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub input: &'static str,
    pub button: &'static str,
    pub sidebar: &'static str,
}

const LIGHT: ThemeConfig = ThemeConfig {
    theme: Theme::Light,
    label: "🌞 Light Mode",
    background: "#FFFFFF",
    text: "#000000",
    input: "#F5F5F5",
    button: "#007BFF",
    sidebar: "#F0F0F0",
};

const DARK: ThemeConfig = ThemeConfig {
    theme: Theme::Dark,
    label: "🌙 Dark Mode",
    background: "#222831",
    text: "#FFFFFF",
    input: "#2d2f36",
    button: "#00ADB5",
    sidebar: "#000000",
};

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn config(self) -> ThemeConfig {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn form_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl ThemeConfig {
    /// Stylesheet for the page, built from the preset colours.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"
        body {{ background-color: {bg}; color: {text}; font-family: sans-serif; margin: 0; display: flex; min-height: 100vh; }}
        aside {{ background-color: {sidebar}; color: {text}; padding: 16px; width: 240px; }}
        main {{ flex: 1; padding: 16px 32px; }}
        input, textarea, select {{ background-color: {input}; color: {text}; }}
        button {{ background-color: {btn}; color: white; border: none; border-radius: 8px; padding: 10px 16px; transition: 0.3s; }}
        button:hover {{ filter: brightness(90%); }}
        .columns {{ display: flex; gap: 16px; }}
        .columns > div {{ flex: 1; }}
        .success {{ background-color: #d4edda; color: #155724; padding: 12px; border-radius: 8px; }}
        .error {{ background-color: #f8d7da; color: #721c24; padding: 12px; border-radius: 8px; }}
        footer {{ text-align: center; }}
        footer b.author {{ color: {btn}; }}
"#,
            bg = self.background,
            text = self.text,
            sidebar = self.sidebar,
            input = self.input,
            btn = self.button,
        )
    }
}
