use rocket::serde::Deserialize;

use crate::theme::Theme;

/// Application settings, read from `Rocket.toml` and `ROCKET_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(crate = "rocket::serde", default)]
pub struct AppConfig {
    /// Theme used when a page is requested without one.
    pub default_theme: Theme,
    /// Name credited in the footer.
    pub author: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            author: "Usman Naseem".to_string(),
        }
    }
}
