use log::Level;

pub const BRAND_NAME: &str = "Learnwise";

/// Local storage key holding the dark-mode preference as `"true"` / `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class set on `<html>` while the dark palette is active.
pub const DARK_CLASS: &str = "dark";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn placeholder_message(page: &str) -> String {
    format!(
        "Navigating to {} page - routing is not wired up in this preview",
        page
    )
}

pub fn page_title(section: &str) -> String {
    format!("{} | {}", section, BRAND_NAME)
}
