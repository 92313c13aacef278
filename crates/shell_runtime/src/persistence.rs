//! Shell-level persistence adapters for lightweight local preferences.

const WALLPAPER_KEY: &str = "glassdesk.wallpaper.v1";

/// Loads the persisted wallpaper URL, if one was saved.
pub fn load_wallpaper_pref() -> Option<String> {
    platform_web::load_local_pref(WALLPAPER_KEY)
}

/// Persists the wallpaper URL.
///
/// # Errors
///
/// Returns an error when localStorage is unavailable or the write fails.
pub fn persist_wallpaper(url: &str) -> Result<(), String> {
    platform_web::save_local_pref(WALLPAPER_KEY, &url)
}
