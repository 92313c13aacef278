//! Environment queries shared across host services and the shell runtime.

/// Returns the current viewport size in CSS pixels.
///
/// Callers read this at gesture time rather than caching it, so window
/// geometry always tracks the live browser size. On non-WASM targets a fixed
/// desktop-sized viewport is reported.
pub fn viewport_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return (1280, 800);
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1280.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        (width as i32, height as i32)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        (1280, 800)
    }
}

/// Returns a uniform sample in `[0, 1)` for spawn-position jitter.
///
/// The non-WASM fallback is a fixed midpoint so reducer tests stay
/// deterministic.
pub fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}
