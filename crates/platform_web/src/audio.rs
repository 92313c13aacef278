//! UI sound-effect playback.
//!
//! Effects are short embedded WAV clips played through a cached
//! `HtmlAudioElement` per effect. Autoplay rejections are expected before the
//! first user interaction and are swallowed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named UI sound effects.
pub enum SoundEffect {
    /// Tick played when a window opens, restores, or minimizes.
    MinimizeOpen,
    /// Click played when a window closes.
    Close,
}

// Embedded data URIs keep the shell free of external audio assets.
const MINIMIZE_OPEN_WAV: &str =
    "data:audio/wav;base64,UklGRigAAABXQVZFZm10IBAAAAABAAEARKwAAIhYAQACABAAZGF0YQwAAAAAAAD/8A==";
const CLOSE_WAV: &str =
    "data:audio/wav;base64,UklGRiIAAABXQVZFZm10IBAAAAABAAEAiBUAAIgVAAABAAgAZGF0YQAAAAAA//8=";

impl SoundEffect {
    fn source(self) -> &'static str {
        match self {
            Self::MinimizeOpen => MINIMIZE_OPEN_WAV,
            Self::Close => CLOSE_WAV,
        }
    }
}

/// Plays the given effect, rewinding it first so rapid replays restart.
pub fn play_sound(effect: SoundEffect) {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::collections::HashMap;

        thread_local! {
            static CACHE: RefCell<HashMap<SoundEffect, web_sys::HtmlAudioElement>> =
                RefCell::new(HashMap::new());
        }

        CACHE.with(|cache| {
            let mut cache = cache.borrow_mut();
            let element = match cache.get(&effect) {
                Some(element) => element.clone(),
                None => {
                    let Ok(element) = web_sys::HtmlAudioElement::new_with_src(effect.source())
                    else {
                        leptos::logging::warn!("audio element creation failed for {effect:?}");
                        return;
                    };
                    element.set_volume(0.2);
                    cache.insert(effect, element.clone());
                    element
                }
            };
            element.set_current_time(0.0);
            // Browsers reject autoplay until the user interacts; that is fine.
            let _ = element.play();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = effect;
}
