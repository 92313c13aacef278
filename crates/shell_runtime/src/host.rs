//! Host-side execution of reducer effects and browser environment queries.
//!
//! The reducer stays pure; everything timed or media-related lands here. Each
//! scheduled completion re-enters the reducer through a `Finalize*` action
//! that validates current state, so a completion firing after its window is
//! gone is harmless.

use std::time::Duration;

use leptos::{logging, set_timeout};

use crate::model::{WindowId, WindowRect};
use crate::persistence;
use crate::reducer::{RuntimeEffect, ShellAction, WindowTransition};
use crate::runtime_context::ShellRuntimeContext;

#[derive(Debug, Clone, Copy, Default)]
/// Browser host bundle for the shell runtime.
pub struct ShellHostContext;

impl ShellHostContext {
    /// Returns the live viewport rect available to the window manager.
    ///
    /// Read at event time rather than cached, so gestures track window
    /// resizes.
    pub fn viewport_rect(&self) -> WindowRect {
        let (w, h) = platform_web::viewport_size();
        WindowRect { x: 0, y: 0, w, h }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: ShellRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleTransition {
                window_id,
                transition,
                after_ms,
            } => self.schedule_transition(runtime, window_id, transition, after_ms),
            RuntimeEffect::PlaySound(effect) => platform_web::play_sound(effect),
            RuntimeEffect::PersistWallpaper(url) => {
                if let Err(err) = persistence::persist_wallpaper(&url) {
                    logging::warn!("wallpaper persist failed: {err}");
                }
            }
        }
    }

    fn schedule_transition(
        &self,
        runtime: ShellRuntimeContext,
        window_id: WindowId,
        transition: WindowTransition,
        after_ms: u64,
    ) {
        set_timeout(
            move || {
                let action = match transition {
                    WindowTransition::Close => ShellAction::FinalizeClose { window_id },
                    WindowTransition::Minimize => ShellAction::FinalizeMinimize { window_id },
                };
                runtime.dispatch_action(action);
            },
            Duration::from_millis(after_ms),
        );
    }
}
