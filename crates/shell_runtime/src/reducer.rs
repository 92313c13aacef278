//! Reducer actions, side-effect intents, and transition logic for the shell.
//!
//! Every window mutation flows through [`reduce_shell`] on the UI thread, so
//! last-write-wins ordering is the whole concurrency policy. Actions naming a
//! window that no longer exists are silent no-ops; that fail-soft rule is
//! what makes the deferred close/minimize completions safe to race against
//! other removals.

use platform_web::SoundEffect;

use crate::geometry;
use crate::model::{
    AppId, DesktopItemRecord, DesktopState, DragSession, InteractionState, PointerPosition,
    ResizeEdge, ResizeSession, WindowId, WindowRecord, WindowRect,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`] to mutate [`DesktopState`].
pub enum ShellAction {
    /// Open the application, focusing an existing instance when one is live.
    OpenApp {
        /// Application to open.
        app_id: AppId,
    },
    /// Begin a window's close animation.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Complete a close whose animation delay elapsed.
    FinalizeClose {
        /// Window scheduled for removal.
        window_id: WindowId,
    },
    /// Begin a window's minimize animation.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Complete a minimize whose animation delay elapsed.
    FinalizeMinimize {
        /// Window scheduled to finish minimizing.
        window_id: WindowId,
    },
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Focus a window and flip its full-screen flag.
    ToggleFullScreen {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Begin dragging a window by its header.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at gesture start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag with the live pointer and viewport.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Viewport width, read at event time.
        viewport_w: i32,
        /// Viewport height, read at event time.
        viewport_h: i32,
    },
    /// End the active drag, committing any armed snap target.
    EndMove,
    /// Begin resizing a window from an edge or corner handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Handle grabbed.
        edge: ResizeEdge,
        /// Pointer position at gesture start.
        pointer: PointerPosition,
    },
    /// Update an in-progress resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active resize.
    EndResize,
    /// Toggle the overview mode.
    ToggleExpose,
    /// Leave overview mode without changing focus.
    ExitExpose,
    /// Focus the selected overview tile and leave overview mode.
    SelectExposeWindow {
        /// Window behind the selected tile.
        window_id: WindowId,
    },
    /// Change the wallpaper and persist the choice.
    SetWallpaper {
        /// Wallpaper image URL.
        url: String,
    },
    /// Restore a persisted wallpaper at boot without re-persisting it.
    HydrateWallpaper {
        /// Wallpaper image URL.
        url: String,
    },
    /// Place a dropped file icon on the desktop.
    DropDesktopItem {
        /// File name carried by the drop payload.
        name: String,
        /// Drop position, already adjusted for the icon hotspot.
        position: PointerPosition,
    },
    /// End the boot splash.
    FinishBoot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Deferred lifecycle completion kinds.
pub enum WindowTransition {
    /// Remove the window once its close animation elapses.
    Close,
    /// Hide the window once its minimize animation elapses.
    Minimize,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_shell`] for the host to execute.
pub enum RuntimeEffect {
    /// Schedule a [`WindowTransition`] completion after the given delay. The
    /// completion action re-checks state when it fires, so a transition that
    /// was superseded in the meantime lands as a no-op.
    ScheduleTransition {
        /// Window the completion targets.
        window_id: WindowId,
        /// Which completion to dispatch.
        transition: WindowTransition,
        /// Delay before dispatching, in milliseconds.
        after_ms: u64,
    },
    /// Play a named UI sound effect.
    PlaySound(SoundEffect),
    /// Persist the wallpaper preference.
    PersistWallpaper(String),
}

/// Applies a [`ShellAction`] to the shell state and collects side effects.
///
/// This function is the authoritative state transition engine for window
/// management. It never fails: actions referencing unknown windows or
/// applications are absorbed silently.
pub fn reduce_shell(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: ShellAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        ShellAction::OpenApp { app_id } => {
            let existing = state
                .windows
                .iter()
                .find(|w| w.app_id == app_id && !w.closing)
                .map(|w| w.id);
            match existing {
                Some(window_id) => {
                    focus_window_internal(state, window_id);
                }
                None => {
                    let window_id = next_window_id(state);
                    let record = WindowRecord {
                        id: window_id,
                        app_id,
                        title: crate::apps::app_title(app_id).to_string(),
                        rect: spawn_rect(app_id),
                        z_index: next_z_index(state),
                        minimized: false,
                        minimizing: false,
                        closing: false,
                        full_screen: false,
                    };
                    state.windows.push(record);
                }
            }
            effects.push(RuntimeEffect::PlaySound(SoundEffect::MinimizeOpen));
        }
        ShellAction::CloseWindow { window_id } => {
            let Some(window) = find_window_mut(state, window_id) else {
                return effects;
            };
            // A second close on an in-flight window must not restart the
            // timer or queue a second removal.
            if window.closing {
                return effects;
            }
            window.closing = true;
            effects.push(RuntimeEffect::PlaySound(SoundEffect::Close));
            effects.push(RuntimeEffect::ScheduleTransition {
                window_id,
                transition: WindowTransition::Close,
                after_ms: state.tuning.close_animation_ms,
            });
        }
        ShellAction::FinalizeClose { window_id } => {
            state.windows.retain(|w| w.id != window_id || !w.closing);
        }
        ShellAction::MinimizeWindow { window_id } => {
            let Some(window) = find_window_mut(state, window_id) else {
                return effects;
            };
            if window.closing || window.minimized || window.minimizing {
                return effects;
            }
            window.minimizing = true;
            effects.push(RuntimeEffect::PlaySound(SoundEffect::MinimizeOpen));
            effects.push(RuntimeEffect::ScheduleTransition {
                window_id,
                transition: WindowTransition::Minimize,
                after_ms: state.tuning.minimize_animation_ms,
            });
        }
        ShellAction::FinalizeMinimize { window_id } => {
            // No-op when the window was restored or removed before the
            // animation delay elapsed.
            if let Some(window) = find_window_mut(state, window_id) {
                if window.minimizing {
                    window.minimizing = false;
                    window.minimized = true;
                }
            }
        }
        ShellAction::FocusWindow { window_id } => {
            focus_window_internal(state, window_id);
        }
        ShellAction::ToggleFullScreen { window_id } => {
            if focus_window_internal(state, window_id) {
                if let Some(window) = find_window_mut(state, window_id) {
                    window.full_screen = !window.full_screen;
                }
            }
        }
        ShellAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.window(window_id) else {
                return effects;
            };
            // Full-screen windows are a drag dead zone.
            if window.full_screen || window.closing {
                return effects;
            }
            let rect_start = window.rect;
            focus_window_internal(state, window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
                snap_target: None,
            });
        }
        ShellAction::UpdateMove {
            pointer,
            viewport_w,
            viewport_h,
        } => {
            let tuning = state.tuning;
            if let Some(session) = interaction.dragging.as_mut() {
                session.snap_target =
                    geometry::snap_target_for_pointer(pointer, viewport_w, viewport_h, &tuning);
                // While a snap zone is armed the preview stands in for the
                // window; free-form movement resumes when the zone clears.
                if session.snap_target.is_none() {
                    let dx = pointer.x - session.pointer_start.x;
                    let dy = pointer.y - session.pointer_start.y;
                    let moved = session.rect_start.offset(dx, dy);
                    if let Some(window) = find_window_mut(state, session.window_id) {
                        window.rect = moved;
                    }
                }
            }
        }
        ShellAction::EndMove => {
            if let Some(session) = interaction.dragging.take() {
                if let Some(snap) = session.snap_target {
                    if let Some(window) = find_window_mut(state, session.window_id) {
                        if !window.closing {
                            if snap.full_screen {
                                window.full_screen = true;
                            } else {
                                window.rect = snap.rect;
                                window.full_screen = false;
                            }
                        }
                    }
                }
            }
        }
        ShellAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(window) = state.window(window_id) else {
                return effects;
            };
            if window.full_screen || window.closing {
                return effects;
            }
            let rect_start = window.rect;
            focus_window_internal(state, window_id);
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                rect_start,
            });
        }
        ShellAction::UpdateResize { pointer } => {
            let tuning = state.tuning;
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let next =
                    geometry::resize_rect(session.rect_start, session.edge, dx, dy, &tuning);
                if let Some(window) = find_window_mut(state, session.window_id) {
                    if !window.full_screen {
                        window.rect = next;
                    }
                }
            }
        }
        ShellAction::EndResize => {
            interaction.resizing = None;
        }
        ShellAction::ToggleExpose => {
            state.expose_active = !state.expose_active;
        }
        ShellAction::ExitExpose => {
            state.expose_active = false;
        }
        ShellAction::SelectExposeWindow { window_id } => {
            focus_window_internal(state, window_id);
            state.expose_active = false;
        }
        ShellAction::SetWallpaper { url } => {
            state.wallpaper_url = url.clone();
            effects.push(RuntimeEffect::PersistWallpaper(url));
        }
        ShellAction::HydrateWallpaper { url } => {
            state.wallpaper_url = url;
        }
        ShellAction::DropDesktopItem { name, position } => {
            // Drops are deduplicated by file name; items are never removed
            // automatically.
            if state.desktop_items.iter().all(|item| item.name != name) {
                let id = state.next_desktop_item_id;
                state.next_desktop_item_id = state.next_desktop_item_id.saturating_add(1);
                state
                    .desktop_items
                    .push(DesktopItemRecord { id, name, position });
            }
        }
        ShellAction::FinishBoot => {
            if state.booting {
                state.booting = false;
                effects.push(RuntimeEffect::PlaySound(SoundEffect::MinimizeOpen));
            }
        }
    }

    effects
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn next_z_index(state: &mut DesktopState) -> u32 {
    let z = state.next_z_index;
    state.next_z_index = state.next_z_index.saturating_add(1);
    z
}

fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Raises `window_id` with a fresh stacking value and clears its hidden
/// flags. Returns `false` for unknown or closing windows, which may not be
/// mutated further.
fn focus_window_internal(state: &mut DesktopState, window_id: WindowId) -> bool {
    let focusable = state
        .windows
        .iter()
        .any(|w| w.id == window_id && !w.closing);
    if !focusable {
        return false;
    }

    let z_index = next_z_index(state);
    if let Some(window) = find_window_mut(state, window_id) {
        window.z_index = z_index;
        window.minimized = false;
        window.minimizing = false;
    }
    true
}

/// Picks the launch rect for a new window: the category's preset size with a
/// small position jitter so consecutive windows do not stack exactly.
fn spawn_rect(app_id: AppId) -> WindowRect {
    let (w, h) = crate::apps::launch_size(app_id);
    let x = (platform_web::random_unit() * 200.0) as i32 + 150;
    let y = (platform_web::random_unit() * 100.0) as i32 + 50;
    WindowRect { x, y, w, h }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, ShellTuning, WindowRect};

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) -> WindowId {
        reduce_shell(state, interaction, ShellAction::OpenApp { app_id });
        state.windows.last().expect("window").id
    }

    fn window<'a>(state: &'a DesktopState, id: WindowId) -> &'a WindowRecord {
        state.window(id).expect("window exists")
    }

    #[test]
    fn open_spawns_window_with_category_size_inside_jitter_band() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppId::Writer);
        let record = window(&state, id);

        assert_eq!((record.rect.w, record.rect.h), (900, 700));
        assert!((150..350).contains(&record.rect.x));
        assert!((50..150).contains(&record.rect.y));
        assert!(!record.minimized && !record.minimizing && !record.closing);
        assert!(!record.full_screen);
    }

    #[test]
    fn reopening_running_app_focuses_existing_instance() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let writer = open(&mut state, &mut interaction, AppId::Writer);
        let _sheets = open(&mut state, &mut interaction, AppId::Sheets);
        reduce_shell(&mut state, &mut interaction, ShellAction::OpenApp { app_id: AppId::Writer });

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.active_window().map(|w| w.id), Some(writer));
    }

    #[test]
    fn z_order_is_strictly_monotonic_with_no_ties() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppId::Writer);
        let b = open(&mut state, &mut interaction, AppId::Sheets);
        let c = open(&mut state, &mut interaction, AppId::Browser);
        reduce_shell(&mut state, &mut interaction, ShellAction::FocusWindow { window_id: a });
        reduce_shell(&mut state, &mut interaction, ShellAction::FocusWindow { window_id: b });

        let mut seen: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), state.windows.len(), "no two windows share a z");

        assert!(window(&state, b).z_index > window(&state, a).z_index);
        assert!(window(&state, a).z_index > window(&state, c).z_index);
    }

    #[test]
    fn active_window_skips_minimized_and_minimizing_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppId::Writer);
        let b = open(&mut state, &mut interaction, AppId::Sheets);
        let c = open(&mut state, &mut interaction, AppId::Browser);

        reduce_shell(&mut state, &mut interaction, ShellAction::MinimizeWindow { window_id: c });
        assert_eq!(state.active_window().map(|w| w.id), Some(b));

        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeMinimize { window_id: c });
        reduce_shell(&mut state, &mut interaction, ShellAction::MinimizeWindow { window_id: b });
        assert_eq!(state.active_window().map(|w| w.id), Some(a));

        reduce_shell(&mut state, &mut interaction, ShellAction::MinimizeWindow { window_id: a });
        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeMinimize { window_id: a });
        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeMinimize { window_id: b });
        assert_eq!(state.active_window(), None);
    }

    #[test]
    fn close_sets_flag_synchronously_and_schedules_one_removal() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppId::Writer);
        let effects =
            reduce_shell(&mut state, &mut interaction, ShellAction::CloseWindow { window_id: id });

        assert!(window(&state, id).closing);
        assert!(effects.contains(&RuntimeEffect::ScheduleTransition {
            window_id: id,
            transition: WindowTransition::Close,
            after_ms: 200,
        }));

        // Second close while the animation is pending schedules nothing.
        let effects =
            reduce_shell(&mut state, &mut interaction, ShellAction::CloseWindow { window_id: id });
        assert_eq!(effects, Vec::new());

        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeClose { window_id: id });
        assert_eq!(state.window(id), None);

        // The second pending completion, had one existed, would find nothing.
        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeClose { window_id: id });
        assert_eq!(state.windows.len(), 0);
    }

    #[test]
    fn closing_window_accepts_no_further_mutation() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppId::Writer);
        reduce_shell(&mut state, &mut interaction, ShellAction::CloseWindow { window_id: id });
        let z_before = window(&state, id).z_index;

        reduce_shell(&mut state, &mut interaction, ShellAction::FocusWindow { window_id: id });
        assert_eq!(window(&state, id).z_index, z_before);

        reduce_shell(&mut state, &mut interaction, ShellAction::BeginMove {
            window_id: id,
            pointer: PointerPosition { x: 0, y: 0 },
        });
        assert_eq!(interaction.dragging, None);

        // Reopening the app spawns a fresh instance instead of reviving the
        // dying window.
        reduce_shell(&mut state, &mut interaction, ShellAction::OpenApp { app_id: AppId::Writer });
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn restore_preempts_a_pending_minimize_completion() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppId::Writer);
        reduce_shell(&mut state, &mut interaction, ShellAction::MinimizeWindow { window_id: id });
        assert!(window(&state, id).minimizing);

        // The user reopens the app before the 400ms completion fires.
        reduce_shell(&mut state, &mut interaction, ShellAction::OpenApp { app_id: AppId::Writer });
        let record = window(&state, id);
        assert!(!record.minimized && !record.minimizing);

        // The stale completion detects the cleared flag and does nothing.
        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeMinimize { window_id: id });
        let record = window(&state, id);
        assert!(!record.minimized && !record.minimizing);
    }

    #[test]
    fn minimize_completion_hides_the_window_when_not_restored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppId::Writer);
        let effects =
            reduce_shell(&mut state, &mut interaction, ShellAction::MinimizeWindow { window_id: id });
        assert!(effects.contains(&RuntimeEffect::ScheduleTransition {
            window_id: id,
            transition: WindowTransition::Minimize,
            after_ms: 400,
        }));

        // A duplicate minimize mid-animation schedules nothing further.
        let effects =
            reduce_shell(&mut state, &mut interaction, ShellAction::MinimizeWindow { window_id: id });
        assert_eq!(effects, Vec::new());

        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeMinimize { window_id: id });
        let record = window(&state, id);
        assert!(record.minimized && !record.minimizing);
    }

    #[test]
    fn drag_applies_raw_pointer_delta_away_from_snap_zones() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppId::Writer);
        let start = window(&state, id).rect;

        reduce_shell(&mut state, &mut interaction, ShellAction::BeginMove {
            window_id: id,
            pointer: PointerPosition { x: 400, y: 300 },
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::UpdateMove {
            pointer: PointerPosition { x: 430, y: 360 },
            viewport_w: 1280,
            viewport_h: 800,
        });

        let moved = window(&state, id).rect;
        assert_eq!(moved.x, start.x + 30);
        assert_eq!(moved.y, start.y + 60);
        assert_eq!((moved.w, moved.h), (start.w, start.h));

        reduce_shell(&mut state, &mut interaction, ShellAction::EndMove);
        assert_eq!(interaction.dragging, None);
        assert_eq!(window(&state, id).rect, moved);
    }

    #[test]
    fn armed_snap_zone_suppresses_position_updates_and_shows_preview() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let id = open(&mut state, &mut interaction, AppId::Writer);
        reduce_shell(&mut state, &mut interaction, ShellAction::BeginMove {
            window_id: id,
            pointer: PointerPosition { x: 400, y: 300 },
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::UpdateMove {
            pointer: PointerPosition { x: 300, y: 300 },
            viewport_w: 1280,
            viewport_h: 800,
        });
        let free_rect = window(&state, id).rect;

        reduce_shell(&mut state, &mut interaction, ShellAction::UpdateMove {
            pointer: PointerPosition { x: 2, y: 300 },
            viewport_w: 1280,
            viewport_h: 800,
        });

        let session = interaction.dragging.as_ref().expect("drag session");
        let preview = session.snap_target.expect("armed zone");
        assert_eq!(
            preview.rect,
            WindowRect { x: 0, y: 28, w: 640, h: 772 }
        );
        assert!(!preview.full_screen);
        // The window itself did not chase the pointer into the zone.
        assert_eq!(window(&state, id).rect, free_rect);

        // Leaving the zone clears the preview and resumes free movement.
        reduce_shell(&mut state, &mut interaction, ShellAction::UpdateMove {
            pointer: PointerPosition { x: 500, y: 300 },
            viewport_w: 1280,
            viewport_h: 800,
        });
        assert_eq!(interaction.dragging.as_ref().unwrap().snap_target, None);
    }

    #[test]
    fn left_snap_commit_is_idempotent_across_repeated_drags() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, AppId::Writer);

        for _ in 0..2 {
            reduce_shell(&mut state, &mut interaction, ShellAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 400, y: 300 },
            });
            reduce_shell(&mut state, &mut interaction, ShellAction::UpdateMove {
                pointer: PointerPosition { x: 0, y: 300 },
                viewport_w: 1280,
                viewport_h: 800,
            });
            reduce_shell(&mut state, &mut interaction, ShellAction::EndMove);

            let record = window(&state, id);
            assert_eq!(record.rect, WindowRect { x: 0, y: 28, w: 640, h: 772 });
            assert!(!record.full_screen);
        }
    }

    #[test]
    fn top_snap_commits_full_screen_and_preserves_restore_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, AppId::Writer);
        let original = window(&state, id).rect;

        reduce_shell(&mut state, &mut interaction, ShellAction::BeginMove {
            window_id: id,
            pointer: PointerPosition { x: 400, y: 300 },
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::UpdateMove {
            pointer: PointerPosition { x: 600, y: 1 },
            viewport_w: 1280,
            viewport_h: 800,
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::EndMove);

        let record = window(&state, id);
        assert!(record.full_screen);
        // Geometry is untouched so leaving full screen restores it.
        assert_eq!(record.rect, original);

        reduce_shell(&mut state, &mut interaction, ShellAction::ToggleFullScreen {
            window_id: id,
        });
        let record = window(&state, id);
        assert!(!record.full_screen);
        assert_eq!(record.rect, original);
    }

    #[test]
    fn top_zone_outranks_side_zones_near_a_corner() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, AppId::Writer);

        reduce_shell(&mut state, &mut interaction, ShellAction::BeginMove {
            window_id: id,
            pointer: PointerPosition { x: 400, y: 300 },
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::UpdateMove {
            pointer: PointerPosition { x: 2, y: 2 },
            viewport_w: 1280,
            viewport_h: 800,
        });

        let session = interaction.dragging.as_ref().expect("drag session");
        assert!(session.snap_target.expect("armed zone").full_screen);
    }

    #[test]
    fn full_screen_windows_are_gesture_dead_zones() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, AppId::Writer);
        reduce_shell(&mut state, &mut interaction, ShellAction::ToggleFullScreen {
            window_id: id,
        });

        reduce_shell(&mut state, &mut interaction, ShellAction::BeginMove {
            window_id: id,
            pointer: PointerPosition { x: 10, y: 10 },
        });
        assert_eq!(interaction.dragging, None);

        reduce_shell(&mut state, &mut interaction, ShellAction::BeginResize {
            window_id: id,
            edge: ResizeEdge::SouthEast,
            pointer: PointerPosition { x: 10, y: 10 },
        });
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn resize_floor_keeps_the_opposite_edge_stationary() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, AppId::Writer);
        let start = window(&state, id).rect;

        reduce_shell(&mut state, &mut interaction, ShellAction::BeginResize {
            window_id: id,
            edge: ResizeEdge::West,
            pointer: PointerPosition { x: start.x, y: 300 },
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::UpdateResize {
            pointer: PointerPosition { x: start.x + start.w + 500, y: 300 },
        });

        let record = window(&state, id);
        assert_eq!(record.rect.w, 300);
        assert_eq!(record.rect.h, start.h);
        assert_eq!(record.rect.x + record.rect.w, start.x + start.w);

        reduce_shell(&mut state, &mut interaction, ShellAction::EndResize);
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn gesture_updates_tolerate_a_window_removed_mid_drag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, AppId::Writer);

        reduce_shell(&mut state, &mut interaction, ShellAction::BeginMove {
            window_id: id,
            pointer: PointerPosition { x: 400, y: 300 },
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::CloseWindow { window_id: id });
        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeClose { window_id: id });

        reduce_shell(&mut state, &mut interaction, ShellAction::UpdateMove {
            pointer: PointerPosition { x: 500, y: 400 },
            viewport_w: 1280,
            viewport_h: 800,
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::EndMove);

        assert_eq!(state.windows.len(), 0);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn expose_tiles_include_minimizing_but_not_minimized_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, AppId::Writer);
        let b = open(&mut state, &mut interaction, AppId::Sheets);

        reduce_shell(&mut state, &mut interaction, ShellAction::MinimizeWindow { window_id: a });
        let tiles: Vec<WindowId> = state.expose_windows().iter().map(|w| w.id).collect();
        assert_eq!(tiles, vec![a, b]);

        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeMinimize { window_id: a });
        let tiles: Vec<WindowId> = state.expose_windows().iter().map(|w| w.id).collect();
        assert_eq!(tiles, vec![b]);
    }

    #[test]
    fn selecting_an_expose_tile_focuses_and_exits_overview() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, AppId::Writer);
        let _b = open(&mut state, &mut interaction, AppId::Sheets);

        reduce_shell(&mut state, &mut interaction, ShellAction::ToggleExpose);
        assert!(state.expose_active);

        reduce_shell(&mut state, &mut interaction, ShellAction::SelectExposeWindow {
            window_id: a,
        });
        assert!(!state.expose_active);
        assert_eq!(state.active_window().map(|w| w.id), Some(a));

        // The backdrop/Escape path leaves focus untouched.
        reduce_shell(&mut state, &mut interaction, ShellAction::ToggleExpose);
        reduce_shell(&mut state, &mut interaction, ShellAction::ExitExpose);
        assert!(!state.expose_active);
        assert_eq!(state.active_window().map(|w| w.id), Some(a));
    }

    #[test]
    fn running_indicator_holds_while_a_window_is_minimized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, AppId::Writer);

        assert!(state.is_app_running(AppId::Writer));
        reduce_shell(&mut state, &mut interaction, ShellAction::MinimizeWindow { window_id: id });
        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeMinimize { window_id: id });
        assert!(state.is_app_running(AppId::Writer));
        assert!(!state.is_app_running(AppId::Sheets));

        reduce_shell(&mut state, &mut interaction, ShellAction::CloseWindow { window_id: id });
        reduce_shell(&mut state, &mut interaction, ShellAction::FinalizeClose { window_id: id });
        assert!(!state.is_app_running(AppId::Writer));
    }

    #[test]
    fn desktop_items_deduplicate_by_name() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_shell(&mut state, &mut interaction, ShellAction::DropDesktopItem {
            name: "notes.md".to_string(),
            position: PointerPosition { x: 100, y: 120 },
        });
        reduce_shell(&mut state, &mut interaction, ShellAction::DropDesktopItem {
            name: "notes.md".to_string(),
            position: PointerPosition { x: 300, y: 320 },
        });

        assert_eq!(state.desktop_items.len(), 1);
        assert_eq!(state.desktop_items[0].position, PointerPosition { x: 100, y: 120 });
    }

    #[test]
    fn wallpaper_change_persists_but_hydration_does_not() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce_shell(&mut state, &mut interaction, ShellAction::SetWallpaper {
            url: "https://example.com/a.jpg".to_string(),
        });
        assert!(effects
            .contains(&RuntimeEffect::PersistWallpaper("https://example.com/a.jpg".to_string())));

        let effects = reduce_shell(&mut state, &mut interaction, ShellAction::HydrateWallpaper {
            url: "https://example.com/b.jpg".to_string(),
        });
        assert_eq!(effects, Vec::new());
        assert_eq!(state.wallpaper_url, "https://example.com/b.jpg");
    }

    #[test]
    fn boot_completes_once_with_a_startup_sound() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        assert!(state.booting);

        let effects = reduce_shell(&mut state, &mut interaction, ShellAction::FinishBoot);
        assert!(!state.booting);
        assert_eq!(
            effects,
            vec![RuntimeEffect::PlaySound(platform_web::SoundEffect::MinimizeOpen)]
        );

        let effects = reduce_shell(&mut state, &mut interaction, ShellAction::FinishBoot);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn tuning_overrides_flow_into_scheduled_delays() {
        let mut state = DesktopState {
            tuning: ShellTuning {
                close_animation_ms: 50,
                minimize_animation_ms: 75,
                ..ShellTuning::default()
            },
            ..DesktopState::default()
        };
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, AppId::Writer);

        let effects =
            reduce_shell(&mut state, &mut interaction, ShellAction::CloseWindow { window_id: id });
        assert!(effects.iter().any(|effect| matches!(
            effect,
            RuntimeEffect::ScheduleTransition { after_ms: 50, .. }
        )));
    }
}
