//! Core window-management data model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identity of one managed window, drawn from a creation-time counter.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Fixed set of installable applications.
pub enum AppId {
    Slides,
    Writer,
    Sheets,
    ImageLab,
    VideoLab,
    Assistant,
    Files,
    Browser,
    Settings,
    Shortcuts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window rectangle in viewport pixel coordinates.
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in viewport pixel coordinates.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Candidate docking rectangle computed while a drag is near a viewport edge.
///
/// Snap targets are ephemeral: surfaced as a preview during the gesture and
/// either committed or discarded on release.
pub struct SnapTarget {
    /// Docked geometry the window would take on release.
    pub rect: WindowRect,
    /// When set, release toggles full screen instead of applying `rect`.
    pub full_screen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// State of one open application instance.
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    /// Display title; defaults to the registry name but may diverge.
    pub title: String,
    /// Restorable geometry. Ignored for layout while `full_screen` is set,
    /// but preserved so leaving full screen restores the prior rect.
    pub rect: WindowRect,
    /// Stacking order. Strictly increasing across the whole session; never
    /// reused, so focus recency is always recoverable by comparison.
    pub z_index: u32,
    /// Hidden from the desktop and excluded from focus and overview.
    pub minimized: bool,
    /// Shrink-to-dock exit animation in flight.
    pub minimizing: bool,
    /// Close animation in flight; removal follows once it elapses.
    pub closing: bool,
    pub full_screen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// File icon dropped onto the desktop surface. Desktop items have their own
/// lifecycle: created on drop, never auto-removed.
pub struct DesktopItemRecord {
    pub id: u64,
    pub name: String,
    pub position: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Observable pixel/timing constants of the window manager.
///
/// Defaults are part of the behavioral contract; tests and embedders may
/// override individual values.
pub struct ShellTuning {
    /// Pointer distance from a viewport edge that arms a snap zone.
    pub snap_threshold_px: i32,
    /// Minimum window width enforced on every resize step.
    pub min_window_width: i32,
    /// Minimum window height enforced on every resize step.
    pub min_window_height: i32,
    /// Height of the fixed menu bar; docked geometry starts below it.
    pub menu_bar_height_px: i32,
    /// Close animation duration before a window is removed.
    pub close_animation_ms: u64,
    /// Minimize animation duration before a window is fully hidden.
    pub minimize_animation_ms: u64,
    /// Boot splash duration before the desktop appears.
    pub boot_splash_ms: u64,
    /// Dock icon bounce duration after a click.
    pub dock_bounce_ms: u64,
}

impl Default for ShellTuning {
    fn default() -> Self {
        Self {
            snap_threshold_px: 5,
            min_window_width: 300,
            min_window_height: 200,
            menu_bar_height_px: 28,
            close_animation_ms: 200,
            minimize_animation_ms: 400,
            boot_splash_ms: 3000,
            dock_bounce_ms: 500,
        }
    }
}

/// Menu-bar label shown when no window is active.
pub const IDLE_APP_NAME: &str = "Finder";

const DEFAULT_WALLPAPER_URL: &str = "https://picsum.photos/seed/glassdesk/2560/1440";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Authoritative shell state: the window set, both monotonic counters, and
/// desktop-level presentation flags.
pub struct DesktopState {
    pub next_window_id: u64,
    pub next_z_index: u32,
    pub next_desktop_item_id: u64,
    pub windows: Vec<WindowRecord>,
    pub desktop_items: Vec<DesktopItemRecord>,
    pub expose_active: bool,
    pub wallpaper_url: String,
    pub booting: bool,
    pub tuning: ShellTuning,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_z_index: 10,
            next_desktop_item_id: 1,
            windows: Vec::new(),
            desktop_items: Vec::new(),
            expose_active: false,
            wallpaper_url: DEFAULT_WALLPAPER_URL.to_string(),
            booting: true,
            tuning: ShellTuning::default(),
        }
    }
}

impl DesktopState {
    /// Returns the window with the given id, if still tracked.
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Returns the active window: the highest-stacked window that is neither
    /// minimized nor minimizing, or `None` when every window is hidden.
    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.minimized && !w.minimizing)
            .max_by_key(|w| w.z_index)
    }

    /// Returns the menu-bar application name for the current focus state.
    pub fn active_app_name(&self) -> &'static str {
        self.active_window()
            .map(|w| crate::apps::app_title(w.app_id))
            .unwrap_or(IDLE_APP_NAME)
    }

    /// Returns whether any window for the application exists, minimized or
    /// not. Drives the dock running indicator.
    pub fn is_app_running(&self, app_id: AppId) -> bool {
        self.windows.iter().any(|w| w.app_id == app_id)
    }

    /// Returns the windows shown as overview tiles: everything not fully
    /// minimized. Windows mid-minimize remain selectable until the animation
    /// completes.
    pub fn expose_windows(&self) -> Vec<WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner grabbed by a resize gesture.
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    /// Whether this handle moves the left edge (and therefore the origin x).
    pub fn touches_left(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Whether this handle moves the top edge (and therefore the origin y).
    pub fn touches_top(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transient state of one drag gesture, created on pointer-down over a window
/// header and discarded on release.
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// Armed snap zone, refreshed on every pointer move.
    pub snap_target: Option<SnapTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transient state of one resize gesture.
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Per-gesture interaction state. A window is never dragged and resized at
/// once, but independent windows may each own a live session.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}
