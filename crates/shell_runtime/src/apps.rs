//! Fixed application registry and window-content dispatch.

mod content;

pub use content::SHORTCUT_CAPTURE_INPUT_ID;

use leptos::View;
use system_ui::IconName;

use crate::model::{AppId, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Coarse application category; each maps to a preset launch size.
pub enum AppCategory {
    /// Large editing canvas (writer, slides, sheets, image tools, browser).
    Document,
    /// Full workspace layout (the assistant).
    Studio,
    /// Tall media-generation panel.
    Media,
    /// Vertical listing pane (file manager).
    Listing,
    /// Compact configuration panel.
    Utility,
}

impl AppCategory {
    /// Launch size in pixels for windows of this category.
    pub fn launch_size(self) -> (i32, i32) {
        match self {
            Self::Document => (900, 700),
            Self::Studio => (1024, 768),
            Self::Media => (700, 750),
            Self::Listing => (700, 800),
            Self::Utility => (600, 450),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Immutable descriptor of one installable application. Shared by every
/// window of the app, never owned by a window.
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title: &'static str,
    pub icon: IconName,
    pub category: AppCategory,
}

const APP_REGISTRY: [AppDescriptor; 10] = [
    AppDescriptor {
        app_id: AppId::Slides,
        title: "Slides",
        icon: IconName::AppSlides,
        category: AppCategory::Document,
    },
    AppDescriptor {
        app_id: AppId::Writer,
        title: "Writer",
        icon: IconName::AppWriter,
        category: AppCategory::Document,
    },
    AppDescriptor {
        app_id: AppId::Sheets,
        title: "Sheets",
        icon: IconName::AppSheets,
        category: AppCategory::Document,
    },
    AppDescriptor {
        app_id: AppId::ImageLab,
        title: "Image Lab",
        icon: IconName::AppImageLab,
        category: AppCategory::Document,
    },
    AppDescriptor {
        app_id: AppId::VideoLab,
        title: "Video Lab",
        icon: IconName::AppVideoLab,
        category: AppCategory::Media,
    },
    AppDescriptor {
        app_id: AppId::Assistant,
        title: "Assistant",
        icon: IconName::AppAssistant,
        category: AppCategory::Studio,
    },
    AppDescriptor {
        app_id: AppId::Files,
        title: "Files",
        icon: IconName::AppFiles,
        category: AppCategory::Listing,
    },
    AppDescriptor {
        app_id: AppId::Browser,
        title: "Browser",
        icon: IconName::AppBrowser,
        category: AppCategory::Document,
    },
    AppDescriptor {
        app_id: AppId::Settings,
        title: "Settings",
        icon: IconName::AppSettings,
        category: AppCategory::Utility,
    },
    AppDescriptor {
        app_id: AppId::Shortcuts,
        title: "Shortcuts",
        icon: IconName::AppShortcuts,
        category: AppCategory::Utility,
    },
];

/// Returns the ordered, fixed application registry.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Returns the descriptor for an application.
pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    app_registry()
        .iter()
        .find(|entry| entry.app_id == app_id)
        .expect("every AppId has a registry entry")
}

/// Returns the display title for an application.
pub fn app_title(app_id: AppId) -> &'static str {
    app_descriptor(app_id).title
}

/// Returns the icon for an application.
pub fn app_icon_name(app_id: AppId) -> IconName {
    app_descriptor(app_id).icon
}

/// Returns the launch window size for an application.
pub fn launch_size(app_id: AppId) -> (i32, i32) {
    app_descriptor(app_id).category.launch_size()
}

/// Resolves a registry display name to its application id.
///
/// Unknown names resolve to `None`; callers treat that as a silent no-op so
/// stale persisted references (for example in shortcut records) cannot fail
/// loudly.
pub fn app_id_by_name(name: &str) -> Option<AppId> {
    app_registry()
        .iter()
        .find(|entry| entry.title.eq_ignore_ascii_case(name))
        .map(|entry| entry.app_id)
}

/// Renders the content hosted inside a window's body.
///
/// The window manager treats the returned view as opaque; it only supplies
/// the content-area rectangle.
pub fn render_window_contents(window: &WindowRecord) -> View {
    content::render(window.app_id)
}
