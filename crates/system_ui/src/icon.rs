//! Centralized icon API for shell chrome and application tiles.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Stable icon identifiers rendered by [`Icon`].
pub enum IconName {
    /// Presentation-deck application tile.
    AppSlides,
    /// Word-processor application tile.
    AppWriter,
    /// Spreadsheet application tile.
    AppSheets,
    /// Image-generation studio tile.
    AppImageLab,
    /// Video-generation studio tile.
    AppVideoLab,
    /// AI assistant application tile.
    AppAssistant,
    /// File-manager application tile.
    AppFiles,
    /// Web-browser application tile.
    AppBrowser,
    /// System settings tile.
    AppSettings,
    /// Keyboard-shortcuts editor tile.
    AppShortcuts,
    /// Menu-bar system mark.
    SystemMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing presets mapped to CSS dimensions.
pub enum IconSize {
    /// 14px glyph.
    Xs,
    /// 18px glyph.
    Sm,
    /// 28px glyph.
    Md,
    /// Fill the parent box.
    Full,
}

impl IconSize {
    fn css_class(self) -> &'static str {
        match self {
            Self::Xs => "ui-icon-xs",
            Self::Sm => "ui-icon-sm",
            Self::Md => "ui-icon-md",
            Self::Full => "ui-icon-full",
        }
    }
}

struct IconArt {
    tile: &'static str,
    accent: &'static str,
    glyph: &'static str,
}

fn icon_art(name: IconName) -> IconArt {
    match name {
        IconName::AppSlides => IconArt {
            tile: "#fff7ed",
            accent: "#ea580c",
            glyph: "M38 30 V70 M38 30 H56 C66 30 66 50 56 50 H38",
        },
        IconName::AppWriter => IconArt {
            tile: "#eff6ff",
            accent: "#2563eb",
            glyph: "M30 32 L40 68 L50 42 L60 68 L70 32",
        },
        IconName::AppSheets => IconArt {
            tile: "#f0fdf4",
            accent: "#16a34a",
            glyph: "M34 34 L66 66 M66 34 L34 66",
        },
        IconName::AppImageLab => IconArt {
            tile: "#fdf4ff",
            accent: "#a21caf",
            glyph: "M30 64 L44 44 L54 56 L62 48 L70 60 M30 68 H70",
        },
        IconName::AppVideoLab => IconArt {
            tile: "#fef2f2",
            accent: "#dc2626",
            glyph: "M40 34 L68 50 L40 66 Z",
        },
        IconName::AppAssistant => IconArt {
            tile: "#fff1f2",
            accent: "#e11d48",
            glyph: "M50 32 C38 32 32 42 32 50 C32 62 42 68 50 68 C58 68 68 62 68 50 C68 42 62 32 50 32 M42 48 H44 M56 48 H58",
        },
        IconName::AppFiles => IconArt {
            tile: "#f8fafc",
            accent: "#0ea5e9",
            glyph: "M30 38 H46 L50 44 H70 V66 H30 Z",
        },
        IconName::AppBrowser => IconArt {
            tile: "#eef2ff",
            accent: "#4f46e5",
            glyph: "M50 32 A18 18 0 1 0 50 68 A18 18 0 1 0 50 32 M32 50 H68 M50 32 C42 42 42 58 50 68 C58 58 58 42 50 32",
        },
        IconName::AppSettings => IconArt {
            tile: "#f9fafb",
            accent: "#4b5563",
            glyph: "M50 38 A12 12 0 1 0 50 62 A12 12 0 1 0 50 38 M50 28 V36 M50 64 V72 M28 50 H36 M64 50 H72",
        },
        IconName::AppShortcuts => IconArt {
            tile: "#fffbeb",
            accent: "#d97706",
            glyph: "M54 30 L36 54 H50 L46 70 L64 46 H50 Z",
        },
        IconName::SystemMark => IconArt {
            tile: "none",
            accent: "currentColor",
            glyph: "M50 30 C36 30 30 42 30 52 C30 64 40 72 50 72 C60 72 70 64 70 52 C70 42 64 30 50 30 M50 30 C54 24 60 24 62 26",
        },
    }
}

#[component]
/// Renders an inline SVG glyph for the given [`IconName`].
pub fn Icon(icon: IconName, #[prop(optional)] size: Option<IconSize>) -> impl IntoView {
    let art = icon_art(icon);
    let class = format!(
        "ui-icon {}",
        size.unwrap_or(IconSize::Full).css_class()
    );

    view! {
        <svg
            class=class
            viewBox="0 0 100 100"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
        >
            {(art.tile != "none")
                .then(|| view! { <rect width="100" height="100" rx="22" fill=art.tile /> })}
            {(art.tile != "none")
                .then(|| view! {
                    <rect x="18" y="18" width="64" height="64" rx="10" fill=art.accent />
                })}
            <path
                d=art.glyph
                stroke=if art.tile == "none" { art.accent } else { "white" }
                stroke-width="6"
                fill="none"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
