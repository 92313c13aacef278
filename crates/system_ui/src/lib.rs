//! Shared UI primitive library for the desktop shell.
//!
//! The crate owns reusable Leptos primitives, the centralized icon API, and
//! the stable `data-ui-*` DOM contract consumed by the shell CSS layers.
//! Shell components compose these primitives instead of emitting ad hoc
//! layout markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, DockItemWell,
    DockSurface, MenuBarSurface, OverlayScrim,
};
