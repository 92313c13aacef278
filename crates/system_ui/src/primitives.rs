//! Layout primitives for the desktop shell surfaces.

use leptos::*;

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            style=style
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Stacking layer that hosts every managed window frame.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    view! {
        <main
            class="desktop-window-layer"
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </main>
    }
}

#[component]
/// Positioned grid for desktop file icons.
pub fn DesktopIconGrid(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-desktop-icon-grid"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon activation target.
pub fn DesktopIconButton(
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] on_dblclick: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-desktop-icon"
            style=style
            data-ui-primitive="true"
            data-ui-kind="desktop-icon"
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Floating dock container pinned to the bottom of the viewport.
pub fn DockSurface(children: Children) -> impl IntoView {
    view! {
        <footer
            class="ui-dock-surface"
            role="toolbar"
            aria-label="Application dock"
            data-ui-primitive="true"
            data-ui-kind="dock-surface"
        >
            <div class="ui-dock-well">{children()}</div>
        </footer>
    }
}

#[component]
/// Per-application dock slot hosting the icon button and running indicator.
pub fn DockItemWell(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-dock-item"
            data-ui-primitive="true"
            data-ui-kind="dock-item"
        >
            {children()}
        </div>
    }
}

#[component]
/// Fixed top menu bar surface.
pub fn MenuBarSurface(children: Children) -> impl IntoView {
    view! {
        <header
            class="ui-menu-bar"
            role="menubar"
            aria-label="Desktop menu bar"
            data-ui-primitive="true"
            data-ui-kind="menu-bar"
        >
            {children()}
        </header>
    }
}

#[component]
/// Full-viewport dimmed scrim for modal overview surfaces.
pub fn OverlayScrim(
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-overlay-scrim"
            data-ui-primitive="true"
            data-ui-kind="overlay-scrim"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}
