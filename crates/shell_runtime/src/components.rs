//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod expose;
mod menu_bar;
mod window;

use leptos::*;
use wasm_bindgen::JsCast;

use self::{dock::Dock, expose::ExposeView, menu_bar::MenuBar, window::DesktopWindow};
use crate::{
    apps,
    model::{AppId, PointerPosition, ResizeEdge, SnapTarget},
    reducer::ShellAction,
};
use platform_web::{ShortcutAction, FILE_DRAG_MIME};
use system_ui::{DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer};

pub use crate::runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn end_active_pointer_interaction(runtime: ShellRuntimeContext) {
    let gestures = runtime.interaction.get_untracked();
    if gestures.dragging.is_some() {
        runtime.dispatch_action(ShellAction::EndMove);
    }
    if gestures.resizing.is_some() {
        runtime.dispatch_action(ShellAction::EndResize);
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

/// Picks the glyph for a desktop file icon from its extension.
fn desktop_file_glyph(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "html" => "📄",
        "css" => "🎨",
        "js" => "📜",
        "md" => "📝",
        "pptx" => "📊",
        "json" => "📦",
        "txt" => "🗒️",
        _ => "📁",
    }
}

fn is_editable_event_target(ev: &web_sys::KeyboardEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    let Ok(element) = target.dyn_into::<web_sys::Element>() else {
        return false;
    };
    let tag = element.tag_name();
    if tag != "INPUT" && tag != "TEXTAREA" {
        return false;
    }
    // The shortcut-capture field records chords itself and must keep
    // receiving them.
    element.id() != apps::SHORTCUT_CAPTURE_INPUT_ID
}

fn handle_global_keydown(runtime: ShellRuntimeContext, ev: &web_sys::KeyboardEvent) {
    // The overview chord works everywhere, inputs included.
    if (ev.meta_key() || ev.ctrl_key()) && ev.key() == "ArrowDown" {
        ev.prevent_default();
        runtime.dispatch_action(ShellAction::ToggleExpose);
        return;
    }

    if ev.key() == "Escape" && runtime.state.get_untracked().expose_active {
        ev.prevent_default();
        runtime.dispatch_action(ShellAction::ExitExpose);
        return;
    }

    if is_editable_event_target(ev) {
        return;
    }

    let bindings = platform_web::load_shortcuts();
    let matched = bindings.iter().find(|binding| {
        binding.keys.matches(
            ev.ctrl_key(),
            ev.alt_key(),
            ev.shift_key(),
            ev.meta_key(),
            &ev.key(),
        )
    });
    if let Some(binding) = matched {
        let ShortcutAction::OpenApp { app_name } = &binding.action;
        // Stale records naming an unknown app fall through silently.
        if let Some(app_id) = apps::app_id_by_name(app_name) {
            ev.prevent_default();
            runtime.dispatch_action(ShellAction::OpenApp { app_id });
        }
    }
}

#[component]
/// Renders the full desktop shell: menu bar, desktop, windows, overview, and
/// dock, plus the global pointer/keyboard listeners that drive gestures.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let dragging_file_over = create_rw_signal(false);

    let keydown_listener =
        window_event_listener(ev::keydown, move |ev| handle_global_keydown(runtime, &ev));
    on_cleanup(move || keydown_listener.remove());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let gestures = runtime.interaction.get_untracked();

        if gestures.dragging.is_some() {
            let viewport = runtime.host.get_value().viewport_rect();
            runtime.dispatch_action(ShellAction::UpdateMove {
                pointer,
                viewport_w: viewport.w,
                viewport_h: viewport.h,
            });
        }
        if gestures.resizing.is_some() {
            runtime.dispatch_action(ShellAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    let on_drag_over = move |ev: web_sys::DragEvent| {
        let Some(transfer) = ev.data_transfer() else {
            return;
        };
        if transfer
            .types()
            .includes(&wasm_bindgen::JsValue::from_str(FILE_DRAG_MIME), 0)
        {
            ev.prevent_default();
            transfer.set_drop_effect("copy");
            dragging_file_over.set(true);
        }
    };
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        dragging_file_over.set(false);

        let Some(payload) = ev
            .data_transfer()
            .and_then(|transfer| transfer.get_data(FILE_DRAG_MIME).ok())
        else {
            return;
        };
        let name = serde_json::from_str::<serde_json::Value>(&payload)
            .ok()
            .and_then(|value| value.get("name")?.as_str().map(str::to_string));
        let Some(name) = name else {
            logging::warn!("discarding malformed desktop drop payload");
            return;
        };

        // Center the icon on the cursor, below the menu bar.
        let menu_bar = runtime.state.get_untracked().tuning.menu_bar_height_px;
        runtime.dispatch_action(ShellAction::DropDesktopItem {
            name,
            position: PointerPosition {
                x: ev.client_x() - 40,
                y: ev.client_y() - menu_bar - 40,
            },
        });
    };

    let wallpaper_style = Signal::derive(move || {
        format!("background-image:url('{}');", state.get().wallpaper_url)
    });
    let snap_preview = Signal::derive(move || {
        runtime
            .interaction
            .get()
            .dragging
            .and_then(|session| session.snap_target)
    });

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class=("drop-target", move || dragging_file_over.get())
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:dragover=on_drag_over
            on:drop=on_drop
            on:dragleave=move |_| dragging_file_over.set(false)
        >
            <DesktopBackdrop style=wallpaper_style>
                <MenuBar />

                <div
                    class="desktop-surface"
                    class=("overview-dimmed", move || state.get().expose_active)
                >
                    <DesktopIconGrid>
                        <For
                            each=move || state.get().desktop_items
                            key=|item| item.id
                            let:item
                        >
                            <DesktopIconButton
                                style=format!(
                                    "left:{}px;top:{}px;",
                                    item.position.x, item.position.y
                                )
                                on_dblclick=Callback::new(move |_| {
                                    runtime.dispatch_action(ShellAction::OpenApp {
                                        app_id: AppId::Files,
                                    });
                                })
                            >
                                <span class="desktop-icon-glyph" aria-hidden="true">
                                    {desktop_file_glyph(&item.name)}
                                </span>
                                <span class="desktop-icon-label">{item.name.clone()}</span>
                            </DesktopIconButton>
                        </For>
                    </DesktopIconGrid>

                    <DesktopWindowLayer>
                        <For each=move || state.get().windows key=|win| win.id.0 let:win>
                            <DesktopWindow window_id=win.id />
                        </For>
                    </DesktopWindowLayer>
                </div>

                {move || {
                    snap_preview
                        .get()
                        .filter(|_| !state.get().expose_active)
                        .map(|SnapTarget { rect, .. }| {
                            view! {
                                <div
                                    class="snap-preview"
                                    style=format!(
                                        "left:{}px;top:{}px;width:{}px;height:{}px;",
                                        rect.x, rect.y, rect.w, rect.h
                                    )
                                />
                            }
                        })
                }}

                <Show when=move || state.get().expose_active fallback=|| ()>
                    <ExposeView />
                </Show>

                <Dock />
            </DesktopBackdrop>

            <Show when=move || state.get().booting fallback=|| ()>
                <BootSplash />
            </Show>
        </div>
    }
}

#[component]
fn BootSplash() -> impl IntoView {
    view! {
        <div class="boot-splash" role="status">
            <span class="boot-splash-mark" aria-hidden="true">
                <system_ui::Icon icon=system_ui::IconName::AppAssistant />
            </span>
            <h1 class="boot-splash-title">"Welcome to Glass Desk"</h1>
            <p class="boot-splash-hint">"Initializing system..."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn desktop_file_glyphs_follow_the_extension() {
        assert_eq!(desktop_file_glyph("index.html"), "📄");
        assert_eq!(desktop_file_glyph("deck.pptx"), "📊");
        assert_eq!(desktop_file_glyph("NOTES.MD"), "📝");
        assert_eq!(desktop_file_glyph("archive"), "📁");
    }
}
