use super::*;
use crate::model::{WindowId, WindowRecord};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn frame_style(win: &WindowRecord, menu_bar_px: i32) -> String {
    let base = if win.full_screen {
        format!(
            "top:{menu_bar_px}px;left:0;width:100vw;height:calc(100vh - {menu_bar_px}px);z-index:{};",
            win.z_index
        )
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
        )
    };
    if win.minimized {
        format!("{base}display:none;")
    } else {
        base
    }
}

fn frame_class(win: &WindowRecord, is_active: bool) -> String {
    let mut class = String::from("desktop-window");
    if is_active {
        class.push_str(" active");
    }
    if win.full_screen {
        class.push_str(" full-screen");
    }
    if win.minimizing {
        class.push_str(" minimizing");
    }
    if win.closing {
        class.push_str(" closing");
    }
    class
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });
    let is_active = Signal::derive(move || {
        runtime.state.get().active_window().map(|w| w.id) == Some(window_id)
    });

    let focus = move || {
        let should_focus = window
            .get_untracked()
            .map(|w| !is_active.get_untracked() || w.minimized)
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(ShellAction::FocusWindow { window_id });
        }
    };
    let close = move |_| runtime.dispatch_action(ShellAction::CloseWindow { window_id });
    let minimize = move |_| runtime.dispatch_action(ShellAction::MinimizeWindow { window_id });
    let toggle_full_screen =
        move |_| runtime.dispatch_action(ShellAction::ToggleFullScreen { window_id });

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        if window.get_untracked().map(|w| w.full_screen).unwrap_or(true) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let header_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(ShellAction::ToggleFullScreen { window_id });
    };

    // Rendering from the record directly lets a finalized close drop the
    // frame on the same tick the store forgets the window.
    view! {
        {move || {
            window.get().map(|win| {
                let menu_bar_px = runtime.state.get_untracked().tuning.menu_bar_height_px;

                view! {
                    <section
                        class=frame_class(&win, is_active.get())
                        style=frame_style(&win, menu_bar_px)
                        role="dialog"
                        aria-label=win.title.clone()
                        on:pointerdown=move |_| focus()
                    >
                        <header
                            class="window-titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=header_double_click
                        >
                            <div class="window-controls">
                                <button
                                    class="window-control close"
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    }
                                ></button>
                                <button
                                    class="window-control minimize"
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize(ev);
                                    }
                                ></button>
                                <button
                                    class="window-control zoom"
                                    aria-label=if win.full_screen {
                                        "Exit full screen"
                                    } else {
                                        "Enter full screen"
                                    }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_full_screen(ev);
                                    }
                                ></button>
                            </div>
                            <div class="window-title">{win.title.clone()}</div>
                        </header>
                        <div class="window-body">{apps::render_window_contents(&win)}</div>
                        <Show
                            when=move || {
                                window.get().map(|w| !w.full_screen).unwrap_or(false)
                            }
                            fallback=|| ()
                        >
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::North />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::South />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::East />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::West />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthEast />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthWest />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthEast />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthWest />
                        </Show>
                    </section>
                }
            })
        }}
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_shell_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;

    fn record(full_screen: bool, minimized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId(1),
            app_id: crate::model::AppId::Writer,
            title: "Writer".to_string(),
            rect: WindowRect { x: 40, y: 60, w: 900, h: 700 },
            z_index: 12,
            minimized,
            minimizing: false,
            closing: false,
            full_screen,
        }
    }

    #[test]
    fn windowed_frame_uses_the_record_rect() {
        let style = frame_style(&record(false, false), 28);
        assert_eq!(style, "left:40px;top:60px;width:900px;height:700px;z-index:12;");
    }

    #[test]
    fn full_screen_frame_derives_from_viewport_and_keeps_the_rect() {
        let style = frame_style(&record(true, false), 28);
        assert_eq!(
            style,
            "top:28px;left:0;width:100vw;height:calc(100vh - 28px);z-index:12;"
        );
    }

    #[test]
    fn minimized_frame_is_hidden() {
        assert!(frame_style(&record(false, true), 28).ends_with("display:none;"));
    }

    #[test]
    fn frame_class_reflects_lifecycle_flags() {
        let mut win = record(false, false);
        win.minimizing = true;
        assert_eq!(frame_class(&win, true), "desktop-window active minimizing");
        win.minimizing = false;
        win.closing = true;
        assert_eq!(frame_class(&win, false), "desktop-window closing");
    }
}
