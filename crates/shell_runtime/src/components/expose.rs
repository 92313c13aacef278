use super::*;
use system_ui::{Icon, IconSize, OverlayScrim};

/// Stagger between overview tile entrances, purely cosmetic.
const TILE_STAGGER_MS: usize = 50;

#[component]
pub(super) fn ExposeView() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let exit = Callback::new(move |_| runtime.dispatch_action(ShellAction::ExitExpose));

    view! {
        <OverlayScrim on_click=exit>
            <div class="expose-grid">
                <For
                    each=move || {
                        state
                            .get()
                            .expose_windows()
                            .into_iter()
                            .enumerate()
                            .collect::<Vec<_>>()
                    }
                    key=|(_, win)| win.id.0
                    let:entry
                >
                    {{
                        let (index, win) = entry;
                        let window_id = win.id;
                        let icon = apps::app_icon_name(win.app_id);
                        view! {
                            <div
                                class="expose-tile"
                                style=format!("animation-delay:{}ms;", index * TILE_STAGGER_MS)
                                role="button"
                                aria-label=format!("Switch to {}", win.title)
                                on:click=move |ev| {
                                    // Keep the backdrop's exit handler out of it.
                                    ev.stop_propagation();
                                    runtime.dispatch_action(ShellAction::SelectExposeWindow {
                                        window_id,
                                    });
                                }
                            >
                                <header class="expose-tile-titlebar">
                                    <div class="expose-tile-dots" aria-hidden="true">
                                        <span class="dot close"></span>
                                        <span class="dot minimize"></span>
                                        <span class="dot zoom"></span>
                                    </div>
                                    <div class="expose-tile-title">{win.title.clone()}</div>
                                </header>
                                <div class="expose-tile-body">
                                    <Icon icon=icon size=IconSize::Md />
                                </div>
                            </div>
                        }
                    }}
                </For>
            </div>
        </OverlayScrim>
    }
}
