use std::time::Duration;

use super::*;
use system_ui::{DockItemWell, DockSurface, Icon, IconSize};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let bouncing_app = create_rw_signal(None::<AppId>);

    let activate = move |app_id: AppId| {
        bouncing_app.set(Some(app_id));
        runtime.dispatch_action(ShellAction::OpenApp { app_id });

        let bounce_ms = state.get_untracked().tuning.dock_bounce_ms;
        set_timeout(
            move || {
                // A later click on another icon owns the animation now.
                if bouncing_app.get_untracked() == Some(app_id) {
                    bouncing_app.set(None);
                }
            },
            Duration::from_millis(bounce_ms),
        );
    };

    view! {
        <DockSurface>
            <For
                each=|| apps::app_registry().to_vec()
                key=|entry| entry.app_id
                let:entry
            >
                <DockItemWell>
                    <span class="dock-tooltip">{entry.title}</span>
                    <button
                        class="dock-icon"
                        class:bouncing=move || bouncing_app.get() == Some(entry.app_id)
                        aria-label=move || {
                            if state.get().is_app_running(entry.app_id) {
                                format!("{} (running)", entry.title)
                            } else {
                                entry.title.to_string()
                            }
                        }
                        on:click=move |_| activate(entry.app_id)
                    >
                        <Icon icon=entry.icon size=IconSize::Full />
                    </button>
                    <span
                        class="dock-running-dot"
                        class:visible=move || state.get().is_app_running(entry.app_id)
                        aria-hidden="true"
                    ></span>
                </DockItemWell>
            </For>
        </DockSurface>
    }
}
