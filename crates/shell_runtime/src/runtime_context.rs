//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect
//! queue, and the boot sequence. UI composition stays in
//! [`crate::components`].

use std::time::Duration;

use leptos::*;

use crate::{
    effect_executor,
    host::ShellHostContext,
    model::{DesktopState, InteractionState},
    persistence,
    reducer::{reduce_shell, RuntimeEffect, ShellAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`]
/// values.
pub struct ShellRuntimeContext {
    /// Browser host bundle for effects and environment queries.
    pub host: StoredValue<ShellHostContext>,
    /// Reactive shell state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive drag/resize gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }
}

fn install_boot_sequence(runtime: ShellRuntimeContext) {
    if let Some(url) = persistence::load_wallpaper_pref() {
        runtime.dispatch_action(ShellAction::HydrateWallpaper { url });
    }

    let splash_ms = runtime.state.get_untracked().tuning.boot_splash_ms;
    set_timeout(
        move || runtime.dispatch_action(ShellAction::FinishBoot),
        Duration::from_millis(splash_ms),
    );
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components and runs the
/// boot sequence.
pub fn ShellProvider(children: Children) -> impl IntoView {
    let host = store_value(ShellHostContext);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut desktop = state.get_untracked();
        let mut gestures = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_gestures = gestures.clone();

        let new_effects = reduce_shell(&mut desktop, &mut gestures, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if gestures != previous_gestures {
            interaction.set(gestures);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = ShellRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    install_boot_sequence(runtime);

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
