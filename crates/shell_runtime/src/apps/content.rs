//! Thin application content views hosted inside managed windows.
//!
//! The window manager hands each app a content rectangle and nothing else.
//! Editors beyond the assistant, files, settings, and shortcuts apps are
//! placeholder surfaces.

use leptos::*;
use platform_web::{
    files, generative::generative_backend, shortcuts, BackendError, KeyChord, ShortcutAction,
    ShortcutBinding, FILE_DRAG_MIME,
};

use crate::model::AppId;
use crate::reducer::ShellAction;
use crate::runtime_context::use_shell_runtime;

/// DOM id of the shortcut-capture field; the global shortcut listener lets
/// keydowns through for this input only.
pub const SHORTCUT_CAPTURE_INPUT_ID: &str = "shortcut-capture-input";

pub(crate) fn render(app_id: AppId) -> View {
    match app_id {
        AppId::Assistant => view! { <AssistantApp /> }.into_view(),
        AppId::Files => view! { <FilesApp /> }.into_view(),
        AppId::Settings => view! { <SettingsApp /> }.into_view(),
        AppId::Shortcuts => view! { <ShortcutsApp /> }.into_view(),
        AppId::Slides => canvas_placeholder("Slides", "Presentation decks are assembled here."),
        AppId::Writer => canvas_placeholder("Writer", "Long-form documents are edited here."),
        AppId::Sheets => canvas_placeholder("Sheets", "Spreadsheet cells are edited here."),
        AppId::ImageLab => canvas_placeholder("Image Lab", "Generated images land on this canvas."),
        AppId::VideoLab => canvas_placeholder("Video Lab", "Generated clips are reviewed here."),
        AppId::Browser => canvas_placeholder("Browser", "Generated pages are previewed here."),
    }
}

fn canvas_placeholder(title: &'static str, blurb: &'static str) -> View {
    view! {
        <div class="app app-canvas-placeholder">
            <p><strong>{title}</strong></p>
            <p>{blurb}</p>
            <p class="app-hint">"Content is produced by the generative backend once one is configured."</p>
        </div>
    }
    .into_view()
}

#[component]
fn AssistantApp() -> impl IntoView {
    let transcript = create_rw_signal(Vec::<(bool, String)>::new());
    let draft = create_rw_signal(String::new());
    let pending = create_rw_signal(false);

    let submit = move || {
        let prompt = draft.get_untracked();
        if prompt.trim().is_empty() || pending.get_untracked() {
            return;
        }
        draft.set(String::new());
        transcript.update(|lines| lines.push((true, prompt.clone())));
        pending.set(true);

        let backend = generative_backend();
        spawn_local(async move {
            let reply = match backend.generate_text(&prompt).await {
                Ok(text) => text,
                Err(BackendError::Unavailable) => {
                    "The assistant backend is not configured on this host.".to_string()
                }
                Err(err) => {
                    logging::warn!("assistant request failed: {err}");
                    "The assistant could not answer that request.".to_string()
                }
            };
            transcript.update(|lines| lines.push((false, reply)));
            pending.set(false);
        });
    };

    view! {
        <div class="app app-assistant">
            <div class="assistant-transcript">
                <For
                    each={move || transcript.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, _)| *index
                    let:line
                >
                    <p class=if line.1 .0 { "assistant-line user" } else { "assistant-line reply" }>
                        {line.1 .1}
                    </p>
                </For>
            </div>
            <form
                class="assistant-composer"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <input
                    type="text"
                    placeholder="Ask anything"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Thinking" } else { "Send" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn FilesApp() -> impl IntoView {
    let entries = create_rw_signal(files::list_files());
    let new_name = create_rw_signal(String::new());

    let refresh = move || entries.set(files::list_files());
    let create = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        if let Err(err) = files::save_file(&name, "") {
            logging::warn!("file save failed: {err}");
        }
        new_name.set(String::new());
        refresh();
    };

    view! {
        <div class="app app-files">
            <div class="app-toolbar">
                <input
                    type="text"
                    placeholder="New file name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button type="button" on:click=create>"Create"</button>
            </div>
            <ul class="files-list">
                <For each=move || entries.get() key=|file| file.name.clone() let:file>
                    {{
                        let drag_name = file.name.clone();
                        let delete_name = file.name.clone();
                        view! {
                            <li
                                class="files-row"
                                draggable="true"
                                on:dragstart=move |ev: web_sys::DragEvent| {
                                    if let Some(transfer) = ev.data_transfer() {
                                        let payload =
                                            serde_json::json!({ "name": drag_name }).to_string();
                                        let _ = transfer.set_data(FILE_DRAG_MIME, &payload);
                                    }
                                }
                            >
                                <span class="files-name">{file.name.clone()}</span>
                                <button
                                    type="button"
                                    aria-label=format!("Delete {}", file.name)
                                    on:click=move |_| {
                                        if let Err(err) = files::delete_file(&delete_name) {
                                            logging::warn!("file delete failed: {err}");
                                        }
                                        refresh();
                                    }
                                >
                                    "Delete"
                                </button>
                            </li>
                        }
                    }}
                </For>
            </ul>
            <p class="app-hint">"Drag a file onto the desktop to place an icon for it."</p>
        </div>
    }
}

const WALLPAPER_PRESETS: [(&str, &str); 3] = [
    ("Canyon", "https://picsum.photos/seed/glassdesk/2560/1440"),
    ("Shoreline", "https://picsum.photos/seed/shoreline/2560/1440"),
    ("Meadow", "https://picsum.photos/seed/meadow/2560/1440"),
];

#[component]
fn SettingsApp() -> impl IntoView {
    let runtime = use_shell_runtime();
    let current = Signal::derive(move || runtime.state.get().wallpaper_url);

    view! {
        <div class="app app-settings">
            <p><strong>"Wallpaper"</strong></p>
            <div class="settings-wallpapers" role="group" aria-label="Wallpaper presets">
                <For each=move || WALLPAPER_PRESETS.to_vec() key=|(label, _)| *label let:preset>
                    <button
                        type="button"
                        class=move || {
                            if current.get() == preset.1 {
                                "wallpaper-option selected"
                            } else {
                                "wallpaper-option"
                            }
                        }
                        on:click=move |_| {
                            runtime.dispatch_action(ShellAction::SetWallpaper {
                                url: preset.1.to_string(),
                            });
                        }
                    >
                        {preset.0}
                    </button>
                </For>
            </div>
        </div>
    }
}

fn describe_chord(chord: &KeyChord) -> String {
    let mut parts = Vec::new();
    if chord.ctrl {
        parts.push("Ctrl".to_string());
    }
    if chord.alt {
        parts.push("Alt".to_string());
    }
    if chord.shift {
        parts.push("Shift".to_string());
    }
    if chord.meta {
        parts.push("Cmd".to_string());
    }
    parts.push(chord.key.to_uppercase());
    parts.join("+")
}

#[component]
fn ShortcutsApp() -> impl IntoView {
    let bindings = create_rw_signal(shortcuts::load_shortcuts());
    let captured = create_rw_signal(None::<KeyChord>);
    let target_app = create_rw_signal("Assistant".to_string());

    let refresh = move || bindings.set(shortcuts::load_shortcuts());
    let capture = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if matches!(key.as_str(), "Control" | "Alt" | "Shift" | "Meta") {
            return;
        }
        ev.prevent_default();
        captured.set(Some(KeyChord {
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            shift: ev.shift_key(),
            meta: ev.meta_key(),
            key,
        }));
    };
    let add = move |_| {
        let Some(keys) = captured.get_untracked() else {
            return;
        };
        let app_name = target_app.get_untracked();
        let binding = ShortcutBinding {
            id: format!("{}:{}", describe_chord(&keys), app_name),
            keys,
            action: ShortcutAction::OpenApp { app_name },
        };
        if let Err(err) = shortcuts::add_shortcut(binding) {
            logging::warn!("shortcut save failed: {err}");
        }
        captured.set(None);
        refresh();
    };

    view! {
        <div class="app app-shortcuts">
            <div class="app-toolbar">
                <input
                    id=SHORTCUT_CAPTURE_INPUT_ID
                    type="text"
                    readonly=true
                    placeholder="Press a key combination"
                    prop:value=move || {
                        captured
                            .get()
                            .map(|chord| describe_chord(&chord))
                            .unwrap_or_default()
                    }
                    on:keydown=capture
                />
                <select
                    aria-label="Application to open"
                    on:change=move |ev| target_app.set(event_target_value(&ev))
                >
                    <For
                        each=|| crate::apps::app_registry().to_vec()
                        key=|entry| entry.title
                        let:entry
                    >
                        <option value=entry.title selected={entry.title == "Assistant"}>
                            {entry.title}
                        </option>
                    </For>
                </select>
                <button type="button" on:click=add disabled=move || captured.get().is_none()>
                    "Add"
                </button>
            </div>
            <ul class="shortcuts-list">
                <For each=move || bindings.get() key=|binding| binding.id.clone() let:binding>
                    {{
                        let delete_id = binding.id.clone();
                        let ShortcutAction::OpenApp { app_name } = binding.action.clone();
                        view! {
                            <li class="shortcuts-row">
                                <span class="shortcuts-chord">{describe_chord(&binding.keys)}</span>
                                <span class="shortcuts-target">{format!("Open {app_name}")}</span>
                                <button
                                    type="button"
                                    on:click=move |_| {
                                        if let Err(err) = shortcuts::delete_shortcut(&delete_id) {
                                            logging::warn!("shortcut delete failed: {err}");
                                        }
                                        refresh();
                                    }
                                >
                                    "Remove"
                                </button>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </div>
    }
}
