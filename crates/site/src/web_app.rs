use leptos::*;
use shell_runtime::{DesktopShell, ShellProvider};

#[component]
pub fn SiteApp() -> impl IntoView {
    view! {
        <ShellProvider>
            <DesktopShell />
        </ShellProvider>
    }
}
