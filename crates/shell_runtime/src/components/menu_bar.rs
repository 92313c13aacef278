use std::time::Duration;

use super::*;
use system_ui::{Icon, IconName, IconSize, MenuBarSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuClockSnapshot {
    hour: u32,
    minute: u32,
}

impl MenuClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_menu_clock(snapshot: MenuClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(MenuClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(MenuClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <MenuBarSurface>
            <div class="menu-bar-left">
                <span class="menu-bar-mark" aria-hidden="true">
                    <Icon icon=IconName::SystemMark size=IconSize::Sm />
                </span>
                <span class="menu-bar-app-name">{move || state.get().active_app_name()}</span>
            </div>
            <div class="menu-bar-clock" aria-label="Current time">
                {move || format_menu_clock(clock_now.get())}
            </div>
        </MenuBarSurface>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_formats_in_twelve_hour_time() {
        assert_eq!(format_menu_clock(MenuClockSnapshot { hour: 0, minute: 5 }), "12:05 AM");
        assert_eq!(format_menu_clock(MenuClockSnapshot { hour: 9, minute: 30 }), "09:30 AM");
        assert_eq!(format_menu_clock(MenuClockSnapshot { hour: 12, minute: 0 }), "12:00 PM");
        assert_eq!(format_menu_clock(MenuClockSnapshot { hour: 21, minute: 59 }), "09:59 PM");
    }
}
