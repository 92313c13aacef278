//! Desktop shell runtime: window management core, shell chrome, and the
//! reducer/effect pipeline that drives them.

pub mod apps;
pub mod components;
pub mod geometry;
pub mod model;
pub mod persistence;
pub mod reducer;

mod effect_executor;
mod host;
mod runtime_context;

pub use host::ShellHostContext;
pub use model::*;
pub use reducer::{reduce_shell, RuntimeEffect, ShellAction, WindowTransition};
pub use runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};

pub use components::DesktopShell;
