mod app_shell;
mod loading;
mod tab_bar;

pub use app_shell::AppShell;
pub use loading::{use_loading, LoadingContext};
pub use tab_bar::{Tab, TabBar};
