//! Terminal user interface: the application shell, the generic record forms,
//! and the crossterm event loop that drives them.

mod app;
mod forms;
mod helpers;
mod panel;
mod terminal;

pub use app::App;
pub use panel::Feature;
pub use terminal::run_app;
