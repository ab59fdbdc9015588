pub mod shell;
pub mod dashboard;
pub mod attendance;
pub mod persons;
pub mod logs;
pub mod datasets;
pub mod settings;
pub mod modals;
pub mod notification;

pub use shell::render_shell;
pub use notification::show_toast;
