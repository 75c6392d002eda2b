pub mod header;
pub mod menu;
pub mod shell;
pub mod sidebar;
pub mod tabs;

pub use header::ConsoleHeader;
pub use shell::Shell;
pub use sidebar::Sidebar;
