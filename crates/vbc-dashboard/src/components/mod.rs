//! Reusable components

mod header;
mod shell;
mod tabs;
mod verdict_badge;

pub use header::Header;
pub use shell::Shell;
pub use tabs::Tabs;
pub use verdict_badge::VerdictBadge;
