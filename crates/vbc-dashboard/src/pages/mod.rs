//! One page per tab

mod architecture;
mod dashboard;
mod history;
mod rules;
mod verification;

pub use architecture::ArchitecturePanel;
pub use dashboard::RiskDashboard;
pub use history::HistoryTable;
pub use rules::RulesPanel;
pub use verification::VerificationPage;
