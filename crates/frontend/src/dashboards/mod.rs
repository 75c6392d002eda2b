pub mod admin;
pub mod gm;
pub mod shell;
pub mod tech_agent;
pub mod user_center;

pub use admin::AdminDashboard;
pub use gm::GmDashboard;
pub use tech_agent::TechAgentDashboard;
pub use user_center::UserCenterDashboard;
