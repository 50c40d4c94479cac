//! Page components.

mod dashboard;
mod login;
mod section;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use section::SectionPage;
