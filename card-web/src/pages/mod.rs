//! Page components

pub mod cards;
pub mod connect;
pub mod dashboard;
pub mod history;
pub mod landing;
pub mod marketplace;

pub use cards::CardsPage;
pub use connect::ConnectPage;
pub use dashboard::DashboardPage;
pub use history::HistoryPage;
pub use landing::LandingPage;
pub use marketplace::MarketplacePage;
