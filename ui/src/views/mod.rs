mod dashboard;
mod home;
mod track;

pub use dashboard::Dashboard;
pub use home::Home;
pub use track::Track;
