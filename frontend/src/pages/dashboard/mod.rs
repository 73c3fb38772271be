pub mod repository;
pub mod view_model;

pub use repository::DashboardRepository;
pub use view_model::DashboardViewModel;
