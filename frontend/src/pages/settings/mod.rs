pub mod repository;
pub mod utils;
pub mod view_model;

pub use repository::SettingsRepository;
pub use utils::PasswordForm;
pub use view_model::SettingsViewModel;
