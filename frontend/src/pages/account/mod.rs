pub mod repository;
pub mod utils;
pub mod view_model;

pub use repository::AccountRepository;
pub use utils::{RecoveryForm, RegistrationForm};
pub use view_model::{PasswordRecoveryViewModel, RecoveryStep, RegisterViewModel};
