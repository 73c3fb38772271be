pub mod repository;
pub mod utils;
pub mod view_model;
pub mod workflow;

pub use repository::{LeaveScope, LeavesRepository};
pub use utils::LeaveForm;
pub use view_model::LeavesViewModel;
pub use workflow::{transition, Decision, InvalidTransition};
