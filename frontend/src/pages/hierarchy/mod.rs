pub mod utils;
pub mod view_model;

pub use utils::{count_by_type, flatten, TreeRow};
pub use view_model::HierarchyViewModel;
