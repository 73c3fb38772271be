pub mod repository;
pub mod utils;
pub mod view_model;

pub use repository::AdminRepository;
pub use view_model::{AdminViewModel, Collection, Section};
