pub mod index;
pub mod loader;

pub use index::AreaIndex;
pub use loader::{load_area_data, AreaLevel, AreaRecord};
