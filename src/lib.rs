pub mod area;
pub mod error;
pub mod generator;
pub mod logger;

pub use area::{load_area_data, AreaIndex, AreaLevel, AreaRecord};
pub use error::IdforgeError;
pub use generator::{GenderPref, GeneratedRecord, IdCardGenerator};
pub use logger::Logger;
