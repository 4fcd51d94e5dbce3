pub mod checksum;
pub mod dates;
pub mod idcard;

pub use idcard::{GenderPref, GeneratedRecord, IdCardGenerator};
