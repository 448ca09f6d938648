//! Calendar computations used by the date-time helpers

pub mod julian;
pub mod lunar;
pub mod zones;

pub use julian::{from_julian_day, julian_day};
pub use lunar::LunarDate;
