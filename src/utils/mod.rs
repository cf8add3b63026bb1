pub mod helpers;
pub mod uploads;
