pub mod status;
pub mod user;
