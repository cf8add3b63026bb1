pub mod stats_service;
pub mod test_service;
pub mod user_service;
