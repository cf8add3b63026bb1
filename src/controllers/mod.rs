pub mod stats_controller;
pub mod test_controller;
pub mod user_controller;
