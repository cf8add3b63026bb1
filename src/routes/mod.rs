pub mod stats_routes;
pub mod test_routes;
pub mod user_routes;
