pub mod memory_repository;
pub mod user_repository;

pub use memory_repository::InMemoryUserStore;
pub use user_repository::{PgUserStore, UserStore};
