pub mod api_response;
pub mod login;
pub mod voice_test;
