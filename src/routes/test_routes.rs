use crate::controllers::test_controller::{typing_test, voice_test};
use actix_web::web;

pub fn configure_test_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/submit-typing-test", web::post().to(typing_test))
        .route("/submit-voice-test", web::post().to(voice_test));
}
