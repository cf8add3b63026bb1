use crate::controllers::stats_controller::{
    get_typing_test_status_data, get_user_data, get_voice_test_status_data,
};
use actix_web::web;

pub fn configure_stats_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/getUserData", web::get().to(get_user_data))
        .route(
            "/getTypingTestStatusData",
            web::get().to(get_typing_test_status_data),
        )
        .route(
            "/getVoiceTestStatusData",
            web::get().to(get_voice_test_status_data),
        );
}
