use actix_web::http::StatusCode;
use actix_web::{post, web, HttpRequest, Responder};
use std::time::Duration;

use sproutlist::services::signup;

use crate::web::forms::SignupForm;
use crate::web::helpers::{
    client_ip, error_response, json_error, json_standing,
};
use crate::web::state::AppState;

#[post("/api/waitlist")]
pub async fn waitlist_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Json<SignupForm>,
) -> impl Responder {
    // Rate limiting
    let ip = client_ip(&req);

    if !state.rate_limiter.check(
        &format!("signup:{}", ip),
        10,                       // 10 attempts
        Duration::from_secs(600), // per 10 minutes
    ) {
        return json_error(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many signup attempts. Please try again later.",
        );
    }

    let request = form.into_inner().into_request();

    match signup::submit(&state.pool, &request).await {
        Ok(outcome) => {
            json_standing(outcome.ref_code, outcome.ref_count)
        }
        Err(e) => error_response(&e, "waitlist signup"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(waitlist_submit);
}
