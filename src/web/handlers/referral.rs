use actix_web::http::StatusCode;
use actix_web::{get, web, Responder};

use sproutlist::services::referral;

use crate::web::forms::ReferralQuery;
use crate::web::helpers::{
    error_response, json_error, json_standing,
};
use crate::web::state::AppState;

#[get("/api/referral")]
pub async fn referral_lookup(
    state: web::Data<AppState>,
    query: web::Query<ReferralQuery>,
) -> impl Responder {
    let code = match query.code.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => {
            return json_error(
                StatusCode::BAD_REQUEST,
                "Referral code required",
            );
        }
    };

    match referral::lookup(&state.pool, code).await {
        Ok(standing) => {
            json_standing(standing.ref_code, standing.ref_count)
        }
        Err(e) => error_response(&e, "referral lookup"),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(referral_lookup);
}
