use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use sproutlist::common::WaitlistError;
use sproutlist::services::tiers::{tier_progress, TierProgress};

#[derive(Serialize)]
pub struct ApiError {
    pub ok: bool,
    pub error: String,
}

#[derive(Serialize)]
pub struct StandingPayload {
    pub ok: bool,
    pub ref_code: String,
    pub ref_count: i32,
    pub tiers: TierProgress,
}

pub fn json_error(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(ApiError {
        ok: false,
        error: message.to_string(),
    })
}

pub fn json_standing(
    ref_code: String,
    ref_count: i32,
) -> HttpResponse {
    HttpResponse::Ok().json(StandingPayload {
        ok: true,
        tiers: tier_progress(ref_count),
        ref_code,
        ref_count,
    })
}

/// Maps domain failures onto the wire contract. Client input errors
/// carry their user-facing message; everything else is logged in full
/// and reported generically.
pub fn error_response(
    err: &WaitlistError,
    context: &str,
) -> HttpResponse {
    match err {
        WaitlistError::SpamDetected => {
            json_error(StatusCode::BAD_REQUEST, "Spam detected")
        }
        WaitlistError::InvalidEmail => {
            json_error(StatusCode::BAD_REQUEST, "Valid email required")
        }
        WaitlistError::NoPlatformSelected => json_error(
            StatusCode::BAD_REQUEST,
            "Select at least one platform",
        ),
        WaitlistError::NoPrioritySelected => json_error(
            StatusCode::BAD_REQUEST,
            "Priority selection required",
        ),
        WaitlistError::CodeNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "Referral not found")
        }
        other => {
            log::error!("{} failed: {}", context, other);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            )
        }
    }
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

/// Keeps malformed bodies inside the `{ok:false, error}` contract
/// instead of actix's default plain-text rejection.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ApiError {
            ok: false,
            error: "Invalid request body".to_string(),
        };

        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(body),
        )
        .into()
    })
}
