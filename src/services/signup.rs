use sqlx::PgPool;

use crate::common::WaitlistError;
use crate::db;
use crate::log_err;
use crate::models::{Platforms, Priority, WaitlistEntryCreate};

use super::ref_code;

/// Bound on insert retries after losing a ref_code race; every retry
/// rolls a completely fresh code.
const MAX_INSERT_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub email: String,
    pub platforms: Platforms,
    pub priority: Option<Priority>,
    pub referred_by: Option<String>,
    /// Honeypot field. Humans never see it; any content marks the
    /// submission as automated.
    pub company: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SignupOutcome {
    pub ref_code: String,
    pub ref_count: i32,
}

/// Records a signup and returns the submitter's referral standing.
///
/// The endpoint is idempotent per email: a repeat submission returns
/// the stored entry's code and count without touching anything. The
/// email is compared exactly as submitted; no trimming or case
/// folding is applied.
pub async fn submit(
    pool: &PgPool,
    req: &SignupRequest,
) -> Result<SignupOutcome, WaitlistError> {
    if req
        .company
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty())
    {
        return Err(WaitlistError::SpamDetected);
    }

    if req.email.is_empty() || !req.email.contains('@') {
        return Err(WaitlistError::InvalidEmail);
    }

    if !req.platforms.any() {
        return Err(WaitlistError::NoPlatformSelected);
    }

    let priority =
        req.priority.ok_or(WaitlistError::NoPrioritySelected)?;

    if let Some(existing) = db::find_by_email(pool, &req.email).await?
    {
        return Ok(SignupOutcome {
            ref_code: existing.ref_code,
            ref_count: existing.ref_count,
        });
    }

    let referrer_code = resolve_referrer(pool, req).await?;

    let mut attempts = 0;
    let entry = loop {
        let data = WaitlistEntryCreate {
            email: req.email.clone(),
            platforms: req.platforms,
            priority,
            ref_code: ref_code::generate_unique(pool).await?,
            referred_by: referrer_code.clone(),
        };

        match db::insert_entry(pool, &data).await {
            Ok(entry) => break entry,

            Err(WaitlistError::DuplicateEmail(_)) => {
                // Lost the race against a concurrent signup with the
                // same email; the winner's row is the entry.
                return match db::find_by_email(pool, &req.email)
                    .await?
                {
                    Some(existing) => Ok(SignupOutcome {
                        ref_code: existing.ref_code,
                        ref_count: existing.ref_count,
                    }),
                    None => Err(WaitlistError::Internal),
                };
            }

            Err(WaitlistError::DuplicateRefCode(code))
                if attempts < MAX_INSERT_ATTEMPTS =>
            {
                log::warn!(
                    "referral code '{}' collided at insert, regenerating",
                    code
                );
                attempts += 1;
            }

            Err(e) => return Err(e),
        }
    };

    // Credit is best-effort: the entrant's row is already durable, a
    // missed increment is lost information, not a failed signup.
    if let Some(code) = &referrer_code {
        match db::increment_ref_count(pool, code).await {
            Ok(true) => {}
            Ok(false) => {
                log::warn!(
                    "referrer '{}' vanished before credit",
                    code
                );
            }
            Err(e) => {
                log::error!(
                    "failed to credit referrer '{}': {}",
                    code,
                    e
                );
                log_err!(
                    pool,
                    "referral credit",
                    serde_json::json!({ "ref_code": code })
                );
            }
        }
    }

    Ok(SignupOutcome {
        ref_code: entry.ref_code,
        ref_count: entry.ref_count,
    })
}

/// Resolves the cited referral code to a creditable referrer.
///
/// Unknown codes and self-referrals degrade silently to "no referral";
/// surfacing either would leak which codes exist.
async fn resolve_referrer(
    pool: &PgPool,
    req: &SignupRequest,
) -> Result<Option<String>, WaitlistError> {
    let code = match req.referred_by.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c.to_uppercase(),
        _ => return Ok(None),
    };

    match db::find_by_ref_code(pool, &code).await? {
        Some(referrer) if referrer.email != req.email => {
            Ok(Some(referrer.ref_code))
        }
        _ => Ok(None),
    }
}
