use sqlx::PgPool;

use crate::common::WaitlistError;
use crate::db;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReferralStanding {
    pub ref_code: String,
    pub ref_count: i32,
}

/// Resolves a referral code to its public standing. Codes are stored
/// uppercase, so the input is folded before the lookup. Read-only.
pub async fn lookup(
    pool: &PgPool,
    code: &str,
) -> Result<ReferralStanding, WaitlistError> {
    let normalized = code.trim().to_uppercase();

    match db::find_by_ref_code(pool, &normalized).await? {
        Some(entry) => Ok(ReferralStanding {
            ref_code: entry.ref_code,
            ref_count: entry.ref_count,
        }),
        None => Err(WaitlistError::CodeNotFound(normalized)),
    }
}
