use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::WaitlistError;
use crate::models::{WaitlistEntry, WaitlistEntryCreate};

const REF_CODE_CONSTRAINT: &str = "waitlist_ref_code_key";

pub async fn find_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<WaitlistEntry>, sqlx::Error> {
    sqlx::query_as::<_, WaitlistEntry>(
        r#"SELECT * FROM waitlist WHERE email = $1"#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_ref_code(
    pool: &PgPool,
    code: &str,
) -> Result<Option<WaitlistEntry>, sqlx::Error> {
    sqlx::query_as::<_, WaitlistEntry>(
        r#"SELECT * FROM waitlist WHERE ref_code = $1"#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await
}

pub async fn ref_code_exists(
    pool: &PgPool,
    code: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(SELECT 1 FROM waitlist WHERE ref_code = $1)"#,
    )
    .bind(code)
    .fetch_one(pool)
    .await
}

/// Inserts a new entry, relying on the named UNIQUE constraints as the
/// race-safe uniqueness check. A `23505` is translated by constraint so
/// the caller can tell a lost email race from a referral-code collision.
pub async fn insert_entry(
    pool: &PgPool,
    data: &WaitlistEntryCreate,
) -> Result<WaitlistEntry, WaitlistError> {
    let result = sqlx::query_as::<_, WaitlistEntry>(
        r#"
        INSERT INTO waitlist (email, platforms, priority, ref_code, referred_by)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&data.email)
    .bind(Json(&data.platforms))
    .bind(data.priority.as_str())
    .bind(&data.ref_code)
    .bind(data.referred_by.as_deref())
    .fetch_one(pool)
    .await;

    match result {
        Ok(entry) => Ok(entry),

        Err(sqlx::Error::Database(e))
            if e.code().as_deref() == Some("23505") =>
        {
            if e.constraint() == Some(REF_CODE_CONSTRAINT) {
                Err(WaitlistError::DuplicateRefCode(
                    data.ref_code.clone(),
                ))
            } else {
                Err(WaitlistError::DuplicateEmail(data.email.clone()))
            }
        }

        Err(e) => Err(WaitlistError::Database(e)),
    }
}

/// Credits one referral to the entry owning `code`.
/// The increment happens server-side in a single statement; concurrent
/// credits to the same code must never lose an update.
pub async fn increment_ref_count(
    pool: &PgPool,
    code: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE waitlist
        SET ref_count = ref_count + 1
        WHERE ref_code = $1
        "#,
    )
    .bind(code)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
