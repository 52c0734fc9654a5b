use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum WaitlistError {
    #[error("Submission flagged by the honeypot field")]
    SpamDetected,

    #[error("A valid email address is required")]
    InvalidEmail,

    #[error("At least one platform must be selected")]
    NoPlatformSelected,

    #[error("A priority selection is required")]
    NoPrioritySelected,

    #[error("An entry with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Referral code '{0}' is already assigned")]
    DuplicateRefCode(String),

    #[error("Referral code '{0}' not found")]
    CodeNotFound(String),

    #[error("Could not produce an unused referral code after {0} attempts")]
    ExhaustedRetries(u32),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("An unexpected error occurred")]
    Internal,
}
