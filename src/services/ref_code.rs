use rand::Rng;
use sqlx::PgPool;

use crate::common::WaitlistError;
use crate::db;

/// Uppercase letters and digits, minus the glyphs people misread
/// over the phone: 0/O and 1/I.
pub const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const CODE_LEN: usize = 8;

const MAX_ATTEMPTS: u32 = 10;

/// Draws a candidate referral code uniformly from the alphabet.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();

    (0..CODE_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates a code that is unused at the time of the check.
///
/// Uniqueness is ultimately enforced by the UNIQUE constraint on
/// `waitlist.ref_code`; the signup path rolls a fresh code if an
/// insert still trips it. Exhausting all attempts means the RNG is
/// broken or the alphabet is spent (32^8 codes), and the request
/// fails.
pub async fn generate_unique(
    pool: &PgPool,
) -> Result<String, WaitlistError> {
    for _ in 0..MAX_ATTEMPTS {
        let code = generate();

        if !db::ref_code_exists(pool, &code).await? {
            return Ok(code);
        }
    }

    Err(WaitlistError::ExhaustedRetries(MAX_ATTEMPTS))
}
