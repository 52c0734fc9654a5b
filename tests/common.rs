use chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use sproutlist::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_entry_0() -> WaitlistEntry {
    WaitlistEntry {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000000")
            .unwrap(),
        email: "gardener0@test.com".to_string(),
        platforms: Json(Platforms {
            android: true,
            ios: false,
            web: true,
        }),
        priority: Priority::Winter,
        ref_code: "ABCDEFGH".to_string(),
        referred_by: None,
        ref_count: 1,
        created_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_seed_entry_1() -> WaitlistEntry {
    WaitlistEntry {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001")
            .unwrap(),
        email: "gardener1@test.com".to_string(),
        platforms: Json(Platforms {
            android: false,
            ios: true,
            web: false,
        }),
        priority: Priority::Economy,
        ref_code: "JKLMNPQR".to_string(),
        referred_by: None,
        ref_count: 0,
        created_at: parse_time("2026-01-05 13:22:56+00"),
    }
}

pub fn get_seed_entry_referred() -> WaitlistEntry {
    WaitlistEntry {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000002")
            .unwrap(),
        email: "gardener2@test.com".to_string(),
        platforms: Json(Platforms {
            android: false,
            ios: false,
            web: true,
        }),
        priority: Priority::Stats,
        ref_code: "STUVWXYZ".to_string(),
        referred_by: Some("ABCDEFGH".to_string()),
        ref_count: 0,
        created_at: parse_time("2026-01-05 18:41:18+00"),
    }
}

pub fn get_seed_entry_nonexisting() -> WaitlistEntry {
    WaitlistEntry {
        id: Uuid::parse_str("00000000-0000-0000-0000-00000000000d")
            .unwrap(),
        email: "ghost@test.com".to_string(),
        platforms: Json(Platforms {
            android: false,
            ios: false,
            web: true,
        }),
        priority: Priority::Themes,
        ref_code: "ZZZZZZZZ".to_string(),
        referred_by: None,
        ref_count: 0,
        created_at: parse_time("2001-11-09 12:46:00+00"),
    }
}
