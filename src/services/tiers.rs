use serde::Serialize;

pub struct Tier {
    pub target: i32,
    pub title: &'static str,
    pub reward: &'static str,
}

/// Reward ladder shown on the landing page. Static configuration, not
/// persisted; the stored state is `ref_count` alone.
pub const REFERRAL_TIERS: [Tier; 4] = [
    Tier {
        target: 1,
        title: "Early Sprout",
        reward: "7-day +10% fruit yield (beta-only boost)",
    },
    Tier {
        target: 3,
        title: "Growing Garden",
        reward: "Priority support + exclusive beta badge",
    },
    Tier {
        target: 5,
        title: "Thriving Grove",
        reward: "Exclusive winter cosmetic bundle",
    },
    Tier {
        target: 10,
        title: "Master Gardener",
        reward: "Beta access + lifetime premium features",
    },
];

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TierProgress {
    pub unlocked: Vec<i32>,
    pub next: Option<i32>,
    pub next_target: i32,
}

/// Classifies a referral count against the ladder. A count sitting
/// exactly on a threshold unlocks that tier.
pub fn tier_progress(ref_count: i32) -> TierProgress {
    let unlocked = REFERRAL_TIERS
        .iter()
        .filter(|t| ref_count >= t.target)
        .map(|t| t.target)
        .collect();

    let next = REFERRAL_TIERS
        .iter()
        .find(|t| t.target > ref_count)
        .map(|t| t.target);

    TierProgress {
        unlocked,
        next,
        next_target: next.unwrap_or(0),
    }
}
