use serde::{Deserialize, Serialize};

/// Platform interest flags collected on signup.
/// Stored verbatim as JSONB; at least one flag must be set,
/// enforced by the signup orchestrator rather than the schema.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize,
)]
pub struct Platforms {
    #[serde(default)]
    pub android: bool,
    #[serde(default)]
    pub ios: bool,
    #[serde(default)]
    pub web: bool,
}

impl Platforms {
    pub fn any(&self) -> bool {
        self.android || self.ios || self.web
    }
}
