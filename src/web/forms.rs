use serde::Deserialize;

use sproutlist::models::{Platforms, Priority};
use sproutlist::services::signup::SignupRequest;

#[derive(Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub platforms: Platforms,
    pub priority: Option<Priority>,
    pub referred_by: Option<String>,
    pub company: Option<String>,
}

impl SignupForm {
    pub fn into_request(self) -> SignupRequest {
        SignupRequest {
            email: self.email,
            platforms: self.platforms,
            priority: self.priority,
            referred_by: self.referred_by,
            company: self.company,
        }
    }
}

#[derive(Deserialize)]
pub struct ReferralQuery {
    pub code: Option<String>,
}
