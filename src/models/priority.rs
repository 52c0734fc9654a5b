use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Winter,
    Economy,
    Gifting,
    Stats,
    Themes,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Economy => "economy",
            Self::Gifting => "gifting",
            Self::Stats => "stats",
            Self::Themes => "themes",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for Priority {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "economy" => Ok(Self::Economy),
            "gifting" => Ok(Self::Gifting),
            "stats" => Ok(Self::Stats),
            "themes" => Ok(Self::Themes),
            _ => Err(format!("invalid priority: {}", s)),
        }
    }
}
