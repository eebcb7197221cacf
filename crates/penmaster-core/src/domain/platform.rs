use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The social networks a post can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    LinkedIn,
}

/// Fallback posting days when a platform carries no weekday policy.
pub const DEFAULT_WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::LinkedIn];

    /// Static business policy: which weekdays this platform posts on.
    pub fn allowed_weekdays(&self) -> &'static [Weekday] {
        match self {
            Platform::Facebook => &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
            Platform::Instagram => &[Weekday::Tue, Weekday::Thu, Weekday::Sat],
            Platform::LinkedIn => &[Weekday::Tue, Weekday::Wed, Weekday::Thu],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::LinkedIn => "linkedin",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::LinkedIn),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Facebook".parse::<Platform>().unwrap(), Platform::Facebook);
        assert_eq!("LINKEDIN".parse::<Platform>().unwrap(), Platform::LinkedIn);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Platform::Instagram).unwrap();
        assert_eq!(json, "\"instagram\"");
        let back: Platform = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(back, Platform::Facebook);
    }
}
