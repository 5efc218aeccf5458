use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Thumbnail resolution buckets, from most to least detailed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ThumbnailQuality {
    MaxRes,
    Standard,
    High,
    Medium,
    Default,
}

impl ThumbnailQuality {
    pub const ALL: [ThumbnailQuality; 5] = [
        ThumbnailQuality::MaxRes,
        ThumbnailQuality::Standard,
        ThumbnailQuality::High,
        ThumbnailQuality::Medium,
        ThumbnailQuality::Default,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxres",
            ThumbnailQuality::Standard => "standard",
            ThumbnailQuality::High => "high",
            ThumbnailQuality::Medium => "medium",
            ThumbnailQuality::Default => "default",
        }
    }

    /// This tier followed by every lower one.
    pub fn and_lower(self) -> impl Iterator<Item = ThumbnailQuality> {
        Self::ALL.into_iter().skip_while(move |q| *q != self)
    }
}

impl FromStr for ThumbnailQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.key() == s)
            .ok_or_else(|| format!("unknown thumbnail quality '{}'", s))
    }
}

impl TryFrom<String> for ThumbnailQuality {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_names() {
        assert_eq!("maxres".parse::<ThumbnailQuality>(), Ok(ThumbnailQuality::MaxRes));
        assert_eq!("default".parse::<ThumbnailQuality>(), Ok(ThumbnailQuality::Default));
        assert!("ultra".parse::<ThumbnailQuality>().is_err());
    }

    #[test]
    fn lower_tiers_follow_quality_order() {
        let tiers: Vec<_> = ThumbnailQuality::High.and_lower().collect();
        assert_eq!(
            tiers,
            vec![
                ThumbnailQuality::High,
                ThumbnailQuality::Medium,
                ThumbnailQuality::Default
            ]
        );
        assert_eq!(ThumbnailQuality::Default.and_lower().count(), 1);
    }
}
