use serde::{Deserialize, Serialize};

use super::DeviceCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "portrait" => Some(Self::Portrait),
            "landscape" => Some(Self::Landscape),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }

    /// Landscape only when strictly wider than tall.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Heuristic default for clients whose screen was never measured.
    pub fn guess_for(category: DeviceCategory) -> Self {
        match category {
            DeviceCategory::Mobile => Self::Portrait,
            DeviceCategory::Tablet | DeviceCategory::Desktop | DeviceCategory::Bot => {
                Self::Landscape
            }
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_screen_is_portrait() {
        assert_eq!(Orientation::from_dimensions(1024, 1024), Orientation::Portrait);
        assert_eq!(Orientation::from_dimensions(2560, 1440), Orientation::Landscape);
    }

    #[test]
    fn parse_is_lenient_about_case() {
        assert_eq!(Orientation::from_str("Landscape"), Some(Orientation::Landscape));
        assert_eq!(Orientation::from_str("sideways"), None);
    }
}
