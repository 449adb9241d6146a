use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

const BUILTIN_BOTS: &str = include_str!("../regexes/bots.yml");
const BUILTIN_DEVICES: &str = include_str!("../regexes/devices.yml");
const BUILTIN_BROWSERS: &str = include_str!("../regexes/browsers.yml");
const BUILTIN_OSS: &str = include_str!("../regexes/oss.yml");

// ---------------------------------------------------------------------------
// Shared marker entry  (regexes/bots.yml, regexes/devices.yml)
// ---------------------------------------------------------------------------

/// One detection marker: a literal substring, or a regular expression when
/// `regex` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry {
    pub marker: String,
    #[serde(default)]
    pub regex: bool,
}

impl MarkerEntry {
    pub fn literal(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            regex: false,
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            marker: pattern.into(),
            regex: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Device category markers  (regexes/devices.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMarkers {
    #[serde(default)]
    pub mobile: Vec<MarkerEntry>,
    #[serde(default)]
    pub tablet: Vec<MarkerEntry>,
}

// ---------------------------------------------------------------------------
// Browsers  (regexes/browsers.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserEntry {
    pub marker: String,
    pub name: String,
    /// Version reported when no `<marker>/<version>` token follows the marker.
    #[serde(default)]
    pub fixed_version: Option<String>,
    /// Regex with one capture group, searched anywhere in the string when
    /// neither the adjacent token nor `fixed_version` applies.
    #[serde(default)]
    pub alt_version: Option<String>,
}

// ---------------------------------------------------------------------------
// Operating systems  (regexes/oss.yml)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsEntry {
    pub marker: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Replace `_` with `.` in the captured version token.
    #[serde(default)]
    pub underscores: bool,
}

// ---------------------------------------------------------------------------
// Whole rule set
// ---------------------------------------------------------------------------

/// All rule tables a [`ClientClassifier`](crate::ClientClassifier) is built
/// from. Each table is evaluated in declared order, so appending entries
/// never changes the outcome for strings an earlier entry already matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub bots: Vec<MarkerEntry>,
    pub devices: DeviceMarkers,
    pub browsers: Vec<BrowserEntry>,
    pub oss: Vec<OsEntry>,
}

impl RuleSet {
    /// The tables shipped in `regexes/`, embedded at compile time.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            bots: serde_yaml::from_str(BUILTIN_BOTS)?,
            devices: serde_yaml::from_str(BUILTIN_DEVICES)?,
            browsers: serde_yaml::from_str(BUILTIN_BROWSERS)?,
            oss: serde_yaml::from_str(BUILTIN_OSS)?,
        })
    }

    /// Load `bots.yml`, `devices.yml`, `browsers.yml` and `oss.yml` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            bots: load_yaml(&dir.join("bots.yml"))?,
            devices: load_yaml(&dir.join("devices.yml"))?,
            browsers: load_yaml(&dir.join("browsers.yml"))?,
            oss: load_yaml(&dir.join("oss.yml"))?,
        })
    }
}

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}
