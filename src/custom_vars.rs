use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{DeviceCategory, DeviceProfile};

/// A presentation hint value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl CustomValue {
    /// `None` for NaN and infinities, which have no JSON form.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self::Number)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl std::fmt::Display for CustomValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CustomValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CustomValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CustomValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CustomValue {
                fn from(value: $t) -> Self {
                    Self::Number(value.into())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64);

impl TryFrom<f64> for CustomValue {
    type Error = f64;

    /// Fails with the input for NaN and infinities.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value).ok_or(value)
    }
}

/// Keys populated by [`build_default_custom_vars`]. Only these have defined
/// semantics; callers may add any other key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownVar {
    FontSize,
    ButtonSize,
    NavigationStyle,
    ImageQuality,
    Layout,
    HasTouch,
}

impl WellKnownVar {
    pub const ALL: [WellKnownVar; 6] = [
        Self::FontSize,
        Self::ButtonSize,
        Self::NavigationStyle,
        Self::ImageQuality,
        Self::Layout,
        Self::HasTouch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FontSize => "fontSize",
            Self::ButtonSize => "buttonSize",
            Self::NavigationStyle => "navigationStyle",
            Self::ImageQuality => "imageQuality",
            Self::Layout => "layout",
            Self::HasTouch => "hasTouch",
        }
    }
}

/// Key/value presentation hints attached to a detection. Keys are unique;
/// setting an existing key overrides it. Equality ignores insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomVars {
    vars: IndexMap<String, CustomValue>,
}

impl CustomVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<CustomValue>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn set_well_known(&mut self, key: WellKnownVar, value: impl Into<CustomValue>) -> &mut Self {
        self.set(key.as_str(), value)
    }

    pub fn get(&self, name: &str) -> Option<&CustomValue> {
        self.vars.get(name)
    }

    pub fn get_well_known(&self, key: WellKnownVar) -> Option<&CustomValue> {
        self.get(key.as_str())
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a CustomValue) -> &'a CustomValue {
        self.vars.get(name).unwrap_or(default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<CustomValue> {
        self.vars.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn all(&self) -> &IndexMap<String, CustomValue> {
        &self.vars
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomValue)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Derive the default hints for a classified profile.
///
/// `has_touch` is the client-reported touch flag, if any. Unknown screens
/// have width 0 and therefore always get `imageQuality = "low"`.
pub fn build_default_custom_vars(profile: &DeviceProfile, has_touch: Option<bool>) -> CustomVars {
    let (font_size, button_size, navigation_style) = match profile.device_category {
        DeviceCategory::Mobile => ("14px", "large", "hamburger"),
        DeviceCategory::Tablet => ("16px", "medium", "compact"),
        DeviceCategory::Desktop | DeviceCategory::Bot => ("16px", "normal", "full"),
    };

    let image_quality = if profile.screen_width > 1920 {
        "high"
    } else if profile.screen_width > 1280 {
        "medium"
    } else {
        "low"
    };

    let mut vars = CustomVars::new();
    vars.set_well_known(WellKnownVar::FontSize, font_size)
        .set_well_known(WellKnownVar::ButtonSize, button_size)
        .set_well_known(WellKnownVar::NavigationStyle, navigation_style)
        .set_well_known(WellKnownVar::ImageQuality, image_quality)
        .set_well_known(WellKnownVar::Layout, profile.orientation.as_str())
        .set_well_known(
            WellKnownVar::HasTouch,
            has_touch.unwrap_or_else(|| profile.device_category.assumes_touch()),
        );
    vars
}
