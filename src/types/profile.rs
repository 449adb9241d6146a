use serde::{Deserialize, Serialize};

use super::{Breakpoint, DeviceCategory, Orientation};

/// Classification output for one request.
///
/// `browser_name`/`os_name` are `"Unknown"` and the versions empty when no
/// rule matched; `screen_width`/`screen_height` are 0 unless the client
/// reported them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub device_category: DeviceCategory,
    pub browser_name: String,
    pub browser_version: String,
    pub os_name: String,
    pub os_version: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Guessed from `device_category` unless `is_known_screen`.
    pub orientation: Orientation,
    pub is_known_screen: bool,
}

impl DeviceProfile {
    pub fn is_mobile(&self) -> bool {
        self.device_category == DeviceCategory::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_category == DeviceCategory::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.device_category == DeviceCategory::Desktop
    }

    pub fn is_bot(&self) -> bool {
        self.device_category == DeviceCategory::Bot
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.screen_width)
    }

    /// Inclusive width range check; `None` leaves the range open-ended.
    pub fn is_breakpoint(&self, min_width: u32, max_width: Option<u32>) -> bool {
        match max_width {
            None => self.screen_width >= min_width,
            Some(max) => self.screen_width >= min_width && self.screen_width <= max,
        }
    }

    pub fn is_resolution_range(&self, range: Breakpoint) -> bool {
        self.breakpoint() == range
    }

    /// `device-<category> orientation-<orientation> breakpoint-<bucket>`.
    pub fn responsive_classes(&self) -> String {
        format!(
            "device-{} orientation-{} breakpoint-{}",
            self.device_category,
            self.orientation,
            self.breakpoint().as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(category: DeviceCategory, width: u32) -> DeviceProfile {
        DeviceProfile {
            device_category: category,
            browser_name: "Unknown".to_string(),
            browser_version: String::new(),
            os_name: "Unknown".to_string(),
            os_version: String::new(),
            screen_width: width,
            screen_height: 0,
            orientation: Orientation::Landscape,
            is_known_screen: width > 0,
        }
    }

    #[test]
    fn exactly_one_flag() {
        for category in [
            DeviceCategory::Mobile,
            DeviceCategory::Tablet,
            DeviceCategory::Desktop,
            DeviceCategory::Bot,
        ] {
            let p = profile(category, 0);
            let flags = [p.is_mobile(), p.is_tablet(), p.is_desktop(), p.is_bot()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{:?}", category);
        }
    }

    #[test]
    fn breakpoint_ranges() {
        let p = profile(DeviceCategory::Desktop, 1024);
        assert!(p.is_breakpoint(992, Some(1199)));
        assert!(p.is_breakpoint(1024, Some(1024)));
        assert!(!p.is_breakpoint(1025, None));
        assert!(p.is_breakpoint(768, None));
        assert!(p.is_resolution_range(Breakpoint::Lg));
        assert!(!p.is_resolution_range(Breakpoint::Xl));
    }

    #[test]
    fn responsive_class_string() {
        let p = profile(DeviceCategory::Tablet, 800);
        assert_eq!(
            p.responsive_classes(),
            "device-tablet orientation-landscape breakpoint-md"
        );
    }
}
