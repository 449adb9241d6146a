use std::collections::HashMap;

use crate::helpers::parse_leading_u32;
use crate::types::{ClassificationInput, DeviceCategory, Orientation};

pub const SCREEN_WIDTH_COOKIE: &str = "screen_width";
pub const SCREEN_HEIGHT_COOKIE: &str = "screen_height";
pub const ORIENTATION_COOKIE: &str = "orientation";
pub const HAS_TOUCH_COOKIE: &str = "has_touch";
pub const DETECTED_COOKIE: &str = "device_detected";

/// Query flag the probe page appends when re-issuing the request, so a client
/// that cannot store probe results is not probed forever.
pub const SKIP_PROBE_PARAM: &str = "no_reload";

/// Default lifetime of stored probe results on the client, in seconds.
pub const PROBE_RESULT_MAX_AGE_SECS: u64 = 86_400;

/// Read access to results of an earlier probe round-trip.
pub trait ScreenProbe {
    fn screen_width(&self) -> Option<u32>;
    fn screen_height(&self) -> Option<u32>;
    fn orientation(&self) -> Option<Orientation>;
    fn has_touch(&self) -> Option<bool>;

    /// Whether both dimensions are usable, i.e. classifying with this probe
    /// yields `is_known_screen`.
    fn has_screen(&self) -> bool {
        self.screen_width().is_some() && self.screen_height().is_some()
    }

    /// Whether the client marked a probe as completed. Informational only;
    /// [`ProbeState::from_probe`] goes by [`has_screen`](Self::has_screen).
    fn is_detected(&self) -> bool {
        self.has_screen()
    }
}

/// [`ScreenProbe`] over the request's cookie name → value pairs.
#[derive(Debug, Clone, Default)]
pub struct ProbeCookies {
    values: HashMap<String, String>,
}

impl ProbeCookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn dimension(&self, name: &str) -> Option<u32> {
        let raw = self.value(name)?;
        let parsed = parse_leading_u32(raw);
        if parsed.is_none() {
            tracing::warn!(cookie = name, value = raw, "ignoring unparsable screen dimension");
        }
        parsed
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProbeCookies {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ScreenProbe for ProbeCookies {
    fn screen_width(&self) -> Option<u32> {
        self.dimension(SCREEN_WIDTH_COOKIE)
    }

    fn screen_height(&self) -> Option<u32> {
        self.dimension(SCREEN_HEIGHT_COOKIE)
    }

    fn orientation(&self) -> Option<Orientation> {
        let raw = self.value(ORIENTATION_COOKIE)?;
        let parsed = Orientation::from_str(raw);
        if parsed.is_none() {
            tracing::warn!(value = raw, "ignoring unknown orientation");
        }
        parsed
    }

    fn has_touch(&self) -> Option<bool> {
        self.value(HAS_TOUCH_COOKIE).map(|v| v == "true")
    }

    fn is_detected(&self) -> bool {
        self.value(DETECTED_COOKIE) == Some("1")
    }
}

/// Where a request stands in the two-request probe protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    /// Screen unknown and no skip flag: emit the probe page instead of the
    /// normal response.
    ProbeNeeded,
    /// Classify and respond normally.
    ProbeSatisfied,
}

impl ProbeState {
    pub fn evaluate(is_known_screen: bool, skip_probe: bool) -> Self {
        if is_known_screen || skip_probe {
            Self::ProbeSatisfied
        } else {
            Self::ProbeNeeded
        }
    }

    /// Same decision as [`evaluate`](Self::evaluate) on the profile the probe
    /// would produce.
    pub fn from_probe(probe: &impl ScreenProbe, skip_probe: bool) -> Self {
        Self::evaluate(probe.has_screen(), skip_probe)
    }

    pub fn is_satisfied(&self) -> bool {
        *self == Self::ProbeSatisfied
    }
}

/// Screen facts after combining prior probe results with the device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenState {
    pub width: u32,
    pub height: u32,
    pub orientation: Orientation,
    pub is_known_screen: bool,
}

/// Use reported dimensions verbatim when both are present. Otherwise the
/// screen is unknown: 0×0 with an orientation guessed from `category`, and
/// any partial report (one dimension, or orientation alone) is ignored.
pub fn resolve_screen_state(input: &ClassificationInput, category: DeviceCategory) -> ScreenState {
    match (input.screen_width(), input.screen_height()) {
        (Some(width), Some(height)) => ScreenState {
            width,
            height,
            orientation: input
                .orientation()
                .unwrap_or_else(|| Orientation::from_dimensions(width, height)),
            is_known_screen: true,
        },
        (width, height) => {
            if width.is_some() || height.is_some() {
                tracing::debug!(?width, ?height, "partial screen report treated as unknown");
            }
            ScreenState {
                width: 0,
                height: 0,
                orientation: Orientation::guess_for(category),
                is_known_screen: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_screen_guesses_from_category() {
        let input = ClassificationInput::new("");
        let cases = [
            (DeviceCategory::Mobile, Orientation::Portrait),
            (DeviceCategory::Tablet, Orientation::Landscape),
            (DeviceCategory::Desktop, Orientation::Landscape),
            (DeviceCategory::Bot, Orientation::Landscape),
        ];
        for (category, expected) in cases {
            let state = resolve_screen_state(&input, category);
            assert_eq!(state.width, 0);
            assert_eq!(state.height, 0);
            assert!(!state.is_known_screen);
            assert_eq!(state.orientation, expected, "{:?}", category);
        }
    }

    #[test]
    fn known_screen_derives_orientation_from_dimensions() {
        let input = ClassificationInput::new("").with_screen(390, 844);
        let state = resolve_screen_state(&input, DeviceCategory::Desktop);
        assert_eq!(
            state,
            ScreenState {
                width: 390,
                height: 844,
                orientation: Orientation::Portrait,
                is_known_screen: true,
            }
        );
    }

    #[test]
    fn reported_orientation_is_taken_verbatim() {
        let input = ClassificationInput::new("")
            .with_screen(1920, 1080)
            .with_orientation(Orientation::Portrait);
        let state = resolve_screen_state(&input, DeviceCategory::Desktop);
        assert_eq!(state.orientation, Orientation::Portrait);
    }

    #[test]
    fn orientation_without_dimensions_is_ignored() {
        let input = ClassificationInput::new("").with_orientation(Orientation::Portrait);
        let state = resolve_screen_state(&input, DeviceCategory::Tablet);
        assert!(!state.is_known_screen);
        assert_eq!(state.orientation, Orientation::Landscape);
    }

    #[test]
    fn cookies_parse_leniently() {
        let cookies: ProbeCookies = [
            ("screen_width", "1080px"),
            ("screen_height", "tall"),
            ("orientation", "portrait"),
            ("has_touch", "1"),
        ]
        .into_iter()
        .collect();

        assert_eq!(cookies.screen_width(), Some(1080));
        assert_eq!(cookies.screen_height(), None);
        assert_eq!(cookies.orientation(), Some(Orientation::Portrait));
        assert_eq!(cookies.has_touch(), Some(false));
        assert!(!cookies.is_detected());
    }

    #[test]
    fn cookie_input_round_trip() {
        let mut cookies = ProbeCookies::new();
        cookies
            .insert(SCREEN_WIDTH_COOKIE, "2560")
            .insert(SCREEN_HEIGHT_COOKIE, "1440")
            .insert(HAS_TOUCH_COOKIE, "true")
            .insert(DETECTED_COOKIE, "1");

        let input = ClassificationInput::from_probe("Mozilla/5.0", &cookies);
        assert_eq!(input.screen_width(), Some(2560));
        assert_eq!(input.screen_height(), Some(1440));
        assert_eq!(input.orientation(), None);
        assert_eq!(input.has_touch(), Some(true));
        assert!(cookies.is_detected());
    }

    #[test]
    fn probe_protocol_states() {
        assert_eq!(ProbeState::evaluate(false, false), ProbeState::ProbeNeeded);
        assert_eq!(ProbeState::evaluate(true, false), ProbeState::ProbeSatisfied);
        assert_eq!(ProbeState::evaluate(false, true), ProbeState::ProbeSatisfied);

        let empty = ProbeCookies::new();
        assert!(!ProbeState::from_probe(&empty, false).is_satisfied());
        assert!(ProbeState::from_probe(&empty, true).is_satisfied());
    }

    #[test]
    fn detected_marker_without_usable_dimensions_is_not_satisfied() {
        let cookies: ProbeCookies = [("device_detected", "1"), ("screen_width", "wide")]
            .into_iter()
            .collect();
        assert!(cookies.is_detected());
        assert!(!cookies.has_screen());

        let input = ClassificationInput::from_probe("Mozilla/5.0", &cookies);
        let state = resolve_screen_state(&input, DeviceCategory::Desktop);
        assert!(!state.is_known_screen);
        assert_eq!(
            ProbeState::from_probe(&cookies, false),
            ProbeState::evaluate(state.is_known_screen, false)
        );
        assert_eq!(ProbeState::from_probe(&cookies, false), ProbeState::ProbeNeeded);
    }

    #[test]
    fn dimensions_without_detected_marker_are_satisfied() {
        let cookies: ProbeCookies = [("screen_width", "1920"), ("screen_height", "1080")]
            .into_iter()
            .collect();
        assert!(!cookies.is_detected());

        let input = ClassificationInput::from_probe("Mozilla/5.0", &cookies);
        let state = resolve_screen_state(&input, DeviceCategory::Desktop);
        assert!(state.is_known_screen);
        assert_eq!(ProbeState::from_probe(&cookies, false), ProbeState::ProbeSatisfied);
    }
}
