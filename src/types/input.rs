use super::Orientation;
use crate::screen::ScreenProbe;

/// Everything the classifier needs to know about one request: the raw
/// `User-Agent` text plus whatever an earlier probe round-trip reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationInput {
    user_agent: String,
    screen_width: Option<u32>,
    screen_height: Option<u32>,
    orientation: Option<Orientation>,
    has_touch: Option<bool>,
}

impl ClassificationInput {
    /// Input with no prior probe results. An absent header is the empty string.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    /// Input whose screen facts come from a prior probe round-trip.
    pub fn from_probe(user_agent: impl Into<String>, probe: &impl ScreenProbe) -> Self {
        Self {
            user_agent: user_agent.into(),
            screen_width: probe.screen_width(),
            screen_height: probe.screen_height(),
            orientation: probe.orientation(),
            has_touch: probe.has_touch(),
        }
    }

    pub fn with_screen(mut self, width: u32, height: u32) -> Self {
        self.screen_width = Some(width);
        self.screen_height = Some(height);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_touch(mut self, has_touch: bool) -> Self {
        self.has_touch = Some(has_touch);
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn screen_width(&self) -> Option<u32> {
        self.screen_width
    }

    pub fn screen_height(&self) -> Option<u32> {
        self.screen_height
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn has_touch(&self) -> Option<bool> {
        self.has_touch
    }
}
