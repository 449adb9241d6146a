use super::DeviceProfile;
use crate::custom_vars::{CustomValue, CustomVars};

/// A classified request: the derived profile, its presentation hints and the
/// identification string it came from.
///
/// The profile is fixed once classified; custom variables stay mutable for
/// the rest of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    user_agent: String,
    profile: DeviceProfile,
    custom_vars: CustomVars,
}

impl Detection {
    pub(crate) fn new(user_agent: String, profile: DeviceProfile, custom_vars: CustomVars) -> Self {
        Self {
            user_agent,
            profile,
            custom_vars,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn custom_vars(&self) -> &CustomVars {
        &self.custom_vars
    }

    pub fn custom_vars_mut(&mut self) -> &mut CustomVars {
        &mut self.custom_vars
    }

    pub fn set_custom_var(
        &mut self,
        name: impl Into<String>,
        value: impl Into<CustomValue>,
    ) -> &mut Self {
        self.custom_vars.set(name, value);
        self
    }

    pub fn custom_var(&self, name: &str) -> Option<&CustomValue> {
        self.custom_vars.get(name)
    }

    /// Whether the screen metrics came from a probe round-trip.
    pub fn is_known_screen(&self) -> bool {
        self.profile.is_known_screen
    }

    pub fn into_parts(self) -> (DeviceProfile, CustomVars) {
        (self.profile, self.custom_vars)
    }
}
