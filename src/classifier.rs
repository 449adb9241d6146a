use std::path::Path;

use rayon::prelude::*;

use super::custom_vars::build_default_custom_vars;
use super::db::{self, RuleSet};
use super::error::Result;
use super::helpers::{first_capture, underscores_to_dots};
use super::parser::{compile_regex, CompiledParser, RuleDef};
use super::parser_data::{BrowserData, OsData};
use super::screen::resolve_screen_state;
use super::types::*;

/// Name reported for a browser or OS no rule recognised.
pub const UNKNOWN: &str = "Unknown";

/// Rule-table classifier for identification (`User-Agent`) strings.
///
/// Built once and shared; every operation is a pure function of its input.
pub struct ClientClassifier {
    bot_parser: CompiledParser<()>,
    mobile_parser: CompiledParser<()>,
    tablet_parser: CompiledParser<()>,
    browser_parser: CompiledParser<BrowserData>,
    os_parser: CompiledParser<OsData>,
}

impl ClientClassifier {
    /// Build from the rule tables embedded in the crate.
    pub fn new() -> Result<Self> {
        Self::from_rules(RuleSet::builtin()?)
    }

    /// Load `bots.yml`, `devices.yml`, `browsers.yml` and `oss.yml` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_rules(RuleSet::from_dir(dir)?)
    }

    pub fn from_rules(rules: RuleSet) -> Result<Self> {
        let bot_parser = build_marker_parser(rules.bots)?;
        let mobile_parser = build_marker_parser(rules.devices.mobile)?;
        let tablet_parser = build_marker_parser(rules.devices.tablet)?;

        let browsers = rules
            .browsers
            .into_iter()
            .map(|b| -> Result<_> {
                // Markers are literal text: `Trident/7.0` must match its dot.
                let adjacent = format!(r"{}\s*[/:]\s*([0-9.]+)", regex_syntax::escape(&b.marker));
                let data = BrowserData {
                    name: b.name,
                    adjacent_version: compile_regex(&adjacent, false)?,
                    fixed_version: b.fixed_version,
                    alt_version: b
                        .alt_version
                        .as_deref()
                        .map(|p| compile_regex(p, false))
                        .transpose()?,
                };
                Ok(RuleDef {
                    marker: b.marker,
                    regex: false,
                    data,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let browser_parser = CompiledParser::build(browsers, false)?;

        let oss = rules
            .oss
            .into_iter()
            .map(|o| -> Result<_> {
                let data = OsData {
                    name: o.name,
                    version: o
                        .version
                        .as_deref()
                        .map(|p| compile_regex(p, false))
                        .transpose()?,
                    underscores: o.underscores,
                };
                Ok(RuleDef {
                    marker: o.marker,
                    regex: false,
                    data,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let os_parser = CompiledParser::build(oss, false)?;

        tracing::debug!(
            bots = bot_parser.len(),
            mobile = mobile_parser.len(),
            tablet = tablet_parser.len(),
            browsers = browser_parser.len(),
            oss = os_parser.len(),
            "client classifier built"
        );

        Ok(Self {
            bot_parser,
            mobile_parser,
            tablet_parser,
            browser_parser,
            os_parser,
        })
    }

    /// Case-insensitive search for any known automated-agent marker.
    pub fn classify_bot(&self, ua: &str) -> bool {
        if ua.is_empty() {
            return false;
        }
        match self.bot_parser.match_first(ua) {
            Some(m) => {
                tracing::trace!(rule = m.index, "bot marker matched");
                true
            }
            None => false,
        }
    }

    /// Bot overrides everything; a tablet match clears a mobile match;
    /// anything left over is desktop.
    pub fn classify_mobile_tablet_desktop(&self, ua: &str) -> DeviceCategory {
        let is_bot = self.classify_bot(ua);
        let mut is_mobile = self.mobile_parser.is_match(ua);
        let is_tablet = self.tablet_parser.is_match(ua);

        if is_tablet {
            is_mobile = false;
        }

        if is_bot {
            DeviceCategory::Bot
        } else if is_mobile {
            DeviceCategory::Mobile
        } else if is_tablet {
            DeviceCategory::Tablet
        } else {
            DeviceCategory::Desktop
        }
    }

    /// `(name, version)` of the first browser rule whose marker occurs in `ua`.
    pub fn classify_browser(&self, ua: &str) -> (String, String) {
        let Some(m) = self.browser_parser.match_first(ua) else {
            return (UNKNOWN.to_string(), String::new());
        };
        tracing::trace!(rule = m.index, browser = %m.data.name, "browser marker matched");

        let data = m.data;
        let version = first_capture(&data.adjacent_version, ua)
            .map(str::to_string)
            .or_else(|| data.fixed_version.clone())
            .or_else(|| {
                data.alt_version
                    .as_ref()
                    .and_then(|re| first_capture(re, ua))
                    .map(str::to_string)
            })
            .unwrap_or_default();

        (data.name.clone(), version)
    }

    /// `(name, version)` of the first OS rule whose marker occurs in `ua`.
    pub fn classify_os(&self, ua: &str) -> (String, String) {
        let Some(m) = self.os_parser.match_first(ua) else {
            return (UNKNOWN.to_string(), String::new());
        };
        tracing::trace!(rule = m.index, os = %m.data.name, "os marker matched");

        let data = m.data;
        let version = data
            .version
            .as_ref()
            .and_then(|re| first_capture(re, ua))
            .map(|v| {
                if data.underscores {
                    underscores_to_dots(v)
                } else {
                    v.to_string()
                }
            })
            .unwrap_or_default();

        (data.name.clone(), version)
    }

    /// Classify one request.
    pub fn classify(&self, input: &ClassificationInput) -> Detection {
        let ua = input.user_agent();

        let device_category = self.classify_mobile_tablet_desktop(ua);
        let (browser_name, browser_version) = self.classify_browser(ua);
        let (os_name, os_version) = self.classify_os(ua);
        let screen = resolve_screen_state(input, device_category);

        let profile = DeviceProfile {
            device_category,
            browser_name,
            browser_version,
            os_name,
            os_version,
            screen_width: screen.width,
            screen_height: screen.height,
            orientation: screen.orientation,
            is_known_screen: screen.is_known_screen,
        };

        tracing::debug!(
            category = %profile.device_category,
            browser = %profile.browser_name,
            os = %profile.os_name,
            known_screen = profile.is_known_screen,
            "classified client"
        );

        let custom_vars = build_default_custom_vars(&profile, input.has_touch());
        Detection::new(ua.to_string(), profile, custom_vars)
    }

    /// Classify a bare identification string with no prior probe results.
    pub fn classify_user_agent(&self, ua: &str) -> Detection {
        self.classify(&ClassificationInput::new(ua))
    }

    /// Classify many independent inputs in parallel, preserving input order.
    pub fn classify_all(&self, inputs: &[ClassificationInput]) -> Vec<Detection> {
        inputs.par_iter().map(|input| self.classify(input)).collect()
    }
}

fn build_marker_parser(entries: Vec<db::MarkerEntry>) -> Result<CompiledParser<()>> {
    CompiledParser::build(
        entries.into_iter().map(|e| RuleDef {
            marker: e.marker,
            regex: e.regex,
            data: (),
        }),
        true,
    )
}
