use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::custom_vars::CustomVars;
use crate::error::Result;
use crate::types::{DeviceCategory, DeviceProfile, Detection, Orientation};

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Wire form of a [`Detection`].
///
/// The `is*` category flags are written for consumers' convenience and
/// ignored on read: they are always recomputed from `deviceType`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectionRecord {
    device_type: DeviceCategory,
    browser: String,
    browser_version: String,
    os: String,
    os_version: String,
    #[serde(default, skip_deserializing)]
    is_mobile: bool,
    #[serde(default, skip_deserializing)]
    is_tablet: bool,
    #[serde(default, skip_deserializing)]
    is_desktop: bool,
    #[serde(default, skip_deserializing)]
    is_bot: bool,
    screen_width: u32,
    screen_height: u32,
    orientation: Orientation,
    #[serde(default)]
    is_known_screen: bool,
    #[serde(default)]
    user_agent: String,
    #[serde(default)]
    custom_vars: CustomVars,
}

impl From<&Detection> for DetectionRecord {
    fn from(d: &Detection) -> Self {
        let p = d.profile();
        Self {
            device_type: p.device_category,
            browser: p.browser_name.clone(),
            browser_version: p.browser_version.clone(),
            os: p.os_name.clone(),
            os_version: p.os_version.clone(),
            is_mobile: p.is_mobile(),
            is_tablet: p.is_tablet(),
            is_desktop: p.is_desktop(),
            is_bot: p.is_bot(),
            screen_width: p.screen_width,
            screen_height: p.screen_height,
            orientation: p.orientation,
            is_known_screen: p.is_known_screen,
            user_agent: d.user_agent().to_string(),
            custom_vars: d.custom_vars().clone(),
        }
    }
}

impl DetectionRecord {
    fn into_detection(self) -> Detection {
        let profile = DeviceProfile {
            device_category: self.device_type,
            browser_name: self.browser,
            browser_version: self.browser_version,
            os_name: self.os,
            os_version: self.os_version,
            screen_width: self.screen_width,
            screen_height: self.screen_height,
            orientation: self.orientation,
            is_known_screen: self.is_known_screen,
        };
        Detection::new(self.user_agent, profile, self.custom_vars)
    }
}

impl Detection {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&DetectionRecord::from(self))?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&DetectionRecord::from(self))?)
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(DetectionRecord::from(self))?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let record: DetectionRecord = serde_json::from_str(json)?;
        Ok(record.into_detection())
    }
}

// ---------------------------------------------------------------------------
// Debug dumps
// ---------------------------------------------------------------------------

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn joined(name: &str, version: &str) -> String {
    if version.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", name, version)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

impl Detection {
    fn debug_rows(&self) -> Vec<(&'static str, String)> {
        let p = self.profile();
        vec![
            ("Device Type", p.device_category.to_string()),
            ("Browser", joined(&p.browser_name, &p.browser_version)),
            ("Operating System", joined(&p.os_name, &p.os_version)),
            ("Is Mobile", yes_no(p.is_mobile()).to_string()),
            ("Is Tablet", yes_no(p.is_tablet()).to_string()),
            ("Is Desktop", yes_no(p.is_desktop()).to_string()),
            ("Is Bot", yes_no(p.is_bot()).to_string()),
            (
                "Screen Resolution",
                format!("{} x {}", p.screen_width, p.screen_height),
            ),
            ("Screen Known", yes_no(p.is_known_screen).to_string()),
            ("Orientation", p.orientation.to_string()),
        ]
    }

    /// Line-oriented dump of every field, custom variables last.
    pub fn debug_text(&self) -> String {
        let mut out = String::from("===== Device Detection Results =====\n");
        for (label, value) in self.debug_rows() {
            let _ = writeln!(out, "{}: {}", label, value);
        }
        out.push_str("Custom Variables:\n");
        for (name, value) in self.custom_vars().iter() {
            let _ = writeln!(out, "  {}: {}", name, value);
        }
        out
    }

    /// The same fields as [`debug_text`](Self::debug_text), as an HTML table.
    pub fn debug_html(&self) -> String {
        let mut out = String::from(
            "<div class=\"device-debug\"><h3>Device Detection Results</h3>\
             <table border=\"1\" cellpadding=\"5\" cellspacing=\"0\">",
        );
        for (label, value) in self.debug_rows() {
            let _ = write!(
                out,
                "<tr><th>{}</th><td>{}</td></tr>",
                escape_html(label),
                escape_html(&value)
            );
        }
        let vars: Vec<String> = self
            .custom_vars()
            .iter()
            .map(|(name, value)| escape_html(&format!("{}: {}", name, value)))
            .collect();
        let _ = write!(
            out,
            "<tr><th>Custom Variables</th><td>{}</td></tr>",
            vars.join("<br>")
        );
        out.push_str("</table></div>");
        out
    }
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.debug_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientClassifier;
    use pretty_assertions::assert_eq;

    const PIXEL_7: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Mobile Safari/537.36";

    fn detection() -> Detection {
        ClientClassifier::new().unwrap().classify_user_agent(PIXEL_7)
    }

    #[test]
    fn json_keys() {
        let value = detection().to_json_value().unwrap();
        assert_eq!(value["deviceType"], "mobile");
        assert_eq!(value["browser"], "Chrome");
        assert_eq!(value["browserVersion"], "116.0.0.0");
        assert_eq!(value["os"], "Android");
        assert_eq!(value["osVersion"], "13");
        assert_eq!(value["isMobile"], true);
        assert_eq!(value["isBot"], false);
        assert_eq!(value["screenWidth"], 0);
        assert_eq!(value["orientation"], "portrait");
        assert_eq!(value["isKnownScreen"], false);
        assert_eq!(value["customVars"]["navigationStyle"], "hamburger");
        assert_eq!(value["customVars"]["hasTouch"], true);
    }

    #[test]
    fn json_round_trip_with_caller_vars() {
        let mut d = detection();
        d.set_custom_var("theme", "dark").set_custom_var("columns", 3);
        let parsed = Detection::from_json(&d.to_json().unwrap()).unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn category_flags_are_recomputed_on_read() {
        let mut value = detection().to_json_value().unwrap();
        value["isDesktop"] = serde_json::Value::Bool(true);
        let parsed = Detection::from_json(&value.to_string()).unwrap();
        assert!(!parsed.profile().is_desktop());
        assert!(parsed.profile().is_mobile());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Detection::from_json("{\"deviceType\": \"phone\"}"),
            Err(crate::Error::JSON(_))
        ));
    }

    #[test]
    fn text_dump() {
        let text = detection().debug_text();
        let expected = "\
===== Device Detection Results =====
Device Type: mobile
Browser: Chrome 116.0.0.0
Operating System: Android 13
Is Mobile: Yes
Is Tablet: No
Is Desktop: No
Is Bot: No
Screen Resolution: 0 x 0
Screen Known: No
Orientation: portrait
Custom Variables:
  fontSize: 14px
  buttonSize: large
  navigationStyle: hamburger
  imageQuality: low
  layout: portrait
  hasTouch: true
";
        assert_eq!(text, expected);
    }

    #[test]
    fn html_dump_escapes_values() {
        let mut d = detection();
        d.set_custom_var("note", "<b>&</b>");
        let html = d.debug_html();
        assert!(html.starts_with("<div class=\"device-debug\">"));
        assert!(html.contains("<tr><th>Device Type</th><td>mobile</td></tr>"));
        assert!(html.contains("note: &lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!html.contains("<b>&</b>"));
        assert!(html.ends_with("</table></div>"));
    }

    #[test]
    fn unknown_browser_has_no_trailing_space() {
        let d = ClientClassifier::new().unwrap().classify_user_agent("");
        assert!(d.debug_text().contains("Browser: Unknown\n"));
        assert!(d.debug_text().contains("Operating System: Unknown\n"));
    }
}
