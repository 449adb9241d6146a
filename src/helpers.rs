use fancy_regex::Regex;

/// First capture group of `re` in `text`, if the regex matches and the group
/// participated.
pub(crate) fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    match re.captures(text) {
        Ok(Some(caps)) => caps.get(1).map(|m| m.as_str()),
        _ => None,
    }
}

/// `16_4_1` → `16.4.1`.
pub(crate) fn underscores_to_dots(version: &str) -> String {
    version.replace('_', ".")
}

/// Lenient integer parse of a client-reported value: optional surrounding
/// whitespace, then leading ASCII digits (`"1080px"` → 1080). Returns `None`
/// when there are no leading digits or the number overflows.
pub(crate) fn parse_leading_u32(value: &str) -> Option<u32> {
    let trimmed = value.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_group_one() {
        let re = Regex::new(r"Android\s+([0-9.]+)").unwrap();
        assert_eq!(first_capture(&re, "Linux; Android 13; Pixel 7"), Some("13"));
        assert_eq!(first_capture(&re, "Linux; Android; Pixel 7"), None);
    }

    #[test]
    fn underscore_conversion() {
        assert_eq!(underscores_to_dots("16_4"), "16.4");
        assert_eq!(underscores_to_dots("10.15.7"), "10.15.7");
    }

    #[test]
    fn leading_digits() {
        assert_eq!(parse_leading_u32("1920"), Some(1920));
        assert_eq!(parse_leading_u32(" 1080px"), Some(1080));
        assert_eq!(parse_leading_u32("+768"), Some(768));
        assert_eq!(parse_leading_u32("wide"), None);
        assert_eq!(parse_leading_u32(""), None);
        assert_eq!(parse_leading_u32("-5"), None);
        assert_eq!(parse_leading_u32("99999999999"), None);
    }
}
