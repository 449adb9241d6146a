use fancy_regex::Regex;

// ---------------------------------------------------------------------------
// Internal data structs carried inside CompiledParser<T>
// ---------------------------------------------------------------------------

pub(crate) struct BrowserData {
    pub name: String,
    /// `<marker>\s*[/:]\s*([0-9.]+)`, compiled from the escaped marker.
    pub adjacent_version: Regex,
    pub fixed_version: Option<String>,
    pub alt_version: Option<Regex>,
}

pub(crate) struct OsData {
    pub name: String,
    pub version: Option<Regex>,
    pub underscores: bool,
}
