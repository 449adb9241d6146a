use aho_corasick::AhoCorasick;
use fancy_regex::Regex;

use crate::error::Result;

/// Compile a marker regex, optionally wrapped in `(?i)`.
pub(crate) fn compile_regex(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    let full = if case_insensitive {
        format!("(?i){}", pattern)
    } else {
        pattern.to_string()
    };
    Ok(Regex::new(&full)?)
}

/// One rule as declared in a table: its marker text, whether that text is a
/// regex, and the payload returned on a match.
pub(crate) struct RuleDef<T> {
    pub marker: String,
    pub regex: bool,
    pub data: T,
}

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    /// Position of the winning rule in declaration order.
    pub index: usize,
    pub data: &'a T,
}

// ---------------------------------------------------------------------------
// CompiledParser — ordered first-match-wins table
// ---------------------------------------------------------------------------

/// Ordered rule table where each rule is a literal substring or a regex.
///
/// Literal rules share one Aho-Corasick automaton; regex rules are kept as
/// fancy_regex (lookahead is required by some markers). `match_first` always
/// returns the lowest-index rule that matches anywhere in the input, whatever
/// mix of rule kinds precedes it.
pub(crate) struct CompiledParser<T> {
    literals: AhoCorasick,
    /// Maps automaton pattern id → entry index.
    literal_to_entry: Vec<usize>,
    /// Regex entries, sorted by entry index.
    fancy_entries: Vec<(usize, Regex)>,
    data: Vec<T>,
}

impl<T> CompiledParser<T> {
    pub fn build(
        items: impl IntoIterator<Item = RuleDef<T>>,
        case_insensitive: bool,
    ) -> Result<Self> {
        let mut literal_patterns: Vec<String> = Vec::new();
        let mut literal_to_entry: Vec<usize> = Vec::new();
        let mut fancy_entries: Vec<(usize, Regex)> = Vec::new();
        let mut data: Vec<T> = Vec::new();

        for (idx, item) in items.into_iter().enumerate() {
            if item.regex {
                fancy_entries.push((idx, compile_regex(&item.marker, case_insensitive)?));
            } else {
                literal_patterns.push(item.marker);
                literal_to_entry.push(idx);
            }
            data.push(item.data);
        }

        let literals = AhoCorasick::builder()
            .ascii_case_insensitive(case_insensitive)
            .build(&literal_patterns)?;

        Ok(Self {
            literals,
            literal_to_entry,
            fancy_entries,
            data,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Find the first matching entry (preserving declaration order).
    pub fn match_first<'a>(&'a self, text: &str) -> Option<MatchResult<'a, T>> {
        // Overlapping search sees every literal occurrence, so the minimum
        // entry index is the earliest declared literal present in `text`.
        let best_literal = self
            .literals
            .find_overlapping_iter(text)
            .map(|m| self.literal_to_entry[m.pattern().as_usize()])
            .min();

        let cutoff = best_literal.unwrap_or(usize::MAX);

        for (entry_idx, re) in &self.fancy_entries {
            if *entry_idx >= cutoff {
                break;
            }
            if re.is_match(text).unwrap_or(false) {
                return Some(self.result(*entry_idx));
            }
        }

        best_literal.map(|idx| self.result(idx))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.match_first(text).is_some()
    }

    fn result(&self, index: usize) -> MatchResult<'_, T> {
        MatchResult {
            index,
            data: &self.data[index],
        }
    }
}
