//! CSR territory search
//!
//! Representatives are expanded once into a [`Directory`]: each raw territory
//! code is resolved through the territory table into region strings, any
//! two-letter state code embedded in a region is resolved to the full state
//! name, and the union becomes the upper-cased keyword list searched against.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::representative::{Brand, Representative};
use crate::entities::territory::TerritoryTable;

/// How matching representatives are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Home brand first, then alphabetical by name
    #[default]
    Brand,
    /// Most specific match first, then home brand, then name
    Relevance,
}

/// Search tuning taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Brand listed ahead of the others
    pub home_brand: Brand,

    /// Queries this short (in characters) must match at a word start
    pub short_query_len: usize,

    pub sort: SortMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            home_brand: Brand::Sargent,
            short_query_len: 2,
            sort: SortMode::Brand,
        }
    }
}

/// A representative with territory codes expanded for searching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    #[serde(flatten)]
    pub representative: Representative,

    /// Regions covered, with unknown codes kept verbatim
    pub regions: Vec<String>,

    /// Codes, regions and full state names, upper-cased and de-duplicated
    #[serde(skip)]
    pub keywords: Vec<String>,
}

impl DirectoryEntry {
    /// Build an entry by expanding the representative's codes
    pub fn expand(representative: Representative, territories: &TerritoryTable) -> Self {
        let mut regions: Vec<String> = Vec::new();
        let mut keywords: Vec<String> = representative.codes.clone();

        for code in &representative.codes {
            match territories.regions(code) {
                Some(mapped) => {
                    regions.extend(mapped.iter().cloned());
                    keywords.extend(mapped.iter().cloned());
                    for region in mapped {
                        keywords.extend(
                            territories
                                .states_in_region(region)
                                .into_iter()
                                .map(String::from),
                        );
                    }
                }
                None => regions.push(code.clone()),
            }
        }

        Self {
            representative,
            regions: dedup(regions),
            keywords: dedup(keywords.into_iter().map(|k| k.to_uppercase()).collect()),
        }
    }

    pub fn name(&self) -> &str {
        &self.representative.name
    }

    pub fn brand(&self) -> Brand {
        self.representative.brand
    }

    /// Regions joined for display
    pub fn region_description(&self) -> String {
        self.regions.join(", ")
    }

    /// Match specificity for relevance sorting; 0 means no match
    fn score(&self, query: &Query) -> u8 {
        let name = self.representative.name.to_lowercase();

        if self
            .representative
            .codes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&query.raw))
        {
            return 4;
        }
        if name.starts_with(&query.lower) {
            return 3;
        }
        if self.keywords.iter().any(|k| k.starts_with(&query.upper)) {
            return 2;
        }

        let matched = if query.short {
            word_start_match(&name, &query.lower)
                || self.keywords.iter().any(|k| word_start_match(k, &query.upper))
        } else {
            name.contains(&query.lower)
                || self
                    .representative
                    .codes
                    .join(", ")
                    .to_lowercase()
                    .contains(&query.lower)
                || self.keywords.iter().any(|k| k.contains(&query.upper))
        };
        u8::from(matched)
    }
}

struct Query {
    raw: String,
    lower: String,
    upper: String,
    short: bool,
}

impl Query {
    fn parse(text: &str, short_query_len: usize) -> Option<Self> {
        let raw = text.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            lower: raw.to_lowercase(),
            upper: raw.to_uppercase(),
            short: raw.chars().count() <= short_query_len,
        })
    }
}

/// True when `needle` occurs in `haystack` at the start of the string or
/// right after whitespace, `_` or `-`.
fn word_start_match(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(idx, _)| {
        haystack[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace() || c == '_' || c == '-')
    })
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

/// Searchable list of representatives
#[derive(Debug, Clone)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
    options: SearchOptions,
}

impl Directory {
    pub fn new(
        representatives: &[Representative],
        territories: &TerritoryTable,
        options: SearchOptions,
    ) -> Self {
        let entries = representatives
            .iter()
            .cloned()
            .map(|r| DirectoryEntry::expand(r, territories))
            .collect();
        Self { entries, options }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Find representatives matching a free-text query.
    ///
    /// An empty query returns nothing; use [`Directory::browse`] to list a
    /// brand. Short queries must match at a word start so `AL` does not hit
    /// every keyword containing those letters.
    pub fn search(&self, query: &str, brand: Option<Brand>) -> Vec<&DirectoryEntry> {
        let Some(query) = Query::parse(query, self.options.short_query_len) else {
            return Vec::new();
        };

        let mut scored: Vec<(u8, &DirectoryEntry)> = self
            .entries
            .iter()
            .filter(|e| brand.map_or(true, |b| e.brand() == b))
            .map(|e| (e.score(&query), e))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|(sa, a), (sb, b)| {
            let by_score = match self.options.sort {
                SortMode::Relevance => sb.cmp(sa),
                SortMode::Brand => std::cmp::Ordering::Equal,
            };
            by_score.then_with(|| self.default_order(a, b))
        });

        debug!(query = %query.raw, ?brand, matches = scored.len(), "csr search");
        scored.into_iter().map(|(_, e)| e).collect()
    }

    /// Every representative of a brand (or all brands), in default order
    pub fn browse(&self, brand: Option<Brand>) -> Vec<&DirectoryEntry> {
        let mut entries: Vec<&DirectoryEntry> = self
            .entries
            .iter()
            .filter(|e| brand.map_or(true, |b| e.brand() == b))
            .collect();
        entries.sort_by(|a, b| self.default_order(a, b));
        entries
    }

    fn default_order(&self, a: &DirectoryEntry, b: &DirectoryEntry) -> std::cmp::Ordering {
        let home = self.options.home_brand;
        (b.brand() == home)
            .cmp(&(a.brand() == home))
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
            .then_with(|| a.name().cmp(b.name()))
    }
}

/// Strings to highlight for a query: the query itself plus, when it names a
/// state by code or by the start of its full name, the other form too.
///
/// Display only; has no effect on matching.
pub fn highlight_terms(query: &str, territories: &TerritoryTable) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut terms = vec![trimmed.to_string()];
    if let Some(name) = territories.state_name(trimmed) {
        terms.push(name.to_string());
    }
    terms.extend(
        territories
            .codes_with_name_prefix(trimmed)
            .into_iter()
            .map(String::from),
    );
    dedup(terms)
}

/// Split `text` into `(segment, highlighted)` pieces, matching terms
/// case-insensitively and preferring the longest term at each position.
pub fn highlight_segments<'a>(text: &'a str, terms: &[String]) -> Vec<(&'a str, bool)> {
    let mut terms: Vec<&str> = terms
        .iter()
        .map(|t| t.as_str())
        .filter(|t| !t.trim().is_empty())
        .collect();
    terms.sort_by_key(|t| std::cmp::Reverse(t.len()));

    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut idx = 0;

    while idx < text.len() {
        let hit = terms.iter().find(|t| {
            let end = idx + t.len();
            end <= text.len()
                && text.is_char_boundary(end)
                && bytes[idx..end].eq_ignore_ascii_case(t.as_bytes())
        });
        match hit {
            Some(term) => {
                if plain_start < idx {
                    segments.push((&text[plain_start..idx], false));
                }
                let end = idx + term.len();
                segments.push((&text[idx..end], true));
                idx = end;
                plain_start = end;
            }
            None => {
                idx += text[idx..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if plain_start < text.len() {
        segments.push((&text[plain_start..], false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_start_match() {
        assert!(word_start_match("sgt_a32", "a32"));
        assert!(word_start_match("north tx", "tx"));
        assert!(word_start_match("al", "al"));
        assert!(!word_start_match("dallas", "al"));
        assert!(!word_start_match("royal arch", "al"));
        assert!(word_start_match("sgt-a32", "a32"));
    }

    #[test]
    fn test_dedup_preserves_first_occurrence() {
        let items = vec!["TX".to_string(), "LA".to_string(), "TX".to_string()];
        assert_eq!(dedup(items), vec!["TX".to_string(), "LA".to_string()]);
    }

    #[test]
    fn test_highlight_segments() {
        let terms = vec!["tx".to_string(), "TEXAS".to_string()];
        let segments = highlight_segments("North TX, Texas", &terms);
        assert_eq!(
            segments,
            vec![
                ("North ", false),
                ("TX", true),
                (", ", false),
                ("Texas", true)
            ]
        );
    }

    #[test]
    fn test_highlight_segments_no_terms() {
        assert_eq!(highlight_segments("Anne", &[]), vec![("Anne", false)]);
    }
}
