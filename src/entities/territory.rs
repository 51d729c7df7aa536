//! Territory code and state name tables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Territory code → region strings, plus the two-letter state table used to
/// expand codes embedded in those strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryTable {
    pub revision: String,

    /// Two-letter code → upper-case full state name
    pub states: BTreeMap<String, String>,

    pub territories: BTreeMap<String, Vec<String>>,
}

impl TerritoryTable {
    /// Regions covered by a territory code, if the code is known
    pub fn regions(&self, code: &str) -> Option<&[String]> {
        self.territories.get(code).map(|r| r.as_slice())
    }

    /// Full state name for a two-letter code (case-insensitive)
    pub fn state_name(&self, code: &str) -> Option<&str> {
        self.states
            .get(&code.trim().to_ascii_uppercase())
            .map(|s| s.as_str())
    }

    /// Full names of every state code appearing as a whole word in a region
    /// string, e.g. `"South TX"` → `["TEXAS"]`.
    pub fn states_in_region(&self, region: &str) -> Vec<&str> {
        let mut found = Vec::new();
        for word in region.split(|c: char| !c.is_ascii_alphanumeric()) {
            if word.len() != 2 {
                continue;
            }
            if let Some(name) = self.state_name(word) {
                if !found.contains(&name) {
                    found.push(name);
                }
            }
        }
        found
    }

    /// State codes whose full name starts with `prefix` (case-insensitive)
    pub fn codes_with_name_prefix(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_uppercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.states
            .iter()
            .filter(|(_, name)| name.starts_with(&prefix))
            .map(|(code, _)| code.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TerritoryTable {
        let states = [("TX", "TEXAS"), ("IN", "INDIANA"), ("NY", "NEW YORK"), ("NJ", "NEW JERSEY")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let territories = [
            ("A27", vec!["North TX", "South TX"]),
            ("Intl", vec!["International"]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
        .collect();
        TerritoryTable {
            revision: "test".to_string(),
            states,
            territories,
        }
    }

    #[test]
    fn test_states_in_region_whole_words_only() {
        let t = table();
        assert_eq!(t.states_in_region("South TX"), vec!["TEXAS"]);
        assert_eq!(t.states_in_region("North IN"), vec!["INDIANA"]);
        assert!(t.states_in_region("International").is_empty());
    }

    #[test]
    fn test_regions_lookup() {
        let t = table();
        assert_eq!(t.regions("A27").unwrap().len(), 2);
        assert!(t.regions("Medeco").is_none());
    }

    #[test]
    fn test_codes_with_name_prefix() {
        let t = table();
        assert_eq!(t.codes_with_name_prefix("new"), vec!["NJ", "NY"]);
        assert_eq!(t.codes_with_name_prefix("tex"), vec!["TX"]);
        assert!(t.codes_with_name_prefix("").is_empty());
    }
}
