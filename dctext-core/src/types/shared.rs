//! Collection-wide default fields

use super::{FieldLabel, RESERVED_LABELS};
use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default values merged into every record of a run.
///
/// Keeps the order in which labels first appeared; a repeated label keeps its
/// first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedFields {
    values: IndexMap<FieldLabel, String>,
}

impl SharedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from label/value pairs
    pub fn from_pairs<I, L, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<String>,
    {
        let mut values = IndexMap::new();
        for (label, value) in pairs {
            let label: String = label.into();
            if label.trim().is_empty() {
                return Err(ConfigError::BlankSharedLabel);
            }
            if RESERVED_LABELS.contains(&label.trim()) {
                return Err(ConfigError::ReservedLabel { label });
            }
            values.insert(label, value.into());
        }
        Ok(Self { values })
    }

    /// Parse the `label,value` line format of a shared-fields file.
    ///
    /// Each line is split at its first comma only, so values may contain
    /// commas. Blank lines are skipped.
    pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>, ConfigError> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let (label, value) = line.split_once(',').ok_or_else(|| {
                    ConfigError::MalformedSharedLine {
                        line: idx + 1,
                        content: line.to_string(),
                    }
                })?;
                Ok((label.trim().to_string(), value.trim().to_string()))
            })
            .collect()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.values.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.values.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_splits_at_first_comma() {
        let pairs =
            SharedFields::parse_pairs("publisher,Wallace Library, RIT\ncollection,LibA\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("publisher".to_string(), "Wallace Library, RIT".to_string()),
                ("collection".to_string(), "LibA".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_pairs_skips_blank_lines() {
        let pairs = SharedFields::parse_pairs("\nrights,CC-BY\n   \n").unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_parse_pairs_rejects_line_without_comma() {
        let err = SharedFields::parse_pairs("rights,CC-BY\npublisher\n").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedSharedLine { line: 2, .. }));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let pairs = SharedFields::parse_pairs("coverage,").unwrap();
        let shared = SharedFields::from_pairs(pairs).unwrap();
        assert_eq!(shared.get("coverage"), Some(""));
    }

    #[test]
    fn test_last_writer_wins_and_keeps_first_position() {
        let shared = SharedFields::from_pairs([
            ("publisher", "First"),
            ("rights", "CC0"),
            ("publisher", "Second"),
        ])
        .unwrap();

        assert_eq!(shared.get("publisher"), Some("Second"));
        assert_eq!(shared.labels().collect::<Vec<_>>(), ["publisher", "rights"]);
    }

    #[test]
    fn test_blank_label_is_rejected() {
        assert!(matches!(
            SharedFields::from_pairs([(" ", "value")]),
            Err(ConfigError::BlankSharedLabel)
        ));
    }

    #[test]
    fn test_provenance_label_is_rejected() {
        assert!(matches!(
            SharedFields::from_pairs([("file", "moby.txt")]),
            Err(ConfigError::ReservedLabel { ref label }) if label == "file"
        ));
    }
}
