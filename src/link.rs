//! The parsed magnet link

use crate::decoder::{decode, DecoderOptions};
use crate::encoder::{encode, EncoderOptions};
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// A magnet URI broken into its parameters.
///
/// Fields differ in how repeated parameters aggregate:
///
/// | Field | Key | Repeats |
/// |---|---|---|
/// | `display_name` | `dn` | last wins |
/// | `exact_topics` | `xt` | deduplicated, unordered |
/// | `exact_length` | `xl` | last wins |
/// | `acceptable_sources` | `as` | deduplicated, unordered |
/// | `exact_source` | `xs` | appended in order |
/// | `keyword_topic` | `kt` | split on `+`, appended in order |
/// | `manifest_topic` | `mt` | last wins |
/// | `trackers` | `tr` | deduplicated, unordered |
/// | `addition_params` | anything else | appended in order per key |
///
/// `exact_topics`, `manifest_topic` and `keyword_topic` hold the values as
/// written in the URI; every other text field holds percent-decoded text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnetLink {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exact_topics: Vec<String>,
    /// Content length in bytes; zero or negative means absent
    #[serde(skip_serializing_if = "is_absent")]
    pub exact_length: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub acceptable_sources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exact_source: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keyword_topic: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub manifest_topic: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trackers: Vec<String>,
    /// Unrecognized keys, including vendor `x.` parameters
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub addition_params: BTreeMap<String, Vec<String>>,
}

fn is_absent(length: &i64) -> bool {
    *length <= 0
}

impl MagnetLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a magnet URI with [`DecoderOptions::default`]
    pub fn parse(uri: &str) -> Result<Self, DecodeError> {
        decode(uri, &DecoderOptions::default())
    }

    /// Encodes the link with [`EncoderOptions::default`]
    pub fn to_uri(&self) -> String {
        encode(self, &EncoderOptions::default())
    }

    /// The exact length, if one would be written to the URI
    pub fn length(&self) -> Option<u64> {
        u64::try_from(self.exact_length).ok().filter(|&len| len > 0)
    }

    /// Compares two links the way a decoder sees them.
    ///
    /// Set-backed fields ignore order and duplicates; sequences must match
    /// element by element; a non-positive length equals an absent one.
    pub fn is_equivalent(&self, other: &MagnetLink) -> bool {
        self.display_name == other.display_name
            && same_set(&self.exact_topics, &other.exact_topics)
            && self.length() == other.length()
            && same_set(&self.acceptable_sources, &other.acceptable_sources)
            && self.exact_source == other.exact_source
            && self.keyword_topic == other.keyword_topic
            && self.manifest_topic == other.manifest_topic
            && same_set(&self.trackers, &other.trackers)
            && self.addition_params == other.addition_params
    }
}

fn same_set(left: &[String], right: &[String]) -> bool {
    left.iter().collect::<HashSet<_>>() == right.iter().collect::<HashSet<_>>()
}

impl FromStr for MagnetLink {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MagnetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_length_only_when_positive() {
        let mut link = MagnetLink::new();
        assert_eq!(link.length(), None);

        link.exact_length = -7;
        assert_eq!(link.length(), None);

        link.exact_length = 100;
        assert_eq!(link.length(), Some(100));
    }

    #[test]
    fn test_equivalent_ignores_set_order() {
        let left = MagnetLink {
            exact_topics: strings(&["urn:btih:A", "urn:btih:B"]),
            trackers: strings(&["udp://one", "udp://two", "udp://one"]),
            ..MagnetLink::default()
        };
        let right = MagnetLink {
            exact_topics: strings(&["urn:btih:B", "urn:btih:A"]),
            trackers: strings(&["udp://two", "udp://one"]),
            ..MagnetLink::default()
        };
        assert!(left.is_equivalent(&right));
        assert_ne!(left, right);
    }

    #[test]
    fn test_equivalent_respects_sequence_order() {
        let left = MagnetLink {
            exact_source: strings(&["A", "B"]),
            ..MagnetLink::default()
        };
        let right = MagnetLink {
            exact_source: strings(&["B", "A"]),
            ..MagnetLink::default()
        };
        assert!(!left.is_equivalent(&right));
    }

    #[test]
    fn test_equivalent_folds_non_positive_length() {
        let zero = MagnetLink::default();
        let negative = MagnetLink {
            exact_length: -1,
            ..MagnetLink::default()
        };
        assert!(zero.is_equivalent(&negative));
    }

    #[test]
    fn test_from_str_and_display() {
        let link: MagnetLink = "magnet:?xt=urn:btih:ABC&dn=test".parse().unwrap();
        assert_eq!(link.display_name, "test");
        assert_eq!(link.to_string(), "magnet:?dn=test&xt=urn:btih:ABC");
    }

    #[test]
    fn test_serde_skips_empty_fields() {
        let link = MagnetLink {
            display_name: "test.txt".to_string(),
            exact_topics: strings(&["urn:btih:ABC"]),
            ..MagnetLink::default()
        };
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(
            json,
            r#"{"display_name":"test.txt","exact_topics":["urn:btih:ABC"]}"#
        );

        let back: MagnetLink = serde_json::from_str(&json).unwrap();
        assert_eq!(back, link);
    }
}
