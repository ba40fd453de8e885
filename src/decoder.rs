//! Magnet URI to [`MagnetLink`] decoder implementation

use crate::common::{
    percent_decode, ParamKey, KEYWORD_SEPARATOR, KEY_VALUE_SEPARATOR, MAGNET_PREFIX,
    PARAM_SEPARATOR,
};
use crate::error::DecodeError;
use crate::link::MagnetLink;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Decoder configuration options
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Strict mode - malformed percent-escapes abort the decode (default: true).
    /// When disabled the raw value is kept instead.
    pub strict: bool,
    /// Require the prefix at the very start of the input (default: false).
    /// When disabled anything before the first `magnet:?` is ignored.
    pub anchored: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            strict: true,
            anchored: false,
        }
    }
}

/// Decode a magnet URI into a [`MagnetLink`]
pub fn decode(input: &str, options: &DecoderOptions) -> Result<MagnetLink, DecodeError> {
    let query = locate_query(input, options)?;

    let mut decoder = Decoder::new(options);
    for token in query.split(PARAM_SEPARATOR) {
        decoder.consume(token)?;
    }
    let link = decoder.finish();

    debug!(
        topics = link.exact_topics.len(),
        trackers = link.trackers.len(),
        extra = link.addition_params.len(),
        "decoded magnet link"
    );
    Ok(link)
}

/// Returns the query body following the prefix
fn locate_query<'i>(input: &'i str, options: &DecoderOptions) -> Result<&'i str, DecodeError> {
    let query = if options.anchored {
        input.strip_prefix(MAGNET_PREFIX)
    } else {
        input.split_once(MAGNET_PREFIX).map(|(_, query)| query)
    };
    query.ok_or(DecodeError::UnsupportedFormat)
}

/// Accumulates parameters; set-backed fields stay in hash sets until
/// [`Decoder::finish`] flattens them.
struct Decoder<'a> {
    options: &'a DecoderOptions,
    link: MagnetLink,
    exact_topics: HashSet<String>,
    acceptable_sources: HashSet<String>,
    trackers: HashSet<String>,
}

impl<'a> Decoder<'a> {
    fn new(options: &'a DecoderOptions) -> Self {
        Self {
            options,
            link: MagnetLink::default(),
            exact_topics: HashSet::new(),
            acceptable_sources: HashSet::new(),
            trackers: HashSet::new(),
        }
    }

    /// Dispatch one `key=value` token
    fn consume(&mut self, token: &str) -> Result<(), DecodeError> {
        let Some((key, value)) = token.split_once(KEY_VALUE_SEPARATOR) else {
            trace!(token, "skipping parameter without value");
            return Ok(());
        };
        if value.is_empty() {
            trace!(key, "skipping parameter with empty value");
            return Ok(());
        }

        match ParamKey::from_key(key) {
            Some(ParamKey::DisplayName) => {
                self.link.display_name = self.unescape(key, value)?;
            }
            Some(ParamKey::ExactTopic) => {
                self.exact_topics.insert(value.to_string());
            }
            Some(ParamKey::ExactLength) => {
                self.link.exact_length = parse_length(value)?;
            }
            Some(ParamKey::AcceptableSource) => {
                let source = self.unescape(key, value)?;
                self.acceptable_sources.insert(source);
            }
            Some(ParamKey::ExactSource) => {
                let source = self.unescape(key, value)?;
                self.link.exact_source.push(source);
            }
            Some(ParamKey::KeywordTopic) => {
                self.link
                    .keyword_topic
                    .extend(value.split(KEYWORD_SEPARATOR).map(str::to_string));
            }
            Some(ParamKey::ManifestTopic) => {
                self.link.manifest_topic = value.to_string();
            }
            Some(ParamKey::Tracker) => {
                let tracker = self.unescape(key, value)?;
                self.trackers.insert(tracker);
            }
            None => {
                let decoded = self.unescape(key, value)?;
                self.link
                    .addition_params
                    .entry(key.to_string())
                    .or_default()
                    .push(decoded);
            }
        }
        Ok(())
    }

    /// Percent-decode a value, falling back to the raw text in lenient mode
    fn unescape(&self, key: &str, value: &str) -> Result<String, DecodeError> {
        match percent_decode(value) {
            Some(decoded) => Ok(decoded.into_owned()),
            None if self.options.strict => Err(DecodeError::InvalidEncoding {
                key: key.to_string(),
                value: value.to_string(),
            }),
            None => {
                warn!(key, value, "keeping undecodable value verbatim");
                Ok(value.to_string())
            }
        }
    }

    fn finish(self) -> MagnetLink {
        let mut link = self.link;
        link.exact_topics = self.exact_topics.into_iter().collect();
        link.acceptable_sources = self.acceptable_sources.into_iter().collect();
        link.trackers = self.trackers.into_iter().collect();
        link
    }
}

fn parse_length(value: &str) -> Result<i64, DecodeError> {
    value
        .parse::<i64>()
        .map_err(|source| DecodeError::InvalidLength {
            value: value.to_string(),
            source,
        })
}
