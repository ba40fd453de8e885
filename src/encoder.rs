//! [`MagnetLink`] to magnet URI encoder implementation

use crate::common::{
    percent_encode, ParamKey, KEYWORD_SEPARATOR, KEY_VALUE_SEPARATOR, MAGNET_PREFIX,
    PARAM_SEPARATOR,
};
use crate::link::MagnetLink;

/// Encoder configuration options
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Write `dn` even when the display name is empty (default: true)
    pub always_emit_display_name: bool,
    /// Percent-encode `addition_params` values (default: false).
    ///
    /// Decoded values are written verbatim unless this is set, so callers
    /// filling `addition_params` by hand must pre-encode reserved characters.
    pub escape_addition_params: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            always_emit_display_name: true,
            escape_addition_params: false,
        }
    }
}

/// Encode a [`MagnetLink`] as a magnet URI
pub fn encode(link: &MagnetLink, options: &EncoderOptions) -> String {
    let mut encoder = Encoder::new(options, link);
    encoder.encode_link(link);
    encoder.output
}

struct Encoder<'a> {
    options: &'a EncoderOptions,
    output: String,
}

impl<'a> Encoder<'a> {
    fn new(options: &'a EncoderOptions, link: &MagnetLink) -> Self {
        let mut output = String::with_capacity(estimate_len(link));
        output.push_str(MAGNET_PREFIX);
        Self { options, output }
    }

    /// Writes every section in the fixed `dn, xt, xl, as, xs, kt, mt, tr` order,
    /// then the additional parameters
    fn encode_link(&mut self, link: &MagnetLink) {
        for key in ParamKey::ALL {
            self.encode_section(key, link);
        }

        for (key, values) in &link.addition_params {
            for value in values {
                if self.options.escape_addition_params {
                    self.push_param(key, &percent_encode(value));
                } else {
                    self.push_param(key, value);
                }
            }
        }
    }

    fn encode_section(&mut self, key: ParamKey, link: &MagnetLink) {
        let name = key.as_str();
        match key {
            ParamKey::DisplayName => {
                if self.options.always_emit_display_name || !link.display_name.is_empty() {
                    self.push_param(name, &percent_encode(&link.display_name));
                }
            }
            ParamKey::ExactTopic => {
                for topic in &link.exact_topics {
                    self.push_param(name, topic);
                }
            }
            ParamKey::ExactLength => {
                if let Some(length) = link.length() {
                    self.push_param(name, &length.to_string());
                }
            }
            ParamKey::AcceptableSource => self.push_escaped(name, &link.acceptable_sources),
            ParamKey::ExactSource => self.push_escaped(name, &link.exact_source),
            ParamKey::KeywordTopic => {
                if !link.keyword_topic.is_empty() {
                    self.push_param(name, &link.keyword_topic.join(KEYWORD_SEPARATOR));
                }
            }
            ParamKey::ManifestTopic => {
                if !link.manifest_topic.is_empty() {
                    self.push_param(name, &link.manifest_topic);
                }
            }
            ParamKey::Tracker => self.push_escaped(name, &link.trackers),
        }
    }

    fn push_escaped(&mut self, key: &str, values: &[String]) {
        for value in values {
            self.push_param(key, &percent_encode(value));
        }
    }

    /// Append one `key=value` segment, separated from the previous one by `&`
    fn push_param(&mut self, key: &str, value: &str) {
        if self.output.len() > MAGNET_PREFIX.len() {
            self.output.push(PARAM_SEPARATOR);
        }
        self.output.push_str(key);
        self.output.push(KEY_VALUE_SEPARATOR);
        self.output.push_str(value);
    }
}

/// Rough output size: raw value lengths plus a few bytes per segment
fn estimate_len(link: &MagnetLink) -> usize {
    fn total(values: &[String]) -> usize {
        values.iter().map(|v| v.len() + 4).sum()
    }

    MAGNET_PREFIX.len()
        + link.display_name.len()
        + 4
        + total(&link.exact_topics)
        + total(&link.acceptable_sources)
        + total(&link.exact_source)
        + total(&link.keyword_topic)
        + link.manifest_topic.len()
        + total(&link.trackers)
        + link
            .addition_params
            .iter()
            .map(|(key, values)| values.iter().map(|v| key.len() + v.len() + 2).sum::<usize>())
            .sum::<usize>()
}
