//! Grammar shared between the encoder and decoder

use std::borrow::Cow;

/// Literal prefix every magnet URI carries before its query body
pub const MAGNET_PREFIX: &str = "magnet:?";

pub(crate) const PARAM_SEPARATOR: char = '&';
pub(crate) const KEY_VALUE_SEPARATOR: char = '=';
pub(crate) const KEYWORD_SEPARATOR: &str = "+";

/// Parameter keys with a dedicated field on [`MagnetLink`](crate::MagnetLink).
///
/// Any key not listed here lands in `addition_params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// `dn`
    DisplayName,
    /// `xt`
    ExactTopic,
    /// `xl`
    ExactLength,
    /// `as`
    AcceptableSource,
    /// `xs`
    ExactSource,
    /// `kt`
    KeywordTopic,
    /// `mt`
    ManifestTopic,
    /// `tr`
    Tracker,
}

impl ParamKey {
    /// All recognized keys, in the order the encoder writes them
    pub const ALL: [ParamKey; 8] = [
        ParamKey::DisplayName,
        ParamKey::ExactTopic,
        ParamKey::ExactLength,
        ParamKey::AcceptableSource,
        ParamKey::ExactSource,
        ParamKey::KeywordTopic,
        ParamKey::ManifestTopic,
        ParamKey::Tracker,
    ];

    /// Looks up a raw query key. Returns `None` for additional parameters.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dn" => Some(ParamKey::DisplayName),
            "xt" => Some(ParamKey::ExactTopic),
            "xl" => Some(ParamKey::ExactLength),
            "as" => Some(ParamKey::AcceptableSource),
            "xs" => Some(ParamKey::ExactSource),
            "kt" => Some(ParamKey::KeywordTopic),
            "mt" => Some(ParamKey::ManifestTopic),
            "tr" => Some(ParamKey::Tracker),
            _ => None,
        }
    }

    /// Returns the key as it appears in the query string
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::DisplayName => "dn",
            ParamKey::ExactTopic => "xt",
            ParamKey::ExactLength => "xl",
            ParamKey::AcceptableSource => "as",
            ParamKey::ExactSource => "xs",
            ParamKey::KeywordTopic => "kt",
            ParamKey::ManifestTopic => "mt",
            ParamKey::Tracker => "tr",
        }
    }

    /// Whether values under this key are percent-decoded when parsed.
    ///
    /// Topics (`xt`, `mt`) are URNs/URLs kept exactly as written; `kt` is
    /// split on `+` instead; `xl` is numeric.
    pub fn is_decoded(&self) -> bool {
        matches!(
            self,
            ParamKey::DisplayName
                | ParamKey::AcceptableSource
                | ParamKey::ExactSource
                | ParamKey::Tracker
        )
    }
}

/// Strict query-component unescape.
///
/// `+` becomes a space and every `%` must be followed by two hex digits.
/// Returns `None` on a malformed escape or when the decoded bytes are not
/// valid UTF-8.
pub(crate) fn percent_decode(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains(|c: char| c == '%' || c == '+') {
        return Some(Cow::Borrowed(value));
    }

    let bytes = value.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'%' {
            let hex = bytes.get(pos + 1..pos + 3);
            if !matches!(hex, Some(digits) if digits.iter().all(u8::is_ascii_hexdigit)) {
                return None;
            }
            pos += 3;
        } else {
            pos += 1;
        }
    }

    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .ok()
        .map(|decoded| Cow::Owned(decoded.into_owned()))
}

/// Escapes everything outside the unreserved set (`A-Z a-z 0-9 - _ . ~`)
pub(crate) fn percent_encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}
