//! # magnet_uri_rs
//!
//! A tolerant, bidirectional magnet URI ⟷ [`MagnetLink`] converter.
//!
//! Magnet URIs identify content by hash rather than location. This crate
//! splits one into its parameters and writes a [`MagnetLink`] back out as a
//! URI that re-parses to an equivalent link.
//!
//! Parameters aggregate differently depending on their key: exact topics,
//! trackers and acceptable sources are deduplicated sets; exact sources,
//! keyword topics and unrecognized keys keep every value in order; display
//! name, exact length and manifest topic keep the last value seen.
//!
//! Decoding skips valueless tokens (`k=`, `g`) silently but fails on a
//! malformed percent-escape or a non-numeric `xl`.
//!
//! ## Example
//!
//! ```rust
//! use magnet_uri_rs::{decode, encode, DecoderOptions, EncoderOptions};
//!
//! let link = decode(
//!     "magnet:?xt=urn:btih:ABC&dn=test.txt&xl=100&kt=tag1+tag2&kt=tag3",
//!     &DecoderOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(link.exact_topics, vec!["urn:btih:ABC"]);
//! assert_eq!(link.display_name, "test.txt");
//! assert_eq!(link.exact_length, 100);
//! assert_eq!(link.keyword_topic, vec!["tag1", "tag2", "tag3"]);
//!
//! let uri = encode(&link, &EncoderOptions::default());
//! let again = decode(&uri, &DecoderOptions::default()).unwrap();
//! assert!(link.is_equivalent(&again));
//! ```

mod common;
mod decoder;
mod encoder;
mod error;
mod link;

// Re-export public API
pub use common::{ParamKey, MAGNET_PREFIX};
pub use decoder::{decode, DecoderOptions};
pub use encoder::{encode, EncoderOptions};
pub use error::DecodeError;
pub use link::MagnetLink;
