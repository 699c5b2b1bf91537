//! Lazy bencode decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent: `.torrent`
//! files, tracker responses, extension protocol messages and DHT packets are
//! all bencoded. Most of that input comes from untrusted peers.
//!
//! [`decode`] walks a complete buffer once and builds an [`Entry`] tree that
//! *borrows* from it: strings, integer digits and dictionary keys are slices of
//! the input, never copies. Callers pull the fields they need out of the tree
//! through the lookup methods on [`Entry`], which return a default instead of
//! failing when a field is missing or has the wrong type.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Reading a torrent-like document
//!
//! ```
//! use lazybit::bencode::{decode, EntryType};
//! use lazybit::constants::DEFAULT_DEPTH_LIMIT;
//!
//! let data = b"d8:announce15:http://test.com4:infod4:name4:test\
//!              12:piece lengthi16384eee";
//! let root = decode(data, DEFAULT_DEPTH_LIMIT).unwrap();
//!
//! assert_eq!(root.dict_find_string_value(b"announce", b""), b"http://test.com");
//!
//! let info = root.dict_find_dict(b"info").unwrap();
//! assert_eq!(info.dict_find(b"name").and_then(|e| e.as_str()), Some("test"));
//! assert_eq!(info.dict_find_int_value(b"piece length", 0), 16384);
//!
//! // the exact bytes of the info dictionary, ready to be hashed
//! assert_eq!(
//!     info.data_section(),
//!     b"d4:name4:test12:piece lengthi16384ee"
//! );
//!
//! // missing or mistyped fields fall back to the default
//! assert_eq!(info.dict_find_int_value(b"name", -1), -1);
//! assert!(root.dict_find_list(b"announce-list").is_none());
//! assert_eq!(root.kind(), EntryType::Dict);
//! ```
//!
//! ## Walking a list
//!
//! ```
//! use lazybit::bencode::decode;
//!
//! let root = decode(b"l4:spami42ee", 100).unwrap();
//! assert_eq!(root.list_len(), 2);
//! assert_eq!(root.list_string_value_at(0, b""), b"spam");
//! assert_eq!(root.list_int_value_at(1, 0), 42);
//! assert_eq!(root.list_int_value_at(2, -1), -1);
//! ```
//!
//! ## Configuring limits
//!
//! ```
//! use lazybit::bencode::{BencodeError, DecodeConfig};
//!
//! let config = DecodeConfig::new().with_depth_limit(1);
//! assert!(config.decode(b"li1ee").is_ok());
//! assert_eq!(
//!     config.decode(b"lli1eee").unwrap_err(),
//!     BencodeError::DepthExceeded { limit: 1 }
//! );
//! ```
//!
//! # Error Handling
//!
//! Any malformed input rejects the whole buffer. The [`BencodeError`]
//! variants only say why, for logging:
//!
//! - [`BencodeError::DepthExceeded`] - Too many nested containers
//! - [`BencodeError::UnexpectedEof`] - Input ended inside a value
//! - [`BencodeError::InvalidStringLength`] - Bad length prefix or missing `:`
//! - [`BencodeError::UnterminatedInteger`] - No `e` after an integer
//! - [`BencodeError::UnexpectedChar`] - A byte that cannot start a value
//! - [`BencodeError::AllocationFailed`] - Child storage could not grow
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod child_store;
mod decode;
mod digits;
mod entry;
mod error;
mod render;

pub use decode::{decode, DecodeConfig};
pub use entry::{Entry, EntryType};
pub use error::BencodeError;
