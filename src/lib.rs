//! lazybit - lazy bencode decoding for BitTorrent
//!
//! Torrent files, extension protocol messages and DHT packets all arrive as
//! bencode, usually from peers that cannot be trusted. This crate decodes them
//! in a single pass into a tree that borrows from the input buffer, with a
//! hard limit on nesting depth and no recursion.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding and field lookup
//! - [`constants`] - Decoder limits and tuning parameters
//! - [`sorted`] - Binary search helpers for sorted vectors

pub mod bencode;
pub mod constants;
pub mod sorted;

pub use bencode::{decode, BencodeError, DecodeConfig, Entry, EntryType};
pub use sorted::{sorted_find, sorted_insert};
