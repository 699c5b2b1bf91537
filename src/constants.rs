//! Decoder limits and tuning parameters.
//!
//! These values follow the defaults libtorrent uses for its lazy bencode
//! decoder, so trees decoded here accept and reject the same documents.

// ============================================================================
// Decoder limits
// ============================================================================

/// Default maximum container nesting accepted by the decoder.
///
/// Torrent files and DHT/extension messages in the wild nest a handful of
/// levels deep; anything close to this limit is hostile.
pub const DEFAULT_DEPTH_LIMIT: usize = 1000;

// ============================================================================
// Child store growth
// ============================================================================

/// Capacity allocated by the first append to a list or dictionary.
pub const CHILD_STORE_INITIAL_CAPACITY: usize = 5;

/// Growth factor numerator (capacity grows by 3/2 when exhausted).
pub const CHILD_STORE_GROWTH_NUMERATOR: usize = 3;

/// Growth factor denominator.
pub const CHILD_STORE_GROWTH_DENOMINATOR: usize = 2;

// ============================================================================
// Renderer layout
// ============================================================================

/// Lists whose first item is an integer stay on one line below this many items.
pub const RENDER_LIST_INT_ONE_LINE_MAX: usize = 20;

/// A leading string shorter than this keeps a short list on one line.
pub const RENDER_LIST_SHORT_STRING: usize = 10;

/// Lists with a string first item stay on one line below this many items.
pub const RENDER_LIST_ONE_LINE_MAX: usize = 5;

/// A first dictionary value shorter than this keeps the dictionary on one line.
pub const RENDER_DICT_SHORT_STRING: usize = 30;

/// A first dictionary key shorter than this keeps the dictionary on one line.
pub const RENDER_DICT_SHORT_KEY: usize = 10;

/// Dictionaries stay on one line below this many pairs.
pub const RENDER_DICT_ONE_LINE_MAX: usize = 5;
