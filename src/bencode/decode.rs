use super::child_store::ChildStore;
use super::digits::parse_digits;
use super::entry::{DictPair, Entry};
use super::error::BencodeError;
use crate::constants::DEFAULT_DEPTH_LIMIT;

/// Decoder settings.
///
/// # Examples
///
/// ```
/// use lazybit::bencode::DecodeConfig;
///
/// let config = DecodeConfig::new().with_depth_limit(2);
/// assert!(config.decode(b"llli1eee").is_err());
/// assert!(config.decode(b"lli1eee").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Maximum number of nested lists and dictionaries.
    pub depth_limit: usize,
}

impl DecodeConfig {
    /// Creates a config with [`DEFAULT_DEPTH_LIMIT`](crate::constants::DEFAULT_DEPTH_LIMIT).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Decodes `data` with these settings, see [`decode`].
    pub fn decode<'a>(&self, data: &'a [u8]) -> Result<Entry<'a>, BencodeError> {
        decode(data, self.depth_limit)
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }
}

/// Decodes one bencoded value from `data` without copying any payload.
///
/// The returned tree borrows from `data`. An empty buffer decodes to the
/// `None` entry. Decoding stops as soon as the root value is complete; bytes
/// after it are not looked at, and `root.data_section().len()` tells how many
/// were consumed.
///
/// At most `depth_limit` lists and dictionaries may be open at once, so a
/// limit of zero rejects every non-empty buffer. The decoder keeps its own
/// frame stack and never recurses, whatever the input looks like.
///
/// # Errors
///
/// Any malformed, truncated or too deeply nested input is rejected as a
/// whole; no partially decoded tree is ever returned.
pub fn decode(data: &[u8], depth_limit: usize) -> Result<Entry<'_>, BencodeError> {
    match decode_tree(data, depth_limit) {
        Ok(root) => {
            tracing::trace!(
                len = data.len(),
                consumed = root.data_section().len(),
                "decoded bencode"
            );
            Ok(root)
        }
        Err(err) => {
            tracing::debug!(len = data.len(), error = %err, "rejected malformed bencode");
            Err(err)
        }
    }
}

/// A list or dictionary whose closing `e` has not been seen yet.
enum Frame<'a> {
    List {
        start: usize,
        items: ChildStore<Entry<'a>>,
    },
    Dict {
        start: usize,
        pairs: ChildStore<DictPair<'a>>,
        // key of the value currently being decoded
        pending_key: &'a [u8],
    },
}

impl<'a> Frame<'a> {
    fn list(start: usize) -> Self {
        Frame::List {
            start,
            items: ChildStore::new(),
        }
    }

    fn dict(start: usize) -> Self {
        Frame::Dict {
            start,
            pairs: ChildStore::new(),
            pending_key: &[],
        }
    }

    fn close(self, data: &'a [u8], end: usize) -> Entry<'a> {
        match self {
            Frame::List { start, items } => Entry::list(items, &data[start..end]),
            Frame::Dict { start, pairs, .. } => Entry::dict(pairs, &data[start..end]),
        }
    }
}

fn decode_tree(data: &[u8], depth_limit: usize) -> Result<Entry<'_>, BencodeError> {
    if data.is_empty() {
        return Ok(Entry::none());
    }

    let mut stack: Vec<Frame<'_>> = Vec::new();
    let mut pos = 0;

    loop {
        // the root slot counts as one level before anything is open
        if stack.len().max(1) > depth_limit {
            return Err(BencodeError::DepthExceeded { limit: depth_limit });
        }

        let mut token_offset = pos;
        let mut token = *data
            .get(pos)
            .ok_or(BencodeError::UnexpectedEof { offset: pos })?;
        pos += 1;

        if token == b'e' {
            if let Some(frame) = stack.pop() {
                let entry = frame.close(data, pos);
                if let Some(root) = attach(&mut stack, entry)? {
                    return Ok(root);
                }
                continue;
            }
        }

        if let Some(Frame::Dict { pending_key, .. }) = stack.last_mut() {
            let (key, key_end) = read_string(data, token_offset)?;
            *pending_key = key;
            token_offset = key_end;
            token = *data
                .get(key_end)
                .ok_or(BencodeError::UnexpectedEof { offset: key_end })?;
            pos = key_end + 1;
        }

        let entry = match token {
            b'd' => {
                stack.push(Frame::dict(token_offset));
                continue;
            }
            b'l' => {
                stack.push(Frame::list(token_offset));
                continue;
            }
            b'i' => {
                let digits_len = data[pos..]
                    .iter()
                    .position(|&b| b == b'e')
                    .ok_or(BencodeError::UnterminatedInteger {
                        offset: token_offset,
                    })?;
                let digits = &data[pos..pos + digits_len];
                pos += digits_len + 1;
                Entry::integer(digits, &data[token_offset..pos])
            }
            b'0'..=b'9' => {
                let (payload, end) = read_string(data, token_offset)?;
                pos = end;
                Entry::string(payload, &data[token_offset..end])
            }
            byte => {
                return Err(BencodeError::UnexpectedChar {
                    byte,
                    offset: token_offset,
                })
            }
        };

        if let Some(root) = attach(&mut stack, entry)? {
            return Ok(root);
        }
    }
}

/// Hands a finished entry to the innermost open container.
///
/// Returns the entry back once there is no container left, meaning it is the
/// root of the tree.
fn attach<'a>(
    stack: &mut [Frame<'a>],
    entry: Entry<'a>,
) -> Result<Option<Entry<'a>>, BencodeError> {
    match stack.last_mut() {
        None => Ok(Some(entry)),
        Some(Frame::List { items, .. }) => {
            items.push(entry)?;
            Ok(None)
        }
        Some(Frame::Dict {
            pairs, pending_key, ..
        }) => {
            pairs.push((*pending_key, entry))?;
            Ok(None)
        }
    }
}

/// Reads the length-prefixed string starting at `offset`.
///
/// Returns the payload and the offset just past it.
fn read_string(data: &[u8], offset: usize) -> Result<(&[u8], usize), BencodeError> {
    if !data.get(offset).is_some_and(u8::is_ascii_digit) {
        return Err(BencodeError::InvalidStringLength { offset });
    }

    let (length, prefix_len) = parse_digits(&data[offset..], b':')
        .map_err(|_| BencodeError::InvalidStringLength { offset })?;

    let colon = offset + prefix_len;
    if colon >= data.len() {
        return Err(BencodeError::UnexpectedEof { offset: colon });
    }

    let start = colon + 1;
    let remaining = data.len() - start;
    if length > remaining as u64 {
        return Err(BencodeError::UnexpectedEof { offset: start });
    }

    let end = start + length as usize;
    Ok((&data[start..end], end))
}
