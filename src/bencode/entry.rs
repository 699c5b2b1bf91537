use super::child_store::ChildStore;
use super::digits::integer_value;
use bytes::Bytes;

/// The kind of a decoded [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Nothing was decoded (empty input).
    None,
    /// `i<digits>e`
    Integer,
    /// `<length>:<bytes>`
    String,
    /// `l<items>e`
    List,
    /// `d<key><value>...e`
    Dict,
}

pub(crate) type DictPair<'a> = (&'a [u8], Entry<'a>);

pub(crate) enum Node<'a> {
    None,
    Integer(&'a [u8]),
    String(&'a [u8]),
    List(ChildStore<Entry<'a>>),
    Dict(ChildStore<DictPair<'a>>),
}

/// A node of a lazily decoded bencode tree.
///
/// Strings, integers and dictionary keys are slices of the buffer that was
/// passed to [`decode`](super::decode); nothing is copied, so the tree cannot
/// outlive that buffer. Integers keep their digits and are converted when
/// read.
///
/// A tree is produced by a single decode call and is read-only afterwards.
/// Lookups never fail: a missing key, an out-of-range index or a value of the
/// wrong kind yields `None` or the caller's default.
///
/// # Examples
///
/// ```
/// use lazybit::bencode::{decode, EntryType};
///
/// let root = decode(b"d8:announce16:udp://tracker:804:infod6:lengthi1024eee", 100).unwrap();
/// assert_eq!(root.kind(), EntryType::Dict);
/// assert_eq!(root.dict_find_string_value(b"announce", b""), b"udp://tracker:80");
///
/// let info = root.dict_find_dict(b"info").unwrap();
/// assert_eq!(info.dict_find_int_value(b"length", -1), 1024);
/// assert_eq!(info.dict_find_int_value(b"private", 0), 0);
/// ```
pub struct Entry<'a> {
    node: Node<'a>,
    section: &'a [u8],
}

impl<'a> Entry<'a> {
    /// Returns the empty entry, the result of decoding an empty buffer.
    pub fn none() -> Self {
        Self {
            node: Node::None,
            section: &[],
        }
    }

    pub(crate) fn integer(digits: &'a [u8], section: &'a [u8]) -> Self {
        Self {
            node: Node::Integer(digits),
            section,
        }
    }

    pub(crate) fn string(payload: &'a [u8], section: &'a [u8]) -> Self {
        Self {
            node: Node::String(payload),
            section,
        }
    }

    pub(crate) fn list(items: ChildStore<Entry<'a>>, section: &'a [u8]) -> Self {
        Self {
            node: Node::List(items),
            section,
        }
    }

    pub(crate) fn dict(pairs: ChildStore<DictPair<'a>>, section: &'a [u8]) -> Self {
        Self {
            node: Node::Dict(pairs),
            section,
        }
    }

    /// Returns which kind of value this entry holds.
    pub fn kind(&self) -> EntryType {
        match self.node {
            Node::None => EntryType::None,
            Node::Integer(_) => EntryType::Integer,
            Node::String(_) => EntryType::String,
            Node::List(_) => EntryType::List,
            Node::Dict(_) => EntryType::Dict,
        }
    }

    /// Returns true for the entry produced by an empty buffer.
    pub fn is_none(&self) -> bool {
        matches!(self.node, Node::None)
    }

    /// Returns the complete encoded form of this entry.
    ///
    /// For a string this includes the length prefix and the `:`, for an
    /// integer the surrounding `i` and `e`, for a container everything from
    /// the opening tag through the closing `e`. The `None` entry has an empty
    /// section.
    ///
    /// This is what gets hashed to compute a torrent's info hash.
    ///
    /// ```
    /// use lazybit::bencode::decode;
    ///
    /// let data = b"d4:infod4:name3:fooee";
    /// let root = decode(data, 100).unwrap();
    /// let info = root.dict_find_dict(b"info").unwrap();
    /// assert_eq!(info.data_section(), b"d4:name3:fooe");
    /// assert_eq!(root.data_section(), &data[..]);
    /// ```
    pub fn data_section(&self) -> &'a [u8] {
        self.section
    }

    /// Returns the value of an integer entry.
    ///
    /// Out-of-range values wrap modulo 2^64, and an empty integer (`ie`)
    /// reads as zero.
    pub fn as_integer(&self) -> Option<i64> {
        match self.node {
            Node::Integer(digits) => Some(integer_value(digits)),
            _ => None,
        }
    }

    /// Returns the raw bytes between `i` and `e` of an integer entry.
    pub fn integer_digits(&self) -> Option<&'a [u8]> {
        match self.node {
            Node::Integer(digits) => Some(digits),
            _ => None,
        }
    }

    /// Returns the payload of a string entry, borrowed from the source buffer.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self.node {
            Node::String(payload) => Some(payload),
            _ => None,
        }
    }

    /// Returns the payload of a string entry if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.as_bytes()?).ok()
    }

    /// Copies the payload of a string entry out of the source buffer.
    pub fn to_bytes(&self) -> Option<Bytes> {
        self.as_bytes().map(Bytes::copy_from_slice)
    }

    fn dict_pairs(&self) -> &[DictPair<'a>] {
        match &self.node {
            Node::Dict(pairs) => pairs.as_slice(),
            _ => &[],
        }
    }

    fn list_items(&self) -> &[Entry<'a>] {
        match &self.node {
            Node::List(items) => items.as_slice(),
            _ => &[],
        }
    }

    /// Looks up `key` in a dictionary.
    ///
    /// Keys compare by length and content, so keys containing zero bytes work.
    /// When a key appears more than once the first occurrence wins.
    pub fn dict_find(&self, key: &[u8]) -> Option<&Entry<'a>> {
        self.dict_pairs()
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    fn dict_find_kind(&self, key: &[u8], kind: EntryType) -> Option<&Entry<'a>> {
        self.dict_find(key).filter(|value| value.kind() == kind)
    }

    /// Looks up `key` in a dictionary, keeping the value only if it is a string.
    pub fn dict_find_string(&self, key: &[u8]) -> Option<&Entry<'a>> {
        self.dict_find_kind(key, EntryType::String)
    }

    /// Looks up `key` in a dictionary, keeping the value only if it is an integer.
    pub fn dict_find_int(&self, key: &[u8]) -> Option<&Entry<'a>> {
        self.dict_find_kind(key, EntryType::Integer)
    }

    /// Looks up `key` in a dictionary, keeping the value only if it is a dictionary.
    pub fn dict_find_dict(&self, key: &[u8]) -> Option<&Entry<'a>> {
        self.dict_find_kind(key, EntryType::Dict)
    }

    /// Looks up `key` in a dictionary, keeping the value only if it is a list.
    pub fn dict_find_list(&self, key: &[u8]) -> Option<&Entry<'a>> {
        self.dict_find_kind(key, EntryType::List)
    }

    /// Returns the string stored under `key`, or `default` if there is no
    /// such key or its value is not a string.
    pub fn dict_find_string_value(&self, key: &[u8], default: &'a [u8]) -> &'a [u8] {
        self.dict_find(key)
            .and_then(Entry::as_bytes)
            .unwrap_or(default)
    }

    /// Returns the integer stored under `key`, or `default` if there is no
    /// such key or its value is not an integer.
    pub fn dict_find_int_value(&self, key: &[u8], default: i64) -> i64 {
        self.dict_find(key)
            .and_then(Entry::as_integer)
            .unwrap_or(default)
    }

    /// Returns the key and value at `index`, in encoding order.
    pub fn dict_at(&self, index: usize) -> Option<(&'a [u8], &Entry<'a>)> {
        self.dict_pairs()
            .get(index)
            .map(|(name, value)| (*name, value))
    }

    /// Number of pairs in a dictionary, zero for anything else.
    pub fn dict_len(&self) -> usize {
        self.dict_pairs().len()
    }

    /// Iterates over a dictionary's pairs in encoding order, duplicates
    /// included.
    pub fn dict_iter(&self) -> impl Iterator<Item = (&'a [u8], &Entry<'a>)> + '_ {
        self.dict_pairs().iter().map(|(name, value)| (*name, value))
    }

    /// Returns the list item at `index`.
    pub fn list_at(&self, index: usize) -> Option<&Entry<'a>> {
        self.list_items().get(index)
    }

    /// Number of items in a list, zero for anything else.
    pub fn list_len(&self) -> usize {
        self.list_items().len()
    }

    /// Iterates over a list's items in encoding order.
    pub fn list_iter(&self) -> std::slice::Iter<'_, Entry<'a>> {
        self.list_items().iter()
    }

    /// Returns the string at `index`, or `default` if it is missing or not a string.
    pub fn list_string_value_at(&self, index: usize, default: &'a [u8]) -> &'a [u8] {
        self.list_at(index)
            .and_then(Entry::as_bytes)
            .unwrap_or(default)
    }

    /// Returns the integer at `index`, or `default` if it is missing or not an integer.
    pub fn list_int_value_at(&self, index: usize, default: i64) -> i64 {
        self.list_at(index)
            .and_then(Entry::as_integer)
            .unwrap_or(default)
    }

    pub(crate) fn node(&self) -> &Node<'a> {
        &self.node
    }
}

impl Default for Entry<'_> {
    fn default() -> Self {
        Self::none()
    }
}

// Tear the tree down with an explicit worklist so dropping a deeply nested
// tree cannot overflow the call stack.
impl Drop for Entry<'_> {
    fn drop(&mut self) {
        if !matches!(self.node, Node::List(_) | Node::Dict(_)) {
            return;
        }
        let mut pending = Vec::new();
        take_children(&mut self.node, &mut pending);
        while let Some(mut entry) = pending.pop() {
            take_children(&mut entry.node, &mut pending);
        }
    }
}

fn take_children<'a>(node: &mut Node<'a>, pending: &mut Vec<Entry<'a>>) {
    match std::mem::replace(node, Node::None) {
        Node::List(items) => pending.extend(items.into_vec()),
        Node::Dict(pairs) => pending.extend(pairs.into_vec().into_iter().map(|(_, value)| value)),
        Node::None | Node::Integer(_) | Node::String(_) => {}
    }
}
