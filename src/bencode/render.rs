use super::entry::{Entry, Node};
use crate::constants::{
    RENDER_DICT_ONE_LINE_MAX, RENDER_DICT_SHORT_KEY, RENDER_DICT_SHORT_STRING,
    RENDER_LIST_INT_ONE_LINE_MAX, RENDER_LIST_ONE_LINE_MAX, RENDER_LIST_SHORT_STRING,
};
use std::fmt;

/// Human-readable rendering for logs and debugging.
///
/// Strings print as `'text'` when every byte is printable ASCII and as
/// `'<hex>'` otherwise. Small lists and dictionaries print on one line; larger
/// ones put each element on its own line.
///
/// ```
/// use lazybit::bencode::decode;
///
/// let root = decode(b"d3:cow3:moo4:spaml1:a1:bee", 100).unwrap();
/// assert_eq!(root.to_string(), "{ 'cow': 'moo', 'spam': [ 'a', 'b' ] }");
/// ```
impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // explicit work stack, nesting depth is only bounded by the decoder's limit
        let mut pending = vec![Step::Entry(self)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Text(text) => f.write_str(text)?,
                Step::Key(key) => write!(f, "'{}': ", String::from_utf8_lossy(key))?,
                Step::Entry(entry) => match entry.node() {
                    Node::None => f.write_str("none")?,
                    Node::Integer(_) => write!(f, "{}", entry.as_integer().unwrap_or_default())?,
                    Node::String(payload) => write_string(f, payload)?,
                    Node::List(items) => {
                        let items = items.as_slice();
                        let one_liner = list_fits_one_line(items);
                        f.write_str("[")?;
                        f.write_str(opening(one_liner, items.is_empty()))?;
                        pending.push(Step::Text("]"));
                        for (i, item) in items.iter().enumerate().rev() {
                            pending.push(Step::Text(separator(one_liner, i + 1 == items.len())));
                            pending.push(Step::Entry(item));
                        }
                    }
                    Node::Dict(pairs) => {
                        let pairs = pairs.as_slice();
                        let one_liner = dict_fits_one_line(pairs);
                        f.write_str("{")?;
                        f.write_str(opening(one_liner, pairs.is_empty()))?;
                        pending.push(Step::Text("}"));
                        for (i, (key, value)) in pairs.iter().enumerate().rev() {
                            pending.push(Step::Text(separator(one_liner, i + 1 == pairs.len())));
                            pending.push(Step::Entry(value));
                            pending.push(Step::Key(*key));
                        }
                    }
                },
            }
        }
        Ok(())
    }
}

/// Debug output is the kind, the encoded length and the rendered tree.
impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry({:?}, {} bytes: {})",
            self.kind(),
            self.data_section().len(),
            self
        )
    }
}

enum Step<'t, 'a> {
    Entry(&'t Entry<'a>),
    Key(&'a [u8]),
    Text(&'static str),
}

fn opening(one_liner: bool, empty: bool) -> &'static str {
    match (empty, one_liner) {
        (true, _) => "",
        (false, true) => " ",
        (false, false) => "\n",
    }
}

// Emitted after every element.
fn separator(one_liner: bool, last: bool) -> &'static str {
    match (one_liner, last) {
        (true, true) => " ",
        (true, false) => ", ",
        (false, true) => "\n",
        (false, false) => ",\n",
    }
}

fn write_string(f: &mut fmt::Formatter<'_>, payload: &[u8]) -> fmt::Result {
    f.write_str("'")?;
    if payload.iter().all(|b| (0x20..=0x7e).contains(b)) {
        // printable ASCII is valid UTF-8
        f.write_str(&String::from_utf8_lossy(payload))?;
    } else {
        for byte in payload {
            write!(f, "{:02x}", byte)?;
        }
    }
    f.write_str("'")
}

fn string_len(entry: &Entry<'_>) -> Option<usize> {
    entry.as_bytes().map(<[u8]>::len)
}

fn list_fits_one_line(items: &[Entry<'_>]) -> bool {
    let Some(first) = items.first() else {
        return true;
    };
    if first.as_integer().is_some() && items.len() < RENDER_LIST_INT_ONE_LINE_MAX {
        return true;
    }
    string_len(first)
        .is_some_and(|len| len < RENDER_LIST_SHORT_STRING || items.len() < 2)
        && items.len() < RENDER_LIST_ONE_LINE_MAX
}

fn dict_fits_one_line(pairs: &[(&[u8], Entry<'_>)]) -> bool {
    if pairs.len() >= RENDER_DICT_ONE_LINE_MAX {
        return false;
    }
    let Some((key, value)) = pairs.first() else {
        return true;
    };
    value.as_integer().is_some()
        || string_len(value).is_some_and(|len| len < RENDER_DICT_SHORT_STRING)
        || key.len() < RENDER_DICT_SHORT_KEY
}
