use thiserror::Error;

/// Reasons a bencode document was rejected.
///
/// Every variant means the same thing to a caller: the input is malformed and
/// must be dropped. The variants only exist to make logs useful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    #[error("nesting deeper than {limit} containers")]
    DepthExceeded { limit: usize },

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("invalid string length prefix at offset {offset}")]
    InvalidStringLength { offset: usize },

    #[error("unterminated integer at offset {offset}")]
    UnterminatedInteger { offset: usize },

    #[error("unexpected byte 0x{byte:02x} at offset {offset}")]
    UnexpectedChar { byte: u8, offset: usize },

    #[error("failed to allocate child storage")]
    AllocationFailed,
}

impl BencodeError {
    /// Returns the byte offset the decoder was looking at, if known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BencodeError::UnexpectedEof { offset }
            | BencodeError::InvalidStringLength { offset }
            | BencodeError::UnterminatedInteger { offset }
            | BencodeError::UnexpectedChar { offset, .. } => Some(*offset),
            BencodeError::DepthExceeded { .. } | BencodeError::AllocationFailed => None,
        }
    }
}
