use crate::math::MathError;
use crate::ChunkType;

/// Errors from walking, removing, and selecting chunks
///
/// Data that can't be framed as signature and chunks is reported as
/// [`MissingSignature`](Self::MissingSignature),
/// [`InvalidMagicBytes`](Self::InvalidMagicBytes) (only with
/// [`Options::strict`](crate::Options::strict)), or
/// [`MalformedChunk`](Self::MalformedChunk). Use
/// [`is_malformed_input`](Self::is_malformed_input) to check for all of them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Data too short for PNG signature: {0} bytes")]
    MissingSignature(usize),
    #[error("Invalid magic bytes: {0:x?}")]
    InvalidMagicBytes(Vec<u8>),
    #[error("Data of {len} bytes exceeds limit of {max} bytes")]
    DataTooLarge { len: usize, max: usize },
    #[error("Malformed chunk at offset {offset}: {reason}")]
    MalformedChunk { offset: usize, reason: Malformed },
    #[error("Chunk {chunk_type} at position {position} must not be removed")]
    UnsupportedRemoval {
        position: usize,
        chunk_type: ChunkType,
    },
    #[error("Position {position} is beyond the {count} chunks")]
    PositionOutOfRange { position: usize, count: usize },
    #[error("Selection for position {position} no longer matches chunk {expected}")]
    StaleSelection {
        position: usize,
        expected: ChunkType,
    },
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

impl Error {
    /// Whether the data itself are broken, as opposed to a limit or a selection
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MissingSignature(_) | Self::InvalidMagicBytes(_) | Self::MalformedChunk { .. }
        )
    }
}

/// Why a chunk could not be framed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("Fewer than 8 bytes left for length and type")]
    TruncatedHeader,
    #[error("Chunk {chunk_type} declares {length} bytes of data but the data ends before its CRC")]
    TruncatedChunk { chunk_type: ChunkType, length: u32 },
}

/// Type that allows to return data with the error
///
/// [`Png::new`](crate::Png::new) takes ownership of the data. Using this as
/// error type allows to continue using the data afterward.
pub struct ErrorWithData<E: std::error::Error> {
    err: E,
    data: Vec<u8>,
}

impl<E: std::error::Error> ErrorWithData<E> {
    pub fn new(err: E, data: Vec<u8>) -> Self {
        Self { err, data }
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl<E: std::error::Error> std::fmt::Debug for ErrorWithData<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorWithData")
            .field("err", &self.err)
            .field("data", &format!("{} bytes", self.data.len()))
            .finish()
    }
}

impl<E: std::error::Error> std::fmt::Display for ErrorWithData<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for ErrorWithData<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}
