use crate::{Error, MAGIC_BYTES, SIGNATURE_LEN};

/// Limits and strictness used when walking chunks
///
/// The default only requires the data to be long enough to hold a
/// signature. Its content is not verified and the data size is not capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Reject data that does not start with [`MAGIC_BYTES`]
    pub strict_signature: bool,
    /// Reject data larger than this many bytes before walking it
    pub max_data_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_signature: false,
            max_data_len: usize::MAX,
        }
    }
}

impl Options {
    /// Options that verify the signature
    pub fn strict() -> Self {
        Self {
            strict_signature: true,
            ..Self::default()
        }
    }

    pub fn with_max_data_len(mut self, max_data_len: usize) -> Self {
        self.max_data_len = max_data_len;
        self
    }

    /// Returns the signature part of `data` if it passes the checks
    pub(crate) fn check<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], Error> {
        if data.len() > self.max_data_len {
            return Err(Error::DataTooLarge {
                len: data.len(),
                max: self.max_data_len,
            });
        }

        let signature = data
            .get(..SIGNATURE_LEN)
            .ok_or(Error::MissingSignature(data.len()))?;

        if self.strict_signature && signature != MAGIC_BYTES {
            return Err(Error::InvalidMagicBytes(signature.to_vec()));
        }

        Ok(signature)
    }
}
