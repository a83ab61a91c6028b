//! Helpers for showing chunk lists to users

use std::fmt::Display;

use crate::{Chunk, ChunkType};

const SIZES: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Size with decimal units, rounded down
///
/// ```
/// # use pngstrip::display::human_size;
/// assert_eq!(human_size(13), "13 Bytes");
/// assert_eq!(human_size(1_999), "1 KB");
/// assert_eq!(human_size(25_000_000), "25 MB");
/// ```
pub fn human_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 Byte");
    }

    let (value, unit) = SIZES
        .iter()
        .skip(1)
        .fold((bytes, SIZES[0]), |(value, unit), next| {
            if value >= 1000 {
                (value / 1000, *next)
            } else {
                (value, unit)
            }
        });

    format!("{value} {unit}")
}

/// One line of a chunk list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSummary {
    pub position: usize,
    pub chunk_type: ChunkType,
    pub size: String,
    pub crc: u32,
    pub removable: bool,
}

impl From<&Chunk<'_>> for ChunkSummary {
    fn from(chunk: &Chunk<'_>) -> Self {
        Self {
            position: chunk.position(),
            chunk_type: chunk.chunk_type(),
            size: human_size(chunk.length().into()),
            crc: chunk.crc(),
            removable: chunk.chunk_type().is_removable(),
        }
    }
}

impl Display for ChunkSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>3}  Type : {}  Length : {}  CRC : {} ({})",
            self.position,
            self.chunk_type,
            self.size,
            self.crc,
            hex::encode(self.crc.to_be_bytes())
        )?;

        if self.removable {
            f.write_str("  [removable]")?;
        }

        Ok(())
    }
}
