use std::ops::Range;

use crate::ChunkType;

/// Bytes of a chunk that are not data: length, type, and CRC
pub const CHUNK_OVERHEAD: usize = 12;

/// One chunk as found in the data
///
/// The CRC is carried as read. It is neither checked nor recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub(crate) position: usize,
    pub(crate) offset: usize,
    pub(crate) chunk_type: ChunkType,
    pub(crate) length: u32,
    pub(crate) data: &'a [u8],
    pub(crate) crc: [u8; 4],
}

impl<'a> Chunk<'a> {
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    /// Declared data length as stored in front of the chunk type
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn chunk_data(&self) -> &'a [u8] {
        self.data
    }

    pub fn crc(&self) -> u32 {
        u32::from_be_bytes(self.crc)
    }

    pub fn crc_bytes(&self) -> [u8; 4] {
        self.crc
    }

    /// Index of the chunk in the order of appearance, starting at 0
    pub fn position(&self) -> usize {
        self.position
    }

    /// Position of the length field in the data
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Size of the chunk including length, type, and CRC
    pub fn total_len(&self) -> usize {
        // The data slice exists, so this can't come close to overflowing
        self.data.len().saturating_add(CHUNK_OVERHEAD)
    }

    /// Appends the chunk as framed in the original data
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.length.to_be_bytes());
        buf.extend_from_slice(&self.chunk_type.bytes());
        buf.extend_from_slice(self.data);
        buf.extend_from_slice(&self.crc);
    }

    pub(crate) fn raw_chunk(&self) -> RawChunk {
        let data_start = self.offset.saturating_add(8);
        RawChunk {
            position: self.position,
            chunk_type: self.chunk_type,
            length: self.length,
            chunk_data: data_start..data_start.saturating_add(self.data.len()),
            crc: self.crc,
        }
    }
}

/// Location of a chunk inside data owned by a [`Png`](crate::Png)
#[derive(Debug, Clone)]
pub struct RawChunk {
    pub(crate) position: usize,
    pub(crate) chunk_type: ChunkType,
    pub(crate) length: u32,
    pub(crate) chunk_data: Range<usize>,
    pub(crate) crc: [u8; 4],
}

impl RawChunk {
    pub(crate) fn chunk<'a>(&self, data: &'a [u8]) -> Chunk<'a> {
        Chunk {
            position: self.position,
            offset: self.chunk_data.start.saturating_sub(8),
            chunk_type: self.chunk_type,
            length: self.length,
            data: data
                .get(self.chunk_data.clone())
                .expect("Unreachable: The chunk must be part of the data"),
            crc: self.crc,
        }
    }
}
