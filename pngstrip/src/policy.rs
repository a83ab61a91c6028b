use crate::ChunkType;

/// Chunk types that can be dropped without breaking the image
///
/// Header, palette, image data, end marker and any unknown chunks are not
/// part of this list. [`remove_chunks`](crate::remove_chunks) does not consult
/// it, selections have to be built with [`SelectionBuilder`](crate::SelectionBuilder)
/// to get this check.
pub const REMOVABLE_CHUNK_TYPES: [ChunkType; 15] = [
    ChunkType::cHRM,
    ChunkType::gAMA,
    ChunkType::sBIT,
    ChunkType::sRGB,
    ChunkType::bKGD,
    ChunkType::hIST,
    ChunkType::tRNS,
    ChunkType::pHYs,
    ChunkType::sPLT,
    ChunkType::tIME,
    ChunkType::eXIf,
    ChunkType::iCCP,
    ChunkType::iTXt,
    ChunkType::tEXt,
    ChunkType::zTXt,
];

pub fn is_removable(chunk_type: ChunkType) -> bool {
    REMOVABLE_CHUNK_TYPES.contains(&chunk_type)
}
