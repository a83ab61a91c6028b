#![allow(dead_code)]

pub use pngstrip::*;

pub const IHDR_DATA: [u8; 13] = [0, 0, 0, 1, 0, 0, 0, 1, 8, 0, 0, 0, 0];

/// Appends a chunk with a correct CRC
pub fn push_chunk(data: &mut Vec<u8>, chunk_type: &[u8; 4], content: &[u8]) {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(content);
    push_chunk_with_crc(data, chunk_type, content, hasher.finalize());
}

pub fn push_chunk_with_crc(
    data: &mut Vec<u8>,
    chunk_type: &[u8; 4],
    content: &[u8],
    crc: u32,
) {
    data.extend_from_slice(&u32::try_from(content.len()).unwrap().to_be_bytes());
    data.extend_from_slice(chunk_type);
    data.extend_from_slice(content);
    data.extend_from_slice(&crc.to_be_bytes());
}

/// Signature, IHDR, tEXt, IEND
pub fn minimal() -> Vec<u8> {
    let mut data = MAGIC_BYTES.to_vec();
    push_chunk(&mut data, b"IHDR", &IHDR_DATA);
    push_chunk(&mut data, b"tEXt", b"a\0bcd");
    push_chunk(&mut data, b"IEND", b"");
    data
}

/// Image with several text chunks and other ancillary chunks
pub fn with_metadata() -> Vec<u8> {
    let mut data = MAGIC_BYTES.to_vec();
    push_chunk(&mut data, b"IHDR", &IHDR_DATA);
    push_chunk(&mut data, b"gAMA", &45455_u32.to_be_bytes());
    push_chunk(&mut data, b"tEXt", b"Title\0First");
    push_chunk(&mut data, b"IDAT", &[0x78, 0x9c, 0x63, 0, 0, 0, 1, 0, 1]);
    push_chunk(&mut data, b"tIME", &[0x07, 0xe8, 5, 17, 12, 30, 0]);
    push_chunk(&mut data, b"tEXt", b"Author\0Second");
    push_chunk(&mut data, b"IEND", b"");
    data
}

pub fn types(chunks: &[Chunk]) -> Vec<ChunkType> {
    chunks.iter().map(|x| x.chunk_type()).collect()
}

pub fn fixture() -> Vec<u8> {
    std::fs::read("../test-images/png/text-chunks.png").unwrap()
}
