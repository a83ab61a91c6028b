use std::iter::FusedIterator;

use crate::*;
use crate::math::*;

pub const MAGIC_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];
pub const SIGNATURE_LEN: usize = 8;

/// Walks the chunks of PNG data in order of appearance
///
/// This is the single place where chunks are framed. Listing and removing
/// both go through it. The first error ends the iteration.
#[derive(Debug, Clone)]
pub struct ChunkWalker<'a> {
    data: &'a [u8],
    offset: usize,
    position: usize,
    failed: bool,
}

impl<'a> ChunkWalker<'a> {
    /// Starts walking after the signature
    pub fn new(data: &'a [u8], options: &Options) -> Result<Self, Error> {
        options.check(data)?;

        Ok(Self {
            data,
            offset: SIGNATURE_LEN,
            position: 0,
            failed: false,
        })
    }

    fn read_chunk(&self) -> Result<Chunk<'a>, Error> {
        let offset = self.offset;
        let malformed = |reason: Malformed| Error::MalformedChunk { offset, reason };

        let header_end = offset.safe_add(8)?;
        let header: [u8; 8] = self
            .data
            .get(offset..header_end)
            .and_then(|x| x.try_into().ok())
            .ok_or_else(|| malformed(Malformed::TruncatedHeader))?;

        // First 4 bytes are length, next 4 bytes are chunk type
        let [l0, l1, l2, l3, t0, t1, t2, t3] = header;
        let length = u32::from_be_bytes([l0, l1, l2, l3]);
        let chunk_type = ChunkType::from_bytes([t0, t1, t2, t3]);

        let truncated = || malformed(Malformed::TruncatedChunk { chunk_type, length });

        // Data and the CRC behind it must both be inside the buffer
        let data_end = length
            .usize()
            .ok()
            .and_then(|length| header_end.checked_add(length))
            .ok_or_else(truncated)?;
        let chunk_end = data_end.checked_add(4).ok_or_else(truncated)?;

        let chunk_data = self
            .data
            .get(header_end..data_end)
            .ok_or_else(truncated)?;

        // Last 4 bytes after the data are a CRC
        let crc: [u8; 4] = self
            .data
            .get(data_end..chunk_end)
            .and_then(|x| x.try_into().ok())
            .ok_or_else(truncated)?;

        Ok(Chunk {
            position: self.position,
            offset,
            chunk_type,
            length,
            data: chunk_data,
            crc,
        })
    }
}

impl<'a> Iterator for ChunkWalker<'a> {
    type Item = Result<Chunk<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.data.len() {
            return None;
        }

        let result = self.read_chunk().and_then(|chunk| {
            self.offset = chunk.offset.safe_add(chunk.total_len())?;
            self.position = self.position.safe_add(1)?;
            Ok(chunk)
        });

        match &result {
            Ok(chunk) => tracing::debug!(
                "Chunk {:?} at offset {} with {} bytes of data",
                chunk.chunk_type,
                chunk.offset,
                chunk.length
            ),
            Err(err) => {
                tracing::debug!("Stopped walking chunks: {err}");
                self.failed = true;
            }
        }

        Some(result)
    }
}

impl FusedIterator for ChunkWalker<'_> {}

/// Walks all chunks and keeps the ones for which `keep` returns `true`
///
/// Any framing error aborts the walk and no chunks are returned.
pub fn walk_chunks<'a>(
    data: &'a [u8],
    options: &Options,
    mut keep: impl FnMut(&Chunk<'a>) -> bool,
) -> Result<Vec<Chunk<'a>>, Error> {
    let mut chunks = Vec::new();

    for chunk in ChunkWalker::new(data, options)? {
        let chunk = chunk?;
        if keep(&chunk) {
            chunks.push(chunk);
        }
    }

    Ok(chunks)
}

/// Lists all chunks in the order in which they appear in the data
///
/// The data have to start with an 8 byte signature which is skipped without
/// being checked. Use [`list_chunks_with`] and [`Options::strict`] to verify
/// it.
///
/// ```
/// # use pngstrip::*;
/// let mut data = MAGIC_BYTES.to_vec();
/// data.extend_from_slice(&[0, 0, 0, 0]);
/// data.extend_from_slice(b"IEND");
/// data.extend_from_slice(&[0xAE, 0x42, 0x60, 0x82]);
///
/// let chunks = list_chunks(&data).unwrap();
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].chunk_type(), ChunkType::IEND);
/// assert_eq!(chunks[0].crc(), 0xAE42_6082);
/// ```
pub fn list_chunks(data: &[u8]) -> Result<Vec<Chunk<'_>>, Error> {
    list_chunks_with(data, &Options::default())
}

pub fn list_chunks_with<'a>(data: &'a [u8], options: &Options) -> Result<Vec<Chunk<'a>>, Error> {
    walk_chunks(data, options, |_| true)
}

/// Returns new PNG data without the selected chunks
///
/// The signature and all other chunks are copied unchanged and in their
/// original order. CRCs are copied as well and never recomputed. The
/// selection is applied as is: this does not stop critical chunks from being
/// removed, see [`SelectionBuilder`] for that.
pub fn remove_chunks(data: &[u8], selection: &ChunkSelection) -> Result<Vec<u8>, Error> {
    remove_chunks_with(data, selection, &Options::default())
}

pub fn remove_chunks_with(
    data: &[u8],
    selection: &ChunkSelection,
    options: &Options,
) -> Result<Vec<u8>, Error> {
    let signature = options.check(data)?;
    let retained = retained_chunks(data, selection, options)?;

    let len = encoded_len(&retained)?;
    let mut buf = Vec::with_capacity(len);
    buf.extend_from_slice(signature);
    for chunk in &retained {
        chunk.write_to(&mut buf);
    }

    tracing::debug!(
        "Kept {} chunks, {} of {} bytes",
        retained.len(),
        buf.len(),
        data.len()
    );

    Ok(buf)
}

/// Size of the data [`remove_chunks`] would return
pub fn output_len(data: &[u8], selection: &ChunkSelection) -> Result<usize, Error> {
    output_len_with(data, selection, &Options::default())
}

pub fn output_len_with(
    data: &[u8],
    selection: &ChunkSelection,
    options: &Options,
) -> Result<usize, Error> {
    encoded_len(&retained_chunks(data, selection, options)?)
}

fn retained_chunks<'a>(
    data: &'a [u8],
    selection: &ChunkSelection,
    options: &Options,
) -> Result<Vec<Chunk<'a>>, Error> {
    walk_chunks(data, options, |chunk| {
        let remove = selection.matches(chunk.position, chunk.chunk_type);
        if remove {
            tracing::debug!(
                "Skipping chunk {:?} at position {}",
                chunk.chunk_type,
                chunk.position
            );
        }
        !remove
    })
}

fn encoded_len(chunks: &[Chunk<'_>]) -> Result<usize, Error> {
    let mut len = SIGNATURE_LEN;
    for chunk in chunks {
        len = len.safe_add(chunk.total_len())?;
    }
    Ok(len)
}

/// Representation of a PNG image
#[derive(Debug, Clone)]
pub struct Png {
    /// Raw data
    pub(crate) data: Vec<u8>,
    /// Chunks in the order in which they appear in the data
    pub(crate) chunks: Vec<RawChunk>,
    /// Options the data were checked with, also used for removal
    pub(crate) options: Options,
}

impl Png {
    /// Returns PNG image representation
    ///
    /// * `data`: PNG image data starting with magic byte
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        Self::new_with(data, &Options::default())
    }

    pub fn new_with(data: Vec<u8>, options: &Options) -> Result<Self, ErrorWithData<Error>> {
        let chunks = list_chunks_with(&data, options)
            .map(|chunks| chunks.iter().map(Chunk::raw_chunk).collect::<Vec<_>>());

        match chunks {
            Ok(chunks) => Ok(Self {
                data,
                chunks,
                options: *options,
            }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    /// Checks if passed data have PNG magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns all chunks
    pub fn chunks(&self) -> Vec<Chunk<'_>> {
        self.chunks.iter().map(|x| x.chunk(&self.data)).collect()
    }

    pub fn chunk(&self, position: usize) -> Option<Chunk<'_>> {
        self.chunks.get(position).map(|x| x.chunk(&self.data))
    }

    /// Selection builder over the chunks of this image
    pub fn selection_builder(&self) -> SelectionBuilder {
        SelectionBuilder::new(&self.chunks())
    }

    /// New PNG data without the selected chunks
    ///
    /// See [`remove_chunks`]. Uses the [`Options`] this image was created
    /// with. The data of this image stay unchanged.
    pub fn remove_chunks(&self, selection: &ChunkSelection) -> Result<Vec<u8>, Error> {
        remove_chunks_with(&self.data, selection, &self.options)
    }
}
