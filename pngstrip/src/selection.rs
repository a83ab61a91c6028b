use std::collections::BTreeSet;

use crate::*;

/// Chunks to leave out when rebuilding PNG data
///
/// Positions that don't exist in the data never match. They are not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkSelection {
    /// Chunks at these 0-based positions
    Positions(BTreeSet<usize>),
    /// Every chunk with one of these types
    Types(BTreeSet<ChunkType>),
}

impl Default for ChunkSelection {
    fn default() -> Self {
        Self::none()
    }
}

impl ChunkSelection {
    /// Selection that matches no chunk
    pub fn none() -> Self {
        Self::Positions(BTreeSet::new())
    }

    pub fn positions(positions: impl IntoIterator<Item = usize>) -> Self {
        Self::Positions(positions.into_iter().collect())
    }

    pub fn types(types: impl IntoIterator<Item = ChunkType>) -> Self {
        Self::Types(types.into_iter().collect())
    }

    /// Whether the chunk at `position` with `chunk_type` is selected
    pub fn matches(&self, position: usize, chunk_type: ChunkType) -> bool {
        match self {
            Self::Positions(positions) => positions.contains(&position),
            Self::Types(types) => types.contains(&chunk_type),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Positions(positions) => positions.is_empty(),
            Self::Types(types) => types.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    chunk_type: ChunkType,
    crc: [u8; 4],
    total_len: usize,
}

/// Builds position based selections from a chunk list
///
/// Only chunks with a type from
/// [`REMOVABLE_CHUNK_TYPES`](crate::REMOVABLE_CHUNK_TYPES) can be selected.
#[derive(Debug, Clone)]
pub struct SelectionBuilder {
    chunks: Vec<Entry>,
    selected: BTreeSet<usize>,
}

impl SelectionBuilder {
    pub fn new(chunks: &[Chunk<'_>]) -> Self {
        let chunks = chunks
            .iter()
            .map(|x| Entry {
                chunk_type: x.chunk_type(),
                crc: x.crc_bytes(),
                total_len: x.total_len(),
            })
            .collect();

        Self {
            chunks,
            selected: BTreeSet::new(),
        }
    }

    /// Marks the chunk at `position` for removal
    ///
    /// Returns `false` if the chunk was already selected.
    pub fn select(&mut self, position: usize) -> Result<bool, Error> {
        let entry = self.chunks.get(position).ok_or(Error::PositionOutOfRange {
            position,
            count: self.chunks.len(),
        })?;

        if !is_removable(entry.chunk_type) {
            tracing::info!("Refusing to select {:?} at {position}", entry.chunk_type);
            return Err(Error::UnsupportedRemoval {
                position,
                chunk_type: entry.chunk_type,
            });
        }

        Ok(self.selected.insert(position))
    }

    /// Marks every removable chunk and returns how many were newly selected
    pub fn select_all_removable(&mut self) -> usize {
        let removable = self
            .chunks
            .iter()
            .enumerate()
            .filter(|(_, entry)| is_removable(entry.chunk_type))
            .map(|(position, _)| position)
            .collect::<Vec<_>>();

        removable
            .into_iter()
            .filter(|position| self.selected.insert(*position))
            .count()
    }

    pub fn deselect(&mut self, position: usize) -> bool {
        self.selected.remove(&position)
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.selected.contains(&position)
    }

    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Number of bytes the selected chunks occupy including their framing
    pub fn removed_len(&self) -> usize {
        self.selected
            .iter()
            .filter_map(|position| self.chunks.get(*position))
            .fold(0, |len, entry| len.saturating_add(entry.total_len))
    }

    /// Captures the current selection together with what it refers to
    pub fn snapshot(&self) -> SelectionSnapshot {
        let entries = self
            .selected
            .iter()
            .filter_map(|position| {
                self.chunks.get(*position).map(|entry| SnapshotEntry {
                    position: *position,
                    chunk_type: entry.chunk_type,
                    crc: entry.crc,
                })
            })
            .collect();

        SelectionSnapshot { entries }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub position: usize,
    pub chunk_type: ChunkType,
    pub crc: [u8; 4],
}

/// Selection by position that remembers which chunks were meant
///
/// Positions are only meaningful for the data they were taken from.
/// [`validate`](Self::validate) checks that against the data before they are
/// used for removal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    entries: Vec<SnapshotEntry>,
}

impl SelectionSnapshot {
    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the selection if every entry still matches `data`
    pub fn validate(&self, data: &[u8]) -> Result<ChunkSelection, Error> {
        self.validate_with(data, &Options::default())
    }

    pub fn validate_with(&self, data: &[u8], options: &Options) -> Result<ChunkSelection, Error> {
        let chunks = list_chunks_with(data, options)?;

        for entry in &self.entries {
            let current = chunks.get(entry.position);
            let unchanged = current.is_some_and(|chunk| {
                chunk.chunk_type() == entry.chunk_type && chunk.crc_bytes() == entry.crc
            });

            if !unchanged {
                tracing::info!(
                    "Chunk at position {} is no longer {:?}",
                    entry.position,
                    entry.chunk_type
                );
                return Err(Error::StaleSelection {
                    position: entry.position,
                    expected: entry.chunk_type,
                });
            }
        }

        Ok(ChunkSelection::positions(
            self.entries.iter().map(|x| x.position),
        ))
    }
}
