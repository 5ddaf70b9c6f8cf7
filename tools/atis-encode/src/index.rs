//! Length/offset index over the concatenated payload.

use std::ops::Range;

use crate::clip::ClipSet;

/// Per-clip lengths and start offsets, in canonical order.
///
/// Invariants: `offsets[0] == 0` and `offsets[i] + lengths[i] == offsets[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexTable {
    lengths: Vec<usize>,
    offsets: Vec<usize>,
}

impl IndexTable {
    /// Build the index from lengths, offsets being their exclusive prefix sum
    pub fn from_lengths(lengths: Vec<usize>) -> Self {
        let mut offsets = Vec::with_capacity(lengths.len());
        let mut running = 0usize;
        for len in &lengths {
            offsets.push(running);
            running += len;
        }
        Self { lengths, offsets }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of clips
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Size of the concatenated payload
    pub fn total_len(&self) -> usize {
        match (self.offsets.last(), self.lengths.last()) {
            (Some(offset), Some(len)) => offset + len,
            _ => 0,
        }
    }

    /// Byte range of clip `i` inside the payload
    pub fn span(&self, i: usize) -> Option<Range<usize>> {
        let start = *self.offsets.get(i)?;
        Some(start..start + self.lengths[i])
    }

    /// Check the contiguity invariants against a payload of `blob_len` bytes
    pub fn verify(&self, blob_len: usize) -> bool {
        if self.lengths.len() != self.offsets.len() {
            return false;
        }
        if self.offsets.first().is_some_and(|&first| first != 0) {
            return false;
        }
        let contiguous = self
            .offsets
            .windows(2)
            .zip(&self.lengths)
            .all(|(pair, len)| pair[0] + len == pair[1]);
        contiguous && self.total_len() == blob_len
    }
}

/// Compute lengths and offsets for a clip set (linear running sum)
pub fn compute_index(clips: &ClipSet) -> IndexTable {
    IndexTable::from_lengths(clips.iter().map(|clip| clip.len()).collect())
}
