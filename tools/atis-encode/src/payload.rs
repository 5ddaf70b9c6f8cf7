//! Payload concatenation.

use crate::clip::ClipSet;
use crate::index::IndexTable;

/// Concatenate all clip bytes in canonical order, no separators or padding
pub fn concatenate_payload(clips: &ClipSet) -> Vec<u8> {
    let total = clips.iter().map(|clip| clip.len()).sum();
    let mut blob = Vec::with_capacity(total);
    for clip in clips {
        blob.extend_from_slice(&clip.bytes);
    }
    blob
}

/// Slice clip `i` back out of the payload
pub fn extract_clip<'a>(blob: &'a [u8], index: &IndexTable, i: usize) -> Option<&'a [u8]> {
    index.span(i).and_then(|range| blob.get(range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::Clip;
    use crate::index::compute_index;

    fn sample_set() -> ClipSet {
        ClipSet::from_clips(vec![
            Clip::new("ZERO", b"ID3\x00".to_vec()),
            Clip::new("ONE", vec![]),
            Clip::new("TWO", vec![0xff, 0xfb, b'\r', b'\n', 0x00]),
        ])
    }

    #[test]
    fn test_concatenation_is_byte_exact() {
        let blob = concatenate_payload(&sample_set());
        assert_eq!(blob, b"ID3\x00\xff\xfb\r\n\x00".to_vec());
    }

    #[test]
    fn test_every_clip_round_trips() {
        let clips = sample_set();
        let index = compute_index(&clips);
        let blob = concatenate_payload(&clips);

        assert!(index.verify(blob.len()));
        for (i, clip) in clips.iter().enumerate() {
            assert_eq!(extract_clip(&blob, &index, i), Some(clip.bytes.as_slice()));
        }
        assert_eq!(extract_clip(&blob, &index, clips.len()), None);
    }
}
