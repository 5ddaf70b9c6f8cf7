//! The full encoding pipeline.

use crate::clip::ClipSet;
use crate::config::EncoderConfig;
use crate::error::Result;
use crate::index::{compute_index, IndexTable};
use crate::payload::concatenate_payload;
use crate::render::{render_table, RenderedTable};
use crate::resolve::resolve_clip_set;

/// Result of one encoding run. Clip data is dropped once the blob is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTables {
    pub names: Vec<String>,
    pub index: IndexTable,
    pub blob: Vec<u8>,
    pub table: RenderedTable,
}

/// Resolve, index, concatenate and render `pack`.
///
/// Only resolution can fail; everything after it is total.
pub fn encode(config: &EncoderConfig, pack: &str) -> Result<EncodedTables> {
    config.validate()?;

    tracing::info!(
        "Resolving {} clips from {}",
        config.names.len(),
        config.pack_dir(pack).display()
    );
    let clips = resolve_clip_set(config, pack)?;

    let encoded = encode_clip_set(&clips, config);
    tracing::info!(
        "Encoded {} clips into {} bytes",
        encoded.index.len(),
        encoded.blob.len()
    );
    Ok(encoded)
}

/// Pure part of the pipeline, for clip sets already in memory
pub fn encode_clip_set(clips: &ClipSet, config: &EncoderConfig) -> EncodedTables {
    let index = compute_index(clips);
    let blob = concatenate_payload(clips);
    debug_assert!(index.verify(blob.len()));

    let table = render_table(&index, &blob, config.row_width, config.byte_base);

    EncodedTables {
        names: clips.names().into_iter().map(str::to_string).collect(),
        index,
        blob,
        table,
    }
}
